//! Engine abstraction layer.
//!
//! Defines common input parameters and output payloads so different
//! move-selection strategies can be swapped behind a single trait
//! interface.

use crate::candidate_move::CandidateMove;
use crate::engine_errors::EngineErrors;
use crate::game_state::GameState;

/// Per-call search parameters.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Overrides the engine's configured search depth when set.
    pub depth: Option<u32>,
}

/// Payload of a completed move selection.
#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// The chosen move, or `None` when the side to move has no move
    /// available (checkmate or stalemate).
    pub best_move: Option<CandidateMove>,
    /// Structured diagnostic lines describing the selection.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    /// Short human-readable engine name used in transcripts.
    fn name(&self) -> &str;

    /// Selects a move for the side to move in `game_state`.
    ///
    /// The input state is never mutated; any returned move is bound to
    /// the pieces of `game_state` itself, not to a simulation clone.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineErrors>;
}
