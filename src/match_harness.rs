//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any
//! protocol I/O. The harness alternates `choose_move` and the state
//! simulator, stops at checkmate, stalemate, or a hard ply cap, and
//! stamps the result into the final state's outcome marker.

use crate::chess_types::{Color, Outcome};
use crate::engine_errors::EngineErrors;
use crate::engine_trait::{Engine, SearchParams};
use crate::game_state::GameState;
use crate::rules_engine::RulesEngine;
use crate::simulate_move::simulate_move;

/// How a harness game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The named side delivered checkmate.
    WinCheckmate(Color),
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Hard cap on half-moves before the game is adjudicated a draw.
    pub max_plies: u32,
    /// Parameters handed to both engines on every move.
    pub params: SearchParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            max_plies: 120,
            params: SearchParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    /// One `"<engine name> <move>"` line per ply, in long algebraic.
    pub played_moves_lan: Vec<String>,
    pub plies_played: u32,
}

/// Plays `white` against `black` from `start` until the game decides
/// itself or the ply cap is reached.
///
/// # Returns
/// * `Ok(MatchResult)` - The classified ending and the transcript.
/// * `Err(EngineErrors)` - A hard engine or simulation fault.
pub fn play_match<'e, R: RulesEngine + ?Sized>(
    rules: &R,
    white: &'e mut dyn Engine,
    black: &'e mut dyn Engine,
    start: &GameState,
    config: &MatchConfig,
) -> Result<MatchResult, EngineErrors> {
    let mut state = start.clone();
    let mut played_moves_lan = Vec::new();
    let mut plies_played = 0;

    while plies_played < config.max_plies {
        let engine = if state.turn == Color::White {
            &mut *white
        } else {
            &mut *black
        };

        let output = engine.choose_move(&state, &config.params)?;
        let candidate = match output.best_move {
            Some(mv) => mv,
            None => {
                // No move available: mate or stalemate for the side to move.
                let outcome = if rules.is_in_check(&state, state.turn) {
                    let winner = state.turn.opposite();
                    state.outcome = Outcome::Winner(winner);
                    MatchOutcome::WinCheckmate(winner)
                } else {
                    state.outcome = Outcome::Draw;
                    MatchOutcome::DrawStalemate
                };
                return Ok(MatchResult {
                    outcome,
                    final_state: state,
                    played_moves_lan,
                    plies_played,
                });
            }
        };

        played_moves_lan.push(format!(
            "{} {}",
            engine.name(),
            candidate.get_long_algebraic()
        ));
        state = simulate_move(rules, &state, &candidate)?;
        plies_played += 1;
    }

    Ok(MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state,
        played_moves_lan,
        plies_played,
    })
}
