//! Generates every legal candidate move for one side.

use crate::candidate_move::CandidateMove;
use crate::chess_types::Color;
use crate::game_state::GameState;
use crate::rules_engine::RulesEngine;

/// All legal candidate moves for `color` in `state`.
///
/// Pieces are visited in the insertion order of the state's piece list
/// and destinations in the order the rules engine reports them; no
/// further ordering is guaranteed. An empty result is a valid outcome
/// meaning the side has no legal moves.
pub fn enumerate_moves<R: RulesEngine + ?Sized>(
    rules: &R,
    state: &GameState,
    color: Color,
) -> Vec<CandidateMove> {
    let mut result = Vec::new();
    for piece in state.pieces.iter().filter(|p| p.color == color) {
        for destination in rules.legal_destinations(state, piece) {
            result.push(CandidateMove::new(*piece, destination));
        }
    }
    result
}
