//! Simulates one candidate move on an independent copy of a state.
//!
//! The simulator is the only way search code derives one position from
//! another. It always returns a fresh clone, so sibling branches of
//! the search tree never share mutable state, and the caller's
//! position is never touched.

use crate::candidate_move::CandidateMove;
use crate::chess_types::PieceKind;
use crate::engine_errors::EngineErrors;
use crate::game_state::GameState;
use crate::rules_engine::RulesEngine;

/// Applies `candidate` to a clone of `state`.
///
/// The clone's piece at the candidate's origin is resolved first; its
/// absence means the candidate was enumerated against a different
/// position than the one being simulated. A destination holding an
/// opposing piece is captured; a same-color occupant is an illegal
/// target. A mover that the rules engine reports as
/// promotion-eligible is finalized to a queen, for either side,
/// always. The clone's side to move is toggled before it is returned.
///
/// # Arguments
/// * `rules` - The rules collaborator, queried for promotion eligibility.
/// * `state` - The position to simulate against; never mutated.
/// * `candidate` - The move to apply.
///
/// # Returns
/// * `Ok(GameState)` - The independent resulting position.
/// * `Err(EngineErrors::DesyncedSimulation)` - No piece at the origin.
/// * `Err(EngineErrors::IllegalCaptureTarget)` - Same-color destination.
pub fn simulate_move<R: RulesEngine + ?Sized>(
    rules: &R,
    state: &GameState,
    candidate: &CandidateMove,
) -> Result<GameState, EngineErrors> {
    let mut result = state.clone();

    let mover = *result
        .piece_at(candidate.origin)
        .ok_or(EngineErrors::DesyncedSimulation(candidate.origin))?;

    // Resolve the destination before touching the mover.
    if let Some(occupant) = result.piece_at(candidate.destination) {
        if occupant.color == mover.color {
            return Err(EngineErrors::IllegalCaptureTarget {
                origin: candidate.origin,
                destination: candidate.destination,
            });
        }
        result.remove_piece_at(candidate.destination);
    }

    let moved = result
        .piece_at_mut(candidate.origin)
        .ok_or(EngineErrors::DesyncedSimulation(candidate.origin))?;
    moved.square = candidate.destination;

    // Simulation never models underpromotion.
    if rules.needs_promotion(moved) {
        moved.kind = PieceKind::Queen;
    }

    result.toggle_turn();
    Ok(result)
}
