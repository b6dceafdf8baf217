//! Boundary to the external rules collaborator.
//!
//! The decision engine does not know the rules of chess. Legality,
//! check detection, and promotion eligibility are consumed through
//! this trait and treated as ground truth; the engine only decides
//! which of the offered moves to play.

use crate::chess_types::{Color, Piece, Square};
use crate::game_state::GameState;

pub trait RulesEngine: Send + Sync {
    /// Every legal destination square for `piece` in `state`.
    ///
    /// Implementations must account for all movement rules internally,
    /// check legality included. An empty result means the piece has no
    /// legal move.
    fn legal_destinations(&self, state: &GameState, piece: &Piece) -> Vec<Square>;

    /// Whether `color`'s king is attacked in `state`.
    fn is_in_check(&self, state: &GameState, color: Color) -> bool;

    /// Whether `piece` must promote on the square it currently occupies.
    fn needs_promotion(&self, piece: &Piece) -> bool;
}

/// Rules engine that knows no moves at all.
///
/// Under it every side is permanently out of moves and never in check.
/// Useful for exercising the no-legal-move paths of the selector and
/// the search without constructing a mate position.
pub struct NullRulesEngine;

impl RulesEngine for NullRulesEngine {
    fn legal_destinations(&self, _state: &GameState, _piece: &Piece) -> Vec<Square> {
        Vec::new()
    }

    fn is_in_check(&self, _state: &GameState, _color: Color) -> bool {
        false
    }

    fn needs_promotion(&self, _piece: &Piece) -> bool {
        false
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chess_types::PieceKind;

    #[test]
    fn null_rules_report_nothing() {
        let state = GameState::new_game();
        let piece = Piece {
            kind: PieceKind::Pawn,
            color: Color::White,
            square: (4, 1),
        };
        let rules = NullRulesEngine;
        assert!(rules.legal_destinations(&state, &piece).is_empty());
        assert!(!rules.is_in_check(&state, Color::White));
        assert!(!rules.needs_promotion(&piece));
    }
}
