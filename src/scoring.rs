//! Material scoring for the decision engine.
//!
//! This module centralizes piece valuations, the score type, and the
//! sentinel values representing decided positions. Material is the
//! sole evaluation term: a position's score for a side is that side's
//! material sum minus the opponent's.
//!
//! Conventions:
//! - Scores are signed integers; larger is better for the perspective
//!   side.
//! - `WIN_SCORE` / `LOSS_SCORE` are extreme sentinels that dominate any
//!   achievable material difference and mark decisive terminal nodes.

use crate::chess_types::{Color, PieceKind};
use crate::game_state::GameState;

/// Numeric representation of an evaluation score.
pub type Score = i32;

/// Sentinel for a decided win from the perspective side's view.
pub const WIN_SCORE: Score = 1_000_000_000;

/// Sentinel for a decided loss from the perspective side's view.
pub const LOSS_SCORE: Score = -WIN_SCORE;

/// Score of a drawn terminal node.
pub const DRAW_SCORE: Score = 0;

/// Conventional material value for a piece kind.
///
/// - Pawn:   100
/// - Knight: 320
/// - Bishop: 330
/// - Rook:   500
/// - Queen:  900
/// - King:   20000 (kings are effectively priceless)
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Signed material sum of `state` from `perspective`'s point of view.
///
/// Pure function of the piece list; swapping the perspective negates
/// the result.
pub fn evaluate_material(state: &GameState, perspective: Color) -> Score {
    let mut score = 0;
    for piece in &state.pieces {
        if piece.color == perspective {
            score += piece_value(piece.kind);
        } else {
            score -= piece_value(piece.kind);
        }
    }
    score
}
