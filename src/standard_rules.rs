//! Reference implementation of the rules boundary.
//!
//! `StandardRules` provides standard piece movement with full
//! check-legality filtering: a candidate destination survives only if
//! applying it on a scratch copy leaves the mover's own king
//! unattacked. Castling and en passant are not modeled; they are
//! internal affordances of a full rules engine that the decision core
//! never inspects. Promotion eligibility is a pawn on its last rank.

use crate::chess_types::{offset_square, Color, Piece, PieceKind, Square};
use crate::game_state::GameState;
use crate::rules_engine::RulesEngine;

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub struct StandardRules;

impl RulesEngine for StandardRules {
    fn legal_destinations(&self, state: &GameState, piece: &Piece) -> Vec<Square> {
        pseudo_destinations(state, piece)
            .into_iter()
            .filter(|destination| !leaves_own_king_attacked(state, piece, *destination))
            .collect()
    }

    fn is_in_check(&self, state: &GameState, color: Color) -> bool {
        match king_square(state, color) {
            Some(square) => square_attacked_by(state, square, color.opposite()),
            // A fragment position without a king cannot be in check.
            None => false,
        }
    }

    fn needs_promotion(&self, piece: &Piece) -> bool {
        let last_rank = match piece.color {
            Color::White => 7,
            Color::Black => 0,
        };
        matches!(piece.kind, PieceKind::Pawn) && piece.square.1 == last_rank
    }
}

/// Destinations by movement shape alone, before check legality.
fn pseudo_destinations(state: &GameState, piece: &Piece) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_destinations(state, piece),
        PieceKind::Knight => step_destinations(state, piece, &KNIGHT_DELTAS),
        PieceKind::King => step_destinations(state, piece, &KING_DELTAS),
        PieceKind::Rook => slide_destinations(state, piece, &ROOK_DIRECTIONS),
        PieceKind::Bishop => slide_destinations(state, piece, &BISHOP_DIRECTIONS),
        PieceKind::Queen => {
            let mut result = slide_destinations(state, piece, &ROOK_DIRECTIONS);
            result.extend(slide_destinations(state, piece, &BISHOP_DIRECTIONS));
            result
        }
    }
}

fn pawn_destinations(state: &GameState, piece: &Piece) -> Vec<Square> {
    let mut result = Vec::new();
    let (forward, start_rank) = match piece.color {
        Color::White => (1, 1),
        Color::Black => (-1, 6),
    };

    if let Ok(single) = offset_square(piece.square, 0, forward) {
        if state.piece_at(single).is_none() {
            result.push(single);
            if piece.square.1 == start_rank {
                if let Ok(double) = offset_square(piece.square, 0, 2 * forward) {
                    if state.piece_at(double).is_none() {
                        result.push(double);
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        if let Ok(target) = offset_square(piece.square, d_file, forward) {
            if let Some(occupant) = state.piece_at(target) {
                if occupant.color != piece.color {
                    result.push(target);
                }
            }
        }
    }

    result
}

fn step_destinations(state: &GameState, piece: &Piece, deltas: &[(i8, i8)]) -> Vec<Square> {
    let mut result = Vec::new();
    for (d_file, d_rank) in deltas {
        if let Ok(target) = offset_square(piece.square, *d_file, *d_rank) {
            match state.piece_at(target) {
                Some(occupant) if occupant.color == piece.color => {}
                _ => result.push(target),
            }
        }
    }
    result
}

fn slide_destinations(state: &GameState, piece: &Piece, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut result = Vec::new();
    for (d_file, d_rank) in directions {
        let mut current = piece.square;
        while let Ok(target) = offset_square(current, *d_file, *d_rank) {
            match state.piece_at(target) {
                None => {
                    result.push(target);
                    current = target;
                }
                Some(occupant) => {
                    if occupant.color != piece.color {
                        result.push(target);
                    }
                    break;
                }
            }
        }
    }
    result
}

fn king_square(state: &GameState, color: Color) -> Option<Square> {
    state
        .pieces
        .iter()
        .find(|p| p.color == color && matches!(p.kind, PieceKind::King))
        .map(|p| p.square)
}

/// Whether any piece of `by_color` attacks `target` in `state`.
fn square_attacked_by(state: &GameState, target: Square, by_color: Color) -> bool {
    // Knight and king attacks are fixed-step.
    for (d_file, d_rank) in KNIGHT_DELTAS {
        if let Ok(square) = offset_square(target, d_file, d_rank) {
            if holds_piece(state, square, by_color, &[PieceKind::Knight]) {
                return true;
            }
        }
    }
    for (d_file, d_rank) in KING_DELTAS {
        if let Ok(square) = offset_square(target, d_file, d_rank) {
            if holds_piece(state, square, by_color, &[PieceKind::King]) {
                return true;
            }
        }
    }

    // Pawn attacks come from one rank toward the attacker's own side.
    let pawn_rank_delta = match by_color {
        Color::White => -1,
        Color::Black => 1,
    };
    for d_file in [-1, 1] {
        if let Ok(square) = offset_square(target, d_file, pawn_rank_delta) {
            if holds_piece(state, square, by_color, &[PieceKind::Pawn]) {
                return true;
            }
        }
    }

    // Slider attacks scan each ray up to the first occupied square.
    if ray_hits(state, target, &ROOK_DIRECTIONS, by_color, &[PieceKind::Rook, PieceKind::Queen]) {
        return true;
    }
    if ray_hits(
        state,
        target,
        &BISHOP_DIRECTIONS,
        by_color,
        &[PieceKind::Bishop, PieceKind::Queen],
    ) {
        return true;
    }

    false
}

fn holds_piece(state: &GameState, square: Square, color: Color, kinds: &[PieceKind]) -> bool {
    match state.piece_at(square) {
        Some(piece) => piece.color == color && kinds.contains(&piece.kind),
        None => false,
    }
}

fn ray_hits(
    state: &GameState,
    target: Square,
    directions: &[(i8, i8)],
    by_color: Color,
    kinds: &[PieceKind],
) -> bool {
    for (d_file, d_rank) in directions {
        let mut current = target;
        while let Ok(square) = offset_square(current, *d_file, *d_rank) {
            match state.piece_at(square) {
                None => current = square,
                Some(piece) => {
                    if piece.color == by_color && kinds.contains(&piece.kind) {
                        return true;
                    }
                    break;
                }
            }
        }
    }
    false
}

/// Applies the candidate on a scratch copy and reports whether the
/// mover's king ends up attacked.
fn leaves_own_king_attacked(state: &GameState, piece: &Piece, destination: Square) -> bool {
    let mut scratch = state.clone();
    scratch.remove_piece_at(destination);
    if let Some(moved) = scratch.piece_at_mut(piece.square) {
        moved.square = destination;
    }
    match king_square(&scratch, piece.color) {
        Some(square) => square_attacked_by(&scratch, square, piece.color.opposite()),
        None => false,
    }
}
