//! Full game position as an owned value.
//!
//! A `GameState` is the complete position: the piece list, the side to
//! move, and the outcome marker. It is a value type with structural
//! `Clone`; a clone shares no mutable substructure with its source, so
//! every node of the search tree can own its position outright.
//!
//! FEN import and export are provided for constructing positions and
//! for diagnostics. Castling, en passant, and clock fields are accepted
//! and ignored on input; the decision core does not track them.

use crate::chess_types::{Color, Outcome, Piece, PieceKind, Square};
use crate::engine_errors::EngineErrors;

const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Every piece on the board, in insertion order.
    pub pieces: Vec<Piece>,
    /// The side to move.
    pub turn: Color,
    /// Result marker; `Undecided` while the game is in progress.
    pub outcome: Outcome,
}

impl GameState {
    /// An empty board with White to move and no decided outcome.
    pub fn new_empty() -> Self {
        GameState {
            pieces: Vec::with_capacity(32),
            turn: Color::White,
            outcome: Outcome::Undecided,
        }
    }

    /// The standard starting position.
    pub fn new_game() -> Self {
        GameState::from_fen(STARTING_POSITION_FEN)
            .expect("starting position string must have been corrupted")
    }

    /// The piece occupying `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square == square)
    }

    /// Mutable access to the piece occupying `square`, if any.
    pub fn piece_at_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.pieces.iter_mut().find(|p| p.square == square)
    }

    /// Removes and returns the piece occupying `square`, if any.
    pub fn remove_piece_at(&mut self, square: Square) -> Option<Piece> {
        let index = self.pieces.iter().position(|p| p.square == square)?;
        Some(self.pieces.remove(index))
    }

    /// Hands the move to the other side.
    pub fn toggle_turn(&mut self) {
        self.turn = self.turn.opposite();
    }

    /// Builds a state from a FEN string.
    ///
    /// The board and side-to-move fields are required; any further
    /// fields are ignored.
    ///
    /// # Returns
    /// * `Ok(GameState)` - The parsed position with an undecided outcome.
    /// * `Err(EngineErrors)` - If the board layout or side field is malformed.
    pub fn from_fen(fen: &str) -> Result<Self, EngineErrors> {
        let mut fields = fen.split_ascii_whitespace();

        let board_field = fields
            .next()
            .ok_or_else(|| EngineErrors::InvalidFenString(fen.to_string()))?;
        let side_field = fields
            .next()
            .ok_or_else(|| EngineErrors::InvalidFenString(fen.to_string()))?;

        let mut result = GameState::new_empty();

        let ranks: Vec<&str> = board_field.split('/').collect();
        if ranks.len() != 8 {
            return Err(EngineErrors::InvalidFenString(fen.to_string()));
        }

        for (fen_rank_index, rank_str) in ranks.iter().enumerate() {
            let rank = (7 - fen_rank_index) as i8;
            let mut file: i8 = 0;

            for c in rank_str.chars() {
                if let Some(step) = c.to_digit(10) {
                    if !(1..=8).contains(&step) {
                        return Err(EngineErrors::InvalidFenToken(c));
                    }
                    file += step as i8;
                    continue;
                }

                let (color, kind) =
                    piece_from_fen_char(c).ok_or(EngineErrors::InvalidFenToken(c))?;
                if file > 7 {
                    return Err(EngineErrors::InvalidFenString(fen.to_string()));
                }
                result.pieces.push(Piece {
                    kind,
                    color,
                    square: (file, rank),
                });
                file += 1;
            }

            if file != 8 {
                return Err(EngineErrors::InvalidFenString(fen.to_string()));
            }
        }

        result.turn = match side_field {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(EngineErrors::InvalidFenString(fen.to_string())),
        };

        Ok(result)
    }

    /// Renders the position as a FEN string.
    ///
    /// The fields the core does not track are emitted as their empty
    /// placeholders, so `from_fen(get_fen())` round-trips.
    pub fn get_fen(&self) -> String {
        let mut result = String::new();
        for rank in (0..8).rev() {
            let mut empty_count: u8 = 0;
            for file in 0..8 {
                if let Some(piece) = self.piece_at((file, rank)) {
                    if empty_count > 0 {
                        result.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    result.push(fen_char_from_piece(piece));
                } else {
                    empty_count += 1;
                }
            }
            if empty_count > 0 {
                result.push_str(&empty_count.to_string());
            }
            if rank > 0 {
                result.push('/');
            }
        }

        result.push(' ');
        result.push(match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        });
        result.push_str(" - - 0 1");
        result
    }
}

fn piece_from_fen_char(c: char) -> Option<(Color, PieceKind)> {
    let color = if c.is_ascii_uppercase() {
        Color::White
    } else if c.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match c.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

fn fen_char_from_piece(piece: &Piece) -> char {
    let lower = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => lower.to_ascii_uppercase(),
        Color::Black => lower,
    }
}
