//! Candidate action produced by the move enumerator.

use crate::chess_types::{square_to_algebraic, Piece, Square};

/// A candidate move: the moving piece plus its origin and destination.
///
/// The piece field is a snapshot of the piece record as seen in the
/// state the move was enumerated from, not a live reference. Code that
/// hands a candidate back to a caller operating on a different copy of
/// the state must re-resolve the piece by its origin square first; the
/// move selector does exactly that before returning a move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateMove {
    pub piece: Piece,
    pub origin: Square,
    pub destination: Square,
}

impl CandidateMove {
    pub fn new(piece: Piece, destination: Square) -> Self {
        CandidateMove {
            piece,
            origin: piece.square,
            destination,
        }
    }

    /// Converts this candidate to long algebraic notation (e.g., "e2e4").
    pub fn get_long_algebraic(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.origin),
            square_to_algebraic(self.destination)
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::chess_types::{Color, PieceKind};

    #[test]
    fn long_algebraic_rendering() {
        let pawn = Piece {
            kind: PieceKind::Pawn,
            color: Color::White,
            square: (4, 1),
        };
        let candidate = CandidateMove::new(pawn, (4, 3));
        assert_eq!(candidate.origin, (4, 1));
        assert_eq!(candidate.get_long_algebraic(), "e2e4");
    }
}
