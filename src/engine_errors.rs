//! Errors used throughout the decision engine.
//!
//! This module defines the canonical error type returned by the
//! simulator, the move selector, and the state-construction utilities.
//! One enum covers the whole crate to simplify propagation and
//! matching; each variant carries contextual information where it aids
//! diagnostics.
//!
//! Usage guidelines:
//! - Simulation faults (`DesyncedSimulation`, `IllegalCaptureTarget`)
//!   are recovered locally by the search: the offending branch is
//!   skipped and the fault counted, never allowed to abort a search.
//! - `UnresolvedSelection` is the hard selection fault: the caller
//!   receives it instead of a move whose piece binding is wrong.
//! - FEN variants are input errors from state construction and are
//!   suitable for presenting to users.

use std::error::Error;
use std::fmt;

use crate::chess_types::{square_to_algebraic, Square};

/// Unified error type for the decision engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineErrors {
    /// A simulation clone no longer holds the moving piece at the
    /// expected origin square.
    ///
    /// Payload: the origin square the piece was expected on.
    DesyncedSimulation(Square),

    /// A simulated move targets a square occupied by a piece of the
    /// moving side. Unreachable with a correct move enumerator.
    IllegalCaptureTarget {
        origin: Square,
        destination: Square,
    },

    /// The chosen move's piece could not be re-found in the original
    /// state during selection.
    ///
    /// Payload: the origin square the re-resolution searched.
    UnresolvedSelection(Square),

    /// A uniform random pick was requested from an empty move list.
    EmptyMoveList,

    /// A coordinate left the board.
    ///
    /// Payload: the offending `(file, rank)` pair.
    OutOfBounds(Square),

    /// A single character in a FEN string was invalid.
    InvalidFenToken(char),

    /// A FEN string had malformed structure.
    ///
    /// Payload: the original offending string for diagnostics.
    InvalidFenString(String),
}

impl fmt::Display for EngineErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineErrors::DesyncedSimulation(origin) => write!(
                f,
                "simulation clone is missing the moving piece at {}",
                square_to_algebraic(*origin)
            ),
            EngineErrors::IllegalCaptureTarget {
                origin,
                destination,
            } => write!(
                f,
                "move from {} targets a same-color piece at {}",
                square_to_algebraic(*origin),
                square_to_algebraic(*destination)
            ),
            EngineErrors::UnresolvedSelection(origin) => write!(
                f,
                "chosen move's piece could not be re-found at {}",
                square_to_algebraic(*origin)
            ),
            EngineErrors::EmptyMoveList => {
                write!(f, "random pick requested from an empty move list")
            }
            EngineErrors::OutOfBounds(square) => {
                write!(f, "coordinate ({}, {}) is off the board", square.0, square.1)
            }
            EngineErrors::InvalidFenToken(c) => write!(f, "invalid FEN character '{c}'"),
            EngineErrors::InvalidFenString(s) => write!(f, "malformed FEN string: {s}"),
        }
    }
}

impl Error for EngineErrors {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_names_squares() {
        let fault = EngineErrors::DesyncedSimulation((4, 1));
        assert!(fault.to_string().contains("e2"));

        let fault = EngineErrors::IllegalCaptureTarget {
            origin: (3, 3),
            destination: (3, 4),
        };
        let text = fault.to_string();
        assert!(text.contains("d4"));
        assert!(text.contains("d5"));
    }
}
