//! Exhaustive fixed-depth minimax over simulated game states.
//!
//! Every explored edge simulates its move onto a fresh clone of the
//! parent position, so sibling branches never share mutable state.
//! There is no pruning, caching, move ordering, or iterative
//! deepening: worst-case cost is O(b^d) static evaluations, with one
//! full state clone per edge, and each increment of the depth
//! multiplies the work by the branching factor.

use crate::chess_types::{Color, Outcome};
use crate::enumerate_moves::enumerate_moves;
use crate::game_state::GameState;
use crate::rules_engine::RulesEngine;
use crate::scoring::{evaluate_material, Score, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
use crate::simulate_move::simulate_move;

/// Counters describing one search invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, terminal nodes included.
    pub nodes: u64,
    /// Branches dropped because their simulation faulted.
    pub skipped_branches: u64,
}

/// Recursively scores `state` for `ai_color`.
///
/// Terminal handling, in order:
/// - depth exhausted or outcome decided: a recorded winner scores as
///   the win sentinel when it is `ai_color` and the loss sentinel
///   otherwise; a recorded draw, like an exhausted depth, scores as
///   the static material evaluation;
/// - side to move has no legal moves: the loss sentinel when the
///   maximizing side is the one out of moves while in check, the win
///   sentinel when the minimizing side is, and exactly zero without
///   check (stalemate);
/// - otherwise every legal move is simulated and the child scores are
///   combined by max (maximizing) or min (minimizing).
///
/// A branch whose simulation faults contributes no value: it is
/// counted in `stats` and skipped, and the remaining branches are
/// still explored.
///
/// # Arguments
/// * `rules` - The rules collaborator.
/// * `state` - The position to score; never mutated.
/// * `depth` - Remaining plies; strictly decreases per recursion.
/// * `maximizing` - Whether the side to move is the AI.
/// * `ai_color` - The side the returned score is good for.
/// * `stats` - Counters accumulated across the whole search.
pub fn minimax_score<R: RulesEngine + ?Sized>(
    rules: &R,
    state: &GameState,
    depth: u32,
    maximizing: bool,
    ai_color: Color,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes += 1;

    if depth == 0 || !matches!(state.outcome, Outcome::Undecided) {
        return match state.outcome {
            Outcome::Winner(winner) => {
                if winner == ai_color {
                    WIN_SCORE
                } else {
                    LOSS_SCORE
                }
            }
            Outcome::Draw | Outcome::Undecided => evaluate_material(state, ai_color),
        };
    }

    let moves = enumerate_moves(rules, state, state.turn);

    // No legal moves for the side to move: checkmate or stalemate.
    if moves.is_empty() {
        if rules.is_in_check(state, state.turn) {
            return if maximizing { LOSS_SCORE } else { WIN_SCORE };
        }
        return DRAW_SCORE;
    }

    let mut value: Option<Score> = None;
    for candidate in &moves {
        let child = match simulate_move(rules, state, candidate) {
            Ok(next) => next,
            Err(_) => {
                stats.skipped_branches += 1;
                continue;
            }
        };

        let score = minimax_score(rules, &child, depth - 1, !maximizing, ai_color, stats);
        value = Some(match value {
            None => score,
            Some(best) => {
                if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                }
            }
        });
    }

    // Every branch faulted; score the node statically.
    value.unwrap_or_else(|| evaluate_material(state, ai_color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::standard_rules::StandardRules;

    fn search(state: &GameState, depth: u32, maximizing: bool, ai_color: Color) -> Score {
        let mut stats = SearchStats::default();
        minimax_score(&StandardRules, state, depth, maximizing, ai_color, &mut stats)
    }

    #[test]
    fn decided_outcome_scores_as_a_sentinel_at_any_depth() {
        let mut state = GameState::new_game();
        state.outcome = Outcome::Winner(Color::White);

        for depth in [0, 1, 3] {
            assert_eq!(search(&state, depth, true, Color::White), WIN_SCORE);
            assert_eq!(search(&state, depth, true, Color::Black), LOSS_SCORE);
        }
    }

    #[test]
    fn drawn_outcome_falls_back_to_material() {
        let mut state = GameState::from_fen("k7/8/8/3r4/3R4/8/6P1/K7 w - - 0 1")
            .expect("endgame FEN should parse");
        state.outcome = Outcome::Draw;
        assert_eq!(search(&state, 3, true, Color::White), 100);
    }

    #[test]
    fn depth_zero_is_a_static_evaluation() {
        let state = GameState::from_fen("k7/8/8/3r4/3R4/8/6P1/K7 w - - 0 1")
            .expect("endgame FEN should parse");
        assert_eq!(search(&state, 0, true, Color::White), 100);
        assert_eq!(search(&state, 0, false, Color::Black), -100);
    }

    #[test]
    fn stalemate_scores_exactly_zero() {
        let state = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("stalemate FEN should parse");
        // Black to move as the AI: no moves, not in check.
        assert_eq!(search(&state, 2, true, Color::Black), DRAW_SCORE);
    }

    #[test]
    fn checkmate_scores_by_which_side_ran_out_of_moves() {
        let state = GameState::from_fen("R6k/8/7K/8/8/8/8/8 b - - 0 1")
            .expect("mate FEN should parse");

        // The maximizing side (AI is Black, to move) is mated.
        assert_eq!(search(&state, 2, true, Color::Black), LOSS_SCORE);
        // The minimizing side (opponent of the White AI) is mated.
        assert_eq!(search(&state, 2, false, Color::White), WIN_SCORE);
    }

    #[test]
    fn depth_one_search_equals_static_child_evaluation() {
        let state = GameState::from_fen("k7/8/8/3r4/3R4/8/6P1/K7 w - - 0 1")
            .expect("endgame FEN should parse");
        let ai_color = Color::White;

        for candidate in enumerate_moves(&StandardRules, &state, ai_color) {
            let child = simulate_move(&StandardRules, &state, &candidate)
                .expect("legal root move should simulate");
            let searched = search(&child, 0, false, ai_color);
            assert_eq!(searched, evaluate_material(&child, ai_color));
        }
    }

    #[test]
    fn deeper_search_sees_the_recapture() {
        // White may grab the rook on d5; Black has no recapture, so the
        // swing survives the reply. The quiet alternatives let the black
        // rook take on d4 instead.
        let state = GameState::from_fen("k7/8/8/3r4/3R4/8/6P1/K7 w - - 0 1")
            .expect("endgame FEN should parse");
        let ai_color = Color::White;

        let capture = candidate_from(&state, (3, 3), (3, 4));
        let child = simulate_move(&StandardRules, &state, &capture)
            .expect("capture should simulate");
        let capture_score = search(&child, 1, false, ai_color);
        assert_eq!(capture_score, 600);

        let quiet = candidate_from(&state, (6, 1), (6, 2));
        let child = simulate_move(&StandardRules, &state, &quiet)
            .expect("pawn push should simulate");
        let quiet_score = search(&child, 1, false, ai_color);
        assert!(quiet_score < capture_score);
    }

    #[test]
    fn node_and_skip_counters_accumulate() {
        let state = GameState::new_game();
        let mut stats = SearchStats::default();
        minimax_score(&StandardRules, &state, 1, true, Color::White, &mut stats);
        // The root plus twenty children.
        assert_eq!(stats.nodes, 21);
        assert_eq!(stats.skipped_branches, 0);
    }

    fn candidate_from(
        state: &GameState,
        origin: (i8, i8),
        destination: (i8, i8),
    ) -> crate::candidate_move::CandidateMove {
        let piece = *state.piece_at(origin).expect("origin should hold a piece");
        crate::candidate_move::CandidateMove::new(piece, destination)
    }
}
