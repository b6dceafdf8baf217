//! Fixed-depth minimax engine with randomized tie-breaking.
//!
//! The selector enumerates every root move for the side to move,
//! simulates each onto a fresh clone, and scores the resulting child
//! with the exhaustive minimax search at one ply less than the
//! configured depth. The best-scoring root move wins; a candidate that
//! merely ties the current best replaces it with a fixed probability,
//! which keeps repeated games from collapsing onto one line. If no
//! candidate produced a usable score the engine degrades to a uniform
//! random legal move rather than failing.
//!
//! The random generator is an injected dependency so selection is
//! reproducible under a seeded generator.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::candidate_move::CandidateMove;
use crate::engine_errors::EngineErrors;
use crate::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::enumerate_moves::enumerate_moves;
use crate::game_state::GameState;
use crate::rules_engine::RulesEngine;
use crate::scoring::Score;
use crate::search_minimax::{minimax_score, SearchStats};
use crate::simulate_move::simulate_move;

/// Tunable selection parameters.
///
/// These are explicit configuration rather than module constants so a
/// test can pin them down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimaxConfig {
    /// Plies searched from the root. Each extra ply multiplies the
    /// work by the branching factor; 3 is already markedly slower
    /// than the default.
    pub search_depth: u32,
    /// Probability that a candidate tying the current best score
    /// replaces it.
    pub tie_break_probability: f64,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        MinimaxConfig {
            search_depth: 2,
            tie_break_probability: 0.3,
        }
    }
}

pub struct MinimaxEngine<R: RulesEngine, G: Rng> {
    rules: R,
    config: MinimaxConfig,
    rng: G,
}

impl<R: RulesEngine> MinimaxEngine<R, StdRng> {
    /// Engine with the default configuration and an OS-seeded generator.
    pub fn new(rules: R) -> Self {
        MinimaxEngine::with_config_and_rng(rules, MinimaxConfig::default(), StdRng::from_os_rng())
    }
}

impl<R: RulesEngine, G: Rng> MinimaxEngine<R, G> {
    /// Engine with explicit configuration and generator.
    ///
    /// Seed the generator (`StdRng::seed_from_u64`) for reproducible
    /// selection.
    pub fn with_config_and_rng(rules: R, config: MinimaxConfig, rng: G) -> Self {
        MinimaxEngine { rules, config, rng }
    }
}

impl<R, G> Engine for MinimaxEngine<R, G>
where
    R: RulesEngine,
    G: Rng + Send,
{
    fn name(&self) -> &str {
        "Rowan Minimax"
    }

    /// Selects the extremal-scoring root move for the side to move.
    ///
    /// Root simulation faults skip their candidate and are reported in
    /// `info_lines`; they never abort the selection. The returned move
    /// is re-bound to the caller's own state by origin square, since
    /// the caller never operates on simulation clones.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineErrors> {
        let ai_color = game_state.turn;
        let depth = params.depth.unwrap_or(self.config.search_depth);

        let root_moves = enumerate_moves(&self.rules, game_state, ai_color);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string minimax_engine root_moves {} depth {}",
            root_moves.len(),
            depth
        ));

        if root_moves.is_empty() {
            return Ok(out);
        }

        let mut stats = SearchStats::default();
        let mut best: Option<(CandidateMove, Score)> = None;

        for candidate in &root_moves {
            let child = match simulate_move(&self.rules, game_state, candidate) {
                Ok(next) => next,
                Err(fault) => {
                    out.info_lines.push(format!(
                        "info string minimax_engine skipped {} ({})",
                        candidate.get_long_algebraic(),
                        fault
                    ));
                    continue;
                }
            };

            let score = minimax_score(
                &self.rules,
                &child,
                depth.saturating_sub(1),
                false,
                ai_color,
                &mut stats,
            );

            best = Some(match best {
                None => (*candidate, score),
                Some((held, held_score)) => {
                    if score > held_score {
                        (*candidate, score)
                    } else if score == held_score
                        && self.rng.random_bool(self.config.tie_break_probability)
                    {
                        (*candidate, score)
                    } else {
                        (held, held_score)
                    }
                }
            });
        }

        out.info_lines.push(format!(
            "info string minimax_engine nodes {} skipped_branches {}",
            stats.nodes, stats.skipped_branches
        ));

        let chosen = match best {
            Some((candidate, score)) => {
                out.info_lines.push(format!(
                    "info string minimax_engine best {} score {}",
                    candidate.get_long_algebraic(),
                    score
                ));
                candidate
            }
            None => {
                // Search produced nothing usable; degrade to a uniform
                // random legal move.
                out.info_lines
                    .push("info string minimax_engine fallback random".to_string());
                *root_moves
                    .as_slice()
                    .choose(&mut self.rng)
                    .ok_or(EngineErrors::EmptyMoveList)?
            }
        };

        // Re-bind the chosen piece to the caller's state by origin.
        match game_state.piece_at(chosen.origin) {
            Some(piece) => {
                out.best_move = Some(CandidateMove {
                    piece: *piece,
                    origin: chosen.origin,
                    destination: chosen.destination,
                });
                Ok(out)
            }
            None => Err(EngineErrors::UnresolvedSelection(chosen.origin)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_types::{Color, Piece, Square};
    use crate::rules_engine::NullRulesEngine;
    use crate::standard_rules::StandardRules;

    fn seeded_engine(
        config: MinimaxConfig,
        seed: u64,
    ) -> MinimaxEngine<StandardRules, StdRng> {
        MinimaxEngine::with_config_and_rng(StandardRules, config, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn takes_the_undefended_rook_over_the_quiet_push() {
        let state = GameState::from_fen("k7/8/8/3r4/3R4/8/6P1/K7 w - - 0 1")
            .expect("endgame FEN should parse");
        let mut engine = seeded_engine(MinimaxConfig::default(), 11);

        let out = engine
            .choose_move(&state, &SearchParams::default())
            .expect("selection should succeed");
        let best = out.best_move.expect("a move should be chosen");

        assert_eq!(best.get_long_algebraic(), "d4d5");
        // The returned piece is bound to the caller's state.
        assert_eq!(&best.piece, state.piece_at((3, 3)).expect("d4 rook"));
    }

    #[test]
    fn reports_no_move_in_the_stalemate_scenario() {
        // Lone black king, white king and queen, black to move.
        let state = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("stalemate FEN should parse");
        let mut engine = seeded_engine(MinimaxConfig::default(), 3);

        let out = engine
            .choose_move(&state, &SearchParams::default())
            .expect("selection should succeed");
        assert!(out.best_move.is_none());
    }

    #[test]
    fn selection_is_deterministic_with_a_pinned_tie_break() {
        let state = GameState::new_game();

        for probability in [0.0, 1.0] {
            let config = MinimaxConfig {
                search_depth: 1,
                tie_break_probability: probability,
            };
            let mut first = seeded_engine(config, 99);
            let mut second = seeded_engine(config, 99);

            let a = first
                .choose_move(&state, &SearchParams::default())
                .expect("selection should succeed")
                .best_move
                .expect("a move should be chosen");
            let b = second
                .choose_move(&state, &SearchParams::default())
                .expect("selection should succeed")
                .best_move
                .expect("a move should be chosen");
            assert_eq!(a, b);
        }
    }

    #[test]
    fn never_replace_keeps_the_first_best_and_always_replace_the_last() {
        // From the opening every move scores the same material, so the
        // tie-break policy alone decides the selection.
        let state = GameState::new_game();
        let root_moves = enumerate_moves(&StandardRules, &state, Color::White);

        let mut never = seeded_engine(
            MinimaxConfig {
                search_depth: 1,
                tie_break_probability: 0.0,
            },
            1,
        );
        let first = never
            .choose_move(&state, &SearchParams::default())
            .expect("selection should succeed")
            .best_move
            .expect("a move should be chosen");
        assert_eq!(first.get_long_algebraic(), root_moves[0].get_long_algebraic());

        let mut always = seeded_engine(
            MinimaxConfig {
                search_depth: 1,
                tie_break_probability: 1.0,
            },
            1,
        );
        let last = always
            .choose_move(&state, &SearchParams::default())
            .expect("selection should succeed")
            .best_move
            .expect("a move should be chosen");
        assert_eq!(
            last.get_long_algebraic(),
            root_moves[root_moves.len() - 1].get_long_algebraic()
        );
    }

    #[test]
    fn the_original_state_is_never_mutated() {
        let state = GameState::from_fen("k7/8/8/3r4/3R4/8/6P1/K7 w - - 0 1")
            .expect("endgame FEN should parse");
        let before = state.clone();

        let mut engine = seeded_engine(MinimaxConfig::default(), 5);
        engine
            .choose_move(&state, &SearchParams::default())
            .expect("selection should succeed");

        assert_eq!(state, before);
    }

    #[test]
    fn per_call_depth_override_is_honored() {
        let state = GameState::new_game();
        let mut engine = seeded_engine(MinimaxConfig::default(), 7);

        let out = engine
            .choose_move(
                &state,
                &SearchParams { depth: Some(1) },
            )
            .expect("selection should succeed");
        assert!(out
            .info_lines
            .iter()
            .any(|line| line.contains("depth 1")));
    }

    #[test]
    fn no_root_moves_yields_no_move() {
        let state = GameState::new_game();
        let mut engine = MinimaxEngine::with_config_and_rng(
            NullRulesEngine,
            MinimaxConfig::default(),
            StdRng::seed_from_u64(0),
        );

        let out = engine
            .choose_move(&state, &SearchParams::default())
            .expect("selection should succeed");
        assert!(out.best_move.is_none());
    }

    /// Rules whose every destination is a friendly square, so every
    /// simulation faults with an illegal capture target.
    struct FriendlyFireRules;

    impl RulesEngine for FriendlyFireRules {
        fn legal_destinations(&self, state: &GameState, piece: &Piece) -> Vec<Square> {
            state
                .pieces
                .iter()
                .filter(|p| p.color == piece.color && p.square != piece.square)
                .map(|p| p.square)
                .collect()
        }

        fn is_in_check(&self, _state: &GameState, _color: Color) -> bool {
            false
        }

        fn needs_promotion(&self, _piece: &Piece) -> bool {
            false
        }
    }

    #[test]
    fn total_search_failure_degrades_to_a_random_legal_move() {
        let state = GameState::new_game();
        let mut engine = MinimaxEngine::with_config_and_rng(
            FriendlyFireRules,
            MinimaxConfig::default(),
            StdRng::seed_from_u64(42),
        );

        let out = engine
            .choose_move(&state, &SearchParams::default())
            .expect("selection should still succeed");

        assert!(out.best_move.is_some());
        assert!(out
            .info_lines
            .iter()
            .any(|line| line.contains("fallback random")));
        assert!(out
            .info_lines
            .iter()
            .any(|line| line.contains("skipped")));
    }
}
