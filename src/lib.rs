//! Decision engine for an automated chess player.
//!
//! The crate scores positions by material alone and selects moves with
//! an exhaustive fixed-depth minimax over simulated game states: every
//! explored edge clones the position, so no two nodes of the search
//! tree ever share mutable state. The rules of chess are consumed
//! through the [`rules_engine::RulesEngine`] boundary;
//! [`standard_rules::StandardRules`] is a compact reference
//! implementation of that boundary used by the tests, the match
//! harness, and the benchmarks.

pub mod candidate_move;
pub mod chess_types;
pub mod engine_errors;
pub mod engine_minimax;
pub mod engine_random;
pub mod engine_trait;
pub mod enumerate_moves;
pub mod game_state;
pub mod match_harness;
pub mod rules_engine;
pub mod scoring;
pub mod search_minimax;
pub mod simulate_move;
pub mod standard_rules;
