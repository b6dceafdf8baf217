//! Uniform-random baseline engine.
//!
//! Selects uniformly from legal moves and is primarily used as a
//! harness baseline, for diagnostics, and for low-strength play.

use rand::prelude::IndexedRandom;

use crate::engine_errors::EngineErrors;
use crate::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::enumerate_moves::enumerate_moves;
use crate::game_state::GameState;
use crate::rules_engine::RulesEngine;

pub struct RandomEngine<R: RulesEngine> {
    rules: R,
}

impl<R: RulesEngine> RandomEngine<R> {
    pub fn new(rules: R) -> Self {
        RandomEngine { rules }
    }
}

impl<R: RulesEngine> Engine for RandomEngine<R> {
    fn name(&self) -> &str {
        "Rowan Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> Result<EngineOutput, EngineErrors> {
        let legal_moves = enumerate_moves(&self.rules, game_state, game_state.turn);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine requested_depth {} ignored",
                depth
            ));
        }

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let mut rng = rand::rng();
        let picked = legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or(EngineErrors::EmptyMoveList)?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}
