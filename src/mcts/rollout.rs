//! Rollout (simulation) policies.

use crate::game::{GameState, PlayerId};
use crate::mcts::node::MctsNode;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses the next action during a rollout. Injected into the MCTS engine so
/// the simulation policy can be swapped without touching the tree logic.
pub trait RolloutPolicy<S: GameState> {
    fn select_action(&mut self, state: &S) -> S::Action;
}

/// Uniformly random rollout policy.
#[derive(Debug)]
pub struct RandomRollout {
    rng: StdRng,
}

impl RandomRollout {
    pub fn new() -> Self {
        RandomRollout {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded constructor for reproducible searches in tests.
    pub fn from_seed(seed: u64) -> Self {
        RandomRollout {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomRollout {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GameState> RolloutPolicy<S> for RandomRollout {
    fn select_action(&mut self, state: &S) -> S::Action {
        let actions = state.actions();
        actions[self.rng.gen_range(0..actions.len())]
    }
}

/// Play out from `start` with `policy` until a terminal state.
///
/// Returns the binary reward from `player_id`'s perspective (win = 1,
/// loss/draw = 0) and the side to move at the terminal state, which the
/// caller needs to orient the reward before backpropagation.
pub fn roll_out<S, P>(start: &S, player_id: PlayerId, policy: &mut P) -> (u32, PlayerId)
where
    S: GameState,
    P: RolloutPolicy<S>,
{
    let mut state = start.clone();
    while !state.terminal_test() {
        let action = policy.select_action(&state);
        state = state.result(action);
    }
    let reward = MctsNode::<S>::convert_reward(state.utility(player_id));
    (reward, state.player())
}
