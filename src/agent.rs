//! Game-playing agents, combining a search engine, a heuristic or rollout
//! policy, and the any-time recommendation contract.
//!
//! An agent's `choose_action` is invoked once per turn by an external driver
//! that enforces the wall-clock deadline. The agent must publish at least one
//! legal action through the sink before it returns or is cut off; every later
//! publish supersedes the previous one.

use crate::eval::Heuristic;
use crate::game::GameState;
use crate::mcts::rollout::RolloutPolicy;
use crate::mcts::search::{mcts_search, MctsConfig, SearchContext};
use crate::recommend::RecommendationSink;
use crate::search::iterative_deepening::{
    iterative_deepening_alpha_beta, iterative_deepening_minimax,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Trait defining the interface for game-playing agents.
pub trait Agent<S: GameState> {
    /// Choose an action for `state`, publishing at least one legal
    /// recommendation through `sink` before returning.
    fn choose_action(&mut self, state: &S, sink: &RecommendationSink<S::Action>);
}

/// Publish a uniformly random opening move for the first ply of each player.
/// Returns false if the drain is already gone.
fn publish_random_opening<S: GameState>(
    state: &S,
    rng: &mut StdRng,
    sink: &RecommendationSink<S::Action>,
) -> bool {
    let actions = state.actions();
    let action = actions[rng.gen_range(0..actions.len())];
    sink.publish(action)
}

/// Iterative-deepening minimax agent with a pluggable heuristic.
pub struct MinimaxAgent<H> {
    pub depth_limit: u32,
    pub heuristic: H,
    pub verbose: bool,
    opening_rng: StdRng,
}

impl<H> MinimaxAgent<H> {
    pub fn new(depth_limit: u32, heuristic: H) -> Self {
        MinimaxAgent {
            depth_limit,
            heuristic,
            verbose: false,
            opening_rng: StdRng::from_entropy(),
        }
    }
}

impl<S, H> Agent<S> for MinimaxAgent<H>
where
    S: GameState,
    H: Heuristic<S>,
{
    fn choose_action(&mut self, state: &S, sink: &RecommendationSink<S::Action>) {
        // Opening plies are effectively symmetric; answer instantly with a
        // random move, then keep searching for something better.
        if state.ply_count() < 2 && !publish_random_opening(state, &mut self.opening_rng, sink) {
            return;
        }
        iterative_deepening_minimax(
            state,
            self.depth_limit,
            &self.heuristic,
            state.player(),
            sink,
            self.verbose,
        );
    }
}

/// Iterative-deepening alpha-beta agent with a pluggable heuristic.
pub struct AlphaBetaAgent<H> {
    pub depth_limit: u32,
    pub heuristic: H,
    pub verbose: bool,
    opening_rng: StdRng,
}

impl<H> AlphaBetaAgent<H> {
    pub fn new(depth_limit: u32, heuristic: H) -> Self {
        AlphaBetaAgent {
            depth_limit,
            heuristic,
            verbose: false,
            opening_rng: StdRng::from_entropy(),
        }
    }
}

impl<S, H> Agent<S> for AlphaBetaAgent<H>
where
    S: GameState,
    H: Heuristic<S>,
{
    fn choose_action(&mut self, state: &S, sink: &RecommendationSink<S::Action>) {
        if state.ply_count() < 2 && !publish_random_opening(state, &mut self.opening_rng, sink) {
            return;
        }
        iterative_deepening_alpha_beta(
            state,
            self.depth_limit,
            &self.heuristic,
            state.player(),
            sink,
            self.verbose,
        );
    }
}

/// MCTS agent. Keeps its search context across turns so the subtree below the
/// last committed move is reused when the opponent's reply lands on it.
pub struct MctsAgent<S: GameState, P> {
    pub config: MctsConfig,
    pub policy: P,
    context: SearchContext<S>,
}

impl<S: GameState, P> MctsAgent<S, P> {
    pub fn new(config: MctsConfig, policy: P) -> Self {
        MctsAgent {
            config,
            policy,
            context: SearchContext::new(),
        }
    }

    /// The context carried between turns, for inspection.
    pub fn context(&self) -> &SearchContext<S> {
        &self.context
    }
}

impl<S, P> Agent<S> for MctsAgent<S, P>
where
    S: GameState,
    P: RolloutPolicy<S>,
{
    fn choose_action(&mut self, state: &S, sink: &RecommendationSink<S::Action>) {
        mcts_search(
            state.clone(),
            &mut self.policy,
            &self.config,
            &mut self.context,
            sink,
        );
    }
}
