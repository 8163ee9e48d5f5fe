//! Heron: adversarial game-tree search for Isolation-style games.
//!
//! Three search strategies over a game-supplied state adapter:
//!
//! - Fixed-depth and iterative-deepening minimax ([`search::minimax`])
//! - Iterative-deepening alpha-beta pruning ([`search::alpha_beta`])
//! - Monte Carlo Tree Search with UCT selection and cross-turn tree reuse
//!   ([`mcts`])
//!
//! All three follow the same any-time contract: the engine repeatedly
//! publishes improving recommendations through a [`recommend`] channel and is
//! cut off externally by the driver dropping its end. The game itself lives
//! behind [`game::GameState`]; this crate never inspects board internals.

pub mod agent;
pub mod eval;
pub mod game;
pub mod mcts;
pub mod recommend;
pub mod search;

pub use agent::{Agent, AlphaBetaAgent, MctsAgent, MinimaxAgent};
pub use eval::{Heuristic, MobilityEval};
pub use game::{opponent, GameState, PlayerId};
pub use mcts::{MctsConfig, MctsStats, RandomRollout, SearchContext};
pub use recommend::{recommendation_channel, RecommendationDrain, RecommendationSink};
