//! Monte Carlo Tree Search (MCTS) implementation.
//!
//! This module provides the search tree, UCT selection, rollout simulation,
//! and the main search loop with cross-turn tree reuse.

pub mod node;
pub mod rollout;
pub mod search;
pub mod search_logger;

pub use self::node::MctsNode;
pub use self::rollout::{roll_out, RandomRollout, RolloutPolicy};
pub use self::search::{mcts_search, MctsConfig, MctsStats, SearchContext};
pub use self::search_logger::{SearchLogger, Verbosity};

/// UCT exploration constant (sqrt(2)).
pub const EXPLORATION_CONSTANT: f64 = std::f64::consts::SQRT_2;
