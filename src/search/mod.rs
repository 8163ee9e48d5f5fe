pub mod alpha_beta;
pub mod iterative_deepening;
pub mod minimax;

pub use alpha_beta::alpha_beta_search;
pub use iterative_deepening::{iterative_deepening_alpha_beta, iterative_deepening_minimax};
pub use minimax::minimax_search;
