//! Static evaluation of non-terminal states.

use crate::game::{opponent, GameState, PlayerId};

/// A static evaluation function scoring a non-terminal state from one player's
/// perspective. Must be total over non-terminal states, side-effect free, and
/// sign-symmetric: higher is better for `player`.
pub trait Heuristic<S: GameState> {
    fn score(&self, state: &S, player: PlayerId) -> f64;
}

/// Mobility differential: own liberties minus opponent liberties.
///
/// The classic Isolation heuristic; positive when `player` has more room to
/// move than the opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct MobilityEval;

impl MobilityEval {
    pub fn new() -> Self {
        MobilityEval
    }
}

impl<S: GameState> Heuristic<S> for MobilityEval {
    fn score(&self, state: &S, player: PlayerId) -> f64 {
        state.liberties(player) as f64 - state.liberties(opponent(player)) as f64
    }
}
