//! Game state adapter interface.
//!
//! The search engines never inspect board internals; everything they need is
//! behind the [`GameState`] trait. A conforming implementation represents an
//! immutable position in a deterministic, perfect-information, zero-sum
//! two-player game: every transition builds a new state, and the legal-move
//! enumeration order is stable (it drives tie-breaking and the untried-action
//! stack in MCTS).

use std::fmt::Debug;

/// Index of one of the two players (0 or 1).
pub type PlayerId = usize;

/// The other player.
#[inline]
pub fn opponent(player: PlayerId) -> PlayerId {
    1 - player
}

/// Interface the search engines consume.
///
/// Contract (not checked defensively here):
/// - `actions()` returns only legal moves for the side to move, and is empty
///   iff `terminal_test()` is true.
/// - `result(action)` is pure: the receiver is unchanged and the returned
///   state is a valid successor.
/// - `utility(player)` is only meaningful on terminal states and follows the
///   ±infinity win/loss convention (finite values for draws).
pub trait GameState: Clone + PartialEq {
    /// Opaque move token. The engines only store these and hand them back.
    type Action: Copy + Eq + Debug;

    /// All legal moves for the side to move, in stable adapter order.
    fn actions(&self) -> Vec<Self::Action>;

    /// Successor state after applying `action`.
    fn result(&self, action: Self::Action) -> Self;

    /// Whether the game is over in this state.
    fn terminal_test(&self) -> bool;

    /// Terminal payoff from `player`'s perspective: `f64::INFINITY` for a win,
    /// `f64::NEG_INFINITY` for a loss, finite for a draw.
    fn utility(&self, player: PlayerId) -> f64;

    /// The side to move in this state.
    fn player(&self) -> PlayerId;

    /// Number of plies played so far.
    fn ply_count(&self) -> u32;

    /// Static evaluation hook: count of legal destination squares reachable by
    /// `player`'s piece, regardless of whose turn it is.
    fn liberties(&self, player: PlayerId) -> usize;
}
