//! Fixed-depth minimax search.
//!
//! Two mutually recursive value functions walk the game tree, alternating
//! roles each ply. Values are computed from the perspective of the searching
//! player, which stays fixed for the whole search regardless of whose turn it
//! is at a given node.

use crate::eval::Heuristic;
use crate::game::{GameState, PlayerId};

/// Perform a fixed-depth minimax search from the given position.
///
/// Returns `(value, best_move, nodes)`. `best_move` is `None` only when the
/// state has no legal actions (a caller precondition violation). Ties are
/// broken by the first-encountered action in the adapter's enumeration order.
///
/// `depth` must be at least 1; the root always expands one ply.
pub fn minimax_search<S, H>(
    state: &S,
    depth: u32,
    heuristic: &H,
    player: PlayerId,
) -> (f64, Option<S::Action>, u64)
where
    S: GameState,
    H: Heuristic<S>,
{
    let mut nodes: u64 = 1;
    let mut best_value = f64::NEG_INFINITY;
    let mut best_move = None;

    for action in state.actions() {
        let value = min_value(&state.result(action), depth - 1, heuristic, player, &mut nodes);
        if best_move.is_none() || value > best_value {
            best_value = value;
            best_move = Some(action);
        }
    }

    (best_value, best_move, nodes)
}

/// Minimizing player's value: the opponent picks the child worst for us.
pub(crate) fn min_value<S, H>(
    state: &S,
    depth: u32,
    heuristic: &H,
    player: PlayerId,
    nodes: &mut u64,
) -> f64
where
    S: GameState,
    H: Heuristic<S>,
{
    *nodes += 1;
    if state.terminal_test() {
        return state.utility(player);
    }
    if depth == 0 {
        return heuristic.score(state, player);
    }

    let mut value = f64::INFINITY;
    for action in state.actions() {
        value = value.min(max_value(&state.result(action), depth - 1, heuristic, player, nodes));
    }
    value
}

/// Maximizing player's value: we pick the child best for us.
pub(crate) fn max_value<S, H>(
    state: &S,
    depth: u32,
    heuristic: &H,
    player: PlayerId,
    nodes: &mut u64,
) -> f64
where
    S: GameState,
    H: Heuristic<S>,
{
    *nodes += 1;
    if state.terminal_test() {
        return state.utility(player);
    }
    if depth == 0 {
        return heuristic.score(state, player);
    }

    let mut value = f64::NEG_INFINITY;
    for action in state.actions() {
        value = value.max(min_value(&state.result(action), depth - 1, heuristic, player, nodes));
    }
    value
}
