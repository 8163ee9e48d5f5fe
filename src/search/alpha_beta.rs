//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Alpha is the best value the maximizer can already guarantee, beta the best
//! the minimizer can. A branch is cut as soon as its running value proves it
//! can never be chosen by the parent. Pruning is value-preserving: the move
//! and value returned match unpruned minimax at the same depth, only the node
//! count shrinks.

use crate::eval::Heuristic;
use crate::game::{GameState, PlayerId};

/// Perform a fixed-depth alpha-beta search from the given position.
///
/// Returns `(value, best_move, nodes)`. The root never prunes: every root
/// child must be evaluated so the best move can be chosen, but `alpha` is
/// tightened after each child to speed up the subtrees. The comparison is
/// seeded from the first action so a forced losing move is still selected.
pub fn alpha_beta_search<S, H>(
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
    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;
    let mut best_value = f64::NEG_INFINITY;
    let mut best_move = None;

    for action in state.actions() {
        let value = min_value(
            &state.result(action),
            alpha,
            beta,
            depth - 1,
            heuristic,
            player,
            &mut nodes,
        );
        if best_move.is_none() || value > best_value {
            best_value = value;
            best_move = Some(action);
        }
        alpha = alpha.max(value);
    }

    (best_value, best_move, nodes)
}

fn min_value<S, H>(
    state: &S,
    alpha: f64,
    mut beta: f64,
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
        value = value.min(max_value(
            &state.result(action),
            alpha,
            beta,
            depth - 1,
            heuristic,
            player,
            nodes,
        ));
        if value <= alpha {
            return value;
        }
        beta = beta.min(value);
    }
    value
}

fn max_value<S, H>(
    state: &S,
    mut alpha: f64,
    beta: f64,
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
        value = value.max(min_value(
            &state.result(action),
            alpha,
            beta,
            depth - 1,
            heuristic,
            player,
            nodes,
        ));
        if value >= beta {
            return value;
        }
        alpha = alpha.max(value);
    }
    value
}
