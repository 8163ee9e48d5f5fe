//! Iterative deepening drivers.
//!
//! Re-runs a depth-bounded search at increasing depth limits, publishing each
//! depth's move through the recommendation sink before deepening. This gives
//! the any-time property: the most recently published move is always a
//! complete, legal decision, and deeper iterations strictly supersede
//! shallower ones when the driver cuts the search off.

use crate::eval::Heuristic;
use crate::game::{GameState, PlayerId};
use crate::recommend::RecommendationSink;
use crate::search::alpha_beta::alpha_beta_search;
use crate::search::minimax::minimax_search;

/// Iteratively deepened minimax up to `max_depth`.
///
/// Returns `(last_completed_depth, value, best_move, nodes)`. Stops early when
/// the sink disconnects (driver deadline) or a proven win/loss makes deeper
/// iterations pointless.
pub fn iterative_deepening_minimax<S, H>(
    state: &S,
    max_depth: u32,
    heuristic: &H,
    player: PlayerId,
    sink: &RecommendationSink<S::Action>,
    verbose: bool,
) -> (u32, f64, Option<S::Action>, u64)
where
    S: GameState,
    H: Heuristic<S>,
{
    let mut value = f64::NEG_INFINITY;
    let mut best_move = None;
    let mut nodes: u64 = 0;
    let mut last_completed_depth = 0;

    for depth in 1..=max_depth {
        let (new_value, new_best_move, new_nodes) = minimax_search(state, depth, heuristic, player);
        nodes += new_nodes;
        value = new_value;
        if new_best_move.is_some() {
            best_move = new_best_move;
        }
        last_completed_depth = depth;

        if verbose {
            println!(
                "info depth {} score {} nodes {} pv {:?}",
                depth, value, nodes, best_move
            );
        }

        if let Some(action) = best_move {
            if !sink.publish(action) {
                if verbose {
                    println!("info string search cut off after depth {}", depth);
                }
                break;
            }
        }

        if value.is_infinite() {
            if verbose {
                println!("info string forced outcome proven at depth {}", depth);
            }
            break;
        }
    }

    (last_completed_depth, value, best_move, nodes)
}

/// Iteratively deepened alpha-beta up to `max_depth`.
///
/// Same shell and return shape as [`iterative_deepening_minimax`]; only the
/// underlying fixed-depth search differs.
pub fn iterative_deepening_alpha_beta<S, H>(
    state: &S,
    max_depth: u32,
    heuristic: &H,
    player: PlayerId,
    sink: &RecommendationSink<S::Action>,
    verbose: bool,
) -> (u32, f64, Option<S::Action>, u64)
where
    S: GameState,
    H: Heuristic<S>,
{
    let mut value = f64::NEG_INFINITY;
    let mut best_move = None;
    let mut nodes: u64 = 0;
    let mut last_completed_depth = 0;

    for depth in 1..=max_depth {
        let (new_value, new_best_move, new_nodes) =
            alpha_beta_search(state, depth, heuristic, player);
        nodes += new_nodes;
        value = new_value;
        if new_best_move.is_some() {
            best_move = new_best_move;
        }
        last_completed_depth = depth;

        if verbose {
            println!(
                "info depth {} score {} nodes {} pv {:?}",
                depth, value, nodes, best_move
            );
        }

        if let Some(action) = best_move {
            if !sink.publish(action) {
                if verbose {
                    println!("info string search cut off after depth {}", depth);
                }
                break;
            }
        }

        if value.is_infinite() {
            if verbose {
                println!("info string forced outcome proven at depth {}", depth);
            }
            break;
        }
    }

    (last_completed_depth, value, best_move, nodes)
}
