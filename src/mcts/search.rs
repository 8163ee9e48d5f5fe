//! Monte Carlo Tree Search main loop.
//!
//! Each iteration runs the four phases: selection (descending by UCT through
//! fully expanded nodes), expansion (popping an untried action as soon as one
//! exists on the path), rollout (random playout to a terminal state), and
//! backpropagation (alternating-perspective win counts up the parent chain).
//! After every iteration the current exploitation-only recommendation is
//! published and remembered for tree reuse on the next turn.
//!
//! The loop has no deadline of its own: it runs until the recommendation
//! drain is dropped by the driver or the configured iteration cap is hit.

use crate::game::{GameState, PlayerId};
use crate::mcts::node::MctsNode;
use crate::mcts::rollout::{roll_out, RolloutPolicy};
use crate::mcts::search_logger::SearchLogger;
use crate::recommend::RecommendationSink;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Configuration for an MCTS search.
#[derive(Clone)]
pub struct MctsConfig {
    /// Stop after this many iterations. `None` runs until the drain is
    /// dropped, which is the production mode under an external deadline.
    pub max_iterations: Option<u32>,
    /// UCT exploration constant.
    pub exploration_constant: f64,
    /// Optional search narration.
    pub logger: Option<Arc<SearchLogger>>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            max_iterations: None,
            exploration_constant: crate::mcts::EXPLORATION_CONSTANT,
            logger: None,
        }
    }
}

/// Statistics collected during an MCTS search.
#[derive(Debug, Clone, Default)]
pub struct MctsStats {
    pub iterations: u32,
    pub nodes_expanded: u32,
    /// Visits already on the root when it was recovered from the previous
    /// turn's tree; zero for a fresh root.
    pub reused_visits: u32,
    pub search_time: Duration,
}

/// Opaque handle carried by the caller between successive turns of the same
/// agent. Holds the committed child of the previous search so its subtree can
/// be re-rooted when the opponent's reply lands on an explored state.
#[derive(Debug)]
pub struct SearchContext<S: GameState> {
    committed: Option<Rc<RefCell<MctsNode<S>>>>,
}

impl<S: GameState> SearchContext<S> {
    pub fn new() -> Self {
        SearchContext { committed: None }
    }

    /// Node committed by the last search, if any. Exposed for inspection.
    pub fn committed(&self) -> Option<&Rc<RefCell<MctsNode<S>>>> {
        self.committed.as_ref()
    }
}

impl<S: GameState> Default for SearchContext<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Run MCTS from `root_state`, publishing an improving recommendation after
/// every iteration.
///
/// Returns the final recommendation, the collected statistics, and the root
/// of the search tree (for inspection; the committed subtree for next turn
/// lives in `context`). Returns `None` only when called on a terminal state,
/// which is a caller precondition violation.
pub fn mcts_search<S, P>(
    root_state: S,
    policy: &mut P,
    config: &MctsConfig,
    context: &mut SearchContext<S>,
    sink: &RecommendationSink<S::Action>,
) -> (Option<S::Action>, MctsStats, Rc<RefCell<MctsNode<S>>>)
where
    S: GameState,
    P: RolloutPolicy<S>,
{
    let start_time = Instant::now();
    let mut stats = MctsStats::default();
    let player_id = root_state.player();
    let logger = config.logger.as_deref();

    let root_node = reuse_or_create_root(root_state, player_id, context, &mut stats, logger);

    if root_node.borrow().is_terminal {
        stats.search_time = start_time.elapsed();
        return (None, stats, root_node);
    }

    let mut best_action = None;
    let mut iteration: u32 = 0;

    loop {
        if let Some(max) = config.max_iterations {
            if iteration >= max {
                break;
            }
        }

        // Selection and expansion happen in one descent.
        let leaf_node = select_leaf_node(
            root_node.clone(),
            config.exploration_constant,
            &mut stats,
        );

        let leaf_state = leaf_node.borrow().state.clone();
        let (mut reward, final_player) = roll_out(&leaf_state, player_id, policy);
        // Reward alternates perspective by ply; align it with the leaf's owner
        // before walking up.
        if final_player == player_id {
            reward ^= 1;
        }
        MctsNode::backpropagate(leaf_node, reward);

        iteration += 1;
        stats.iterations = iteration;

        let (action, committed_child) = commit_recommendation(&root_node, policy, &mut stats);
        best_action = Some(action);
        context.committed = Some(committed_child);

        if let Some(log) = logger {
            log.log_commit(iteration, &action);
            log.log_iteration(iteration, root_node.borrow().visits);
        }

        if !sink.publish(action) {
            // Drain dropped: the driver's deadline fired. The last published
            // recommendation stands.
            break;
        }
    }

    stats.search_time = start_time.elapsed();
    if let Some(log) = logger {
        log.log_search_complete(best_action.as_ref(), stats.iterations, stats.nodes_expanded);
    }

    (best_action, stats, root_node)
}

/// Recover the root from the previous turn's committed subtree when the
/// incoming state matches one of its children; otherwise start fresh. The
/// matched node's parent reference is severed so it becomes a true root and
/// the rest of the old tree is released.
fn reuse_or_create_root<S: GameState>(
    root_state: S,
    player_id: PlayerId,
    context: &mut SearchContext<S>,
    stats: &mut MctsStats,
    logger: Option<&SearchLogger>,
) -> Rc<RefCell<MctsNode<S>>> {
    if let Some(previous) = context.committed.take() {
        let matched = {
            let prev_ref = previous.borrow();
            prev_ref
                .children
                .iter()
                .find(|child| child.borrow().state == root_state)
                .cloned()
        };
        if let Some(node) = matched {
            node.borrow_mut().parent = None;
            stats.reused_visits = node.borrow().visits;
            if let Some(log) = logger {
                log.log_reused_root(stats.reused_visits);
            }
            return node;
        }
        if let Some(log) = logger {
            log.log_fresh_root();
        }
    }
    MctsNode::new_root(root_state, player_id)
}

/// Descend from the root: the first node on the UCT path that still has
/// untried actions is expanded and its new child returned; a terminal node on
/// the path is returned as-is.
fn select_leaf_node<S: GameState>(
    root: Rc<RefCell<MctsNode<S>>>,
    exploration_constant: f64,
    stats: &mut MctsStats,
) -> Rc<RefCell<MctsNode<S>>> {
    let mut current = root;
    loop {
        if current.borrow().is_terminal {
            return current;
        }
        if !current.borrow().is_fully_expanded() {
            stats.nodes_expanded += 1;
            return MctsNode::expand(&current);
        }
        let next = current.borrow().select_best_child(exploration_constant);
        current = next;
    }
}

/// Pick the move to recommend right now: the explored root child with the
/// highest pure win rate. If the root has no explored children yet, expand
/// one untried action at random and recommend that.
fn commit_recommendation<S, P>(
    root: &Rc<RefCell<MctsNode<S>>>,
    policy: &mut P,
    stats: &mut MctsStats,
) -> (S::Action, Rc<RefCell<MctsNode<S>>>)
where
    S: GameState,
    P: RolloutPolicy<S>,
{
    if let Some((action, child)) = root.borrow().best_explored() {
        return (action, child);
    }

    // Degenerate first-iteration fallback: nothing explored yet. All legal
    // actions are still untried here, so the policy's uniform choice over
    // `actions()` is a uniform choice over the untried list.
    let root_state = root.borrow().state.clone();
    let action = policy.select_action(&root_state);

    let (child_state, player_id) = {
        let mut root_ref = root.borrow_mut();
        let position = root_ref
            .untried_actions
            .iter()
            .position(|a| *a == action)
            .expect("fallback action missing from untried list");
        root_ref.untried_actions.remove(position);
        (root_ref.state.result(action), root_ref.player_id)
    };

    let child = MctsNode::new_child(Rc::downgrade(root), child_state, player_id);
    {
        let mut root_ref = root.borrow_mut();
        root_ref.children.push(child.clone());
        root_ref.actions.push(action);
    }
    stats.nodes_expanded += 1;
    (action, child)
}
