//! Defines the Node structure for the MCTS tree.

use crate::game::{GameState, PlayerId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A node in the Monte Carlo search tree.
///
/// Nodes own their children through `Rc`; the back-reference to the parent is
/// a `Weak` so the tree never forms an ownership cycle. When a node becomes a
/// new root (tree reuse across turns) its parent reference is severed and the
/// rest of the old tree is released.
#[derive(Debug)]
pub struct MctsNode<S: GameState> {
    /// The position at this node.
    pub state: S,

    /// Perspective player for this tree's win statistics, fixed at creation
    /// (the searching agent's id).
    pub player_id: PlayerId,

    /// Number of times this node has been visited by backpropagation.
    pub visits: u32,
    /// Accumulated rollout wins from `player_id`'s perspective, alternated by
    /// ply during backpropagation.
    pub wins: u32,

    /// Whether `state` is game-over (checked once at creation).
    pub is_terminal: bool,

    /// Legal actions not yet expanded into children. Consumed from the back,
    /// so the last action in the adapter's enumeration order is tried first.
    pub untried_actions: Vec<S::Action>,

    /// Explored children, parallel to `actions`.
    pub children: Vec<Rc<RefCell<MctsNode<S>>>>,
    /// Action that led to each child, parallel to `children`.
    pub actions: Vec<S::Action>,

    /// Non-owning back-reference, used only for backpropagation traversal.
    /// `None` for roots.
    pub parent: Option<Weak<RefCell<MctsNode<S>>>>,
}

impl<S: GameState> MctsNode<S> {
    /// Creates a new root node.
    pub fn new_root(state: S, player_id: PlayerId) -> Rc<RefCell<Self>> {
        let is_terminal = state.terminal_test();
        let untried_actions = state.actions();
        Rc::new(RefCell::new(Self {
            state,
            player_id,
            visits: 0,
            wins: 0,
            is_terminal,
            untried_actions,
            children: Vec::new(),
            actions: Vec::new(),
            parent: None,
        }))
    }

    /// Creates a new child node.
    pub fn new_child(
        parent: Weak<RefCell<MctsNode<S>>>,
        state: S,
        player_id: PlayerId,
    ) -> Rc<RefCell<Self>> {
        let is_terminal = state.terminal_test();
        let untried_actions = state.actions();
        Rc::new(RefCell::new(Self {
            state,
            player_id,
            visits: 0,
            wins: 0,
            is_terminal,
            untried_actions,
            children: Vec::new(),
            actions: Vec::new(),
            parent: Some(parent),
        }))
    }

    /// A node is fully expanded once every legal action has a child.
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_actions.is_empty()
    }

    /// Fraction of visits that were wins for `player_id`'s alternating
    /// perspective at this node. Zero before the first visit.
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins as f64 / self.visits as f64
        }
    }

    /// UCT score of this node as a child of a parent with `parent_visits`.
    ///
    /// `win_rate + c * sqrt(2 * ln(parent_visits) / visits)`. A never-visited
    /// node scores 0.0 rather than infinity, which also guards the division;
    /// the `ln` term is skipped while the parent has no visits. Note that the
    /// 0.0 score lets a poorly-performing visited sibling outrank an
    /// expanded-but-unvisited child.
    pub fn uct_value(&self, parent_visits: u32, exploration_constant: f64) -> f64 {
        if self.visits == 0 {
            return 0.0;
        }
        let mut uct = self.wins as f64 / self.visits as f64;
        if parent_visits > 0 {
            uct += exploration_constant
                * (2.0 * (parent_visits as f64).ln() / self.visits as f64).sqrt();
        }
        uct
    }

    /// Pop the next untried action (last in adapter order), build its child,
    /// and attach it. Returns the new child.
    pub fn expand(node: &Rc<RefCell<MctsNode<S>>>) -> Rc<RefCell<MctsNode<S>>> {
        let (action, child_state, player_id) = {
            let mut node_ref = node.borrow_mut();
            let action = node_ref
                .untried_actions
                .pop()
                .expect("expand called on fully expanded node");
            let child_state = node_ref.state.result(action);
            (action, child_state, node_ref.player_id)
        };

        let child = MctsNode::new_child(Rc::downgrade(node), child_state, player_id);
        let mut node_ref = node.borrow_mut();
        node_ref.children.push(child.clone());
        node_ref.actions.push(action);
        child
    }

    /// Select the child maximizing UCT. First-encountered child wins ties.
    pub fn select_best_child(&self, exploration_constant: f64) -> Rc<RefCell<MctsNode<S>>> {
        let parent_visits = self.visits;
        let mut best: Option<Rc<RefCell<MctsNode<S>>>> = None;
        let mut best_score = f64::NEG_INFINITY;

        for child in &self.children {
            let score = child.borrow().uct_value(parent_visits, exploration_constant);
            if best.is_none() || score > best_score {
                best_score = score;
                best = Some(child.clone());
            }
        }

        best.expect("select_best_child called on node with no children")
    }

    /// Exploitation-only recommendation: the explored child with the highest
    /// pure win rate (UCT with the exploration constant forced to 0), together
    /// with the action that reaches it. `None` when nothing is explored yet.
    pub fn best_explored(&self) -> Option<(S::Action, Rc<RefCell<MctsNode<S>>>)> {
        let mut best_index = None;
        let mut best_score = f64::NEG_INFINITY;

        for (index, child) in self.children.iter().enumerate() {
            let score = child.borrow().uct_value(self.visits, 0.0);
            if best_index.is_none() || score > best_score {
                best_score = score;
                best_index = Some(index);
            }
        }

        best_index.map(|i| (self.actions[i], self.children[i].clone()))
    }

    /// Walk from `node` to the root, adding the reward to each node's win
    /// count and flipping it every ply (a win for one side is a loss from the
    /// parent's perspective).
    pub fn backpropagate(node: Rc<RefCell<MctsNode<S>>>, reward: u32) {
        let mut reward = reward;
        let mut current_opt = Some(node);

        while let Some(current) = current_opt {
            {
                let mut node_ref = current.borrow_mut();
                node_ref.wins += reward;
                node_ref.visits += 1;
            }
            reward ^= 1;

            current_opt = {
                let node_ref = current.borrow();
                node_ref.parent.as_ref().and_then(|weak| weak.upgrade())
            };
        }
    }

    /// Map a terminal utility onto the binary reward used by the win
    /// statistics: +infinity is a win (1), anything else (loss or draw) is 0.
    pub fn convert_reward(utility: f64) -> u32 {
        if utility == f64::INFINITY {
            1
        } else {
            0
        }
    }
}
