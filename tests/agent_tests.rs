//! Tests for the agent layer: every agent must publish at least one legal
//! recommendation per turn.

mod common;

use common::{assert_legal, GridIsolation};
use heron::agent::{Agent, AlphaBetaAgent, MctsAgent, MinimaxAgent};
use heron::eval::MobilityEval;
use heron::game::GameState;
use heron::mcts::{MctsConfig, RandomRollout};
use heron::recommend::recommendation_channel;

#[test]
fn test_minimax_agent_publishes_legal_moves() {
    let state = GridIsolation::new();
    let mut agent = MinimaxAgent::new(3, MobilityEval::new());
    let (sink, drain) = recommendation_channel();

    agent.choose_action(&state, &sink);

    let published = drain.all();
    assert!(!published.is_empty(), "At least one recommendation required");
    for action in published {
        assert_legal(&state, action, "minimax agent");
    }
}

#[test]
fn test_minimax_agent_opening_randomization_is_legal() {
    // Fresh game (ply 0): the agent answers instantly with a random opening
    // move before deepening. All publishes must still be legal.
    let state = GridIsolation::new();
    assert!(state.ply_count() < 2);
    let mut agent = MinimaxAgent::new(2, MobilityEval::new());
    let (sink, drain) = recommendation_channel();

    agent.choose_action(&state, &sink);

    let published = drain.all();
    assert!(
        published.len() >= 3,
        "Opening move plus one per depth, got {}",
        published.len()
    );
    for action in published {
        assert_legal(&state, action, "opening randomization");
    }
}

#[test]
fn test_alpha_beta_agent_publishes_legal_moves() {
    // Mid-game position so the opening randomization is skipped.
    let state = GridIsolation::with_position(0b0000_0000_0000_0110, [0, 15], 0, 4);
    let mut agent = AlphaBetaAgent::new(4, MobilityEval::new());
    let (sink, drain) = recommendation_channel();

    agent.choose_action(&state, &sink);

    let published = drain.all();
    assert!(!published.is_empty());
    for action in published {
        assert_legal(&state, action, "alpha-beta agent");
    }
}

#[test]
fn test_mcts_agent_publishes_and_keeps_context() {
    let state = GridIsolation::new();
    let config = MctsConfig {
        max_iterations: Some(40),
        ..Default::default()
    };
    let mut agent = MctsAgent::new(config, RandomRollout::from_seed(61));
    let (sink, drain) = recommendation_channel();

    agent.choose_action(&state, &sink);

    let published = drain.all();
    assert_eq!(published.len(), 40);
    for action in &published {
        assert_legal(&state, *action, "mcts agent");
    }
    assert!(
        agent.context().committed().is_some(),
        "Context persists between turns"
    );

    // Second turn: play the recommendation and a legal opponent reply, then
    // ask again. The agent must keep working off its carried context.
    let best = *published.last().unwrap();
    let after_own = state.result(best);
    let reply = after_own.actions()[0];
    let next_state = after_own.result(reply);

    let (sink2, drain2) = recommendation_channel();
    agent.choose_action(&next_state, &sink2);
    let second = drain2.all();
    assert_eq!(second.len(), 40);
    for action in second {
        assert_legal(&next_state, action, "mcts agent second turn");
    }
}

#[test]
fn test_exact_agents_agree_at_equal_depth() {
    // The final (deepest) recommendation of both exact-search agents must
    // coincide; the random opening publishes are superseded.
    let state = GridIsolation::new();

    let mut mm = MinimaxAgent::new(4, MobilityEval::new());
    let mut ab = AlphaBetaAgent::new(4, MobilityEval::new());
    let (sink_a, drain_a) = recommendation_channel();
    let (sink_b, drain_b) = recommendation_channel();

    mm.choose_action(&state, &sink_a);
    ab.choose_action(&state, &sink_b);

    let mm_last = drain_a.latest().unwrap();
    let ab_last = drain_b.latest().unwrap();
    assert_eq!(
        mm_last, ab_last,
        "Equal-depth minimax and alpha-beta settle on the same move"
    );
}
