//! Any-time recommendation channel between a search engine and its driver.
//!
//! The engines have no internal deadline. Instead they publish every improved
//! move recommendation through a [`RecommendationSink`]; the external driver
//! holds the matching [`RecommendationDrain`], enforces its wall-clock budget,
//! and reads the last value published before the cutoff. Dropping the drain
//! disconnects the channel, which is the cooperative cancellation signal: the
//! next `publish` returns `false` and the engine unwinds.
//!
//! Every published value must be a complete, legal, immediately usable
//! decision on its own, since the cutoff can land between any two publishes.

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Create a connected sink/drain pair.
pub fn recommendation_channel<A>() -> (RecommendationSink<A>, RecommendationDrain<A>) {
    let (sender, receiver) = unbounded();
    (
        RecommendationSink { sender },
        RecommendationDrain { receiver },
    )
}

/// Engine-side handle: publish successively better recommendations.
#[derive(Debug)]
pub struct RecommendationSink<A> {
    sender: Sender<A>,
}

impl<A> Clone for RecommendationSink<A> {
    fn clone(&self) -> Self {
        RecommendationSink {
            sender: self.sender.clone(),
        }
    }
}

impl<A> RecommendationSink<A> {
    /// Publish a recommendation, superseding any earlier one for this turn.
    /// Returns `false` once the drain has been dropped (driver deadline fired);
    /// the engine should stop searching at that point.
    pub fn publish(&self, action: A) -> bool {
        self.sender.send(action).is_ok()
    }
}

/// Driver-side handle: read the best recommendation published so far.
#[derive(Debug)]
pub struct RecommendationDrain<A> {
    receiver: Receiver<A>,
}

impl<A> RecommendationDrain<A> {
    /// Drain everything published so far and keep the last value, which
    /// supersedes all earlier ones.
    pub fn latest(&self) -> Option<A> {
        self.receiver.try_iter().last()
    }

    /// Drain everything published so far, in publication order. Mostly useful
    /// for inspecting the iterative-deepening stream in tests.
    pub fn all(&self) -> Vec<A> {
        self.receiver.try_iter().collect()
    }
}
