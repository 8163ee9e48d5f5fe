//! Search logger for MCTS.
//!
//! Narrates search progress for debugging. Injectable through the config so
//! production searches stay silent by default; tests can use the buffer sink
//! to assert on what was logged.

use std::fmt::Debug;
use std::io::{self, Write};
use std::sync::Mutex;

/// Verbosity level for the search logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    Silent = 0,
    /// Re-rooting and final results only.
    Minimal = 1,
    /// Per-commit recommendations.
    Normal = 2,
    /// Full per-iteration trace.
    Verbose = 3,
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Normal
    }
}

/// Output destination for log messages.
#[derive(Debug)]
pub enum LogSink {
    /// Write to stdout.
    Console,
    /// Accumulate in a string buffer (for testing).
    Buffer(Mutex<String>),
}

impl LogSink {
    pub fn writeln(&self, msg: &str) {
        match self {
            LogSink::Console => {
                println!("{}", msg);
                io::stdout().flush().ok();
            }
            LogSink::Buffer(buf) => {
                if let Ok(mut b) = buf.lock() {
                    b.push_str(msg);
                    b.push('\n');
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct SearchLogger {
    pub verbosity: Verbosity,
    sink: LogSink,
}

impl SearchLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        SearchLogger {
            verbosity,
            sink: LogSink::Console,
        }
    }

    /// Logger that accumulates into an in-memory buffer.
    pub fn with_buffer(verbosity: Verbosity) -> Self {
        SearchLogger {
            verbosity,
            sink: LogSink::Buffer(Mutex::new(String::new())),
        }
    }

    /// Contents of the buffer sink, if that is what this logger writes to.
    pub fn buffer_contents(&self) -> Option<String> {
        match &self.sink {
            LogSink::Buffer(buf) => buf.lock().ok().map(|b| b.clone()),
            LogSink::Console => None,
        }
    }

    fn log(&self, level: Verbosity, msg: &str) {
        if self.verbosity >= level {
            self.sink.writeln(msg);
        }
    }

    pub fn log_reused_root(&self, reused_visits: u32) {
        self.log(
            Verbosity::Minimal,
            &format!("reusing subtree from previous turn ({} visits)", reused_visits),
        );
    }

    pub fn log_fresh_root(&self) {
        self.log(Verbosity::Minimal, "no matching subtree, starting fresh root");
    }

    pub fn log_iteration(&self, iteration: u32, root_visits: u32) {
        self.log(
            Verbosity::Verbose,
            &format!("iteration {} complete, root visits {}", iteration, root_visits),
        );
    }

    pub fn log_commit<A: Debug>(&self, iteration: u32, action: &A) {
        self.log(
            Verbosity::Normal,
            &format!("iteration {} recommends {:?}", iteration, action),
        );
    }

    pub fn log_search_complete<A: Debug>(&self, best: Option<&A>, iterations: u32, expanded: u32) {
        self.log(
            Verbosity::Minimal,
            &format!(
                "search complete: best {:?} after {} iterations, {} nodes expanded",
                best, iterations, expanded
            ),
        );
    }
}
