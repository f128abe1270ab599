//! Per-tick summaries handed back to hosts.

use serde::{Deserialize, Serialize};

use crate::error::ActionError;

/// Counters for one evaluation pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Viewport height sampled once at the start of the tick.
    pub viewport_height: f64,
    /// Entries whose geometry was sampled.
    pub evaluated: usize,
    /// Deferred targets that did not resolve this tick.
    pub skipped: usize,
    /// Action calls made, including ones that failed.
    pub invoked: usize,
    pub failures: usize,
}

/// An action that returned an error or panicked.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionFailure {
    /// Position of the entry in registry order at the time of the tick.
    pub index: usize,
    pub id: Option<String>,
    /// Factor the action was called with, before interpolation.
    pub factor: f64,
    pub error: ActionError,
}
