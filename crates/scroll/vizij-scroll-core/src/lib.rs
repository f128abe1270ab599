//! Vizij Scroll Core (host-agnostic)
//!
//! Maps element geometry to a normalized scroll progress factor and drives
//! caller actions through a Start/Between/End state machine.
//!
//! Hosts (WASM/DOM, tests) implement [`ScrollHost`] and call
//! [`ScrollWatcher::tick`] from their scroll, resize and pageshow hooks. The
//! core never touches the DOM itself.

pub mod action;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod host;
pub mod interp;
pub mod position;
pub mod registry;
pub mod report;
pub mod watcher;

// Re-exports for consumers (adapters)
pub use action::{Action, ScrollAction};
pub use config::Config;
pub use error::{ActionError, Result, ScrollError};
pub use evaluator::{classify, progress_factor, AnimationState, Transition};
pub use host::{Geometry, ScrollHost, Target};
pub use interp::{lerp, Interpolation};
pub use position::StartPosition;
pub use registry::{AnimateOptions, Registry, Selector, WatchEntry};
pub use report::{ActionFailure, TickReport};
pub use watcher::ScrollWatcher;
