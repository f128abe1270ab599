//! ScrollWatcher: registry ownership and the public API.
//!
//! Methods:
//! - new, register, revoke, tick (evaluate every entry against a host)
//! - set_failure_hook, entries, len, clear

use std::fmt;

use crate::action::{Action, ScrollAction};
use crate::config::Config;
use crate::error::{Result, ScrollError};
use crate::evaluator::run_tick;
use crate::host::{ScrollHost, Target};
use crate::registry::{AnimateOptions, Registry, Selector, WatchEntry};
use crate::report::{ActionFailure, TickReport};

type FailureHook = Box<dyn FnMut(&ActionFailure)>;

fn log_failure(failure: &ActionFailure) {
    log::error!(
        "scroll action #{} ({}) failed at factor {}: {}",
        failure.index,
        failure.id.as_deref().unwrap_or("anonymous"),
        failure.factor,
        failure.error
    );
}

/// Owns the watch registry. `H` is the host's element handle, `A` the action type.
pub struct ScrollWatcher<H, A = Action> {
    cfg: Config,
    registry: Registry<H, A>,
    on_failure: FailureHook,
    ticks: u64,
}

impl<H: PartialEq, A: ScrollAction + PartialEq> ScrollWatcher<H, A> {
    /// Create a watcher with the given config and an empty registry.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            registry: Registry::new(),
            on_failure: Box::new(log_failure),
            ticks: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Append a new entry. Its state stays unset until the next tick evaluates it.
    pub fn register(&mut self, target: Target<H>, action: A, options: AnimateOptions) -> Result<()> {
        if let Some(id) = options.id.as_deref() {
            if self.cfg.unique_ids && self.registry.contains_id(id) {
                return Err(ScrollError::DuplicateId { id: id.to_string() });
            }
        }
        let position = options
            .start_position
            .unwrap_or(self.cfg.default_position);
        log::debug!(
            "register scroll entry {:?} (target id {:?}, {:?}, interpolation {:?})",
            options.id,
            target.element_id(),
            position,
            options.interpolation
        );
        self.registry.push(WatchEntry::new(
            target,
            action,
            position,
            options.interpolation,
            options.id,
        ));
        Ok(())
    }

    /// Remove the first entry matching `selector`.
    pub fn revoke(&mut self, selector: &Selector<H, A>) -> Result<()> {
        let removed = self.registry.remove(selector)?;
        log::debug!("revoked scroll entry {:?}", removed.id());
        Ok(())
    }

    /// Evaluate every entry against the host's current geometry.
    pub fn tick<S>(&mut self, host: &mut S) -> TickReport
    where
        S: ScrollHost<Handle = H> + ?Sized,
    {
        self.ticks = self.ticks.wrapping_add(1);
        run_tick(&mut self.registry, host, &mut *self.on_failure)
    }

    /// Replace the default failure hook (which logs at `error` level).
    pub fn set_failure_hook(&mut self, hook: impl FnMut(&ActionFailure) + 'static) {
        self.on_failure = Box::new(hook);
    }

    pub fn entries(&self) -> impl Iterator<Item = &WatchEntry<H, A>> {
        self.registry.iter()
    }

    /// Find the first entry registered under `id`.
    pub fn entry(&self, id: &str) -> Option<&WatchEntry<H, A>> {
        self.registry.iter().find(|e| e.id() == Some(id))
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn clear(&mut self) {
        self.registry.clear();
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }
}

impl<H: PartialEq, A: ScrollAction + PartialEq> Default for ScrollWatcher<H, A> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<H: fmt::Debug, A: fmt::Debug> fmt::Debug for ScrollWatcher<H, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollWatcher")
            .field("cfg", &self.cfg)
            .field("registry", &self.registry)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}
