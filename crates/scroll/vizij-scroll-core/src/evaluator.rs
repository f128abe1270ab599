//! Progress evaluator: one pass over the registry per host event.
//!
//! For each entry, in registry order:
//! 1. resolve the target (deferred ids that do not resolve are skipped untouched)
//! 2. shift the element top by the trigger line
//! 3. compute `factor = -y / height` (zero height is a binary in/out decision)
//! 4. classify against the entry's last state and fire the action if needed
//!
//! Boundaries fire once per crossing; the open interval fires on every tick.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use crate::action::ScrollAction;
use crate::error::ActionError;
use crate::host::{Geometry, ScrollHost, Target};
use crate::position::StartPosition;
use crate::registry::{Registry, WatchEntry};
use crate::report::{ActionFailure, TickReport};

/// Last region an entry was reported in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationState {
    Start,
    Between,
    End,
}

/// Outcome of classifying one factor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Transition {
    Fire { factor: f64, state: AnimationState },
    Hold,
}

/// Raw progress of an element through its trigger zone. Not clamped.
pub fn progress_factor(geometry: Geometry, position: StartPosition, viewport_height: f64) -> f64 {
    let y = geometry.top - position.offset(viewport_height);
    if geometry.height == 0.0 {
        return if y > 0.0 { 0.0 } else { 1.0 };
    }
    -y / geometry.height
}

/// Decide whether a factor fires given the entry's previous state.
///
/// NaN factors (degenerate host geometry) fall through every comparison and hold.
pub fn classify(factor: f64, state: Option<AnimationState>) -> Transition {
    if factor > 0.0 && factor < 1.0 {
        Transition::Fire {
            factor,
            state: AnimationState::Between,
        }
    } else if factor <= 0.0 && state != Some(AnimationState::Start) {
        Transition::Fire {
            factor: 0.0,
            state: AnimationState::Start,
        }
    } else if factor >= 1.0 && state != Some(AnimationState::End) {
        Transition::Fire {
            factor: 1.0,
            state: AnimationState::End,
        }
    } else {
        Transition::Hold
    }
}

/// Run one tick over every entry. Failures are handed to `on_failure` and
/// never stop later entries from being evaluated.
pub(crate) fn run_tick<H, A, S>(
    registry: &mut Registry<H, A>,
    host: &mut S,
    on_failure: &mut dyn FnMut(&ActionFailure),
) -> TickReport
where
    H: PartialEq,
    A: ScrollAction + PartialEq,
    S: ScrollHost<Handle = H> + ?Sized,
{
    let viewport_height = host.viewport_height();
    let mut report = TickReport {
        viewport_height,
        ..TickReport::default()
    };

    for (index, entry) in registry.iter_mut().enumerate() {
        let Some(geometry) = sample(entry, host) else {
            log::trace!("scroll entry {index} target not resolved, skipping");
            report.skipped += 1;
            continue;
        };
        report.evaluated += 1;

        let factor = progress_factor(geometry, entry.trigger_position(), viewport_height);
        let Transition::Fire { factor, state } = classify(factor, entry.state) else {
            continue;
        };

        report.invoked += 1;
        // State advances even when the action fails.
        entry.state = Some(state);
        if let Err(error) = invoke_isolated(entry, factor) {
            report.failures += 1;
            on_failure(&ActionFailure {
                index,
                id: entry.id().map(str::to_string),
                factor,
                error,
            });
        }
    }

    report
}

fn sample<H, A, S>(entry: &WatchEntry<H, A>, host: &mut S) -> Option<Geometry>
where
    A: ScrollAction,
    S: ScrollHost<Handle = H> + ?Sized,
{
    match entry.target() {
        Target::Direct(handle) => Some(host.geometry(handle)),
        Target::ById(id) => {
            let handle = host.resolve(id)?;
            Some(host.geometry(&handle))
        }
    }
}

fn invoke_isolated<H, A: ScrollAction>(
    entry: &mut WatchEntry<H, A>,
    factor: f64,
) -> Result<(), ActionError> {
    match panic::catch_unwind(AssertUnwindSafe(|| entry.invoke(factor))) {
        Ok(result) => result.map(|_| ()),
        Err(payload) => Err(ActionError::new(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("action panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("action panicked: {s}")
    } else {
        "action panicked".to_string()
    }
}
