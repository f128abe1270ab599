//! Ordered registry of watch entries.
//!
//! Entries keep their insertion order for their whole lifetime; removal
//! shifts survivors without reordering them. Only the evaluator writes
//! `state`.

use std::fmt;

use crate::action::ScrollAction;
use crate::error::{ActionError, Result, ScrollError};
use crate::evaluator::AnimationState;
use crate::host::Target;
use crate::interp::Interpolation;
use crate::position::StartPosition;

/// Options accepted at registration.
#[derive(Clone, Debug, Default)]
pub struct AnimateOptions {
    /// Falls back to `Config::default_position` when unset.
    pub start_position: Option<StartPosition>,
    pub interpolation: Option<Interpolation>,
    pub id: Option<String>,
}

impl AnimateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_position(mut self, position: StartPosition) -> Self {
        self.start_position = Some(position);
        self
    }

    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = Some(interpolation);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// One registered target/action binding.
pub struct WatchEntry<H, A> {
    target: Target<H>,
    action: A,
    interpolation: Option<Interpolation>,
    trigger_position: StartPosition,
    pub(crate) state: Option<AnimationState>,
    id: Option<String>,
}

impl<H, A: ScrollAction> WatchEntry<H, A> {
    pub(crate) fn new(
        target: Target<H>,
        action: A,
        trigger_position: StartPosition,
        interpolation: Option<Interpolation>,
        id: Option<String>,
    ) -> Self {
        Self {
            target,
            action,
            interpolation,
            trigger_position,
            state: None,
            id,
        }
    }

    pub fn target(&self) -> &Target<H> {
        &self.target
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn trigger_position(&self) -> StartPosition {
        self.trigger_position
    }

    pub fn interpolation(&self) -> Option<&Interpolation> {
        self.interpolation.as_ref()
    }

    /// Last boundary fired, or `None` before the first evaluated tick.
    pub fn state(&self) -> Option<AnimationState> {
        self.state
    }

    /// Shape the factor with the entry's curve and hand it to the action.
    /// A failing curve skips the action.
    pub(crate) fn invoke(&mut self, factor: f64) -> std::result::Result<f64, ActionError> {
        let shaped = match &self.interpolation {
            Some(curve) => curve.apply(factor)?,
            None => factor,
        };
        self.action.invoke(shaped).map(|_| shaped)
    }
}

impl<H: fmt::Debug, A: fmt::Debug> fmt::Debug for WatchEntry<H, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WatchEntry")
            .field("target", &self.target)
            .field("action", &self.action)
            .field("interpolation", &self.interpolation)
            .field("trigger_position", &self.trigger_position)
            .field("state", &self.state)
            .field("id", &self.id)
            .finish()
    }
}

/// Which entry a revoke call removes.
#[derive(Clone, Debug, PartialEq)]
pub enum Selector<H, A> {
    Id(String),
    /// Identity match on both the target and the action.
    Binding { target: Target<H>, action: A },
}

impl<H, A> Selector<H, A> {
    pub fn id(id: impl Into<String>) -> Self {
        Selector::Id(id.into())
    }

    pub fn binding(target: Target<H>, action: A) -> Self {
        Selector::Binding { target, action }
    }

    /// Build a selector from loosely-typed parts. An id wins when present;
    /// otherwise both the target and the action are required.
    pub fn from_parts(
        id: Option<String>,
        target: Option<Target<H>>,
        action: Option<A>,
    ) -> Result<Self> {
        match (id, target, action) {
            (Some(id), _, _) => Ok(Selector::Id(id)),
            (None, Some(target), Some(action)) => Ok(Selector::Binding { target, action }),
            _ => Err(ScrollError::invalid(
                "revoke needs an id or both a target and an action",
            )),
        }
    }

    fn describe(&self) -> String {
        match self {
            Selector::Id(id) => format!("id '{id}'"),
            Selector::Binding { target, .. } => match target.element_id() {
                Some(id) => format!("target '#{id}' with the given action"),
                None => "the given target and action".to_string(),
            },
        }
    }
}

/// Registry storage: a plain vector scanned front to back.
pub struct Registry<H, A> {
    entries: Vec<WatchEntry<H, A>>,
}

impl<H, A> Default for Registry<H, A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H: PartialEq, A: ScrollAction + PartialEq> Registry<H, A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: WatchEntry<H, A>) {
        self.entries.push(entry);
    }

    /// Index of the first entry the selector matches.
    pub fn position(&self, selector: &Selector<H, A>) -> Option<usize> {
        match selector {
            Selector::Id(id) => self.entries.iter().position(|e| e.id() == Some(id.as_str())),
            Selector::Binding { target, action } => self
                .entries
                .iter()
                .position(|e| e.target == *target && e.action == *action),
        }
    }

    /// Remove the first matching entry; the registry is untouched on `NotFound`.
    pub fn remove(&mut self, selector: &Selector<H, A>) -> Result<WatchEntry<H, A>> {
        match self.position(selector) {
            Some(idx) => Ok(self.entries.remove(idx)),
            None => Err(ScrollError::NotFound {
                selector: selector.describe(),
            }),
        }
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id() == Some(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &WatchEntry<H, A>> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut WatchEntry<H, A>> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<H: fmt::Debug, A: fmt::Debug> fmt::Debug for Registry<H, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;

    fn entry(target: Target<u32>, action: Action, id: Option<&str>) -> WatchEntry<u32, Action> {
        WatchEntry::new(
            target,
            action,
            StartPosition::Top,
            None,
            id.map(str::to_string),
        )
    }

    #[test]
    fn remove_by_id_takes_first_match_and_keeps_order() {
        let mut reg = Registry::new();
        reg.push(entry(Target::Direct(1), Action::new(|_| {}), Some("a")));
        reg.push(entry(Target::Direct(2), Action::new(|_| {}), Some("b")));
        reg.push(entry(Target::Direct(3), Action::new(|_| {}), Some("a")));
        reg.push(entry(Target::Direct(4), Action::new(|_| {}), None));

        let removed = reg.remove(&Selector::id("a")).unwrap();
        assert_eq!(removed.target(), &Target::Direct(1));

        let left: Vec<_> = reg.iter().map(|e| e.target().clone()).collect();
        assert_eq!(
            left,
            vec![Target::Direct(2), Target::Direct(3), Target::Direct(4)]
        );
    }

    #[test]
    fn binding_match_requires_same_action_identity() {
        let action = Action::new(|_| {});
        let mut reg = Registry::new();
        reg.push(entry(Target::by_id("hero"), action.clone(), None));

        let other = Selector::binding(Target::by_id("hero"), Action::new(|_| {}));
        let err = reg.remove(&other).unwrap_err();
        assert_eq!(err.category(), "not_found");
        assert_eq!(reg.len(), 1);

        let wrong_target = Selector::binding(Target::by_id("footer"), action.clone());
        assert!(reg.remove(&wrong_target).is_err());

        reg.remove(&Selector::binding(Target::by_id("hero"), action))
            .unwrap();
        assert!(reg.is_empty());
    }

    #[test]
    fn from_parts_validates() {
        let err = Selector::<u32, Action>::from_parts(None, Some(Target::Direct(1)), None)
            .unwrap_err();
        assert!(matches!(err, ScrollError::InvalidArgument { .. }));

        let sel = Selector::<u32, Action>::from_parts(
            Some("x".into()),
            None,
            Some(Action::new(|_| {})),
        )
        .unwrap();
        assert!(matches!(sel, Selector::Id(ref id) if id == "x"));
    }
}
