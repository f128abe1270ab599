//! Host collaborators and watch targets.
//!
//! The core never reads the DOM. Adapters implement [`ScrollHost`] to answer
//! three questions per tick: which element an id names, where that element is
//! relative to the viewport, and how tall the viewport is.

use serde::{Deserialize, Serialize};

/// Element box relative to the current viewport top.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub height: f64,
    /// Offset of the element's top edge from the viewport top (negative once scrolled past).
    pub top: f64,
}

impl Geometry {
    pub fn new(top: f64, height: f64) -> Self {
        Self { height, top }
    }
}

/// What a watch entry observes: an element handle, or an id resolved on every tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target<H> {
    Direct(H),
    /// Deferred lookup; the element may not exist yet when registered.
    ById(String),
}

impl<H> Target<H> {
    pub fn by_id(id: impl Into<String>) -> Self {
        Target::ById(id.into())
    }

    /// The element id for deferred targets.
    pub fn element_id(&self) -> Option<&str> {
        match self {
            Target::ById(id) => Some(id),
            Target::Direct(_) => None,
        }
    }
}

/// Geometry and lookup capabilities provided by the host environment.
/// Adapters (WASM/tests) implement this and pass it into `ScrollWatcher::tick()`.
pub trait ScrollHost {
    type Handle;

    /// Resolve an element id; `None` means "not rendered yet".
    fn resolve(&mut self, id: &str) -> Option<Self::Handle>;

    fn geometry(&mut self, handle: &Self::Handle) -> Geometry;

    fn viewport_height(&mut self) -> f64;
}
