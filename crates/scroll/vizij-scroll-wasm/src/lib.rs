//! wasm-bindgen surface for scroll-driven actions.
//!
//! ```js
//! const trigger = new ScrollTrigger();
//! trigger.animate("hero", (f) => hero.style.opacity = f, { startPosition: StartPosition.Middle });
//! trigger.attach(); // scroll / resize / pageshow
//! ```

mod dom;
mod listeners;
mod parse;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Function;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use vizij_scroll_core::{
    interp, ActionError, ActionFailure, Config, ScrollAction, ScrollError, ScrollWatcher,
    TickReport,
};

pub use dom::DomHost;

use listeners::Listeners;

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// A JS callback. Equality is JS identity, so `revoke({ target, action })`
/// must pass the very function given to `animate`.
#[derive(Clone, Debug, PartialEq)]
pub struct JsAction {
    f: Function,
}

impl JsAction {
    pub fn new(f: Function) -> Self {
        Self { f }
    }
}

impl ScrollAction for JsAction {
    fn invoke(&mut self, factor: f64) -> Result<(), ActionError> {
        self.f
            .call1(&JsValue::UNDEFINED, &JsValue::from_f64(factor))
            .map(|_| ())
            .map_err(|err| ActionError::new(describe_js_error(&err)))
    }
}

pub(crate) fn describe_js_error(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.to_string());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// Map a core error onto a named JS `Error` (`NotFoundError`, ...).
fn to_js_error(err: ScrollError) -> JsValue {
    let name = match err.category() {
        "not_found" => "NotFoundError",
        "invalid_argument" => "InvalidArgumentError",
        "duplicate_id" => "DuplicateIdError",
        _ => "Error",
    };
    let e = js_sys::Error::new(&err.to_string());
    e.set_name(name);
    e.into()
}

fn failure_error(failure: &ActionFailure) -> js_sys::Error {
    let e = js_sys::Error::new(&format!(
        "scroll action #{} ({}) failed: {}",
        failure.index,
        failure.id.as_deref().unwrap_or("anonymous"),
        failure.error
    ));
    e.set_name("ActionError");
    e
}

/// Rethrow on the next event-loop turn so the failure reaches `window.onerror`
/// without interrupting the current tick.
fn rethrow_later(e: js_sys::Error, failure: &ActionFailure) {
    let Some(window) = web_sys::window() else {
        web_sys::console::error_1(&e);
        return;
    };
    let throw = Closure::once_into_js::<_, _, ()>(move || {
        wasm_bindgen::throw_val(e.into());
    });
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(throw.unchecked_ref(), 0)
        .is_err()
    {
        web_sys::console::error_1(&JsValue::from_str(&failure.error.message));
    }
}

/// Hand a failure to the JS handler if one is set, else rethrow it later.
fn report_failure(handler: &RefCell<Option<Function>>, failure: &ActionFailure) {
    let e = failure_error(failure);
    let Some(f) = handler.borrow().clone() else {
        rethrow_later(e, failure);
        return;
    };
    if let Err(err) = f.call1(&JsValue::UNDEFINED, &e) {
        log::warn!("failure handler threw: {}", describe_js_error(&err));
        rethrow_later(e, failure);
    }
}

pub(crate) type Watcher = ScrollWatcher<Element, JsAction>;

/// Watcher plus the DOM host it ticks against, shared with event listeners.
pub(crate) struct Shared {
    pub(crate) watcher: Watcher,
    pub(crate) host: DomHost,
}

pub(crate) type SharedRef = Rc<RefCell<Shared>>;

/// Run one tick unless a tick is already on the stack (an action re-entering).
pub(crate) fn run_tick(shared: &SharedRef) -> Option<TickReport> {
    let mut guard = shared.try_borrow_mut().ok()?;
    let Shared { watcher, host } = &mut *guard;
    Some(watcher.tick(host))
}

fn busy() -> JsValue {
    let e = js_sys::Error::new("ScrollTrigger is busy: called from inside an action");
    e.set_name("InvalidStateError");
    e.into()
}

#[wasm_bindgen]
pub struct ScrollTrigger {
    shared: SharedRef,
    listeners: Option<Listeners>,
    on_failure: Rc<RefCell<Option<Function>>>,
    // Readable while a tick holds `shared`.
    len: Cell<u32>,
}

#[wasm_bindgen]
impl ScrollTrigger {
    /// Create a trigger. Pass a config object or undefined/null for defaults.
    /// Example:
    ///   new ScrollTrigger({ default_position: "middle", unique_ids: true })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ScrollTrigger, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        let host = DomHost::new().map_err(|e| JsError::new(&e))?;

        let on_failure: Rc<RefCell<Option<Function>>> = Rc::new(RefCell::new(None));
        let handler = Rc::clone(&on_failure);
        let mut watcher = Watcher::new(cfg);
        watcher.set_failure_hook(move |failure| report_failure(&handler, failure));
        Ok(ScrollTrigger {
            shared: Rc::new(RefCell::new(Shared { watcher, host })),
            listeners: None,
            on_failure,
            len: Cell::new(0),
        })
    }

    /// Watch `target` (an Element or an element id) and call `action(factor)`.
    /// `options`: `{ startPosition?, interpolation?, id? }`.
    #[wasm_bindgen]
    pub fn animate(
        &self,
        target: JsValue,
        action: Function,
        options: JsValue,
    ) -> Result<(), JsValue> {
        let target = parse::parse_target(target)?;
        let options = parse::parse_options(&options)?;
        let mut shared = self.shared.try_borrow_mut().map_err(|_| busy())?;
        shared
            .watcher
            .register(target, JsAction::new(action), options)
            .map_err(to_js_error)?;
        self.len.set(shared.watcher.len() as u32);
        Ok(())
    }

    /// Stop watching: `{ id }` or `{ target, action }`.
    #[wasm_bindgen]
    pub fn revoke(&self, selector: JsValue) -> Result<(), JsValue> {
        let selector = parse::parse_selector(&selector)?;
        let mut shared = self.shared.try_borrow_mut().map_err(|_| busy())?;
        shared.watcher.revoke(&selector).map_err(to_js_error)?;
        self.len.set(shared.watcher.len() as u32);
        Ok(())
    }

    /// Evaluate every entry now. Returns the tick report as a JS object.
    #[wasm_bindgen]
    pub fn tick(&self) -> Result<JsValue, JsValue> {
        let report = run_tick(&self.shared).ok_or_else(busy)?;
        swb::to_value(&report).map_err(|e| JsError::new(&format!("report error: {e}")).into())
    }

    /// Subscribe to window scroll/resize/pageshow and run an initial tick.
    #[wasm_bindgen]
    pub fn attach(&mut self) -> Result<(), JsValue> {
        if self.listeners.is_some() {
            return Ok(());
        }
        let listeners = Listeners::attach(&self.shared)?;
        self.listeners = Some(listeners);
        log::debug!("scroll trigger attached");
        run_tick(&self.shared);
        Ok(())
    }

    /// Receive action failures as `ActionError` objects instead of having them
    /// rethrown to `window.onerror`. Pass null to restore the default.
    #[wasm_bindgen(js_name = setFailureHandler)]
    pub fn set_failure_handler(&self, handler: JsValue) -> Result<(), JsValue> {
        let handler = if jsvalue_is_undefined_or_null(&handler) {
            None
        } else {
            Some(
                handler
                    .dyn_into::<Function>()
                    .map_err(|_| parse::invalid("failure handler must be a function"))?,
            )
        };
        *self.on_failure.borrow_mut() = handler;
        Ok(())
    }

    /// Remove the window listeners. Registered entries are kept.
    #[wasm_bindgen]
    pub fn detach(&mut self) {
        if self.listeners.take().is_some() {
            log::debug!("scroll trigger detached");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.listeners.is_some()
    }

    /// Number of registered entries, also while a tick is running.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 {
        self.len.get()
    }
}

/// Viewport line an element must cross to start animating.
#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartPosition {
    Top = 0,
    Middle = 1,
    Bottom = 2,
}

impl From<StartPosition> for vizij_scroll_core::StartPosition {
    fn from(p: StartPosition) -> Self {
        match p {
            StartPosition::Top => Self::Top,
            StartPosition::Middle => Self::Middle,
            StartPosition::Bottom => Self::Bottom,
        }
    }
}

/// Interpolation presets.
#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Interpolation {
    Linear = 0,
    Quadratic = 1,
    Root = 2,
    Ease = 3,
}

impl From<Interpolation> for vizij_scroll_core::Interpolation {
    fn from(p: Interpolation) -> Self {
        match p {
            Interpolation::Linear => Self::Linear,
            Interpolation::Quadratic => Self::Quadratic,
            Interpolation::Root => Self::Root,
            Interpolation::Ease => Self::Ease,
        }
    }
}

/// Apply a preset curve to `x`.
#[wasm_bindgen]
pub fn interpolate(preset: Interpolation, x: f64) -> f64 {
    match preset {
        Interpolation::Linear => interp::linear(x),
        Interpolation::Quadratic => interp::quadratic(x),
        Interpolation::Root => interp::root(x),
        Interpolation::Ease => interp::ease(x),
    }
}

/// `a + (b - a) * x`
#[wasm_bindgen]
pub fn lerp(a: f64, b: f64, x: f64) -> f64 {
    interp::lerp(a, b, x)
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen(js_name = abiVersion)]
pub fn abi_version() -> u32 {
    1
}
