//! Window event subscriptions that drive ticks.

use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::{run_tick, SharedRef};

type Callback = Closure<dyn FnMut()>;

/// Live `scroll` / `resize` / `pageshow` listeners; removed on drop.
pub(crate) struct Listeners {
    window: Window,
    bound: Vec<(&'static str, Callback)>,
}

impl Listeners {
    pub(crate) fn attach(shared: &SharedRef) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let (listen_resize, delay_ms) = {
            let s = shared
                .try_borrow()
                .map_err(|_| JsValue::from_str("ScrollTrigger is busy"))?;
            let cfg = s.watcher.config();
            (cfg.listen_resize, cfg.pageshow_delay_ms)
        };

        let mut listeners = Listeners {
            window,
            bound: Vec::with_capacity(3),
        };
        listeners.bind("scroll", immediate(shared))?;
        if listen_resize {
            listeners.bind("resize", immediate(shared))?;
        }
        // Restored pages report stale layout until the event queue turns over.
        listeners.bind("pageshow", deferred(shared, delay_ms))?;
        Ok(listeners)
    }

    fn bind(&mut self, event: &'static str, cb: Callback) -> Result<(), JsValue> {
        self.window
            .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
        self.bound.push((event, cb));
        Ok(())
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for (event, cb) in self.bound.drain(..) {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
        }
    }
}

fn immediate(shared: &SharedRef) -> Callback {
    let shared = SharedRef::clone(shared);
    Closure::new(move || {
        run_tick(&shared);
    })
}

fn deferred(shared: &SharedRef, delay_ms: u32) -> Callback {
    let shared = SharedRef::clone(shared);
    Closure::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let shared = SharedRef::clone(&shared);
        let later = Closure::once_into_js(move || {
            run_tick(&shared);
        });
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(later.unchecked_ref(), timeout)
            .is_err()
        {
            log::warn!("pageshow: could not schedule deferred tick");
        }
    })
}
