//! Loosely-typed JS arguments -> core types.

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

use vizij_scroll_core::{
    ActionError, AnimateOptions, Interpolation, Selector, StartPosition, Target,
};

use crate::{describe_js_error, jsvalue_is_undefined_or_null, to_js_error, JsAction};
use crate::{Interpolation as Preset, StartPosition as Line};

pub(crate) fn invalid(reason: &str) -> JsValue {
    let e = js_sys::Error::new(reason);
    e.set_name("InvalidArgumentError");
    e.into()
}

/// Read `obj[key]`, mapping undefined/null to `None`.
fn field(obj: &JsValue, key: &str) -> Result<Option<JsValue>, JsValue> {
    let v = Reflect::get(obj, &JsValue::from_str(key))?;
    Ok(if jsvalue_is_undefined_or_null(&v) {
        None
    } else {
        Some(v)
    })
}

/// An `Element`, or a string id resolved on every tick.
pub(crate) fn parse_target(target: JsValue) -> Result<Target<Element>, JsValue> {
    if let Some(id) = target.as_string() {
        return Ok(Target::ById(id));
    }
    target
        .dyn_into::<Element>()
        .map(Target::Direct)
        .map_err(|_| invalid("target must be an Element or an element id"))
}

fn parse_position(v: &JsValue) -> Result<StartPosition, JsValue> {
    if let Some(name) = v.as_string() {
        return StartPosition::from_name(&name)
            .ok_or_else(|| invalid(&format!("unknown startPosition '{name}'")));
    }
    let line = match v.as_f64() {
        Some(n) if n == 0.0 => Line::Top,
        Some(n) if n == 1.0 => Line::Middle,
        Some(n) if n == 2.0 => Line::Bottom,
        _ => return Err(invalid("startPosition must be a StartPosition value")),
    };
    Ok(line.into())
}

fn parse_interpolation(v: JsValue) -> Result<Interpolation, JsValue> {
    if let Some(name) = v.as_string() {
        return Interpolation::from_name(&name)
            .ok_or_else(|| invalid(&format!("unknown interpolation '{name}'")));
    }
    if let Some(n) = v.as_f64() {
        let preset = match n {
            n if n == 0.0 => Preset::Linear,
            n if n == 1.0 => Preset::Quadratic,
            n if n == 2.0 => Preset::Root,
            n if n == 3.0 => Preset::Ease,
            _ => return Err(invalid("interpolation must be an Interpolation value")),
        };
        return Ok(preset.into());
    }
    let f = v
        .dyn_into::<Function>()
        .map_err(|_| invalid("interpolation must be a preset or a function"))?;
    Ok(Interpolation::fallible(move |x| {
        let y = f
            .call1(&JsValue::UNDEFINED, &JsValue::from_f64(x))
            .map_err(|err| ActionError::new(describe_js_error(&err)))?;
        y.as_f64()
            .ok_or_else(|| ActionError::new(format!("interpolation returned {y:?}, not a number")))
    }))
}

/// `{ startPosition?, interpolation?, id? }`, or undefined/null for defaults.
pub(crate) fn parse_options(options: &JsValue) -> Result<AnimateOptions, JsValue> {
    let mut out = AnimateOptions::new();
    if jsvalue_is_undefined_or_null(options) {
        return Ok(out);
    }
    if let Some(v) = field(options, "startPosition")? {
        out.start_position = Some(parse_position(&v)?);
    }
    if let Some(v) = field(options, "interpolation")? {
        out.interpolation = Some(parse_interpolation(v)?);
    }
    if let Some(v) = field(options, "id")? {
        out.id = Some(v.as_string().ok_or_else(|| invalid("id must be a string"))?);
    }
    Ok(out)
}

/// `{ id }` or `{ target, action }`.
pub(crate) fn parse_selector(selector: &JsValue) -> Result<Selector<Element, JsAction>, JsValue> {
    if jsvalue_is_undefined_or_null(selector) {
        return Err(invalid("revoke needs an id or both a target and an action"));
    }
    let id = match field(selector, "id")? {
        Some(v) => Some(v.as_string().ok_or_else(|| invalid("id must be a string"))?),
        None => None,
    };
    let target = field(selector, "target")?.map(parse_target).transpose()?;
    let action = match field(selector, "action")? {
        Some(v) => Some(JsAction::new(
            v.dyn_into::<Function>()
                .map_err(|_| invalid("action must be a function"))?,
        )),
        None => None,
    };
    Selector::from_parts(id, target, action).map_err(to_js_error)
}
