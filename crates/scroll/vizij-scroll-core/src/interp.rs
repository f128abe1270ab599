//! Interpolation presets and helpers:
//! - linear / quadratic / root / ease curves over [0, 1]
//! - custom caller-supplied curves
//! - lerp for mapping a factor onto a value range

use std::f64::consts::PI;
use std::fmt;
use std::rc::Rc;

use crate::error::ActionError;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, x: f64) -> f64 {
    a + (b - a) * x
}

#[inline]
pub fn linear(x: f64) -> f64 {
    x
}

#[inline]
pub fn quadratic(x: f64) -> f64 {
    x * x
}

#[inline]
pub fn root(x: f64) -> f64 {
    x.sqrt()
}

/// Cosine ease-in-out.
#[inline]
pub fn ease(x: f64) -> f64 {
    -0.5 * (x * PI).cos() + 0.5
}

/// Curve applied to the raw factor before it reaches an action.
#[derive(Clone)]
pub enum Interpolation {
    Linear,
    Quadratic,
    Root,
    Ease,
    /// Caller curve. An `Err` is reported like a failed action.
    Custom(Rc<dyn Fn(f64) -> Result<f64, ActionError>>),
}

impl Interpolation {
    pub fn custom(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Interpolation::Custom(Rc::new(move |x| Ok(f(x))))
    }

    /// A custom curve that can fail, e.g. one calling into script.
    pub fn fallible(f: impl Fn(f64) -> Result<f64, ActionError> + 'static) -> Self {
        Interpolation::Custom(Rc::new(f))
    }

    /// Shape `x`. Presets never fail.
    #[inline]
    pub fn apply(&self, x: f64) -> Result<f64, ActionError> {
        Ok(match self {
            Interpolation::Linear => linear(x),
            Interpolation::Quadratic => quadratic(x),
            Interpolation::Root => root(x),
            Interpolation::Ease => ease(x),
            Interpolation::Custom(f) => return f(x),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Interpolation::Linear => "linear",
            Interpolation::Quadratic => "quadratic",
            Interpolation::Root => "root",
            Interpolation::Ease => "ease",
            Interpolation::Custom(_) => "custom",
        }
    }

    /// Look up a preset by name. Custom curves have no name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "linear" => Some(Interpolation::Linear),
            "quadratic" => Some(Interpolation::Quadratic),
            "root" => Some(Interpolation::Root),
            "ease" => Some(Interpolation::Ease),
            _ => None,
        }
    }
}

impl fmt::Debug for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
