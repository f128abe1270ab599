//! Viewport trigger lines.

use serde::{Deserialize, Serialize};

/// Which viewport line an element's top edge must cross to start animating.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartPosition {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl StartPosition {
    /// Distance of the trigger line below the viewport top.
    #[inline]
    pub fn offset(self, viewport_height: f64) -> f64 {
        match self {
            StartPosition::Top => 0.0,
            StartPosition::Middle => viewport_height / 2.0,
            StartPosition::Bottom => viewport_height,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "top" => Some(StartPosition::Top),
            "middle" => Some(StartPosition::Middle),
            "bottom" => Some(StartPosition::Bottom),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_for_800px_viewport() {
        assert_eq!(StartPosition::Top.offset(800.0), 0.0);
        assert_eq!(StartPosition::Middle.offset(800.0), 400.0);
        assert_eq!(StartPosition::Bottom.offset(800.0), 800.0);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(StartPosition::from_name("Middle"), Some(StartPosition::Middle));
        assert_eq!(StartPosition::from_name("BOTTOM"), Some(StartPosition::Bottom));
        assert_eq!(StartPosition::from_name("left"), None);
    }
}
