//! Core configuration for vizij-scroll-core.

use serde::{Deserialize, Serialize};

use crate::position::StartPosition;

/// Watcher configuration. Every field has a default, so hosts may pass a
/// partial object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Trigger line for registrations that do not name one.
    pub default_position: StartPosition,
    /// Reject a registration whose id is already present instead of adding a
    /// shadow entry that only becomes revocable after the first one is gone.
    pub unique_ids: bool,
    /// Delay before the deferred tick that follows a `pageshow` event.
    pub pageshow_delay_ms: u32,
    /// Whether adapters also tick on viewport resize.
    pub listen_resize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_position: StartPosition::Top,
            unique_ids: false,
            pageshow_delay_ms: 0,
            listen_resize: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: Config =
            serde_json::from_str(r#"{ "default_position": "middle", "unique_ids": true }"#)
                .unwrap();
        assert_eq!(cfg.default_position, StartPosition::Middle);
        assert!(cfg.unique_ids);
        assert_eq!(cfg.pageshow_delay_ms, 0);
        assert!(cfg.listen_resize);
    }
}
