//! Shared JSON fixtures for workspace tests.
//!
//! Fixtures live under `fixtures/` at the workspace root and are indexed by
//! `fixtures/manifest.json`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    /// Scroll scenarios: scenario name -> path relative to the fixtures root.
    scenarios: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_fixture(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path).with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn parse_fixture<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_fixture(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

pub mod scenarios {
    use super::*;

    fn entry(name: &str) -> Result<&'static str> {
        MANIFEST
            .scenarios
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| anyhow!("unknown scroll scenario '{name}'"))
    }

    pub fn keys() -> Vec<String> {
        MANIFEST.scenarios.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        read_fixture(entry(name)?)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        parse_fixture(entry(name)?)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Ok(resolve_path(entry(name)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_entries_exist_on_disk() {
        for name in scenarios::keys() {
            let path = scenarios::path(&name).unwrap();
            assert!(path.is_file(), "missing fixture {}", path.display());
            let value: serde_json::Value = scenarios::load(&name).unwrap();
            assert!(value.get("frames").is_some(), "{name} has no frames");
        }
    }

    #[test]
    fn unknown_scenario_is_an_error() {
        let err = scenarios::json("does-not-exist").unwrap_err();
        assert!(err.to_string().contains("does-not-exist"));
    }
}
