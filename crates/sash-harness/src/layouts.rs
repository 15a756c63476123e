//! Named layouts for replays, with every leaf opening a named window.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use sash_layout::{LayoutConfig, LayoutManager, LayoutTree, presets};

use crate::error::{HarnessError, Result};
use crate::scripted_host::{ScriptedHost, named_window};

/// Layouts the replay tool can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    /// `main` on the left, `panel` on the right.
    #[default]
    TwoPane,
    /// `viewport` over `timeline` on the left, `properties` on the right.
    BlenderStart,
}

impl Preset {
    /// Window names in traversal order.
    #[must_use]
    pub const fn windows(self) -> &'static [&'static str] {
        match self {
            Self::TwoPane => &["main", "panel"],
            Self::BlenderStart => &["viewport", "timeline", "properties"],
        }
    }

    /// Build the tree for this preset.
    pub fn build(self) -> Result<LayoutTree<ScriptedHost>> {
        let tree = match self {
            Self::TwoPane => presets::two_pane(named_window("main"), named_window("panel"))?,
            Self::BlenderStart => presets::blender_start(
                named_window("viewport"),
                named_window("timeline"),
                named_window("properties"),
            )?,
        };
        Ok(tree)
    }

    /// Build a manager for this preset with the given tuning.
    pub fn manager(self, config: LayoutConfig) -> Result<LayoutManager<ScriptedHost>> {
        Ok(LayoutManager::with_config(self.build()?, config)?)
    }
}

/// Read a [`LayoutConfig`] from a JSON file. Missing fields take defaults.
pub fn load_config(path: &Path) -> Result<LayoutConfig> {
    let text = fs::read_to_string(path).map_err(|source| HarnessError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: LayoutConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_have_one_window_per_leaf() {
        for preset in [Preset::TwoPane, Preset::BlenderStart] {
            let tree = preset.build().unwrap();
            assert_eq!(tree.leaves().len(), preset.windows().len());
        }
    }

    #[test]
    fn invalid_config_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{ "min_ratio": 0.9, "max_ratio": 0.1 }"#).unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, HarnessError::Layout(_)));
    }

    #[test]
    fn partial_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{ "hit_padding": 4.0 }"#).unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config, LayoutConfig::default().hit_padding(4.0));
    }
}
