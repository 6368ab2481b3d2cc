//! Configuration loading and parsing.
//!
//! An optional TOML file named on the command line (`--config <path>`)
//! tunes horizontal scrolling:
//!
//! ```toml
//! [scroll]
//! horizontal = "half-width"   # or "fixed"
//! horizontal_step = 29        # columns, used when horizontal = "fixed"
//! ```
//!
//! There is no discovery of a default location and the file is never
//! written. Missing sections and fields take their defaults; unknown fields
//! are ignored. A file that cannot be read or parsed is reported under the
//! `config` target and the defaults are used, so configuration never stops
//! the pager from starting.

use anyhow::{Context, Result};
use core_model::HScrollPolicy;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};
use tracing::{info, warn};

/// Step used by `horizontal = "fixed"` when `horizontal_step` is absent.
pub const DEFAULT_HORIZONTAL_STEP: u16 = 29;

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum HorizontalMode {
    #[default]
    HalfWidth,
    Fixed,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ScrollConfig {
    #[serde(default)]
    pub horizontal: HorizontalMode,
    #[serde(default = "ScrollConfig::default_horizontal_step")]
    pub horizontal_step: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            horizontal: HorizontalMode::default(),
            horizontal_step: Self::default_horizontal_step(),
        }
    }
}

impl ScrollConfig {
    const fn default_horizontal_step() -> u16 {
        DEFAULT_HORIZONTAL_STEP
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("parse configuration")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub source: Option<PathBuf>, // file the settings came from, if any
    pub file: ConfigFile,        // parsed (or default) data
}

impl Config {
    /// Horizontal scroll behavior for the viewport.
    pub fn hscroll_policy(&self) -> HScrollPolicy {
        match self.file.scroll.horizontal {
            HorizontalMode::HalfWidth => HScrollPolicy::HalfWidth,
            HorizontalMode::Fixed => HScrollPolicy::Fixed(self.file.scroll.horizontal_step.max(1)),
        }
    }
}

/// Load configuration from `path`, or return defaults when no path is given.
///
/// Read and parse failures are logged and fall back to defaults; the
/// `Result` is reserved for failures the caller must see.
pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            warn!(target: "config", path = %path.display(), error = %err, "config_unreadable");
            return Ok(Config::default());
        }
    };
    match ConfigFile::parse(&content) {
        Ok(file) => {
            log_loaded(&path, &file);
            Ok(Config {
                source: Some(path),
                file,
            })
        }
        Err(err) => {
            warn!(target: "config", path = %path.display(), error = %format!("{err:#}"), "config_invalid");
            Ok(Config::default())
        }
    }
}

fn log_loaded(path: &Path, file: &ConfigFile) {
    info!(
        target: "config",
        path = %path.display(),
        horizontal = ?file.scroll.horizontal,
        horizontal_step = file.scroll.horizontal_step,
        "config_loaded"
    );
}
