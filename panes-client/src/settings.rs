//! User settings, read from `settings.json` in the platform config directory.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use panes_core::{navigator::DEFAULT_TRANSITION_STEP, responsive::Breakpoints};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub fullscreen: bool,
    pub vsync: bool,
    /// Slide progress added per frame while screens change.
    pub transition_step: f32,
    pub log_level: String,
    /// Overrides the built-in breakpoint table of the responsive demo.
    pub breakpoints: Option<Breakpoints>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fullscreen: false,
            vsync: true,
            transition_step: DEFAULT_TRANSITION_STEP,
            log_level: "info".to_string(),
            breakpoints: None,
        }
    }
}

impl Settings {
    /// `<config dir>/panes/settings.json`, if the platform has a config directory.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("panes").join("settings.json"))
    }

    /// Loads the settings file. A missing file gives the defaults.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("could not read {}: {}", path.display(), e)),
        };
        serde_json::from_str(&contents).map_err(|e| format!("invalid {}: {}", path.display(), e))
    }

    /// The configured log level, `info` when it does not name one.
    pub fn log_level(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or(log::LevelFilter::Info)
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.breakpoints.clone().unwrap_or_default()
    }
}
