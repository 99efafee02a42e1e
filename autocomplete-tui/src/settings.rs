//! Host configuration.
//!
//! Read from a JSON file: `--config <path>` when given, otherwise
//! `settings.json` in the config directory. A missing default file means
//! defaults; a missing explicit file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use autocomplete::{KeyboardShouldPersistTaps, ListOptions, Platform};
use log::LevelFilter;
use serde::Deserialize;

use crate::error::AppError;
use crate::paths;

const DEFAULT_WORDS: &[&str] = &[
    "apple", "apricot", "avocado", "banana", "blackberry", "blueberry", "cantaloupe", "cherry",
    "clementine", "coconut", "cranberry", "date", "dragonfruit", "durian", "elderberry", "fig",
    "gooseberry", "grape", "grapefruit", "guava", "honeydew", "jackfruit", "kiwi", "kumquat",
    "lemon", "lime", "lychee", "mandarin", "mango", "mulberry", "nectarine", "olive", "orange",
    "papaya", "passionfruit", "peach", "pear", "persimmon", "pineapple", "plum", "pomegranate",
    "quince", "raspberry", "rhubarb", "starfruit", "strawberry", "tangerine", "watermelon",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start with the results suppressed.
    pub hide_results: bool,
    /// Style preset; defaults to the host platform.
    pub platform: Option<Platform>,
    pub keyboard_should_persist_taps: KeyboardShouldPersistTaps,
    /// End-reached threshold in viewport lengths.
    pub end_reached_threshold: Option<f32>,
    /// Matches loaded per page.
    pub page_size: usize,
    /// Rows of the result list, borders included.
    pub results_height: u16,
    pub placeholder: String,
    /// Only report visibility flips to the listener.
    pub edge_triggered: bool,
    pub words: Vec<String>,
    /// Forwarded to the list untouched.
    pub list_options: ListOptions,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hide_results: false,
            platform: None,
            keyboard_should_persist_taps: KeyboardShouldPersistTaps::default(),
            end_reached_threshold: None,
            page_size: 8,
            results_height: 8,
            placeholder: "Search fruit...".to_string(),
            edge_triggered: false,
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            list_options: ListOptions::new(),
            log_level: LevelFilter::Debug,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text.
    pub fn from_json(path: &Path, text: &str) -> Result<Self, AppError> {
        let mut settings: Settings =
            serde_json::from_str(text).map_err(|source| AppError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.page_size = settings.page_size.max(1);
        Ok(settings)
    }

    /// Load from `explicit`, or from the default location if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => match paths::settings_file() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        match fs::read_to_string(&path) {
            Ok(text) => Self::from_json(&path, &text),
            Err(err) if !required && err.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            Err(source) => Err(AppError::ConfigRead { path, source }),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_default()
    }
}

/// Parse `--config <path>` from the command line.
pub fn config_arg(mut args: impl Iterator<Item = String>) -> Result<Option<PathBuf>, AppError> {
    let mut config = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().ok_or(AppError::MissingArgument("--config"))?;
                config = Some(PathBuf::from(path));
            }
            _ => return Err(AppError::UnknownArgument(arg)),
        }
    }
    Ok(config)
}
