//! Errors raised while parsing widget configuration.

use thiserror::Error;

/// Configuration errors for the autocomplete widget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `keyboard_should_persist_taps` was not one of the known values.
    #[error("invalid keyboard_should_persist_taps value {0:?}: expected always, never, handled or a bool")]
    InvalidPersistTaps(String),

    /// A color string could not be parsed.
    #[error("invalid color {0:?}: expected #rrggbb, #rgb, oklch(l, c, h) or a named color")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
