//! Platform default styles.
//!
//! Two platform families get their own preset bundle; both share the
//! universal input style.

use serde::Deserialize;

use crate::types::{Border, Color, Edges, Position, Style};

/// Target platform family for default styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
    Ios,
}

impl Platform {
    /// Apple targets use the iOS presets, everything else the Android ones.
    pub fn current() -> Self {
        if cfg!(any(target_os = "ios", target_os = "macos")) {
            Self::Ios
        } else {
            Self::Android
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

/// Resolved default styles for the widget's regions.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub container: Style,
    pub input_container: Style,
    pub input: Style,
    pub list: Style,
}

impl StyleSheet {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Android => Self {
                container: Style::new().flex(1),
                input_container: bordered().margin(Edges::default()),
                input: input_style(),
                list: bordered()
                    .border_width(Edges::all(1).without_top())
                    .background(Color::WHITE)
                    .foreground(Color::BLACK)
                    .margin(Edges::all(1).without_top()),
            },
            Platform::Ios => Self {
                container: Style::new().z_index(1),
                input_container: bordered(),
                input: input_style(),
                list: bordered()
                    .border_width(Edges::all(1).without_top())
                    .background(Color::WHITE)
                    .foreground(Color::BLACK)
                    .position(Position::Absolute)
                    .left(0)
                    .right(0),
            },
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}

const BORDER_COLOR: Color = Color::rgb(0xb9, 0xb9, 0xb9);

fn bordered() -> Style {
    Style::new()
        .border(Border::Single)
        .border_color(BORDER_COLOR)
        .border_radius(1)
        .border_width(Edges::all(1))
}

/// Universal input style shared by every platform.
fn input_style() -> Style {
    Style::new()
        .background(Color::WHITE)
        .foreground(Color::BLACK)
        .height(1)
        .padding(Edges::left(1))
}
