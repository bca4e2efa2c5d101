// SPDX-License-Identifier: MPL-2.0
//! Binary light/dark theming.
//!
//! Every color the presentation layer uses derives from the current
//! [`ThemeMode`] through a [`ColorScheme`]; there is no independent color
//! state anywhere else.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Color palette for a theme.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    /// Base surface behind everything (when no background photo is set).
    pub surface: Color,
    /// Primary text and the emblem tint.
    pub text_primary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            text_primary: palette::BLACK,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::INK_900,
            text_primary: palette::WHITE,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// The two display themes. Binary on purpose: there is no system-following
/// mode on this surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// The other mode, used by the theme toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}
