// SPDX-License-Identifier: MPL-2.0
//! The settings store: the single source of truth for the five display
//! parameters the user can customize.
//!
//! Every operation is synchronous and total. Size adjustments apply fixed
//! steps with no clamping, so the stored values can go to zero or negative;
//! the renderer decides what to do with a non-positive size, not the store.
//! `reset_to_defaults` replaces the whole value in one assignment so the
//! swap is a single observable step.

mod fonts;

pub use fonts::FontChoice;

use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Step applied by a single font-size adjustment.
pub const FONT_SIZE_STEP: i32 = 1;
/// Step applied by a single icon-size adjustment.
pub const ICON_SIZE_STEP: i32 = 10;

pub const DEFAULT_FONT_SIZE: i32 = 16;
pub const DEFAULT_ICON_SIZE: i32 = 100;

/// Current display customization. One instance exists per running app,
/// owned by [`crate::app::App`] and handed to the presentation layer as a
/// read-only snapshot each render.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsState {
    theme_mode: ThemeMode,
    font_size: i32,
    icon_size: i32,
    selected_font: FontChoice,
    background_image: Option<PathBuf>,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            font_size: DEFAULT_FONT_SIZE,
            icon_size: DEFAULT_ICON_SIZE,
            selected_font: FontChoice::default(),
            background_image: None,
        }
    }
}

impl SettingsState {
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    pub fn font_size(&self) -> i32 {
        self.font_size
    }

    pub fn icon_size(&self) -> i32 {
        self.icon_size
    }

    pub fn selected_font(&self) -> FontChoice {
        self.selected_font
    }

    pub fn background_image(&self) -> Option<&PathBuf> {
        self.background_image.as_ref()
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
    }

    /// Flips between light and dark. The toggle button is the only theme
    /// control the surface exposes.
    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
    }

    pub fn increase_font_size(&mut self) {
        self.font_size += FONT_SIZE_STEP;
    }

    pub fn decrease_font_size(&mut self) {
        self.font_size -= FONT_SIZE_STEP;
    }

    pub fn increase_icon_size(&mut self) {
        self.icon_size += ICON_SIZE_STEP;
    }

    pub fn decrease_icon_size(&mut self) {
        self.icon_size -= ICON_SIZE_STEP;
    }

    pub fn set_font(&mut self, font: FontChoice) {
        self.selected_font = font;
    }

    /// Sets the font from a string identifier. Names outside the catalog
    /// are ignored and the current selection is kept.
    pub fn set_font_by_name(&mut self, name: &str) {
        if let Some(font) = FontChoice::from_name(name) {
            self.selected_font = font;
        }
    }

    /// Applies the outcome of a background pick. `None` means the dialog
    /// was cancelled or failed; an already-set background must survive
    /// that, so only `Some` replaces the stored reference.
    pub fn background_picked(&mut self, picked: Option<PathBuf>) {
        if let Some(path) = picked {
            self.background_image = Some(path);
        }
    }

    /// Replaces the whole state with the defaults in one assignment.
    /// Only the reset coordinator calls this, at the trough of the
    /// shrink/restore transition.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_tuple() {
        let state = SettingsState::default();
        assert_eq!(state.theme_mode(), ThemeMode::Light);
        assert_eq!(state.font_size(), 16);
        assert_eq!(state.icon_size(), 100);
        assert_eq!(state.selected_font(), FontChoice::Arial);
        assert_eq!(state.background_image(), None);
    }

    #[test]
    fn font_size_accumulates_without_clamping() {
        let mut state = SettingsState::default();
        for _ in 0..3 {
            state.increase_font_size();
        }
        assert_eq!(state.font_size(), 19);

        for _ in 0..25 {
            state.decrease_font_size();
        }
        // 19 - 25: the store allows non-positive sizes.
        assert_eq!(state.font_size(), -6);
    }

    #[test]
    fn icon_size_steps_by_ten_and_may_go_negative() {
        let mut state = SettingsState::default();
        state.increase_icon_size();
        assert_eq!(state.icon_size(), 110);

        for _ in 0..12 {
            state.decrease_icon_size();
        }
        assert_eq!(state.icon_size(), -10);
    }

    #[test]
    fn same_call_sequence_yields_same_value() {
        let run = || {
            let mut state = SettingsState::default();
            state.increase_font_size();
            state.decrease_font_size();
            state.increase_font_size();
            state.increase_icon_size();
            state.decrease_icon_size();
            (state.font_size(), state.icon_size())
        };
        assert_eq!(run(), run());
        assert_eq!(run(), (17, 100));
    }

    #[test]
    fn set_theme_is_idempotent_and_toggle_flips() {
        let mut state = SettingsState::default();
        state.set_theme(ThemeMode::Dark);
        state.set_theme(ThemeMode::Dark);
        assert_eq!(state.theme_mode(), ThemeMode::Dark);

        state.toggle_theme();
        assert_eq!(state.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn set_font_by_name_ignores_unknown_names() {
        let mut state = SettingsState::default();
        state.set_font(FontChoice::Georgia);

        state.set_font_by_name("Wingdings");
        assert_eq!(state.selected_font(), FontChoice::Georgia);

        state.set_font_by_name("Courier New");
        assert_eq!(state.selected_font(), FontChoice::CourierNew);
    }

    #[test]
    fn valid_font_selection_touches_no_other_field() {
        let mut state = SettingsState::default();
        state.set_theme(ThemeMode::Dark);
        state.increase_font_size();

        let before = state.clone();
        state.set_font(FontChoice::Georgia);

        assert_eq!(state.selected_font(), FontChoice::Georgia);
        assert_eq!(state.theme_mode(), before.theme_mode());
        assert_eq!(state.font_size(), before.font_size());
        assert_eq!(state.icon_size(), before.icon_size());
        assert_eq!(state.background_image(), before.background_image());
    }

    #[test]
    fn cancelled_pick_keeps_prior_background() {
        let mut state = SettingsState::default();
        state.background_picked(Some(PathBuf::from("/photos/sunset.jpg")));
        assert_eq!(
            state.background_image(),
            Some(&PathBuf::from("/photos/sunset.jpg"))
        );

        state.background_picked(None);
        assert_eq!(
            state.background_image(),
            Some(&PathBuf::from("/photos/sunset.jpg"))
        );
    }

    #[test]
    fn successful_pick_replaces_background() {
        let mut state = SettingsState::default();
        state.background_picked(Some(PathBuf::from("/photos/a.png")));
        state.background_picked(Some(PathBuf::from("/photos/b.png")));
        assert_eq!(state.background_image(), Some(&PathBuf::from("/photos/b.png")));
    }

    #[test]
    fn reset_restores_the_default_tuple_regardless_of_prior_state() {
        let mut state = SettingsState::default();
        state.set_theme(ThemeMode::Dark);
        for _ in 0..40 {
            state.decrease_font_size();
        }
        state.increase_icon_size();
        state.set_font(FontChoice::Helvetica);
        state.background_picked(Some(PathBuf::from("/photos/sunset.jpg")));

        state.reset_to_defaults();
        assert_eq!(state, SettingsState::default());
    }
}
