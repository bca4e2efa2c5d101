// SPDX-License-Identifier: MPL-2.0
//! The resizable vector emblem shown in the middle of the surface.
//!
//! Rendering is a pure function of (size, theme mode): the embedded SVG is
//! tinted with the theme's primary text color and laid out at the requested
//! square size. No state lives here.

use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::svg::{self, Svg};
use iced::{Length, Theme};

/// SVG source shared with the window icon.
pub const EMBLEM_SVG: &str = include_str!("../../assets/branding/iced_decor.svg");

/// Builds the emblem at `size` pixels per side, tinted for `mode`.
///
/// The stored icon size is unclamped and may be non-positive; a layout
/// engine has no meaning for a negative extent, so the pixel size bottoms
/// out at zero here.
pub fn view<'a>(size: i32, mode: ThemeMode) -> Svg<'a> {
    let side = Length::Fixed(size.max(0) as f32);
    let tint = ColorScheme::for_mode(mode).text_primary;

    Svg::new(svg::Handle::from_memory(EMBLEM_SVG.as_bytes()))
        .width(side)
        .height(side)
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(tint) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_source_is_tintable_svg() {
        assert!(EMBLEM_SVG.contains("<svg"));
        // Tinting relies on currentColor fills in the asset.
        assert!(EMBLEM_SVG.contains("currentColor"));
    }

    #[test]
    fn view_accepts_non_positive_sizes() {
        // Smoke test: negative stored sizes must not panic the renderer.
        let _ = view(-10, ThemeMode::Light);
        let _ = view(0, ThemeMode::Dark);
        let _ = view(100, ThemeMode::Light);
    }
}
