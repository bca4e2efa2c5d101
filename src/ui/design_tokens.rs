// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: base colors
//! - **Spacing**: spacing scale (8px grid)
//! - **Typography**: font size scale

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Near-black with a blue cast, the dark surface color (#121218).
    pub const INK_900: Color = Color::from_rgb(0.071, 0.071, 0.094);
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Size of the action labels (reset, theme toggle, picker prompt).
    pub const LABEL: f32 = 20.0;
    /// Size of secondary captions (the size readout).
    pub const CAPTION: f32 = 16.0;
}
