// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the project SVG at runtime to produce an RGBA icon for the
//! window title bar. Falls back to `None` if rendering fails.

use crate::error::{Error, Result};
use crate::ui::emblem::EMBLEM_SVG;
use iced::window::{icon, Icon};
use resvg::usvg;

/// Rasterize the embedded SVG icon to a 128x128 RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    rasterize_window_icon().ok()
}

fn rasterize_window_icon() -> Result<Icon> {
    // The asset uses currentColor so the in-app emblem can be tinted per
    // theme; the title-bar icon gets a fixed ink fill.
    let source = EMBLEM_SVG.replace("currentColor", "#121218");

    let tree = usvg::Tree::from_data(source.as_bytes(), &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let target = 128u32;
    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)
        .ok_or_else(|| Error::Svg("zero-sized icon pixmap".to_string()))?;

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    icon::from_rgba(pixmap.data().to_vec(), target, target)
        .map_err(|e| Error::Svg(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_icon_rasterizes() {
        assert!(load_window_icon().is_some());
    }
}
