// SPDX-License-Identifier: MPL-2.0
//! `iced_decor` is a small display-customization playground built with the
//! Iced GUI framework.
//!
//! It lets the user toggle a light/dark theme, resize a vector emblem,
//! resize and re-font a line of sample text, and pick a background photo,
//! with an animated shrink/swap/restore reset back to defaults. The
//! settings store ([`settings`]) and the reset coordinator ([`transition`])
//! form the core; everything under [`ui`] renders read-only snapshots of
//! them.

pub mod app;
pub mod error;
pub mod icon;
pub mod settings;
pub mod transition;
pub mod ui;
