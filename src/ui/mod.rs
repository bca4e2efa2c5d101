// SPDX-License-Identifier: MPL-2.0
//! Presentation layer: stateless rendering of the settings snapshot plus
//! the shared theming and design tokens.

pub mod controls;
pub mod design_tokens;
pub mod emblem;
pub mod theming;
