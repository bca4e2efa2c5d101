// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All handlers run on the single update loop and complete before the next
//! message is processed, so every settings mutation is one observable step.
//! The only asynchronous pieces are the background photo dialog and the
//! reset swap timer, both scheduled as `Task`s that deliver their result
//! back as messages.

use super::Message;
use crate::error::Result;
use crate::settings::SettingsState;
use crate::transition::{ResetCoordinator, RESET_TRANSITION};
use crate::ui::controls::{self, Event as ControlsEvent};
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Mutable views over the pieces of `App` state the handlers touch.
pub struct UpdateContext<'a> {
    pub settings: &'a mut SettingsState,
    pub transition: &'a mut ResetCoordinator,
}

/// Handles a message from the customization panel by applying the matching
/// store or coordinator operation.
pub fn handle_controls_message(
    ctx: &mut UpdateContext<'_>,
    message: controls::Message,
) -> Task<Message> {
    match controls::update(message) {
        ControlsEvent::ToggleTheme => {
            ctx.settings.toggle_theme();
            Task::none()
        }
        ControlsEvent::IncreaseFontSize => {
            ctx.settings.increase_font_size();
            Task::none()
        }
        ControlsEvent::DecreaseFontSize => {
            ctx.settings.decrease_font_size();
            Task::none()
        }
        ControlsEvent::IncreaseIconSize => {
            ctx.settings.increase_icon_size();
            Task::none()
        }
        ControlsEvent::DecreaseIconSize => {
            ctx.settings.decrease_icon_size();
            Task::none()
        }
        ControlsEvent::FontSelected(font) => {
            ctx.settings.set_font(font);
            Task::none()
        }
        ControlsEvent::OpenBackgroundDialog => handle_background_dialog(),
        ControlsEvent::TriggerReset => handle_reset_trigger(ctx),
    }
}

/// Opens the native photo dialog. Single selection, image files only; the
/// user closing the dialog resolves to `None`.
pub fn handle_background_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title("Choose a background photo")
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::BackgroundPicked,
    )
}

/// Applies a dialog result. Cancellation leaves the current background
/// untouched; nothing is surfaced to the user either way.
pub fn handle_background_picked(
    ctx: &mut UpdateContext<'_>,
    picked: Option<PathBuf>,
) -> Task<Message> {
    ctx.settings.background_picked(picked);
    Task::none()
}

/// Starts a reset cycle: the coordinator begins the shrink and an
/// independent timer of the same duration is armed to schedule the swap.
/// The timer carries the cycle's generation so a cycle superseded by a
/// re-entrant trigger cannot swap.
pub fn handle_reset_trigger(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let generation = ctx.transition.trigger(Instant::now());
    Task::perform(
        async move {
            tokio::time::sleep(RESET_TRANSITION).await;
            generation
        },
        Message::ResetSwapDue,
    )
}

/// The swap timer fired. If the cycle is still current the view is fully
/// shrunk by contract, so the settings swap happens here, invisibly,
/// followed by the restore animation.
pub fn handle_reset_swap(ctx: &mut UpdateContext<'_>, generation: u64) -> Task<Message> {
    if ctx.transition.swap_elapsed(generation, Instant::now()) {
        ctx.settings.reset_to_defaults();
    }
    Task::none()
}

/// Advances the transition animation.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.transition.tick(now);
    Task::none()
}

/// Validates the startup background path from the CLI. A missing file is
/// reported as an error the caller swallows, matching the picker's
/// no-user-visible-failure contract.
pub fn preload_background(path: &str) -> Result<PathBuf> {
    let path = PathBuf::from(path);
    std::fs::metadata(&path)?;
    Ok(path)
}
