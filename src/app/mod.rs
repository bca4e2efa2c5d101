// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the two core pieces — the settings store and the
//! reset coordinator — and hands read-only snapshots of both to the
//! presentation layer each render. Message handling lives in `update`,
//! rendering in `view`, and the conditional animation tick in
//! `subscription`.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::settings::SettingsState;
use crate::transition::ResetCoordinator;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;

/// Root Iced application state.
#[derive(Debug, Default)]
pub struct App {
    settings: SettingsState,
    transition: ResetCoordinator,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(320.0, 560.0)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state, applying the optional startup
    /// background from `Flags`. An unreadable path is swallowed, like a
    /// failed pick.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut app = App::default();

        if let Some(path) = flags.background.as_deref() {
            if let Ok(path) = update::preload_background(path) {
                app.settings.background_picked(Some(path));
            }
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("Iced Decor")
    }

    fn theme(&self) -> Theme {
        match self.settings.theme_mode() {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.transition.is_animating())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            settings: &mut self.settings,
            transition: &mut self.transition,
        };

        match message {
            Message::Controls(controls_message) => {
                update::handle_controls_message(&mut ctx, controls_message)
            }
            Message::BackgroundPicked(picked) => update::handle_background_picked(&mut ctx, picked),
            Message::ResetSwapDue(generation) => update::handle_reset_swap(&mut ctx, generation),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            settings: &self.settings,
            scale: self.transition.scale(),
        })
    }
}
