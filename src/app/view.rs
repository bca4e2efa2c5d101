// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers the themed surface, the optional background photo, and the
//! customization panel. Everything here is a pure function of the settings
//! snapshot and the transition scale.

use super::Message;
use crate::settings::SettingsState;
use crate::ui::controls::{self, ViewContext as ControlsViewContext};
use crate::ui::theming::ColorScheme;
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, Container, Stack},
    Background, ContentFit, Element, Length, Theme,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub settings: &'a SettingsState,
    pub scale: f32,
}

/// Renders the whole surface for the current snapshot.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scheme = ColorScheme::for_mode(ctx.settings.theme_mode());

    let panel = controls::view(ControlsViewContext {
        settings: ctx.settings,
        scale: ctx.scale,
    })
    .map(Message::Controls);

    let centered_panel = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let surface_color = scheme.surface;
    let base_surface = Container::new(iced::widget::Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(surface_color)),
            ..Default::default()
        });

    let mut stack = Stack::new().push(base_surface);

    // The chosen photo covers the themed surface but stays behind the panel.
    if let Some(path) = ctx.settings.background_image() {
        let photo = Image::new(Handle::from_path(path.clone()))
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill);
        stack = stack.push(photo);
    }

    stack.push(centered_panel).into()
}
