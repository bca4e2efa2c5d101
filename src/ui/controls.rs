// SPDX-License-Identifier: MPL-2.0
//! The customization panel: every control the surface offers, rendered
//! from a read-only settings snapshot.
//!
//! The panel is stateless. Each control maps 1:1 to a [`Message`], and
//! [`update`] maps each message 1:1 to an [`Event`] for the parent to act
//! on; no business logic lives here. The whole panel is drawn at the
//! transition scale by multiplying every rendered size, which is how the
//! shrink/restore animation reaches the user.

use crate::settings::{FontChoice, SettingsState};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::emblem;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    widget::{button, pick_list, Column, Text},
    Element, Length,
};

// Fixed display vocabulary. Not configurable at runtime.
const RESET_LABEL: &str = "Reset settings";
const SWITCH_TO_DARK_LABEL: &str = "Dark theme";
const SWITCH_TO_LIGHT_LABEL: &str = "Light theme";
const GROW_ICON_LABEL: &str = "Larger icon";
const SHRINK_ICON_LABEL: &str = "Smaller icon";
const PICK_BACKGROUND_LABEL: &str = "Choose a background photo";
const SAMPLE_TEXT: &str = "Text with a changeable font";
const GROW_TEXT_LABEL: &str = "Larger text";
const SHRINK_TEXT_LABEL: &str = "Smaller text";

/// Messages emitted by the panel's controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    ToggleTheme,
    IncreaseFontSize,
    DecreaseFontSize,
    IncreaseIconSize,
    DecreaseIconSize,
    FontSelected(FontChoice),
    PickBackground,
    Reset,
}

/// Intents propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    ToggleTheme,
    IncreaseFontSize,
    DecreaseFontSize,
    IncreaseIconSize,
    DecreaseIconSize,
    FontSelected(FontChoice),
    OpenBackgroundDialog,
    TriggerReset,
}

/// Process a panel message and return the corresponding intent.
pub fn update(message: Message) -> Event {
    match message {
        Message::ToggleTheme => Event::ToggleTheme,
        Message::IncreaseFontSize => Event::IncreaseFontSize,
        Message::DecreaseFontSize => Event::DecreaseFontSize,
        Message::IncreaseIconSize => Event::IncreaseIconSize,
        Message::DecreaseIconSize => Event::DecreaseIconSize,
        Message::FontSelected(font) => Event::FontSelected(font),
        Message::PickBackground => Event::OpenBackgroundDialog,
        Message::Reset => Event::TriggerReset,
    }
}

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub settings: &'a SettingsState,
    /// Transition scale in `[0, 1]`; 1 when no reset is in flight.
    pub scale: f32,
}

/// Render the customization panel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let settings = ctx.settings;
    let scale = ctx.scale.clamp(0.0, 1.0);
    let scheme = ColorScheme::for_mode(settings.theme_mode());

    // Text needs a positive pixel size even when scaled to the trough.
    let label_size = (typography::LABEL * scale).max(1.0);
    let caption_size = (typography::CAPTION * scale).max(1.0);
    let action = |text: &'static str, message: Message| {
        button(Text::new(text).size(label_size).color(scheme.text_primary))
            .style(button::text)
            .on_press(message)
    };
    let caption = |text: &'static str, message: Message| {
        button(Text::new(text).size(caption_size).color(scheme.text_primary))
            .style(button::text)
            .on_press(message)
    };

    let toggle_label = if settings.theme_mode().is_dark() {
        SWITCH_TO_LIGHT_LABEL
    } else {
        SWITCH_TO_DARK_LABEL
    };

    let scaled_icon_size = (settings.icon_size() as f32 * scale) as i32;
    // Stored font size is unclamped; only the rendered pixels bottom out.
    let sample_size = (settings.font_size() as f32 * scale).max(1.0);
    let sample = Text::new(SAMPLE_TEXT)
        .font(settings.selected_font().font())
        .size(sample_size)
        .color(scheme.text_primary);

    let readout = Text::new(format!("Current font size: {}", settings.font_size()))
        .size(caption_size)
        .color(scheme.text_primary);

    let font_picker = pick_list(
        &FontChoice::ALL[..],
        Some(settings.selected_font()),
        Message::FontSelected,
    )
    .padding(spacing::XS)
    .width(Length::Fixed(150.0));

    Column::new()
        .push(action(RESET_LABEL, Message::Reset))
        .push(action(toggle_label, Message::ToggleTheme))
        .push(emblem::view(scaled_icon_size, settings.theme_mode()))
        .push(caption(GROW_ICON_LABEL, Message::IncreaseIconSize))
        .push(caption(SHRINK_ICON_LABEL, Message::DecreaseIconSize))
        .push(action(PICK_BACKGROUND_LABEL, Message::PickBackground))
        .push(sample)
        .push(caption(GROW_TEXT_LABEL, Message::IncreaseFontSize))
        .push(caption(SHRINK_TEXT_LABEL, Message::DecreaseFontSize))
        .push(readout)
        .push(font_picker)
        .spacing(spacing::SM * scale)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_message_maps_to_exactly_its_intent() {
        assert_eq!(update(Message::ToggleTheme), Event::ToggleTheme);
        assert_eq!(update(Message::IncreaseFontSize), Event::IncreaseFontSize);
        assert_eq!(update(Message::DecreaseFontSize), Event::DecreaseFontSize);
        assert_eq!(update(Message::IncreaseIconSize), Event::IncreaseIconSize);
        assert_eq!(update(Message::DecreaseIconSize), Event::DecreaseIconSize);
        assert_eq!(
            update(Message::FontSelected(FontChoice::Georgia)),
            Event::FontSelected(FontChoice::Georgia)
        );
        assert_eq!(update(Message::PickBackground), Event::OpenBackgroundDialog);
        assert_eq!(update(Message::Reset), Event::TriggerReset);
    }

    #[test]
    fn view_renders_at_rest() {
        let settings = SettingsState::default();
        let _element = view(ViewContext {
            settings: &settings,
            scale: 1.0,
        });
        // Smoke test to ensure the panel renders without panicking.
    }

    #[test]
    fn view_renders_at_the_trough_and_with_negative_sizes() {
        let mut settings = SettingsState::default();
        for _ in 0..30 {
            settings.decrease_font_size();
            settings.decrease_icon_size();
        }
        let _element = view(ViewContext {
            settings: &settings,
            scale: 0.0,
        });
    }
}
