// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the animation tick subscription.
///
/// Ticks only run while a reset transition is in flight; the rest of the
/// time the surface is fully event-driven and nothing wakes the loop.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(16)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
