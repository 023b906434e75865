// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The only subscription is the animation tick that drives spinners and
//! toast auto-dismiss. It runs solely while something on screen needs it.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription when anything animated is on
/// screen, and no subscription otherwise so an idle app schedules nothing.
pub fn create_tick_subscription(
    is_loading_session: bool,
    has_pending_thumbnails: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if is_loading_session || has_pending_thumbnails || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
