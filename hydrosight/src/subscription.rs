use std::time::Duration;

use iced::Subscription;

use crate::message::Message;

/// Periodic simulation tick.
pub fn tick_subscription(interval: Duration) -> Subscription<Message> {
    iced::time::every(interval).map(|_| Message::Tick)
}

/// Fires once the repair wizard's simulated scan has run for `delay`.
///
/// Only requested while the wizard is scanning, so closing the wizard drops
/// the timer before it fires.
pub fn repair_scan_subscription(delay: Duration) -> Subscription<Message> {
    iced::time::every(delay).map(|_| Message::RepairScanElapsed)
}
