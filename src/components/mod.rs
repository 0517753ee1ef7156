//! UI Components
//!
//! One Leptos component per page section.

mod feed_panel;
mod discussion_panel;
mod marketplace_panel;
mod events_panel;
mod directory_panel;

pub use feed_panel::FeedPanel;
pub use discussion_panel::DiscussionPanel;
pub use marketplace_panel::MarketplacePanel;
pub use events_panel::EventsPanel;
pub use directory_panel::DirectoryPanel;

/// Blocking browser alert, used for submission notices and form errors
pub(crate) fn alert(message: &str) {
    if let Err(e) = leptos::prelude::window().alert_with_message(message) {
        log::warn!("[APP] alert failed: {:?}", e);
    }
}
