//! syncai-engine: Headless engine for the SyncAI scheduling assistant
//!
//! This crate provides the logical core behind the SyncAI views:
//! - Conversation session controller (transcript + deferred mock reply)
//! - Month-grid calendar view with seeded events
//! - User settings with JSON persistence
//!
//! All assistant behavior is simulated: replies are canned, proposals
//! carry fixed illustrative values, and no calendar provider is ever
//! contacted.

pub mod calendar;
pub mod session;
pub mod settings;

// Re-export commonly used types
pub use calendar::{seed_events, CalendarEvent, EventAccent, MonthCell, MonthView, DAY_NAMES};
pub use session::{
    Message, MessageId, Proposal, ProposalKind, ReplyTicket, Role, Session, REPLY_DELAY,
};
pub use settings::{
    Integration, IntegrationKind, IntegrationStatus, Settings, SettingsError, WorkingHours,
};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
