//! Conversation session controller.
//!
//! A [`Session`] owns one ordered transcript between the user and the
//! mock assistant plus a single "composing" flag. Submitting text
//! appends a user message and hands back a [`ReplyTicket`]; the caller
//! schedules the ticket after its delay and feeds it to
//! [`Session::deliver`], which appends the canned assistant reply.
//! Timing lives entirely in the caller, so the session itself stays a
//! plain synchronous value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Fixed simulated latency before the assistant reply is delivered.
pub const REPLY_DELAY: Duration = Duration::from_millis(1800);

/// Seeded welcome message shown in every fresh session.
const WELCOME_TEXT: &str =
    "Hey there! I can help you find time with anyone. Just tell me who you'd like to meet with and roughly when!";

/// Canned assistant reply appended after the simulated latency.
const REPLY_TEXT: &str =
    "I took a look at both calendars. How does this slot work for you both?";

/// Role of a message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message typed by the user.
    User,
    /// Message produced by the assistant.
    Assistant,
}

/// Identifier for a message, unique and strictly increasing within a
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

/// Kind of proposal attached to an assistant message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProposalKind {
    /// A suggested meeting slot awaiting user action.
    SchedulingSlot,
    /// Reserved for a future confirmed-booking card.
    Confirmed,
}

/// A suggested meeting slot attached to an assistant message.
///
/// All fields are display strings; nothing here is validated against a
/// real calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// What kind of card this is.
    pub kind: ProposalKind,
    /// Candidate date, e.g. "Oct 24".
    pub date: String,
    /// Secondary date label, e.g. "Tomorrow afternoon".
    pub date_label: String,
    /// Start of the suggested slot, e.g. "2:00 PM".
    pub start: String,
    /// End of the suggested slot, e.g. "2:30 PM".
    pub end: String,
    /// Display timezone label, e.g. "Eastern Time (ET)".
    pub timezone: String,
}

impl Proposal {
    /// The fixed illustrative slot the mock assistant always proposes.
    pub fn scheduling_slot() -> Self {
        Self {
            kind: ProposalKind::SchedulingSlot,
            date: "Oct 24".into(),
            date_label: "Tomorrow afternoon".into(),
            start: "2:00 PM".into(),
            end: "2:30 PM".into(),
            timezone: "Eastern Time (ET)".into(),
        }
    }

    /// Time range as a single display string.
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

/// A single message in a session transcript. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Identifier, unique within the session.
    pub id: MessageId,
    /// Role of the message author.
    pub role: Role,
    /// Message content.
    pub content: String,
    /// Attached proposal (assistant messages only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal: Option<Proposal>,
    /// Timestamp of the message.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            content: content.into(),
            proposal: None,
            timestamp: Utc::now(),
        }
    }

    fn assistant(id: MessageId, content: impl Into<String>, proposal: Option<Proposal>) -> Self {
        Self {
            id,
            role: Role::Assistant,
            content: content.into(),
            proposal,
            timestamp: Utc::now(),
        }
    }
}

/// Handle for a pending assistant reply.
///
/// Returned by [`Session::submit`]; the caller waits out
/// [`ReplyTicket::delay`] and then calls [`Session::deliver`]. Tickets
/// are tagged with the session they came from so a ticket that outlives
/// its session is ignored rather than appended somewhere it doesn't
/// belong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyTicket {
    session: Uuid,
    delay: Duration,
}

impl ReplyTicket {
    /// How long the caller should wait before delivering.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Session this ticket belongs to.
    pub fn session_id(&self) -> Uuid {
        self.session
    }
}

/// One continuous conversation transcript with the mock assistant.
///
/// The transcript is append-only and starts with a seeded welcome
/// message, so it is never empty.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    messages: Vec<Message>,
    composing: bool,
    next_id: u64,
}

impl Session {
    /// Create a session seeded with the assistant welcome message.
    pub fn new() -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            composing: false,
            next_id: 1,
        };
        let id = session.allocate_id();
        session
            .messages
            .push(Message::assistant(id, WELCOME_TEXT, None));
        session
    }

    /// Unique id of this session.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// All messages, in creation order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Most recent message.
    pub fn last_message(&self) -> &Message {
        // Invariant: the seeded welcome message means this never fails.
        self.messages.last().expect("session is never empty")
    }

    /// Whether a simulated assistant reply is pending.
    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Submit user input.
    ///
    /// Whitespace-only input is silently ignored and returns `None`.
    /// Otherwise the trimmed text is appended as a user message, the
    /// composing flag is set, and a ticket for the deferred reply is
    /// returned. Submitting while a reply is already pending is
    /// allowed; each submit earns its own independent ticket.
    pub fn submit(&mut self, text: &str) -> Option<ReplyTicket> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::trace!("ignoring empty submit");
            return None;
        }

        let id = self.allocate_id();
        self.messages.push(Message::user(id, trimmed));
        self.composing = true;
        tracing::debug!(message_id = id.0, "user message appended");

        Some(ReplyTicket {
            session: self.id,
            delay: REPLY_DELAY,
        })
    }

    /// Deliver the deferred assistant reply for a ticket.
    ///
    /// Returns the appended message, or `None` if the ticket belongs to
    /// a different session (a stale ticket delivered after teardown and
    /// re-creation must not corrupt the new transcript).
    pub fn deliver(&mut self, ticket: ReplyTicket) -> Option<&Message> {
        if ticket.session != self.id {
            tracing::debug!(ticket_session = %ticket.session, "dropping stale reply ticket");
            return None;
        }

        self.composing = false;
        let id = self.allocate_id();
        self.messages.push(Message::assistant(
            id,
            REPLY_TEXT,
            Some(Proposal::scheduling_slot()),
        ));
        tracing::debug!(message_id = id.0, "assistant reply delivered");
        self.messages.last()
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_seeded() {
        let session = Session::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.last_message().role, Role::Assistant);
        assert!(session.last_message().proposal.is_none());
        assert!(!session.is_composing());
    }

    #[test]
    fn test_empty_submit_is_ignored() {
        let mut session = Session::new();
        assert!(session.submit("").is_none());
        assert!(session.submit("   ").is_none());
        assert!(session.submit("\t\n").is_none());
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_composing());
    }

    #[test]
    fn test_submit_appends_user_message() {
        let mut session = Session::new();
        let ticket = session.submit("hello").expect("non-empty submit");

        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.last_message().role, Role::User);
        assert_eq!(session.last_message().content, "hello");
        assert!(session.is_composing());
        assert_eq!(ticket.delay(), REPLY_DELAY);
        assert_eq!(ticket.session_id(), session.id());
    }

    #[test]
    fn test_submit_trims_input() {
        let mut session = Session::new();
        session.submit("  hello  ").unwrap();
        assert_eq!(session.last_message().content, "hello");
    }

    #[test]
    fn test_deliver_appends_reply_with_proposal() {
        let mut session = Session::new();
        let ticket = session.submit("Book time with Alex").unwrap();

        assert_eq!(session.messages().len(), 2);
        assert!(session.is_composing());

        let reply = session.deliver(ticket).expect("ticket matches session");
        assert_eq!(reply.role, Role::Assistant);
        let proposal = reply.proposal.as_ref().expect("reply carries a proposal");
        assert_eq!(proposal.kind, ProposalKind::SchedulingSlot);
        assert!(!proposal.date.is_empty());
        assert!(!proposal.start.is_empty());
        assert!(!proposal.end.is_empty());

        assert_eq!(session.messages().len(), 3);
        assert!(!session.is_composing());
    }

    #[test]
    fn test_message_ids_strictly_increasing() {
        let mut session = Session::new();
        let ticket = session.submit("one").unwrap();
        session.deliver(ticket);
        session.submit("two").unwrap();

        let ids: Vec<u64> = session.messages().iter().map(|m| m.id.0).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "ids must increase: {ids:?}");
        }
    }

    #[test]
    fn test_overlapping_submits_each_get_a_reply() {
        let mut session = Session::new();
        let first = session.submit("first").unwrap();
        let second = session.submit("second").unwrap();
        assert!(session.is_composing());

        session.deliver(first);
        // A second delivery is still outstanding; the flag was cleared by
        // the first one, matching the observed behavior of the mock.
        session.deliver(second);

        let replies = session
            .messages()
            .iter()
            .filter(|m| m.role == Role::Assistant && m.proposal.is_some())
            .count();
        assert_eq!(replies, 2);
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut old_session = Session::new();
        let ticket = old_session.submit("hello").unwrap();

        let mut new_session = Session::new();
        assert!(new_session.deliver(ticket).is_none());
        assert_eq!(new_session.messages().len(), 1);
    }

    #[test]
    fn test_proposal_time_range() {
        let proposal = Proposal::scheduling_slot();
        assert_eq!(proposal.time_range(), "2:00 PM - 2:30 PM");
    }
}
