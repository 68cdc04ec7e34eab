//! Message data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::folder::Folder;
use crate::identity::UserIdentity;

/// Unique identifier for a message.
///
/// Millisecond-timestamp seeded, so ids sort roughly by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub i64);

impl MessageId {
    /// Create a new message ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sender identity recorded on a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    /// Email address.
    pub address: String,
    /// Name shown in the message list.
    pub display_name: String,
}

impl Sender {
    /// Creates a new sender.
    #[must_use]
    pub fn new(address: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            display_name: display_name.into(),
        }
    }
}

impl From<UserIdentity> for Sender {
    fn from(user: UserIdentity) -> Self {
        Self {
            address: user.address,
            display_name: user.display_name,
        }
    }
}

/// Opaque attachment descriptor.
///
/// Only presence and count are consumed by the store; content never leaves
/// the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// File name shown in the message view.
    pub file_name: String,
    /// MIME type of the content.
    pub mime_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl Attachment {
    /// Creates a new attachment descriptor.
    #[must_use]
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

/// A mail message.
///
/// Serialized camelCase to match the persisted mailbox document layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique identifier within the store.
    pub id: MessageId,
    /// Sender identity.
    pub from: Sender,
    /// Recipient addresses (To).
    #[serde(default)]
    pub to: Vec<String>,
    /// CC recipient addresses.
    #[serde(default)]
    pub cc: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub body: String,
    /// When the message was sent, as an ISO-8601 timestamp.
    pub sent_at: DateTime<Utc>,
    /// Folder the message currently lives in.
    pub folder: Folder,
    /// Whether the message has been read.
    pub read: bool,
    /// Whether the message is starred.
    pub starred: bool,
    /// Attachment descriptors.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Returns true if the search term appears in the subject, sender display
    /// name, sender address, or body. Case-insensitive substring match.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.subject.to_lowercase().contains(&term)
            || self.from.display_name.to_lowercase().contains(&term)
            || self.from.address.to_lowercase().contains(&term)
            || self.body.to_lowercase().contains(&term)
    }

    /// The fixed demo mailbox: four inbox messages (three unread) and one
    /// notification, used when no persisted state exists.
    #[must_use]
    pub fn demo_messages() -> Vec<Self> {
        vec![
            Self {
                id: MessageId(demo_date("2026-07-21T09:15:00Z").timestamp_millis()),
                from: Sender::new("mike.anderson@example.com", "Mike Anderson"),
                to: vec!["demo@mailpane.local".into()],
                cc: Vec::new(),
                subject: "Quarterly planning notes".into(),
                body: "Hi,\n\nSharing the notes from this morning's planning session. \
                       Action items are at the bottom, let me know if I missed anything.\n\n\
                       Best,\nM."
                    .into(),
                sent_at: demo_date("2026-07-21T09:15:00Z"),
                folder: Folder::Inbox,
                read: false,
                starred: false,
                attachments: Vec::new(),
            },
            Self {
                id: MessageId(demo_date("2026-07-20T16:40:00Z").timestamp_millis()),
                from: Sender::new("mike.anderson@example.com", "Mike Anderson"),
                to: vec!["demo@mailpane.local".into()],
                cc: vec!["team@example.com".into()],
                subject: "Re: Offsite agenda".into(),
                body: "Works for me. I've booked the larger room for the afternoon block \
                       so we can fit the whole team."
                    .into(),
                sent_at: demo_date("2026-07-20T16:40:00Z"),
                folder: Folder::Inbox,
                read: false,
                starred: true,
                attachments: Vec::new(),
            },
            Self {
                id: MessageId(demo_date("2026-07-18T11:05:00Z").timestamp_millis()),
                from: Sender::new("sarah.chen@example.com", "Sarah Chen"),
                to: vec!["demo@mailpane.local".into()],
                cc: Vec::new(),
                subject: "Invoice #2041".into(),
                body: "Please find attached the invoice for last month's services. \
                       Payment is due within 30 days."
                    .into(),
                sent_at: demo_date("2026-07-18T11:05:00Z"),
                folder: Folder::Inbox,
                read: true,
                starred: false,
                attachments: vec![Attachment::new("invoice-2041.pdf", "application/pdf", 48_212)],
            },
            Self {
                id: MessageId(demo_date("2026-07-15T13:30:00Z").timestamp_millis()),
                from: Sender::new("laura.petit@example.com", "Laura Petit"),
                to: vec!["demo@mailpane.local".into()],
                cc: Vec::new(),
                subject: "Lunch on Friday?".into(),
                body: "It's been a while! There's a new place near the office, want to \
                       try it on Friday around noon?"
                    .into(),
                sent_at: demo_date("2026-07-15T13:30:00Z"),
                folder: Folder::Inbox,
                read: false,
                starred: false,
                attachments: Vec::new(),
            },
            Self {
                id: MessageId(demo_date("2026-07-14T07:02:00Z").timestamp_millis()),
                from: Sender::new("builds@ci.example.com", "CI Robot"),
                to: vec!["demo@mailpane.local".into()],
                cc: Vec::new(),
                subject: "[mailpane] nightly build passed".into(),
                body: "All 214 checks passed on main. Full report available on the build \
                       dashboard."
                    .into(),
                sent_at: demo_date("2026-07-14T07:02:00Z"),
                folder: Folder::Notification,
                read: false,
                starred: false,
                attachments: Vec::new(),
            },
        ]
    }
}

#[allow(clippy::expect_used)] // fixed demo timestamps are always valid RFC 3339
fn demo_date(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .expect("valid demo timestamp")
        .with_timezone(&Utc)
}
