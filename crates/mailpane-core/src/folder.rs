//! Folder (mailbox location) model.

use serde::{Deserialize, Serialize};

/// The folder a message currently lives in.
///
/// Every message belongs to exactly one folder at any time; moves are atomic
/// replacements, not copies. The set is closed, but not every folder has a
/// sidebar entry — `move_to_folder` accepts any variant regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Folder {
    /// Incoming mail.
    #[default]
    Inbox,
    /// Unsent drafts.
    Drafts,
    /// Reusable message templates.
    Templates,
    /// Messages snoozed to reappear later.
    Snoozed,
    /// Sent mail (local archival only).
    Sent,
    /// Junk mail.
    Spam,
    /// Soft-deleted messages.
    Trash,
    /// Archived mail.
    Archive,
    /// Messages queued for sending.
    Outbox,
    /// Newsletter subscriptions.
    Newsletter,
    /// Automated notifications.
    Notification,
}

impl Folder {
    /// Every folder, in sidebar order.
    pub const ALL: [Self; 11] = [
        Self::Inbox,
        Self::Drafts,
        Self::Templates,
        Self::Snoozed,
        Self::Sent,
        Self::Spam,
        Self::Trash,
        Self::Archive,
        Self::Outbox,
        Self::Newsletter,
        Self::Notification,
    ];

    /// Convert to the stored string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Drafts => "drafts",
            Self::Templates => "templates",
            Self::Snoozed => "snoozed",
            Self::Sent => "sent",
            Self::Spam => "spam",
            Self::Trash => "trash",
            Self::Archive => "archive",
            Self::Outbox => "outbox",
            Self::Newsletter => "newsletter",
            Self::Notification => "notification",
        }
    }

    /// Human-readable display name for the sidebar.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Drafts => "Drafts",
            Self::Templates => "Templates",
            Self::Snoozed => "Snoozed",
            Self::Sent => "Sent",
            Self::Spam => "Spam",
            Self::Trash => "Trash",
            Self::Archive => "Archive",
            Self::Outbox => "Outbox",
            Self::Newsletter => "Newsletter",
            Self::Notification => "Notification",
        }
    }
}

impl std::fmt::Display for Folder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
