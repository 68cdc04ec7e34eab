//! The mail store: single source of truth for the session's mailbox.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::folder::Folder;
use crate::identity::UserIdentity;
use crate::message::{ComposeDraft, Message, MessageId};
use crate::storage::Storage;

/// Storage key the mailbox document is persisted under.
pub const MAILBOX_KEY: &str = "mailbox";

/// Persisted mailbox document: `{"emails": [...], "folders": {}}`.
///
/// `folders` is reserved for per-folder metadata and always empty for now.
#[derive(Debug, Default, Serialize, Deserialize)]
struct MailboxDocument {
    emails: Vec<Message>,
    #[serde(default)]
    folders: serde_json::Map<String, serde_json::Value>,
}

/// Owns the message collection for the current session.
///
/// All reads (folder views, unread counts, filtering) and all mutations
/// (flags, moves, composition) go through this store. Every mutation
/// re-serializes the full collection to storage, write-through. Persistence
/// failures propagate to the caller; in-memory state is not rolled back.
///
/// The store is constructed once at session start and passed by reference to
/// consumers; there is no ambient global state.
pub struct MailStore<S: Storage> {
    storage: S,
    messages: Vec<Message>,
    user: Option<UserIdentity>,
    selected_folder: Folder,
    selected_message: Option<MessageId>,
    search: String,
}

impl<S: Storage> MailStore<S> {
    /// Creates an empty store over the given storage backend.
    ///
    /// The collection stays empty until [`initialize`](Self::initialize) runs
    /// with a present user.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            messages: Vec::new(),
            user: None,
            selected_folder: Folder::Inbox,
            selected_message: None,
            search: String::new(),
        }
    }

    /// Loads the mailbox for a newly present user.
    ///
    /// Reads the persisted document, falling back to the demo seed when
    /// nothing is stored or the stored document fails to parse; a fresh seed
    /// is written through immediately. Calling with `None` is a defined
    /// no-op: presence triggers a load, absence changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or the seed cannot be
    /// persisted.
    pub fn initialize(&mut self, user: Option<UserIdentity>) -> Result<()> {
        let Some(user) = user else {
            return Ok(());
        };
        self.user = Some(user);

        match self.storage.read(MAILBOX_KEY)? {
            Some(raw) => match serde_json::from_str::<MailboxDocument>(&raw) {
                Ok(document) => {
                    debug!(count = document.emails.len(), "loaded persisted mailbox");
                    self.messages = document.emails;
                }
                Err(err) => {
                    warn!(%err, "stored mailbox is malformed, reseeding demo data");
                    self.seed()?;
                }
            },
            None => {
                debug!("no persisted mailbox, seeding demo data");
                self.seed()?;
            }
        }
        Ok(())
    }

    fn seed(&mut self) -> Result<()> {
        self.messages = Message::demo_messages();
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let document = MailboxDocument {
            emails: self.messages.clone(),
            folders: serde_json::Map::new(),
        };
        let raw = serde_json::to_string_pretty(&document)?;
        self.storage.write(MAILBOX_KEY, &raw)
    }

    /// The full collection, in storage order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// All messages in the given folder, in collection order.
    #[must_use]
    pub fn list_by_folder(&self, folder: Folder) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|m| m.folder == folder)
            .cloned()
            .collect()
    }

    /// Starred messages across all folders except trash.
    #[must_use]
    pub fn list_starred(&self) -> Vec<Message> {
        self.messages
            .iter()
            .filter(|m| m.starred && m.folder != Folder::Trash)
            .cloned()
            .collect()
    }

    /// Number of unread messages in the given folder.
    #[must_use]
    pub fn unread_count(&self, folder: Folder) -> usize {
        self.messages
            .iter()
            .filter(|m| m.folder == folder && !m.read)
            .count()
    }

    /// Marks the message as read. Silent no-op on unknown id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn mark_read(&mut self, id: MessageId) -> Result<()> {
        self.set_read(id, true)
    }

    /// Marks the message as unread. Silent no-op on unknown id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn mark_unread(&mut self, id: MessageId) -> Result<()> {
        self.set_read(id, false)
    }

    fn set_read(&mut self, id: MessageId, read: bool) -> Result<()> {
        let Some(message) = self.messages.iter_mut().find(|m| m.id == id) else {
            return Ok(());
        };
        message.read = read;
        self.persist()
    }

    /// Flips the starred flag. Silent no-op on unknown id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn toggle_star(&mut self, id: MessageId) -> Result<()> {
        let Some(message) = self.messages.iter_mut().find(|m| m.id == id) else {
            return Ok(());
        };
        message.starred = !message.starred;
        self.persist()
    }

    /// Moves the message to the given folder, unconditionally.
    ///
    /// Any variant is accepted, including folders without a sidebar entry.
    /// Silent no-op on unknown id.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn move_to_folder(&mut self, id: MessageId, folder: Folder) -> Result<()> {
        let Some(message) = self.messages.iter_mut().find(|m| m.id == id) else {
            return Ok(());
        };
        message.folder = folder;
        self.persist()
    }

    /// Moves the message to trash, clearing the selection when the deleted
    /// message is the selected one. No physical removal occurs; idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn soft_delete(&mut self, id: MessageId) -> Result<()> {
        if self.selected_message == Some(id) {
            self.selected_message = None;
        }
        self.move_to_folder(id, Folder::Trash)
    }

    /// Archives a composed draft as a sent message and returns it.
    ///
    /// The message lands in `Sent`, read, unstarred, stamped with the current
    /// time and a fresh id, sender taken from the active user identity (or
    /// the placeholder when signed out), and is prepended so it sorts first
    /// under recency ordering. No network transmission occurs.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn compose(&mut self, draft: ComposeDraft) -> Result<Message> {
        let sender = self.user.clone().unwrap_or_else(UserIdentity::placeholder);
        let sent_at = Utc::now();
        let message = Message {
            id: self.next_id(sent_at),
            from: sender.into(),
            to: draft.to,
            cc: draft.cc,
            subject: draft.subject,
            body: draft.body,
            sent_at,
            folder: Folder::Sent,
            read: true,
            starred: false,
            attachments: draft.attachments,
        };
        self.messages.insert(0, message.clone());
        self.persist()?;
        debug!(id = %message.id, "composed message archived to sent");
        Ok(message)
    }

    // Millisecond timestamps collide when composing twice within one tick.
    fn next_id(&self, sent_at: DateTime<Utc>) -> MessageId {
        let mut candidate = sent_at.timestamp_millis();
        while self.messages.iter().any(|m| m.id.0 == candidate) {
            candidate += 1;
        }
        MessageId(candidate)
    }

    /// The selected folder's messages, filtered by the active search term and
    /// sorted most recent first.
    ///
    /// A non-empty term retains messages where it appears (case-insensitive)
    /// in the subject, sender display name, sender address, or body. The sort
    /// is stable: ties in `sent_at` preserve collection order.
    #[must_use]
    pub fn filtered_view(&self) -> Vec<Message> {
        let mut view = self.list_by_folder(self.selected_folder);
        let term = self.search.trim();
        if !term.is_empty() {
            view.retain(|m| m.matches(term));
        }
        view.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
        view
    }

    /// Selects a folder for [`filtered_view`](Self::filtered_view).
    pub const fn select_folder(&mut self, folder: Folder) {
        self.selected_folder = folder;
    }

    /// The currently selected folder.
    #[must_use]
    pub const fn selected_folder(&self) -> Folder {
        self.selected_folder
    }

    /// Selects a message for the reading pane.
    pub const fn select_message(&mut self, id: MessageId) {
        self.selected_message = Some(id);
    }

    /// Clears the message selection.
    pub const fn clear_selection(&mut self) {
        self.selected_message = None;
    }

    /// Id of the currently selected message, if any.
    #[must_use]
    pub const fn selected_message(&self) -> Option<MessageId> {
        self.selected_message
    }

    /// The currently selected message, if it still exists.
    #[must_use]
    pub fn selected(&self) -> Option<&Message> {
        let id = self.selected_message?;
        self.messages.iter().find(|m| m.id == id)
    }

    /// Sets the free-text search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// The active search term.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }
}
