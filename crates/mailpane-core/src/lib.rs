//! # mailpane-core
//!
//! Core business logic for the `MailPane` demo webmail client.
//!
//! This crate provides:
//! - The mail store - session-owned message collection with write-through
//!   persistence to a local key-value backend
//! - Folder views, unread accounting, and free-text filtering
//! - Recency bucketing for the message list
//! - Compose drafts with reply/forward prefill and validation
//! - Storage backends (in-memory and file-backed)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod error;
pub mod folder;
pub mod grouping;
pub mod identity;
pub mod message;
pub mod storage;
pub mod store;

pub use error::{Error, Result};
pub use folder::Folder;
pub use grouping::{RecencyBucket, group_by_recency, group_by_recency_at};
pub use identity::UserIdentity;
pub use message::{Attachment, ComposeDraft, Message, MessageId, Sender};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{MAILBOX_KEY, MailStore};
