//! Message data models.

mod draft;
mod model;

pub use draft::ComposeDraft;
pub use model::{Attachment, Message, MessageId, Sender};
