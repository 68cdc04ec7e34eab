//! Compose draft model.

use super::model::{Attachment, Message};

/// Input to [`MailStore::compose`](crate::store::MailStore::compose).
///
/// Sender, folder, timestamps and flags are filled in by the store; the draft
/// only carries what the compose form collects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeDraft {
    /// Recipient addresses (To).
    pub to: Vec<String>,
    /// CC addresses.
    pub cc: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// Attachment descriptors.
    pub attachments: Vec<Attachment>,
}

impl ComposeDraft {
    /// Creates a new empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a draft replying to a message.
    ///
    /// Addresses the original sender, keeps an existing `Re:` prefix
    /// un-doubled, and quotes the original body.
    #[must_use]
    pub fn reply(original: &Message) -> Self {
        let subject = if original.subject.to_lowercase().starts_with("re:") {
            original.subject.clone()
        } else {
            format!("Re: {}", original.subject)
        };

        let body = format!("\n\n> {}", original.body.replace('\n', "\n> "));

        Self {
            to: vec![original.from.address.clone()],
            subject,
            body,
            ..Default::default()
        }
    }

    /// Creates a draft forwarding a message.
    #[must_use]
    pub fn forward(original: &Message) -> Self {
        let subject = if original.subject.to_lowercase().starts_with("fwd:") {
            original.subject.clone()
        } else {
            format!("Fwd: {}", original.subject)
        };

        let body = format!(
            "\n\n---------- Forwarded message ----------\nFrom: {} <{}>\n\n{}",
            original.from.display_name, original.from.address, original.body
        );

        Self {
            subject,
            body,
            attachments: original.attachments.clone(),
            ..Default::default()
        }
    }

    /// Validates the draft for sending.
    ///
    /// Advisory only; the store composes whatever it is given. Returns a
    /// user-facing problem description, or `None` when the draft looks fine.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.to.is_empty() {
            return Some("Please enter at least one recipient".to_string());
        }

        for recipient in self.to.iter().chain(&self.cc) {
            let recipient = recipient.trim();
            if !recipient.is_empty() && !recipient.contains('@') {
                return Some(format!("Invalid email address: {recipient}"));
            }
        }

        if self.subject.trim().is_empty() {
            return Some("Please enter a subject".to_string());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn original() -> Message {
        Message::demo_messages().remove(0)
    }

    mod reply_tests {
        use super::*;

        #[test]
        fn addresses_original_sender() {
            let draft = ComposeDraft::reply(&original());
            assert_eq!(draft.to, vec!["mike.anderson@example.com".to_string()]);
        }

        #[test]
        fn prefixes_subject() {
            let draft = ComposeDraft::reply(&original());
            assert_eq!(draft.subject, "Re: Quarterly planning notes");
        }

        #[test]
        fn keeps_existing_re_prefix() {
            let mut message = original();
            message.subject = "Re: Offsite agenda".into();
            let draft = ComposeDraft::reply(&message);
            assert_eq!(draft.subject, "Re: Offsite agenda");
        }

        #[test]
        fn quotes_every_body_line() {
            let mut message = original();
            message.body = "line one\nline two".into();
            let draft = ComposeDraft::reply(&message);
            assert!(draft.body.contains("> line one"));
            assert!(draft.body.contains("> line two"));
        }
    }

    mod forward_tests {
        use super::*;

        #[test]
        fn prefixes_subject() {
            let draft = ComposeDraft::forward(&original());
            assert_eq!(draft.subject, "Fwd: Quarterly planning notes");
        }

        #[test]
        fn keeps_existing_fwd_prefix() {
            let mut message = original();
            message.subject = "Fwd: Quarterly planning notes".into();
            let draft = ComposeDraft::forward(&message);
            assert_eq!(draft.subject, "Fwd: Quarterly planning notes");
        }

        #[test]
        fn body_names_original_sender() {
            let draft = ComposeDraft::forward(&original());
            assert!(draft.body.contains("Mike Anderson <mike.anderson@example.com>"));
        }

        #[test]
        fn leaves_recipients_empty() {
            let draft = ComposeDraft::forward(&original());
            assert!(draft.to.is_empty());
        }

        #[test]
        fn carries_attachments() {
            let message = Message::demo_messages().remove(2);
            let draft = ComposeDraft::forward(&message);
            assert_eq!(draft.attachments.len(), 1);
        }
    }

    mod validate_tests {
        use super::*;

        #[test]
        fn rejects_missing_recipient() {
            let draft = ComposeDraft {
                subject: "Hi".into(),
                ..Default::default()
            };
            assert!(draft.validate().is_some());
        }

        #[test]
        fn rejects_malformed_address() {
            let draft = ComposeDraft {
                to: vec!["not-an-address".into()],
                subject: "Hi".into(),
                ..Default::default()
            };
            let problem = draft.validate();
            assert!(problem.is_some_and(|p| p.contains("not-an-address")));
        }

        #[test]
        fn rejects_empty_subject() {
            let draft = ComposeDraft {
                to: vec!["ana@example.com".into()],
                subject: "  ".into(),
                ..Default::default()
            };
            assert!(draft.validate().is_some());
        }

        #[test]
        fn accepts_complete_draft() {
            let draft = ComposeDraft {
                to: vec!["ana@example.com".into()],
                cc: vec!["bob@example.com".into()],
                subject: "Hi".into(),
                body: "Test".into(),
                ..Default::default()
            };
            assert!(draft.validate().is_none());
        }
    }
}
