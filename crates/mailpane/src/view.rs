//! Terminal rendering of the mailbox.
//!
//! Pure formatting over the store's read API; nothing here mutates state.

use chrono::{DateTime, Local, Utc};

use mailpane_core::{
    Folder, MailStore, Message, RecencyBucket, Storage, group_by_recency,
};

/// Renders the full session view: sidebar, grouped message list, and the
/// reading pane when a message is selected.
pub fn render_session<S: Storage>(store: &MailStore<S>) -> String {
    let mut out = String::new();
    out.push_str(&render_sidebar(store));
    out.push('\n');
    out.push_str(&render_message_list(&group_by_recency(
        &store.filtered_view(),
    )));
    if let Some(message) = store.selected() {
        out.push('\n');
        out.push_str(&render_reading_pane(message));
    }
    out
}

/// Renders the folder sidebar with unread counts.
pub fn render_sidebar<S: Storage>(store: &MailStore<S>) -> String {
    let mut out = String::from("Folders\n");
    for folder in Folder::ALL {
        let unread = store.unread_count(folder);
        let marker = if folder == store.selected_folder() {
            '>'
        } else {
            ' '
        };
        if unread > 0 {
            out.push_str(&format!(
                "{marker} {} ({unread})\n",
                folder.display_name()
            ));
        } else {
            out.push_str(&format!("{marker} {}\n", folder.display_name()));
        }
    }
    out
}

/// Renders the bucketed message list.
pub fn render_message_list(grouped: &[(RecencyBucket, Vec<Message>)]) -> String {
    if grouped.is_empty() {
        return String::from("No messages\n");
    }

    let mut out = String::new();
    for (bucket, messages) in grouped {
        out.push_str(&format!("-- {} --\n", bucket.label()));
        for message in messages {
            out.push_str(&render_row(message));
        }
    }
    out
}

fn render_row(message: &Message) -> String {
    let unread = if message.read { ' ' } else { '*' };
    let starred = if message.starred { '+' } else { ' ' };
    let clip = if message.attachments.is_empty() {
        ' '
    } else {
        '@'
    };
    format!(
        "{unread}{starred}{clip} {:<20} {:<42} {}\n",
        message.from.display_name,
        message.subject,
        format_date(message.sent_at)
    )
}

/// Renders the reading pane for the selected message.
pub fn render_reading_pane(message: &Message) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "From: {} <{}>\n",
        message.from.display_name, message.from.address
    ));
    if !message.to.is_empty() {
        out.push_str(&format!("To: {}\n", message.to.join(", ")));
    }
    if !message.cc.is_empty() {
        out.push_str(&format!("Cc: {}\n", message.cc.join(", ")));
    }
    out.push_str(&format!("Date: {}\n", format_date(message.sent_at)));
    out.push_str(&format!("Subject: {}\n", message.subject));
    for attachment in &message.attachments {
        out.push_str(&format!(
            "Attachment: {} ({}, {} bytes)\n",
            attachment.file_name, attachment.mime_type, attachment.size
        ));
    }
    out.push('\n');
    out.push_str(&message.body);
    out.push('\n');
    out
}

/// Formats a timestamp in the local timezone for display.
fn format_date(sent_at: DateTime<Utc>) -> String {
    let local: DateTime<Local> = sent_at.with_timezone(&Local);
    local.format("%a, %d %b %Y %H:%M").to_string()
}
