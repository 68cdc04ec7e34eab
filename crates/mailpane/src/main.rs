//! `MailPane` - demo webmail client
//!
//! Renders a locally persisted mock mailbox to the terminal: folder sidebar,
//! recency-grouped message list, and a reading pane for the newest message.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod view;

use mailpane_core::{FileStorage, MailStore, UserIdentity};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailpane=debug,mailpane_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MailPane");

    let storage = FileStorage::in_data_dir();
    info!("Mailbox storage at {:?}", storage.base());

    let mut store = MailStore::new(storage);
    store.initialize(Some(demo_user()))?;

    // Open the newest message in the selected folder, the way the webmail
    // lands on its reading pane.
    if let Some(newest) = store.filtered_view().first().map(|m| m.id) {
        store.select_message(newest);
    }

    print!("{}", view::render_session(&store));
    Ok(())
}

/// The mocked signed-in user; there is no real authentication.
fn demo_user() -> UserIdentity {
    UserIdentity::new("demo@mailpane.local", "Demo User")
}
