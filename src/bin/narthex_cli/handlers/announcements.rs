#![deny(clippy::all, clippy::pedantic)]

use narthex::application::forms::AnnouncementForm;
use narthex::application::manager::ManagerState;
use narthex::domain::records::Priority;
use narthex::infra::api::AnnouncementClient;

use crate::args::{AnnouncementsCmd, PriorityArg};
use crate::client::CliError;
use crate::handlers::{confirm_and_delete, ensure_clean, list_and_print};

pub async fn handle(cmd: AnnouncementsCmd) -> Result<(), CliError> {
    let client = AnnouncementClient::new();
    match cmd {
        AnnouncementsCmd::List { search } => list_and_print(client, search).await,
        AnnouncementsCmd::Create {
            title,
            content,
            priority,
            publish_date,
            expiry_date,
            is_active,
        } => {
            // Fails today: the backend has no announcements resource. Kept
            // wired so the stub contract stays exercised end to end.
            let mut form = AnnouncementForm::new();
            form.title = title;
            form.content = content;
            if let Some(priority) = priority {
                form.priority = priority.into();
            }
            if let Some(publish_date) = publish_date {
                form.publish_date = publish_date;
            }
            if let Some(expiry_date) = expiry_date {
                form.expiry_date = expiry_date;
            }
            if let Some(is_active) = is_active {
                form.is_active = is_active;
            }

            let mut manager = ManagerState::new(client);
            manager.open_create(form.draft());
            manager.submit().await;
            ensure_clean(&manager)?;
            println!("created");
            Ok(())
        }
        AnnouncementsCmd::Delete { id, yes } => confirm_and_delete(client, &id, yes).await,
    }
}

impl From<PriorityArg> for Priority {
    fn from(value: PriorityArg) -> Self {
        match value {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}
