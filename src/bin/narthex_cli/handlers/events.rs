#![deny(clippy::all, clippy::pedantic)]

use narthex::application::forms::EventForm;
use narthex::application::manager::ManagerState;
use narthex::application::resource::ResourceClient;
use narthex::infra::api::{ApiContext, EventClient};

use crate::args::EventsCmd;
use crate::client::CliError;
use crate::handlers::{confirm_and_delete, ensure_clean, list_and_print};
use crate::print::print_json;

struct EventFieldArgs {
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    time: Option<String>,
    location: Option<String>,
    image_url: Option<String>,
    registration_required: Option<bool>,
    max_attendees: Option<u32>,
}

impl EventFieldArgs {
    fn apply(self, form: &mut EventForm) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(date) = self.date {
            form.date = date;
        }
        if let Some(time) = self.time {
            form.time = time;
        }
        if let Some(location) = self.location {
            form.location = location;
        }
        if let Some(image_url) = self.image_url {
            form.image_url = image_url;
        }
        if let Some(required) = self.registration_required {
            form.registration_required = required;
        }
        if let Some(cap) = self.max_attendees {
            form.max_attendees = cap.to_string();
        }
    }
}

pub async fn handle(ctx: &ApiContext, cmd: EventsCmd) -> Result<(), CliError> {
    let client = EventClient::new(ctx.clone());
    match cmd {
        EventsCmd::List { search } => list_and_print(client, search).await,
        EventsCmd::Get { id } => get(client, &id).await,
        EventsCmd::Create {
            title,
            description,
            date,
            time,
            location,
            image_url,
            registration_required,
            max_attendees,
        } => {
            let fields = EventFieldArgs {
                title: Some(title),
                description: Some(description),
                date: Some(date),
                time: Some(time),
                location: Some(location),
                image_url,
                registration_required,
                max_attendees,
            };
            create(client, fields).await
        }
        EventsCmd::Update {
            id,
            title,
            description,
            date,
            time,
            location,
            image_url,
            registration_required,
            max_attendees,
        } => {
            let fields = EventFieldArgs {
                title,
                description,
                date,
                time,
                location,
                image_url,
                registration_required,
                max_attendees,
            };
            update(client, &id, fields).await
        }
        EventsCmd::Delete { id, yes } => confirm_and_delete(client, &id, yes).await,
    }
}

async fn get(client: EventClient, id: &str) -> Result<(), CliError> {
    let event = client
        .get_by_id(id)
        .await?
        .ok_or_else(|| CliError::NotFound(format!("no event with id {id}")))?;
    print_json(&event)?;
    Ok(())
}

async fn create(client: EventClient, fields: EventFieldArgs) -> Result<(), CliError> {
    let mut form = EventForm::new();
    fields.apply(&mut form);

    let mut manager = ManagerState::new(client);
    manager.open_create(form.draft());
    manager.submit().await;
    ensure_clean(&manager)?;
    println!("created");
    Ok(())
}

async fn update(client: EventClient, id: &str, fields: EventFieldArgs) -> Result<(), CliError> {
    let mut manager = ManagerState::new(client);
    manager.load().await;
    ensure_clean(&manager)?;

    let record = manager
        .items()
        .iter()
        .find(|event| event.id == id)
        .cloned()
        .ok_or_else(|| CliError::NotFound(format!("no event with id {id}")))?;

    let mut form = EventForm::seeded(&record);
    fields.apply(&mut form);

    manager.open_edit(&record, form.draft());
    manager.submit().await;
    ensure_clean(&manager)?;
    println!("updated");
    Ok(())
}
