#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use narthex::application::forms::GalleryForm;
use narthex::application::manager::ManagerState;
use narthex::application::resource::ResourceClient;
use narthex::infra::api::{ApiContext, GalleryClient};

use crate::args::GalleryCmd;
use crate::client::CliError;
use crate::handlers::{confirm_and_delete, ensure_clean, list_and_print};
use crate::io::{read_attachment, read_attachments};
use crate::print::print_json;

struct GalleryFieldArgs {
    title: Option<String>,
    description: Option<String>,
    date: Option<String>,
    category: Option<String>,
    cover: Option<PathBuf>,
    photos: Vec<PathBuf>,
}

impl GalleryFieldArgs {
    fn apply(self, form: &mut GalleryForm) -> Result<(), CliError> {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(date) = self.date {
            form.date = date;
        }
        if let Some(category) = self.category {
            form.category = category;
        }
        if let Some(path) = self.cover {
            form.pick_cover(read_attachment(&path)?);
        }
        if !self.photos.is_empty() {
            form.pick_photos(read_attachments(&self.photos)?);
        }
        Ok(())
    }
}

pub async fn handle(ctx: &ApiContext, cmd: GalleryCmd) -> Result<(), CliError> {
    let client = GalleryClient::new(ctx.clone());
    match cmd {
        GalleryCmd::List { search } => list_and_print(client, search).await,
        GalleryCmd::Get { id } => get(client, &id).await,
        GalleryCmd::Create {
            title,
            description,
            date,
            category,
            cover,
            photos,
        } => {
            let fields = GalleryFieldArgs {
                title: Some(title),
                description: Some(description),
                date: Some(date),
                category,
                cover,
                photos,
            };
            create(client, fields).await
        }
        GalleryCmd::Update {
            id,
            title,
            description,
            date,
            category,
            cover,
            photos,
        } => {
            let fields = GalleryFieldArgs {
                title,
                description,
                date,
                category,
                cover,
                photos,
            };
            update(client, &id, fields).await
        }
        GalleryCmd::Delete { id, yes } => confirm_and_delete(client, &id, yes).await,
    }
}

async fn get(client: GalleryClient, id: &str) -> Result<(), CliError> {
    let item = client
        .get_by_id(id)
        .await?
        .ok_or_else(|| CliError::NotFound(format!("no gallery with id {id}")))?;
    print_json(&item)?;
    Ok(())
}

async fn create(client: GalleryClient, fields: GalleryFieldArgs) -> Result<(), CliError> {
    let mut form = GalleryForm::new();
    fields.apply(&mut form)?;

    let mut manager = ManagerState::new(client);
    manager.open_create(form.draft());
    manager.submit().await;
    ensure_clean(&manager)?;
    println!("created");
    Ok(())
}

async fn update(client: GalleryClient, id: &str, fields: GalleryFieldArgs) -> Result<(), CliError> {
    let mut manager = ManagerState::new(client);
    manager.load().await;
    ensure_clean(&manager)?;

    let record = manager
        .items()
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .ok_or_else(|| CliError::NotFound(format!("no gallery with id {id}")))?;

    // Seeding keeps the stored images; any files given here are uploaded
    // in addition to them.
    let mut form = GalleryForm::seeded(&record);
    fields.apply(&mut form)?;

    manager.open_edit(&record, form.draft());
    manager.submit().await;
    ensure_clean(&manager)?;
    println!("updated");
    Ok(())
}
