#![deny(clippy::all, clippy::pedantic)]

use narthex::application::forms::PageForm;
use narthex::application::manager::ManagerState;
use narthex::infra::api::PageClient;

use crate::args::PagesCmd;
use crate::client::CliError;
use crate::handlers::{confirm_and_delete, ensure_clean, list_and_print};

pub async fn handle(cmd: PagesCmd) -> Result<(), CliError> {
    let client = PageClient::new();
    match cmd {
        PagesCmd::List { search } => list_and_print(client, search).await,
        PagesCmd::Create {
            title,
            slug,
            content,
            is_published,
            meta_description,
        } => create(client, title, slug, content, is_published, meta_description).await,
        PagesCmd::Update {
            id,
            title,
            slug,
            content,
            is_published,
            meta_description,
        } => {
            update(
                client,
                &id,
                title,
                slug,
                content,
                is_published,
                meta_description,
            )
            .await
        }
        PagesCmd::Delete { id, yes } => confirm_and_delete(client, &id, yes).await,
    }
}

// Fails today: the backend has no pages resource. The slug rules still run
// locally, so the command exercises the full form path up to the stub.
async fn create(
    client: PageClient,
    title: String,
    slug: Option<String>,
    content: String,
    is_published: Option<bool>,
    meta_description: Option<String>,
) -> Result<(), CliError> {
    let mut form = PageForm::new();
    form.set_title(title);
    if let Some(slug) = slug {
        form.slug = slug;
    }
    form.content = content;
    if let Some(is_published) = is_published {
        form.is_published = is_published;
    }
    if let Some(meta_description) = meta_description {
        form.meta_description = meta_description;
    }

    let mut manager = ManagerState::new(client);
    manager.open_create(form.draft());
    manager.submit().await;
    ensure_clean(&manager)?;
    println!("created");
    Ok(())
}

async fn update(
    client: PageClient,
    id: &str,
    title: Option<String>,
    slug: Option<String>,
    content: Option<String>,
    is_published: Option<bool>,
    meta_description: Option<String>,
) -> Result<(), CliError> {
    let mut manager = ManagerState::new(client);
    manager.load().await;
    ensure_clean(&manager)?;

    let record = manager
        .items()
        .iter()
        .find(|page| page.id == id)
        .cloned()
        .ok_or_else(|| CliError::NotFound(format!("no page with id {id}")))?;

    let mut form = PageForm::seeded(&record);
    if let Some(title) = title {
        // Title edits never touch an existing page's slug.
        form.set_title(title);
    }
    if let Some(slug) = slug {
        form.slug = slug;
    }
    if let Some(content) = content {
        form.content = content;
    }
    if let Some(is_published) = is_published {
        form.is_published = is_published;
    }
    if let Some(meta_description) = meta_description {
        form.meta_description = meta_description;
    }

    manager.open_edit(&record, form.draft());
    manager.submit().await;
    ensure_clean(&manager)?;
    println!("updated");
    Ok(())
}
