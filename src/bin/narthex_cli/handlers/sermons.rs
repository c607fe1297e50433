#![deny(clippy::all, clippy::pedantic)]

use narthex::application::forms::SermonForm;
use narthex::application::manager::ManagerState;
use narthex::application::resource::ResourceClient;
use narthex::infra::api::{ApiContext, SermonClient};

use crate::args::SermonsCmd;
use crate::client::CliError;
use crate::handlers::{confirm_and_delete, ensure_clean, list_and_print};
use crate::print::print_json;

struct SermonFieldArgs {
    title: Option<String>,
    description: Option<String>,
    preacher: Option<String>,
    date: Option<String>,
    scripture: Option<String>,
    series: Option<String>,
    audio_url: Option<String>,
    video_url: Option<String>,
}

impl SermonFieldArgs {
    fn apply(self, form: &mut SermonForm) {
        if let Some(title) = self.title {
            form.title = title;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(preacher) = self.preacher {
            form.preacher = preacher;
        }
        if let Some(date) = self.date {
            form.date = date;
        }
        if let Some(scripture) = self.scripture {
            form.scripture = scripture;
        }
        if let Some(series) = self.series {
            form.series = series;
        }
        if let Some(audio_url) = self.audio_url {
            form.audio_url = audio_url;
        }
        if let Some(video_url) = self.video_url {
            form.video_url = video_url;
        }
    }
}

pub async fn handle(ctx: &ApiContext, cmd: SermonsCmd) -> Result<(), CliError> {
    let client = SermonClient::new(ctx.clone());
    match cmd {
        SermonsCmd::List { search } => list_and_print(client, search).await,
        SermonsCmd::Get { id } => get(client, &id).await,
        SermonsCmd::Create {
            title,
            description,
            preacher,
            date,
            scripture,
            series,
            audio_url,
            video_url,
        } => {
            let fields = SermonFieldArgs {
                title: Some(title),
                description: Some(description),
                preacher: Some(preacher),
                date: Some(date),
                scripture: Some(scripture),
                series,
                audio_url,
                video_url,
            };
            create(client, fields).await
        }
        SermonsCmd::Update {
            id,
            title,
            description,
            preacher,
            date,
            scripture,
            series,
            audio_url,
            video_url,
        } => {
            let fields = SermonFieldArgs {
                title,
                description,
                preacher,
                date,
                scripture,
                series,
                audio_url,
                video_url,
            };
            update(client, &id, fields).await
        }
        SermonsCmd::Delete { id, yes } => confirm_and_delete(client, &id, yes).await,
    }
}

async fn get(client: SermonClient, id: &str) -> Result<(), CliError> {
    let sermon = client
        .get_by_id(id)
        .await?
        .ok_or_else(|| CliError::NotFound(format!("no sermon with id {id}")))?;
    print_json(&sermon)?;
    Ok(())
}

async fn create(client: SermonClient, fields: SermonFieldArgs) -> Result<(), CliError> {
    let mut form = SermonForm::new();
    fields.apply(&mut form);

    let mut manager = ManagerState::new(client);
    manager.open_create(form.draft());
    manager.submit().await;
    ensure_clean(&manager)?;
    println!("created");
    Ok(())
}

async fn update(client: SermonClient, id: &str, fields: SermonFieldArgs) -> Result<(), CliError> {
    let mut manager = ManagerState::new(client);
    manager.load().await;
    ensure_clean(&manager)?;

    let record = manager
        .items()
        .iter()
        .find(|sermon| sermon.id == id)
        .cloned()
        .ok_or_else(|| CliError::NotFound(format!("no sermon with id {id}")))?;

    let mut form = SermonForm::seeded(&record);
    fields.apply(&mut form);

    manager.open_edit(&record, form.draft());
    manager.submit().await;
    ensure_clean(&manager)?;
    println!("updated");
    Ok(())
}
