//! Sermon resource client.
//!
//! The wire schema names the preacher `speaker` and additionally carries
//! `notesUrl` and `featured` columns this UI never edits; both are sent as
//! fixed values on every write so the backend keeps a consistent row shape.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::application::resource::ResourceClient;
use crate::domain::drafts::SermonDraft;
use crate::domain::records::Sermon;

use super::{ApiContext, ApiError, deserialize_id};

#[derive(Clone, Debug)]
pub struct SermonClient {
    ctx: ApiContext,
}

impl SermonClient {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSermon {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    speaker: String,
    date: String,
    #[serde(default)]
    scripture: Option<String>,
    #[serde(default)]
    series: Option<String>,
    #[serde(default)]
    audio_url: Option<String>,
    #[serde(default)]
    video_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    updated_at: Option<OffsetDateTime>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SermonPayload<'a> {
    title: &'a str,
    speaker: &'a str,
    date: &'a str,
    description: &'a str,
    scripture: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    series: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    audio_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    video_url: Option<&'a str>,
    notes_url: &'a str,
    featured: bool,
}

fn decode(wire: WireSermon) -> Sermon {
    let created_at = wire.created_at;
    Sermon {
        id: wire.id,
        title: wire.title,
        description: wire.description.unwrap_or_default(),
        preacher: wire.speaker,
        date: wire.date,
        scripture: wire.scripture.unwrap_or_default(),
        series: wire.series.filter(|s| !s.is_empty()),
        audio_url: wire.audio_url.filter(|s| !s.is_empty()),
        video_url: wire.video_url.filter(|s| !s.is_empty()),
        created_at,
        updated_at: wire.updated_at.unwrap_or(created_at),
    }
}

fn encode(draft: &SermonDraft) -> Result<serde_json::Value, ApiError> {
    let payload = SermonPayload {
        title: &draft.title,
        speaker: &draft.preacher,
        date: &draft.date,
        description: &draft.description,
        scripture: &draft.scripture,
        series: draft.series.as_deref(),
        audio_url: draft.audio_url.as_deref(),
        video_url: draft.video_url.as_deref(),
        notes_url: "",
        featured: false,
    };
    serde_json::to_value(payload).map_err(|err| ApiError::Decode(err.to_string()))
}

#[async_trait::async_trait]
impl ResourceClient for SermonClient {
    type Record = Sermon;
    type Draft = SermonDraft;

    const KIND: &'static str = "sermons";

    async fn list_all(&self) -> Result<Vec<Sermon>, ApiError> {
        let wires: Vec<WireSermon> = self.ctx.get_json("sermons", "fetch sermons").await?;
        Ok(wires.into_iter().map(decode).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Sermon>, ApiError> {
        let wire: Option<WireSermon> = self.ctx.get_json_opt(&format!("sermons/{id}")).await?;
        Ok(wire.map(decode))
    }

    async fn create(&self, draft: SermonDraft) -> Result<Sermon, ApiError> {
        let wire: WireSermon = self
            .ctx
            .send_json(Method::POST, "sermons", &encode(&draft)?, "create sermon")
            .await?;
        Ok(decode(wire))
    }

    async fn update(&self, id: &str, draft: SermonDraft) -> Result<Sermon, ApiError> {
        let wire: WireSermon = self
            .ctx
            .send_json(
                Method::PUT,
                &format!("sermons/{id}"),
                &encode(&draft)?,
                "update sermon",
            )
            .await?;
        Ok(decode(wire))
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.ctx
            .send_unit(Method::DELETE, &format!("sermons/{id}"), "delete sermon")
            .await
    }
}
