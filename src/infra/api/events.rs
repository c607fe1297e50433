//! Event resource client.
//!
//! The wire schema differs from the UI schema in three ways: registration
//! fields are named `requiresRegistration`/`capacity`, every write carries a
//! fixed `type` column, and there is no time column at all. A decoded event
//! gets [`DEFAULT_EVENT_TIME`]; create and update re-apply the draft's time
//! to the returned record so the value survives within a session. It does
//! not survive a reload — the backend has nowhere to store it.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::application::resource::ResourceClient;
use crate::domain::drafts::EventDraft;
use crate::domain::records::Event;

use super::{ApiContext, ApiError, deserialize_id};

/// Stand-in start time for events read back from the backend.
pub const DEFAULT_EVENT_TIME: &str = "18:00";

const EVENT_TYPE: &str = "general";

#[derive(Clone, Debug)]
pub struct EventClient {
    ctx: ApiContext,
}

impl EventClient {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireEvent {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    date: String,
    location: String,
    #[serde(default)]
    requires_registration: Option<bool>,
    #[serde(default)]
    capacity: Option<u32>,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(default, with = "time::serde::rfc3339::option")]
    updated_at: Option<OffsetDateTime>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventPayload<'a> {
    title: &'a str,
    date: &'a str,
    location: &'a str,
    description: &'a str,
    r#type: &'a str,
    requires_registration: bool,
    capacity: u32,
}

/// The wire `date` is sometimes a full timestamp; only the date part is
/// meaningful to the UI.
fn date_part(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

fn decode(wire: WireEvent) -> Event {
    let created_at = wire.created_at;
    Event {
        id: wire.id,
        title: wire.title,
        description: wire.description.unwrap_or_default(),
        date: date_part(&wire.date).to_string(),
        time: DEFAULT_EVENT_TIME.to_string(),
        location: wire.location,
        registration_required: wire.requires_registration.unwrap_or(false),
        image_url: None,
        max_attendees: wire.capacity.filter(|capacity| *capacity > 0),
        created_at,
        updated_at: wire.updated_at.unwrap_or(created_at),
    }
}

fn encode(draft: &EventDraft) -> Result<serde_json::Value, ApiError> {
    let payload = EventPayload {
        title: &draft.title,
        date: &draft.date,
        location: &draft.location,
        description: &draft.description,
        r#type: EVENT_TYPE,
        requires_registration: draft.registration_required,
        capacity: draft.max_attendees.unwrap_or(0),
    };
    serde_json::to_value(payload).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Carry the client-held time onto a freshly decoded record.
fn apply_draft_time(mut event: Event, draft: &EventDraft) -> Event {
    if !draft.time.is_empty() {
        event.time = draft.time.clone();
    }
    event
}

#[async_trait::async_trait]
impl ResourceClient for EventClient {
    type Record = Event;
    type Draft = EventDraft;

    const KIND: &'static str = "events";

    async fn list_all(&self) -> Result<Vec<Event>, ApiError> {
        let wires: Vec<WireEvent> = self.ctx.get_json("events", "fetch events").await?;
        Ok(wires.into_iter().map(decode).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Event>, ApiError> {
        let wire: Option<WireEvent> = self.ctx.get_json_opt(&format!("events/{id}")).await?;
        Ok(wire.map(decode))
    }

    async fn create(&self, draft: EventDraft) -> Result<Event, ApiError> {
        let wire: WireEvent = self
            .ctx
            .send_json(Method::POST, "events", &encode(&draft)?, "create event")
            .await?;
        Ok(apply_draft_time(decode(wire), &draft))
    }

    async fn update(&self, id: &str, draft: EventDraft) -> Result<Event, ApiError> {
        let wire: WireEvent = self
            .ctx
            .send_json(
                Method::PUT,
                &format!("events/{id}"),
                &encode(&draft)?,
                "update event",
            )
            .await?;
        Ok(apply_draft_time(decode(wire), &draft))
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.ctx
            .send_unit(Method::DELETE, &format!("events/{id}"), "delete event")
            .await
    }
}
