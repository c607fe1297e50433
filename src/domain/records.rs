//! Content records as the administration UI sees them.
//!
//! Field names follow the UI schema. The backend's wire schema differs for
//! some kinds (sermon `speaker`, event `requiresRegistration`/`capacity`)
//! and is translated symmetrically in `infra::api`; records here never leak
//! wire names. Identifiers are assigned by the backend, never locally.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Announcement priority, ordered least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sermon {
    pub id: String,
    pub title: String,
    pub description: String,
    pub preacher: String,
    /// Calendar date as entered, `YYYY-MM-DD`.
    pub date: String,
    pub scripture: String,
    pub series: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    /// Start time `HH:MM`. The backend has no time column; this value is
    /// client-held only and resets to a default on reload.
    pub time: String,
    pub location: String,
    pub registration_required: bool,
    pub image_url: Option<String>,
    /// Meaningful only when `registration_required` is set.
    pub max_attendees: Option<u32>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub publish_date: String,
    pub expiry_date: Option<String>,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    /// Derived from the title at creation time, stable thereafter.
    pub slug: String,
    pub content: String,
    pub is_published: bool,
    pub meta_description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: String,
    /// URL of the stored cover image; empty when none was uploaded yet.
    pub cover_image: String,
    /// Stored photo URLs in backend order.
    pub photos: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}
