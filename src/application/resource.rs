//! The generic resource seam: one client contract for all five content
//! kinds, plus the search surface each record exposes to its manager.
//!
//! The manager and dashboard are written once against these traits; the
//! per-kind differences (wire translation, multipart payloads, stub
//! behavior) live entirely in the `infra::api` implementations.

use async_trait::async_trait;

use crate::domain::records::{Announcement, Event, GalleryItem, Page, Sermon};
use crate::infra::api::ApiError;

/// A content record the manager can cache, identify, and search.
pub trait ContentRecord: Clone + Send + Sync {
    fn id(&self) -> &str;

    /// The text fields the live search matches against. Kind-specific by
    /// design: operators search sermons by preacher, events by location.
    fn search_haystack(&self) -> Vec<&str>;
}

/// CRUD contract implemented by every resource client.
///
/// Every call issues one network request; failures are opaque apart from
/// the stub resources' `Unimplemented` case.
#[async_trait]
pub trait ResourceClient: Send + Sync {
    type Record: ContentRecord;
    type Draft: Clone + Send + Sync;

    /// Path segment and log label for this kind.
    const KIND: &'static str;

    async fn list_all(&self) -> Result<Vec<Self::Record>, ApiError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Self::Record>, ApiError>;
    async fn create(&self, draft: Self::Draft) -> Result<Self::Record, ApiError>;
    async fn update(&self, id: &str, draft: Self::Draft) -> Result<Self::Record, ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Case-insensitive substring match; an empty term matches everything.
pub fn matches_term(record: &impl ContentRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record
        .search_haystack()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

impl ContentRecord for Sermon {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.title, &self.preacher, &self.scripture]
    }
}

impl ContentRecord for Event {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.title, &self.location]
    }
}

impl ContentRecord for Announcement {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.title, &self.content]
    }
}

impl ContentRecord for Page {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.title, &self.slug]
    }
}

impl ContentRecord for GalleryItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_haystack(&self) -> Vec<&str> {
        vec![&self.title, &self.description, &self.category]
    }
}
