//! Announcement resource client — stub.
//!
//! The backend has no announcements resource yet. Listing reports a
//! confirmed-empty collection; every mutation fails with the explicit
//! `Unimplemented` variant so callers can tell this apart from a transient
//! backend failure. There is no hidden state: the stub behaves identically
//! on every call.

use crate::application::resource::ResourceClient;
use crate::domain::drafts::AnnouncementDraft;
use crate::domain::records::Announcement;

use super::ApiError;

const RESOURCE: &str = "announcements";

#[derive(Clone, Debug, Default)]
pub struct AnnouncementClient;

impl AnnouncementClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ResourceClient for AnnouncementClient {
    type Record = Announcement;
    type Draft = AnnouncementDraft;

    const KIND: &'static str = RESOURCE;

    async fn list_all(&self) -> Result<Vec<Announcement>, ApiError> {
        Ok(Vec::new())
    }

    async fn get_by_id(&self, _id: &str) -> Result<Option<Announcement>, ApiError> {
        Ok(None)
    }

    async fn create(&self, _draft: AnnouncementDraft) -> Result<Announcement, ApiError> {
        Err(ApiError::Unimplemented(RESOURCE))
    }

    async fn update(&self, _id: &str, _draft: AnnouncementDraft) -> Result<Announcement, ApiError> {
        Err(ApiError::Unimplemented(RESOURCE))
    }

    async fn delete(&self, _id: &str) -> Result<(), ApiError> {
        Err(ApiError::Unimplemented(RESOURCE))
    }
}
