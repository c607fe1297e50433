//! Page resource client — stub.
//!
//! Same contract as the announcements stub: the backend has no pages
//! resource yet, so listing is confirmed-empty and mutations fail with the
//! explicit `Unimplemented` variant.

use crate::application::resource::ResourceClient;
use crate::domain::drafts::PageDraft;
use crate::domain::records::Page;

use super::ApiError;

const RESOURCE: &str = "pages";

#[derive(Clone, Debug, Default)]
pub struct PageClient;

impl PageClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ResourceClient for PageClient {
    type Record = Page;
    type Draft = PageDraft;

    const KIND: &'static str = RESOURCE;

    async fn list_all(&self) -> Result<Vec<Page>, ApiError> {
        Ok(Vec::new())
    }

    async fn get_by_id(&self, _id: &str) -> Result<Option<Page>, ApiError> {
        Ok(None)
    }

    async fn create(&self, _draft: PageDraft) -> Result<Page, ApiError> {
        Err(ApiError::Unimplemented(RESOURCE))
    }

    async fn update(&self, _id: &str, _draft: PageDraft) -> Result<Page, ApiError> {
        Err(ApiError::Unimplemented(RESOURCE))
    }

    async fn delete(&self, _id: &str) -> Result<(), ApiError> {
        Err(ApiError::Unimplemented(RESOURCE))
    }
}
