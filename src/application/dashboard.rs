//! Read-only dashboard aggregate: every kind's list endpoint fanned out
//! concurrently and reduced to item counts.
//!
//! The aggregate is all-or-nothing: if any one list call fails, the whole
//! load fails and no partial counts are shown. The stub kinds always
//! contribute zero.

use serde::Serialize;

use crate::application::resource::ResourceClient;
use crate::infra::api::{
    AnnouncementClient, ApiContext, ApiError, EventClient, GalleryClient, PageClient, SermonClient,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    pub sermons: usize,
    pub events: usize,
    pub announcements: usize,
    pub pages: usize,
    pub galleries: usize,
}

/// Count every kind's records in one concurrent sweep.
pub async fn load_stats(ctx: &ApiContext) -> Result<ContentStats, ApiError> {
    let sermons = SermonClient::new(ctx.clone());
    let events = EventClient::new(ctx.clone());
    let announcements = AnnouncementClient::new();
    let pages = PageClient::new();
    let gallery = GalleryClient::new(ctx.clone());

    let (sermons, events, announcements, pages, galleries) = futures::try_join!(
        sermons.list_all(),
        events.list_all(),
        announcements.list_all(),
        pages.list_all(),
        gallery.list_all(),
    )?;

    Ok(ContentStats {
        sermons: sermons.len(),
        events: events.len(),
        announcements: announcements.len(),
        pages: pages.len(),
        galleries: galleries.len(),
    })
}
