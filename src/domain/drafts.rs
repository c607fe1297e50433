//! Draft shapes submitted to the resource clients: a kind's required and
//! optional fields minus the backend-assigned id and timestamps.
//!
//! Optional fields are `None` when the operator left them blank; the form
//! layer guarantees an unset optional never round-trips as an empty string.

use crate::domain::records::Priority;

#[derive(Debug, Clone, PartialEq)]
pub struct SermonDraft {
    pub title: String,
    pub description: String,
    pub preacher: String,
    pub date: String,
    pub scripture: String,
    pub series: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub registration_required: bool,
    pub image_url: Option<String>,
    pub max_attendees: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementDraft {
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub publish_date: String,
    pub expiry_date: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub is_published: bool,
    pub meta_description: Option<String>,
}

/// A file picked for upload: name plus raw bytes. Carries no identity; the
/// backend assigns final URLs when it stores the attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: String,
    pub cover: Option<ImageAttachment>,
    pub photos: Vec<ImageAttachment>,
}
