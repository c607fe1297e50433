//! Per-kind form drafts: the editable field layer between operator input
//! and the resource clients.
//!
//! Forms hold plain strings and booleans the way an editor widget would.
//! Seeding an edit converts absent optional fields to empty strings;
//! `draft()` converts still-empty optionals back to absent, so an unset
//! optional never round-trips as an empty string server-side.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::domain::drafts::{
    AnnouncementDraft, EventDraft, GalleryDraft, ImageAttachment, PageDraft, SermonDraft,
};
use crate::domain::records::{Announcement, Event, GalleryItem, Page, Priority, Sermon};
use crate::domain::slug::derive_slug;

const GALLERY_DEFAULT_CATEGORY: &str = "general";

fn today() -> String {
    let format = format_description!("[year]-[month]-[day]");
    OffsetDateTime::now_utc()
        .date()
        .format(&format)
        .unwrap_or_default()
}

fn blank_to_none(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SermonForm {
    pub title: String,
    pub description: String,
    pub preacher: String,
    pub date: String,
    pub scripture: String,
    pub series: String,
    pub audio_url: String,
    pub video_url: String,
}

impl SermonForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(sermon: &Sermon) -> Self {
        Self {
            title: sermon.title.clone(),
            description: sermon.description.clone(),
            preacher: sermon.preacher.clone(),
            date: sermon.date.clone(),
            scripture: sermon.scripture.clone(),
            series: sermon.series.clone().unwrap_or_default(),
            audio_url: sermon.audio_url.clone().unwrap_or_default(),
            video_url: sermon.video_url.clone().unwrap_or_default(),
        }
    }

    pub fn draft(&self) -> SermonDraft {
        SermonDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            preacher: self.preacher.clone(),
            date: self.date.clone(),
            scripture: self.scripture.clone(),
            series: blank_to_none(&self.series),
            audio_url: blank_to_none(&self.audio_url),
            video_url: blank_to_none(&self.video_url),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub image_url: String,
    pub registration_required: bool,
    /// Edited as text like any other field; parsed at submit time.
    pub max_attendees: String,
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            image_url: event.image_url.clone().unwrap_or_default(),
            registration_required: event.registration_required,
            max_attendees: event
                .max_attendees
                .map(|n| n.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
            location: self.location.clone(),
            registration_required: self.registration_required,
            image_url: blank_to_none(&self.image_url),
            max_attendees: if self.max_attendees.is_empty() {
                None
            } else {
                self.max_attendees.parse().ok()
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnnouncementForm {
    pub title: String,
    pub content: String,
    pub priority: Priority,
    pub publish_date: String,
    pub expiry_date: String,
    pub is_active: bool,
}

impl AnnouncementForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            priority: Priority::Medium,
            publish_date: today(),
            expiry_date: String::new(),
            is_active: true,
        }
    }

    pub fn seeded(announcement: &Announcement) -> Self {
        Self {
            title: announcement.title.clone(),
            content: announcement.content.clone(),
            priority: announcement.priority,
            publish_date: announcement.publish_date.clone(),
            expiry_date: announcement.expiry_date.clone().unwrap_or_default(),
            is_active: announcement.is_active,
        }
    }

    pub fn draft(&self) -> AnnouncementDraft {
        AnnouncementDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            priority: self.priority,
            publish_date: self.publish_date.clone(),
            expiry_date: blank_to_none(&self.expiry_date),
            is_active: self.is_active,
        }
    }
}

impl Default for AnnouncementForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Page form. The slug is derived from the title only while creating a new
/// page; once a page exists, title edits never touch its slug, though the
/// slug field itself stays editable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageForm {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub is_published: bool,
    pub meta_description: String,
    editing_existing: bool,
}

impl PageForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(page: &Page) -> Self {
        Self {
            title: page.title.clone(),
            slug: page.slug.clone(),
            content: page.content.clone(),
            is_published: page.is_published,
            meta_description: page.meta_description.clone().unwrap_or_default(),
            editing_existing: true,
        }
    }

    /// Update the title, re-deriving the slug only for a not-yet-created
    /// page.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        if !self.editing_existing {
            self.slug = derive_slug(&self.title);
        }
    }

    pub fn draft(&self) -> PageDraft {
        PageDraft {
            title: self.title.clone(),
            slug: self.slug.clone(),
            content: self.content.clone(),
            is_published: self.is_published,
            meta_description: blank_to_none(&self.meta_description),
        }
    }
}

fn preview_data_url(attachment: &ImageAttachment) -> String {
    let mime = mime_guess::from_path(&attachment.file_name).first_or_octet_stream();
    format!(
        "data:{};base64,{}",
        mime.essence_str(),
        BASE64.encode(&attachment.bytes)
    )
}

/// Gallery form: text fields plus picked files with local previews.
///
/// Previews exist purely for operator feedback and carry no identity; they
/// are discarded with the form. The backend reconciles upload order against
/// the stored reference list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryForm {
    pub title: String,
    pub description: String,
    pub date: String,
    pub category: String,
    cover: Option<ImageAttachment>,
    photos: Vec<ImageAttachment>,
    cover_preview: Option<String>,
    photo_previews: Vec<String>,
}

impl GalleryForm {
    pub fn new() -> Self {
        Self {
            category: GALLERY_DEFAULT_CATEGORY.to_string(),
            ..Self::default()
        }
    }

    /// Seed from a stored gallery: previews come from the already-stored
    /// image references; no files are picked yet. Newly picked files are
    /// uploaded in addition to the stored references, not merged with them
    /// by position.
    pub fn seeded(item: &GalleryItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            date: item.date.clone(),
            category: item.category.clone(),
            cover: None,
            photos: Vec::new(),
            cover_preview: (!item.cover_image.is_empty()).then(|| item.cover_image.clone()),
            photo_previews: item.photos.clone(),
        }
    }

    pub fn pick_cover(&mut self, attachment: ImageAttachment) {
        self.cover_preview = Some(preview_data_url(&attachment));
        self.cover = Some(attachment);
    }

    /// Replace the picked photo set (and its previews) with a new
    /// selection.
    pub fn pick_photos(&mut self, attachments: Vec<ImageAttachment>) {
        self.photo_previews = attachments.iter().map(preview_data_url).collect();
        self.photos = attachments;
    }

    pub fn cover_preview(&self) -> Option<&str> {
        self.cover_preview.as_deref()
    }

    pub fn photo_previews(&self) -> &[String] {
        &self.photo_previews
    }

    pub fn draft(&self) -> GalleryDraft {
        GalleryDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date.clone(),
            category: self.category.clone(),
            cover: self.cover.clone(),
            photos: self.photos.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn stored_page() -> Page {
        Page {
            id: "5".into(),
            title: "Sunday Service".into(),
            slug: "sunday-service".into(),
            content: "Join us".into(),
            is_published: true,
            meta_description: None,
            created_at: datetime!(2024-01-01 00:00 UTC),
            updated_at: datetime!(2024-01-02 00:00 UTC),
        }
    }

    #[test]
    fn creating_derives_the_slug_from_the_title() {
        let mut form = PageForm::new();
        form.set_title("Sunday Service");
        assert_eq!(form.slug, "sunday-service");

        form.set_title("Men's Breakfast!!");
        assert_eq!(form.slug, "mens-breakfast");
    }

    #[test]
    fn editing_never_rederives_the_slug() {
        let mut form = PageForm::seeded(&stored_page());
        form.set_title("Sunday Gathering");
        assert_eq!(form.slug, "sunday-service");

        // The slug field itself stays independently editable.
        form.slug = "gathering".to_string();
        assert_eq!(form.draft().slug, "gathering");
    }

    #[test]
    fn unset_optionals_round_trip_as_absent() {
        let sermon = Sermon {
            id: "1".into(),
            title: "Faith Walk".into(),
            description: "…".into(),
            preacher: "Rev. Amara Osei".into(),
            date: "2024-03-10".into(),
            scripture: "Hebrews 11:1".into(),
            series: None,
            audio_url: None,
            video_url: None,
            created_at: datetime!(2024-03-10 08:00 UTC),
            updated_at: datetime!(2024-03-10 08:00 UTC),
        };

        let form = SermonForm::seeded(&sermon);
        assert_eq!(form.series, "", "absent optional edits as empty string");

        let draft = form.draft();
        assert_eq!(draft.series, None, "still-empty optional submits as absent");
        assert_eq!(draft.audio_url, None);
    }

    #[test]
    fn announcement_form_defaults() {
        let form = AnnouncementForm::new();
        assert_eq!(form.priority, Priority::Medium);
        assert!(form.is_active);
        assert_eq!(form.publish_date.len(), 10, "defaults to today's date");
        assert_eq!(form.expiry_date, "");
        assert_eq!(form.draft().expiry_date, None);
    }

    #[test]
    fn event_attendee_cap_parses_at_submit() {
        let mut form = EventForm::new();
        assert_eq!(form.draft().max_attendees, None);

        form.max_attendees = "40".to_string();
        assert_eq!(form.draft().max_attendees, Some(40));

        form.max_attendees = "not a number".to_string();
        assert_eq!(form.draft().max_attendees, None);
    }

    #[test]
    fn gallery_previews_come_from_stored_refs_then_picked_files() {
        let item = GalleryItem {
            id: "3".into(),
            title: "Easter 2024".into(),
            description: "Sunrise service".into(),
            date: "2024-03-31".into(),
            category: "events".into(),
            cover_image: "https://cdn.example.org/cover.jpg".into(),
            photos: vec!["https://cdn.example.org/1.jpg".into()],
            created_at: datetime!(2024-04-01 10:00 UTC),
            updated_at: datetime!(2024-04-01 10:00 UTC),
        };

        let mut form = GalleryForm::seeded(&item);
        assert_eq!(form.cover_preview(), Some("https://cdn.example.org/cover.jpg"));
        assert_eq!(form.photo_previews().len(), 1);
        assert!(form.draft().photos.is_empty(), "nothing picked yet");

        form.pick_photos(vec![ImageAttachment {
            file_name: "new.jpg".into(),
            bytes: vec![1, 2, 3],
        }]);
        assert_eq!(form.photo_previews().len(), 1);
        assert!(form.photo_previews()[0].starts_with("data:image/jpeg;base64,"));
        assert_eq!(form.draft().photos.len(), 1);
    }

    #[test]
    fn gallery_form_defaults_to_the_general_category() {
        let form = GalleryForm::new();
        assert_eq!(form.category, GALLERY_DEFAULT_CATEGORY);
        assert_eq!(form.cover_preview(), None);
    }
}
