//! Gallery resource client.
//!
//! Unlike the other kinds, gallery writes carry binary attachments: create
//! and update send a multipart form (text fields, an optional cover image,
//! zero or more photos). The backend reconciles upload order and assigns
//! final URLs; the client never invents image identities. Reads and deletes
//! are ordinary JSON-envelope calls.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::application::resource::ResourceClient;
use crate::domain::drafts::{GalleryDraft, ImageAttachment};
use crate::domain::records::GalleryItem;

use super::{ApiContext, ApiError, deserialize_id};

#[derive(Clone, Debug)]
pub struct GalleryClient {
    ctx: ApiContext,
}

impl GalleryClient {
    pub fn new(ctx: ApiContext) -> Self {
        Self { ctx }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireGalleryItem {
    #[serde(deserialize_with = "deserialize_id")]
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    cover_image: Option<String>,
    #[serde(default)]
    photos: Option<Vec<String>>,
    // The gallery endpoint predates the shared row conventions; tolerate
    // rows without timestamps instead of failing the whole list.
    #[serde(default, with = "time::serde::rfc3339::option")]
    created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    updated_at: Option<OffsetDateTime>,
}

fn decode(wire: WireGalleryItem) -> GalleryItem {
    let created_at = wire.created_at.unwrap_or(OffsetDateTime::UNIX_EPOCH);
    GalleryItem {
        id: wire.id,
        title: wire.title,
        description: wire.description.unwrap_or_default(),
        date: wire.date.unwrap_or_default(),
        category: wire.category.unwrap_or_default(),
        cover_image: wire.cover_image.unwrap_or_default(),
        photos: wire.photos.unwrap_or_default(),
        created_at,
        updated_at: wire.updated_at.unwrap_or(created_at),
    }
}

fn attachment_part(attachment: &ImageAttachment) -> Result<Part, ApiError> {
    let mime = mime_guess::from_path(&attachment.file_name).first_or_octet_stream();
    Part::bytes(attachment.bytes.clone())
        .file_name(attachment.file_name.clone())
        .mime_str(mime.essence_str())
        .map_err(|err| ApiError::Decode(err.to_string()))
}

fn encode(draft: &GalleryDraft) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("title", draft.title.clone())
        .text("date", draft.date.clone())
        .text("description", draft.description.clone())
        .text("category", draft.category.clone());

    if let Some(cover) = &draft.cover {
        form = form.part("coverImage", attachment_part(cover)?);
    }
    for photo in &draft.photos {
        form = form.part("photos", attachment_part(photo)?);
    }

    Ok(form)
}

#[async_trait::async_trait]
impl ResourceClient for GalleryClient {
    type Record = GalleryItem;
    type Draft = GalleryDraft;

    const KIND: &'static str = "gallery";

    async fn list_all(&self) -> Result<Vec<GalleryItem>, ApiError> {
        let wires: Vec<WireGalleryItem> =
            self.ctx.get_json("gallery", "fetch gallery items").await?;
        Ok(wires.into_iter().map(decode).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<GalleryItem>, ApiError> {
        let wire: Option<WireGalleryItem> =
            self.ctx.get_json_opt(&format!("gallery/{id}")).await?;
        Ok(wire.map(decode))
    }

    async fn create(&self, draft: GalleryDraft) -> Result<GalleryItem, ApiError> {
        let wire: WireGalleryItem = self
            .ctx
            .send_multipart(Method::POST, "gallery", encode(&draft)?, "create gallery item")
            .await?;
        Ok(decode(wire))
    }

    async fn update(&self, id: &str, draft: GalleryDraft) -> Result<GalleryItem, ApiError> {
        let wire: WireGalleryItem = self
            .ctx
            .send_multipart(
                Method::PUT,
                &format!("gallery/{id}"),
                encode(&draft)?,
                "update gallery item",
            )
            .await?;
        Ok(decode(wire))
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.ctx
            .send_unit(Method::DELETE, &format!("gallery/{id}"), "delete gallery item")
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    fn client(server: &MockServer) -> GalleryClient {
        let ctx = ApiContext::new(&server.base_url()).expect("ctx");
        GalleryClient::new(ctx)
    }

    fn wire_item_json() -> serde_json::Value {
        json!({
            "id": 3,
            "title": "Easter 2024",
            "description": "Sunrise service",
            "date": "2024-03-31",
            "category": "events",
            "coverImage": "https://cdn.example.org/easter/cover.jpg",
            "photos": [
                "https://cdn.example.org/easter/1.jpg",
                "https://cdn.example.org/easter/2.jpg",
            ],
            "createdAt": "2024-04-01T10:00:00.000Z",
        })
    }

    #[tokio::test]
    async fn create_sends_multipart_without_json_content_type() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/gallery")
                .header_matches("content-type", "^multipart/form-data.*")
                .body_includes("Easter 2024")
                .body_includes("cover.jpg");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"success": true, "data": wire_item_json()}));
        });

        let draft = GalleryDraft {
            title: "Easter 2024".into(),
            description: "Sunrise service".into(),
            date: "2024-03-31".into(),
            category: "events".into(),
            cover: Some(ImageAttachment {
                file_name: "cover.jpg".into(),
                bytes: vec![0xff, 0xd8, 0xff],
            }),
            photos: vec![ImageAttachment {
                file_name: "one.jpg".into(),
                bytes: vec![0xff, 0xd8, 0xfe],
            }],
        };
        let created = client(&server).create(draft).await?;
        mock.assert();
        assert_eq!(created.id, "3");
        assert_eq!(created.photos.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn list_tolerates_sparse_rows() -> Result<(), ApiError> {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/gallery");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"success": true, "data": [{"id": 7, "title": "Picnic"}]}));
        });

        let items = client(&server).list_all().await?;
        let item = &items[0];
        assert_eq!(item.id, "7");
        assert_eq!(item.cover_image, "");
        assert!(item.photos.is_empty());
        assert_eq!(item.updated_at, item.created_at);
        Ok(())
    }

    #[tokio::test]
    async fn delete_checks_the_envelope() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("DELETE").path("/gallery/3");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"success": false}));
        });

        let err = client(&server).delete("3").await.expect_err("rejected");
        assert!(matches!(err, ApiError::Rejected("delete gallery item")));
    }
}
