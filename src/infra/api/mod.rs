//! HTTP resource clients for the backend REST service.
//!
//! Every JSON response is wrapped in a `{success, data}` envelope; a
//! non-2xx status or `success:false` is an opaque failure. Each call issues
//! exactly one request: no retries, no deduplication, no caching. Requests
//! are sent unauthenticated; the session token is a purely local artifact
//! (see `application::session`).

use reqwest::{Client, Method, Response, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

pub mod announcements;
pub mod auth;
mod error;
pub mod events;
pub mod gallery;
pub mod pages;
pub mod sermons;

pub use announcements::AnnouncementClient;
pub use error::ApiError;
pub use events::EventClient;
pub use gallery::GalleryClient;
pub use pages::PageClient;
pub use sermons::SermonClient;

/// Shared request plumbing: one `reqwest` client plus the resolved base URL.
#[derive(Clone, Debug)]
pub struct ApiContext {
    client: Client,
    base: Url,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
}

impl ApiContext {
    pub fn new(site: &str) -> Result<Self, ApiError> {
        let base = Url::parse(site)?.join("/")?;
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("narthex/", env!("CARGO_PKG_VERSION"))
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base.join(path).map_err(ApiError::Url)
    }

    /// GET `path` and unwrap the envelope; a `success:false` envelope is
    /// reported as `Rejected` with the supplied operation label.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        operation: &'static str,
    ) -> Result<T, ApiError> {
        let resp = self.client.get(self.url(path)?).send().await?;
        let envelope: Envelope<T> = Self::handle(resp).await?;
        match envelope {
            Envelope {
                success: true,
                data: Some(data),
            } => Ok(data),
            _ => Err(ApiError::Rejected(operation)),
        }
    }

    /// GET `path` for a single record; a `success:false` envelope or a
    /// missing payload reads as "absent", not as a failure.
    pub(crate) async fn get_json_opt<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let resp = self.client.get(self.url(path)?).send().await?;
        let envelope: Envelope<T> = Self::handle(resp).await?;
        Ok(envelope.success.then_some(envelope.data).flatten())
    }

    /// Send a JSON body and unwrap the envelope.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &serde_json::Value,
        operation: &'static str,
    ) -> Result<T, ApiError> {
        let resp = self
            .client
            .request(method, self.url(path)?)
            .json(body)
            .send()
            .await?;
        let envelope: Envelope<T> = Self::handle(resp).await?;
        match envelope {
            Envelope {
                success: true,
                data: Some(data),
            } => Ok(data),
            _ => Err(ApiError::Rejected(operation)),
        }
    }

    /// Issue a request whose envelope carries no payload of interest
    /// (deletes); only the `success` flag is checked.
    pub(crate) async fn send_unit(
        &self,
        method: Method,
        path: &str,
        operation: &'static str,
    ) -> Result<(), ApiError> {
        let resp = self
            .client
            .request(method, self.url(path)?)
            .send()
            .await?;
        let envelope: Envelope<serde_json::Value> = Self::handle(resp).await?;
        if envelope.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(operation))
        }
    }

    /// Send a multipart form (binary attachments) and unwrap the envelope.
    /// No JSON content-type negotiation happens here; `reqwest` sets the
    /// multipart boundary header itself.
    pub(crate) async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
        operation: &'static str,
    ) -> Result<T, ApiError> {
        let resp = self
            .client
            .request(method, self.url(path)?)
            .multipart(form)
            .send()
            .await?;
        let envelope: Envelope<T> = Self::handle(resp).await?;
        match envelope {
            Envelope {
                success: true,
                data: Some(data),
            } => Ok(data),
            _ => Err(ApiError::Rejected(operation)),
        }
    }

    async fn handle<T: DeserializeOwned>(resp: Response) -> Result<Envelope<T>, ApiError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            return Err(ApiError::Status { status, body });
        }
        serde_json::from_slice(&bytes).map_err(|err| ApiError::Decode(err.to_string()))
    }
}

/// Backend ids arrive as JSON numbers or strings depending on the table;
/// the UI schema normalizes them to strings.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}
