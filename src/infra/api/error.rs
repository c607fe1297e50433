use thiserror::Error;

/// Failures surfaced by the resource clients.
///
/// The backend exposes no machine-readable error taxonomy; a non-2xx status
/// and a `success:false` envelope are equally opaque. `Unimplemented` is the
/// one distinguishable case: the backend has no announcements or pages
/// resource yet, and callers may want to tell "confirmed empty" apart from
/// "not wired up".
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("failed to {0}")]
    Rejected(&'static str),
    #[error("failed to decode response body: {0}")]
    Decode(String),
    #[error("{0} are not implemented by the backend yet")]
    Unimplemented(&'static str),
}

impl ApiError {
    /// True when the failure is the permanent stub-resource case rather
    /// than a transient transport or backend rejection.
    pub fn is_unimplemented(&self) -> bool {
        matches!(self, ApiError::Unimplemented(_))
    }
}
