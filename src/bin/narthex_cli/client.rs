#![deny(clippy::all, clippy::pedantic)]

use thiserror::Error;

use narthex::application::session::SessionError;
use narthex::config::{self, LoadError, Settings};
use narthex::infra::api::{ApiContext, ApiError};
use narthex::infra::telemetry::TelemetryError;

use crate::args::Cli;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("site URL is required (use --site or NARTHEX_SITE_URL)")]
    MissingSite,
    #[error("failed to load configuration: {0}")]
    Config(#[from] LoadError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("operation failed: {0}")]
    OperationFailed(String),
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Resolved per-invocation context: settings plus lazily-required API
/// plumbing. Session-only commands work without a site URL.
#[derive(Clone, Debug)]
pub struct Ctx {
    pub settings: Settings,
}

impl Ctx {
    pub fn api(&self) -> Result<ApiContext, CliError> {
        let base = self
            .settings
            .api
            .base_url
            .as_ref()
            .ok_or(CliError::MissingSite)?;
        Ok(ApiContext::new(base.as_str())?)
    }
}

pub fn build_ctx_from_cli(cli: &Cli) -> Result<Ctx, CliError> {
    let overrides = config::Overrides {
        base_url: cli.site.clone(),
        log_level: cli.log_level.clone(),
        log_json: cli.log_json,
        token_path: cli.token_path.clone(),
    };
    let settings = config::load(cli.config_file.as_deref(), &overrides)?;
    Ok(Ctx { settings })
}
