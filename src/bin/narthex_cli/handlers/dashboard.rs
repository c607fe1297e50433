#![deny(clippy::all, clippy::pedantic)]

use narthex::application::dashboard::load_stats;
use narthex::infra::api::ApiContext;

use crate::client::CliError;
use crate::print::print_json;

pub async fn handle(ctx: &ApiContext) -> Result<(), CliError> {
    let stats = load_stats(ctx).await?;
    print_json(&stats)?;
    Ok(())
}
