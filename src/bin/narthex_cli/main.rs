//! narthex-cli: operator command-line for the church content backend.
//! The thin dispatch layer over the library's session, manager, and
//! dashboard state; request/response shapes come from the library crate.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod handlers;
mod io;
mod print;
#[cfg(test)]
mod tests;

use clap::Parser;

use args::{Cli, Commands};
use client::{CliError, build_ctx_from_cli};
use handlers::{announcements, auth, dashboard, events, gallery, pages, sermons};
use narthex::infra::telemetry;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = build_ctx_from_cli(&cli)?;
    telemetry::init(&ctx.settings.logging)?;

    match cli.command {
        Commands::Login { email, password } => auth::login(&ctx.settings, &email, &password)?,
        Commands::Logout => auth::logout(&ctx.settings)?,
        Commands::Whoami => auth::whoami(&ctx.settings)?,
        Commands::Dashboard => dashboard::handle(&ctx.api()?).await?,
        Commands::Sermons(cmd) => sermons::handle(&ctx.api()?, cmd.action).await?,
        Commands::Events(cmd) => events::handle(&ctx.api()?, cmd.action).await?,
        Commands::Announcements(cmd) => announcements::handle(cmd.action).await?,
        Commands::Pages(cmd) => pages::handle(cmd.action).await?,
        Commands::Gallery(cmd) => gallery::handle(&ctx.api()?, cmd.action).await?,
    }

    Ok(())
}
