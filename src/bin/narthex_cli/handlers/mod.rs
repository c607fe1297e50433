#![deny(clippy::all, clippy::pedantic)]

pub mod announcements;
pub mod auth;
pub mod dashboard;
pub mod events;
pub mod gallery;
pub mod pages;
pub mod sermons;

use narthex::application::manager::ManagerState;
use narthex::application::resource::ResourceClient;

use crate::client::CliError;
use crate::print::print_json;

/// Surface a manager-level failure as a non-zero exit.
pub(crate) fn ensure_clean<C: ResourceClient>(manager: &ManagerState<C>) -> Result<(), CliError> {
    match manager.last_error() {
        Some(message) => Err(CliError::OperationFailed(message.to_string())),
        None => Ok(()),
    }
}

/// Load, optionally filter, and print one kind's records.
pub(crate) async fn list_and_print<C: ResourceClient>(
    client: C,
    search: Option<String>,
) -> Result<(), CliError>
where
    C::Record: serde::Serialize,
{
    let mut manager = ManagerState::new(client);
    manager.load().await;
    ensure_clean(&manager)?;
    if let Some(term) = search {
        manager.set_search(term);
    }
    print_json(&manager.filtered())?;
    Ok(())
}

/// The two-step delete: without `--yes` the confirmation stays pending and
/// nothing is sent; with it, a failure exits non-zero with the pending
/// target intact so the operator can retry.
pub(crate) async fn confirm_and_delete<C: ResourceClient>(
    client: C,
    id: &str,
    yes: bool,
) -> Result<(), CliError> {
    let mut manager = ManagerState::new(client);
    manager.request_delete(id);
    if !yes {
        println!("would delete {} {id}; re-run with --yes to confirm", C::KIND);
        return Ok(());
    }
    manager.confirm_delete().await;
    ensure_clean(&manager)?;
    println!("deleted");
    Ok(())
}
