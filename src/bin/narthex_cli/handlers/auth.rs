#![deny(clippy::all, clippy::pedantic)]

use narthex::application::session::Session;
use narthex::config::Settings;
use narthex::infra::token::TokenStore;

use crate::client::CliError;
use crate::print::print_json;

fn session(settings: &Settings) -> Session {
    Session::new(TokenStore::new(settings.session.token_path.clone()))
}

pub fn login(settings: &Settings, email: &str, password: &str) -> Result<(), CliError> {
    let mut session = session(settings);
    let user = session.login(email, password)?;
    print_json(&user)?;
    Ok(())
}

pub fn logout(settings: &Settings) -> Result<(), CliError> {
    let mut session = session(settings);
    session.logout()?;
    println!("signed out");
    Ok(())
}

pub fn whoami(settings: &Settings) -> Result<(), CliError> {
    let mut session = session(settings);
    session.init()?;
    match session.user() {
        Some(user) => print_json(user)?,
        None => println!("not signed in"),
    }
    Ok(())
}
