//! Login endpoint stand-in.
//!
//! There is no authentication service behind this UI: any credentials are
//! accepted, the "current user" is always the site administrator, and the
//! token is a locally fabricated marker that is never sent upstream or
//! verified anywhere. Kept deliberately; see DESIGN.md before treating this
//! as a security boundary.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

const DEFAULT_EMAIL: &str = "admin@church.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

fn admin_user(email: &str) -> User {
    User {
        id: "1".to_string(),
        email: if email.is_empty() {
            DEFAULT_EMAIL.to_string()
        } else {
            email.to_string()
        },
        name: "Admin".to_string(),
        role: Role::Admin,
    }
}

/// Accept any credentials and fabricate a local session.
pub fn login(email: &str, _password: &str) -> (User, String) {
    let token = format!(
        "local-session-{}",
        OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000
    );
    (admin_user(email), token)
}

/// Resolve the user a persisted token belongs to. Any token maps to the
/// administrator; an absent token means nobody is signed in.
pub fn current_user(token: Option<&str>) -> Option<User> {
    token.map(|_| admin_user(""))
}
