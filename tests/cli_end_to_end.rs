#![deny(clippy::all, clippy::pedantic)]

use assert_cmd::Command;
use httpmock::MockServer;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::json;
use tempfile::tempdir;

fn narthex_cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("narthex-cli"))
}

#[test]
fn login_whoami_logout_round_trip() {
    let dir = tempdir().expect("tmp dir");
    let token_path = dir.path().join("token");

    narthex_cli()
        .env_remove("NARTHEX_SITE_URL")
        .arg("--token-path")
        .arg(&token_path)
        .args(["login", "--email", "pat@example.org"])
        .assert()
        .success()
        .stdout(contains("pat@example.org"));

    narthex_cli()
        .env_remove("NARTHEX_SITE_URL")
        .arg("--token-path")
        .arg(&token_path)
        .arg("whoami")
        .assert()
        .success()
        .stdout(contains("admin@church.com"));

    narthex_cli()
        .env_remove("NARTHEX_SITE_URL")
        .arg("--token-path")
        .arg(&token_path)
        .arg("logout")
        .assert()
        .success()
        .stdout(contains("signed out"));

    narthex_cli()
        .env_remove("NARTHEX_SITE_URL")
        .arg("--token-path")
        .arg(&token_path)
        .arg("whoami")
        .assert()
        .success()
        .stdout(contains("not signed in"));
}

#[test]
fn sermons_list_works_end_to_end() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("GET").path("/sermons");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"success": true, "data": [{
                "id": 1,
                "title": "Faith Walk",
                "speaker": "Rev. Amara Osei",
                "date": "2024-03-10",
                "createdAt": "2024-03-10T08:00:00.000Z",
            }]}));
    });

    narthex_cli()
        .env("NARTHEX_SITE_URL", server.base_url())
        .args(["sermons", "list"])
        .assert()
        .success()
        .stdout(contains("\"preacher\": \"Rev. Amara Osei\""));
    mock.assert();
}

#[test]
fn search_narrows_the_list() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("GET").path("/sermons");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({"success": true, "data": [
                {"id": 1, "title": "Faith Walk", "speaker": "Rev. Amara Osei",
                 "date": "2024-03-10", "createdAt": "2024-03-10T08:00:00.000Z"},
                {"id": 2, "title": "Hope Renewed", "speaker": "Pastor Lin",
                 "date": "2024-03-17", "createdAt": "2024-03-17T08:00:00.000Z"},
            ]}));
    });

    narthex_cli()
        .env("NARTHEX_SITE_URL", server.base_url())
        .args(["sermons", "list", "--search", "faith"])
        .assert()
        .success()
        .stdout(contains("Faith Walk").and(contains("Hope Renewed").not()));
}

#[test]
fn missing_site_fails_fast() {
    narthex_cli()
        .env_remove("NARTHEX_SITE_URL")
        .args(["sermons", "list"])
        .assert()
        .failure()
        .stderr(contains("MissingSite"));
}

#[test]
fn dashboard_counts_all_kinds() {
    let server = MockServer::start();
    for path in ["/sermons", "/events", "/gallery"] {
        server.mock(|when, then| {
            when.method("GET").path(path);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"success": true, "data": []}));
        });
    }

    narthex_cli()
        .env("NARTHEX_SITE_URL", server.base_url())
        .arg("dashboard")
        .assert()
        .success()
        .stdout(contains("\"announcements\": 0"));
}
