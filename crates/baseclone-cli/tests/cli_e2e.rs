//! End-to-end tests for the baseclone binary
//!
//! Runs the compiled CLI against a wiremock service, covering the clone and
//! inspect commands, argument validation, and error reporting.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn baseclone_cmd(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("baseclone").expect("binary");
    cmd.env_remove("AIRTABLE_API_URL")
        .env_remove("AIRTABLE_API_KEY")
        .env_remove("BASECLONE_SHARE_HOST")
        .arg("--api-url")
        .arg(server.uri())
        .arg("--share-host")
        .arg("127.0.0.1")
        .arg("--token")
        .arg("test-token");
    cmd
}

async fn mount_simple_view(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/appShare/shrMain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "records": [
                {"id": "rec1", "fields": {"name": "Alice", "age": 30}}
            ]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_clone_success() {
    let server = MockServer::start().await;
    mount_simple_view(&server).await;

    Mock::given(method("POST"))
        .and(path("/meta/bases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "appNew",
            "tables": [{"id": "tblNew"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/appNew/tblNew"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let mut cmd = baseclone_cmd(&server);
    cmd.arg("clone")
        .arg(format!("{}/appShare/shrMain", server.uri()))
        .arg("--name")
        .arg("Demo");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Base created: appNew"))
        .stdout(predicate::str::contains("Table created: tblNew"))
        .stdout(predicate::str::contains("1 record(s) written"));
}

#[tokio::test]
async fn test_clone_json_output() {
    let server = MockServer::start().await;
    mount_simple_view(&server).await;

    Mock::given(method("POST"))
        .and(path("/meta/bases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "appNew",
            "tables": [{"id": "tblNew"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/appNew/tblNew"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let mut cmd = baseclone_cmd(&server);
    cmd.arg("clone")
        .arg(format!("{}/appShare/shrMain", server.uri()))
        .arg("--name")
        .arg("Demo")
        .arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""status": "completed""#))
        .stdout(predicate::str::contains(r#""base_id": "appNew""#))
        .stdout(predicate::str::contains(r#""records_written": 1"#));
}

#[tokio::test]
async fn test_clone_malformed_address() {
    let server = MockServer::start().await;

    let mut cmd = baseclone_cmd(&server);
    cmd.arg("clone")
        .arg(format!("{}/only-one-segment", server.uri()))
        .arg("--name")
        .arg("Demo");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Malformed share address"));
}

#[tokio::test]
async fn test_clone_reports_partial_state_on_write_failure() {
    let server = MockServer::start().await;

    let records: Vec<serde_json::Value> = (0..15)
        .map(|i| json!({"id": format!("rec{i}"), "fields": {"n": i}}))
        .collect();
    Mock::given(method("GET"))
        .and(path("/appShare/shrMain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "records": records })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/meta/bases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "appNew",
            "tables": [{"id": "tblNew"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/appNew/tblNew"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/appNew/tblNew"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut cmd = baseclone_cmd(&server);
    cmd.arg("clone")
        .arg(format!("{}/appShare/shrMain", server.uri()))
        .arg("--name")
        .arg("Demo");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Clone did not complete"))
        .stderr(predicate::str::contains("base created: appNew"))
        .stderr(predicate::str::contains("records already written: 10"));
}

#[tokio::test]
async fn test_inspect_reports_schema() {
    let server = MockServer::start().await;
    mount_simple_view(&server).await;

    let mut cmd = baseclone_cmd(&server);
    cmd.arg("inspect")
        .arg(format!("{}/appShare/shrMain", server.uri()));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Base:  appShare"))
        .stdout(predicate::str::contains("Fetched 1 record(s)"))
        .stdout(predicate::str::contains("name (singleLineText)"))
        .stdout(predicate::str::contains("age (number)"));
}

#[tokio::test]
async fn test_inspect_json_output() {
    let server = MockServer::start().await;
    mount_simple_view(&server).await;

    let mut cmd = baseclone_cmd(&server);
    cmd.arg("inspect")
        .arg(format!("{}/appShare/shrMain", server.uri()))
        .arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""base_id": "appShare""#))
        .stdout(predicate::str::contains(r#""status": "fetched""#));
}

#[tokio::test]
async fn test_inspect_fetch_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/appShare/shrMain"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut cmd = baseclone_cmd(&server);
    cmd.arg("inspect")
        .arg(format!("{}/appShare/shrMain", server.uri()));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Fetch failed"));
}

#[test]
fn test_no_subcommand_is_an_error() {
    let mut cmd = Command::cargo_bin("baseclone").expect("binary");
    cmd.assert().failure().code(2);
}
