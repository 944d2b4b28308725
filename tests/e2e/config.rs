use std::str::FromStr;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;

use explorer_common::Timestamp;
use explorer_node::config::settings::ExplorerSettings;

use crate::common::setup::{setup, TestHelper};

const DEFAULT_CONFIG: &str = concat!(
    r#"{"analytics_key":"","cache_duration":1800,"default_dataset":"samples_mart","#,
    r#""default_project":"","default_table":"results","restrict_query_to_admin":false,"#,
    r#""restrict_save_to_admin":false,"restrict_view_to_admin":false,"updated_at":null}"#,
);

#[rstest]
#[tokio::test]
async fn get_config_serves_defaults_with_sorted_keys(setup: TestHelper) {
    let response = setup.get("/config").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));
    assert_eq!(response.body, DEFAULT_CONFIG);
}

#[rstest]
#[tokio::test]
async fn get_config_keeps_field_order_without_sorting() {
    let settings = ExplorerSettings {
        json_sort_keys: false,
        ..ExplorerSettings::default()
    };
    let helper = TestHelper::new(&settings);

    let response = helper.get("/config").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.starts_with(r#"{"default_project":"","default_dataset":"#));
}

#[rstest]
#[tokio::test]
async fn update_config_is_persisted(setup: TestHelper) {
    let update = setup
        .post_json(
            "/config",
            r#"{"default_table": "benchmarks", "cache_duration": 60, "restrict_save_to_admin": true}"#,
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);

    let response = setup.get("/config").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, update.body);

    let config = response.json();
    assert_eq!(config["default_table"], "benchmarks");
    assert_eq!(config["default_dataset"], "samples_mart");
    assert_eq!(config["cache_duration"], 60);
    assert_eq!(config["restrict_save_to_admin"], true);

    let updated_at = config["updated_at"].as_str().unwrap();
    assert_eq!(updated_at.len(), "YYYY-MM-DDTHH:MM:SSZ".len());
    assert!(updated_at.ends_with('Z'));
    let parsed = Timestamp::from_str(updated_at).unwrap();
    assert_eq!(parsed.to_string(), updated_at);
}

#[rstest]
#[tokio::test]
async fn zero_cache_duration_is_rejected(setup: TestHelper) {
    let response = setup.post_json("/config", r#"{"cache_duration": 0}"#).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.json()["message"]
        .as_str()
        .unwrap()
        .contains("cache_duration"));

    // Nothing was stored.
    assert_eq!(setup.get("/config").await.body, DEFAULT_CONFIG);
}

#[rstest]
#[case::syntax(r#"{"default_table": "#)]
#[case::unknown_field(r#"{"default_tabel": "x"}"#)]
#[case::wrong_type(r#"{"cache_duration": "soon"}"#)]
#[case::server_owned_field(r#"{"updated_at": "2008-09-15T12:30:00Z"}"#)]
#[tokio::test]
async fn malformed_updates_are_client_errors(setup: TestHelper, #[case] body: &str) {
    let response = setup.post_json("/config", body).await;
    assert!(response.status.is_client_error(), "got {}", response.status);
    assert_eq!(setup.get("/config").await.body, DEFAULT_CONFIG);
}

#[rstest]
#[tokio::test]
async fn openapi_document_lists_config_routes(setup: TestHelper) {
    let response = setup.get("/docs/openapi.json").await;

    assert_eq!(response.status, StatusCode::OK);
    let document = response.json();
    assert!(document["paths"]["/config"]["get"].is_object());
    assert!(document["paths"]["/config"]["post"].is_object());
    assert!(document["components"]["schemas"]["ExplorerConfig"].is_object());
}
