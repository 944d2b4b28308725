use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::setup::{setup, TestHelper};

#[rstest]
#[case::root("/", "/explore")]
#[case::review("/review", "/explore")]
#[case::review_with_query("/review?dashboard=1234&mode=view", "/explore?dashboard=1234&mode=view")]
#[tokio::test]
async fn redirects_to_explore(setup: TestHelper, #[case] uri: &str, #[case] target: &str) {
    let response = setup.get(uri).await;

    assert_eq!(response.status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.location.as_deref(), Some(target));
    assert!(response
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("text/html")));
    assert!(response.body.contains("Moved Permanently"));
}

#[rstest]
#[case::explore("/explore", "<title>PerfKit Explorer</title>")]
#[case::dashboard_admin(
    "/dashboard-admin",
    "<title>PerfKit Explorer - Dashboard Administration</title>"
)]
#[tokio::test]
async fn pages_embed_initial_config(setup: TestHelper, #[case] uri: &str, #[case] title: &str) {
    let response = setup.get(uri).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("text/html")));
    assert!(response.body.contains(title));
    assert!(response
        .body
        .contains(r#"var INITIAL_CONFIG = {"analytics_key":"","cache_duration":1800,"#));
}

#[rstest]
#[tokio::test]
async fn explore_reflects_saved_config(setup: TestHelper) {
    let saved = setup
        .post_json("/config", r#"{"default_project": "perfkit-prod"}"#)
        .await;
    assert_eq!(saved.status, StatusCode::OK);
    let updated_at = saved.json()["updated_at"].as_str().unwrap().to_owned();

    let response = setup.get("/explore").await;

    assert!(response.body.contains(r#""default_project":"perfkit-prod""#));
    assert!(response
        .body
        .contains(&format!(r#""updated_at":"{updated_at}""#)));
}

#[rstest]
#[case::unknown("/nowhere")]
#[case::nested("/explore/deeper")]
#[tokio::test]
async fn unknown_paths_are_not_found(setup: TestHelper, #[case] uri: &str) {
    let response = setup.get(uri).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
