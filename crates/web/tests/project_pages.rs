//! Integration tests for the home, projects and project detail pages.

mod common;

use axum::http::StatusCode;
use common::{body_text, get, get_with, location, project_row, set_cookies};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: missing project redirects home with a notice
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_project_redirects_home_with_notice() {
    let (_up, app) = common::build_test_app().await;
    let response = get(app, "/project/abc123").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    let cookies = set_cookies(&response);
    assert!(cookies
        .iter()
        .any(|c| c.starts_with("folio_notice=project_load_failed")));
}

// ---------------------------------------------------------------------------
// Test: a failing provider also redirects rather than erroring
// ---------------------------------------------------------------------------

#[tokio::test]
async fn project_provider_failure_redirects_home() {
    let (up, app) = common::build_test_app().await;
    up.fail("projects");
    let response = get(app, "/project/p1").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

// ---------------------------------------------------------------------------
// Test: the carried notice renders once and is then cleared
// ---------------------------------------------------------------------------

#[tokio::test]
async fn notice_cookie_renders_toast_and_is_cleared() {
    let (_up, app) = common::build_test_app().await;
    let response = get_with(
        app,
        "/",
        &[("cookie", "folio_intro=1; folio_notice=project_load_failed")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let cookies = set_cookies(&response);
    assert!(cookies
        .iter()
        .any(|c| c.starts_with("folio_notice=;") && c.contains("Max-Age=0")));
    let html = body_text(response).await;
    assert!(html.contains("Could not load project details"));
}

// ---------------------------------------------------------------------------
// Test: project detail renders the row
// ---------------------------------------------------------------------------

#[tokio::test]
async fn project_detail_renders_fields() {
    let (up, app) = common::build_test_app().await;
    up.rows("projects", json!([project_row("p1", "Neon Drift", true)]));

    let response = get(app, "/project/p1").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;

    assert!(html.contains("<title>Neon Drift | Souhardyo Dey</title>"));
    assert!(html.contains("<p>First paragraph.</p>"));
    assert!(html.contains("<p>Second paragraph.</p>"));
    assert!(html.contains("Unreal Engine"));
    assert!(html.contains("March 15, 2024"));
    assert!(html.contains("Live Demo"));
    assert!(!html.contains("View Code"));
}

// ---------------------------------------------------------------------------
// Test: empty project lists render their empty states
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_lists_render_empty_states() {
    let (_up, app) = common::build_test_app().await;
    let html = body_text(get(app.clone(), "/projects").await).await;
    assert!(html.contains("No Featured Projects Yet"));
    assert!(html.contains("<title>Game Projects | Souhardyo Dey</title>"));

    let html = body_text(get(app, "/").await).await;
    assert!(html.contains("No Featured Works Yet"));
}

// ---------------------------------------------------------------------------
// Test: home shows at most four featured projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn home_limits_featured_projects() {
    let (up, app) = common::build_test_app().await;
    up.rows(
        "projects",
        json!([
            project_row("p1", "One", true),
            project_row("p2", "Two", true),
            project_row("p3", "Three", false),
            project_row("p4", "Four", true),
            project_row("p5", "Five", true),
            project_row("p6", "Six", true),
        ]),
    );

    let html = body_text(get(app.clone(), "/").await).await;
    assert_eq!(html.matches("class=\"project-card\"").count(), 4);
    assert!(!html.contains("href=\"/project/p3\""));

    let html = body_text(get(app, "/projects").await).await;
    assert_eq!(html.matches("class=\"project-card\"").count(), 5);
}

// ---------------------------------------------------------------------------
// Test: a projects outage renders the empty state plus an error toast
// ---------------------------------------------------------------------------

#[tokio::test]
async fn projects_outage_falls_back_with_toast() {
    let (up, app) = common::build_test_app().await;
    up.fail("projects");

    let response = get(app, "/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("No Featured Projects Yet"));
    assert!(html.contains("Failed to load projects"));
    assert!(html.contains("toast--error"));
}
