//! Integration tests for the routed views.

mod common;

use axum::http::StatusCode;
use markquest_test_support::GameStateBuilder;

#[tokio::test]
async fn test_each_routed_path_serves_its_view() {
    let cases = [
        ("/", "main"),
        ("/stage/1", "stage"),
        ("/result/1", "result"),
        ("/final", "final"),
        ("/help", "help"),
        ("/settings", "settings"),
    ];

    for (path, view) in cases {
        let (app, _) = common::build_test_app();

        let (status, json) = common::get_json(app, path).await;

        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(json["view"], view, "{path}");
    }
}

#[tokio::test]
async fn test_stage_and_result_render_for_any_id() {
    let cases = [
        ("0", "0"),
        ("42", "42"),
        ("abc", "abc"),
        ("%ED%95%9C", "한"),
    ];

    for (segment, id) in cases {
        let (app, _) = common::build_test_app();
        let (status, json) = common::get_json(app, &format!("/stage/{segment}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], id);

        let (app, _) = common::build_test_app();
        let (status, json) = common::get_json(app, &format!("/result/{segment}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["id"], id);
    }
}

#[tokio::test]
async fn test_unmatched_paths_fall_back_to_not_found() {
    for path in ["/stage", "/stage/1/extra", "/final/", "/HELP", "/nowhere"] {
        let (app, _) = common::build_test_app();

        let (status, json) = common::get_json(app, path).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert_eq!(json["view"], "not_found", "{path}");
    }
}

#[tokio::test]
async fn test_main_view_reads_current_progress() {
    let (app, _) =
        common::build_test_app_with_state(GameStateBuilder::new().stage(6).points(55).build());

    let (status, json) = common::get_json(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["current_stage"], 6);
    assert_eq!(json["points"], 55);
    assert_eq!(json["progress"], 0.3);
    assert_eq!(json["continue_href"], "/stage/6");
}

#[tokio::test]
async fn test_result_view_routes_to_final_after_last_stage() {
    let (app, _) =
        common::build_test_app_with_state(GameStateBuilder::new().stage(21).points(300).build());

    let (status, json) = common::get_json(app, "/result/20").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stage_number"], 20);
    assert_eq!(json["next_href"], "/final");
}

#[tokio::test]
async fn test_final_view_reports_score_and_completion() {
    let (app, _) =
        common::build_test_app_with_state(GameStateBuilder::new().stage(21).points(300).build());

    let (status, json) = common::get_json(app, "/final").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["points"], 300);
    assert_eq!(json["max_stage"], 20);
    assert_eq!(json["completed"], true);
}

#[tokio::test]
async fn test_settings_view_reflects_dispatched_changes() {
    // Arrange
    let (app, _) = common::build_test_app();

    // Act
    let (status, _) = common::dispatch(app.clone(), "TOGGLE_SOUND", serde_json::Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = common::dispatch(app.clone(), "SET_LANGUAGE", serde_json::json!("en")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, json) = common::get_json(app, "/settings").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sound_enabled"], false);
    assert_eq!(json["language"], "en");
}
