//! End-to-end tests of the HTTP surface over in-memory storage
//!
//! Fixture: project `p1` ("Alpha", owned by `u1`) with team `web`, project
//! `p2` ("Beta", owned by `u3`) with no teams.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use pmp_project_hub::api::create_router;
use pmp_project_hub::domain::project::{Project, ProjectId};
use pmp_project_hub::domain::team::{Team, TeamId};
use pmp_project_hub::domain::user::UserId;
use pmp_project_hub::infrastructure::auth::{JwtConfig, JwtGenerator, JwtService};
use pmp_project_hub::infrastructure::storage::InMemoryStorage;
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

const SECRET: &str = "integration-secret";
const NEW_YEAR_2024: i64 = 1_704_067_200;

fn pid(id: &str) -> ProjectId {
    ProjectId::new(id).unwrap()
}

fn uid(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

fn fixture_projects() -> Vec<Project> {
    vec![
        Project::new(pid("p1"), "Alpha", "d").with_owners(vec![uid("u1")]),
        Project::new(pid("p2"), "Beta", "").with_owners(vec![uid("u3")]),
    ]
}

fn fixture_teams() -> Vec<Team> {
    vec![
        Team::new(TeamId::new("web").unwrap(), pid("p1"), "Web")
            .with_chiefs(vec![uid("u1")])
            .with_members(vec![uid("u2")]),
    ]
}

fn jwt() -> JwtService {
    JwtService::new(JwtConfig::new(SECRET, 1))
}

fn create_test_app() -> Router {
    let state = pmp_project_hub::build_app_state(
        Arc::new(InMemoryStorage::with_entities(fixture_projects())),
        Arc::new(InMemoryStorage::with_entities(fixture_teams())),
        Arc::new(jwt()),
    );

    create_router(state, None)
}

fn bearer(user: &str) -> String {
    format!("Bearer {}", jwt().generate(&uid(user), None).unwrap())
}

fn get_as(user: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer(user))
        .body(Body::empty())
        .unwrap()
}

fn patch_as(user: &str, uri: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer(user))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn parse_body(response: axum::http::Response<Body>) -> JsonValue {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn list_projects_as(app: &Router, user: &str) -> JsonValue {
    let response = app.clone().oneshot(get_as(user, "/projects")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    parse_body(response).await
}

#[tokio::test]
async fn test_owner_sees_full_project_and_others_redacted() {
    let app = create_test_app();

    let body = list_projects_as(&app, "u1").await;

    assert_eq!(
        body,
        json!({"datas": [
            {"id": "p1", "name": "Alpha", "desc": "d", "owners": ["u1"]},
            {"id": "p2", "name": "Beta", "desc": ""}
        ]})
    );
}

#[tokio::test]
async fn test_non_owner_sees_only_summaries() {
    let app = create_test_app();

    let body = list_projects_as(&app, "u2").await;

    assert_eq!(
        body,
        json!({"datas": [
            {"id": "p1", "name": "Alpha", "desc": "d"},
            {"id": "p2", "name": "Beta", "desc": ""}
        ]})
    );
}

#[tokio::test]
async fn test_owner_patch_converts_action_date_and_persists() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(patch_as(
            "u1",
            "/projects/p1",
            json!({"action_date": "2024-01-01T00:00:00Z"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await, json!({"action_date": NEW_YEAR_2024}));

    let listed = list_projects_as(&app, "u1").await;
    assert_eq!(listed["datas"][0]["action_date"], NEW_YEAR_2024);
    assert_eq!(listed["datas"][0]["name"], "Alpha");
}

#[tokio::test]
async fn test_patch_echoes_only_sent_fields() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(patch_as(
            "u1",
            "/projects/p1",
            json!({"name": "Alpha 2", "desc": null, "volunteer_certificate_hours": 8}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        parse_body(response).await,
        json!({"name": "Alpha 2", "volunteer_certificate_hours": 8})
    );

    let listed = list_projects_as(&app, "u1").await;
    assert_eq!(listed["datas"][0]["name"], "Alpha 2");
    assert_eq!(listed["datas"][0]["desc"], "d");
}

#[tokio::test]
async fn test_non_owner_patch_is_unauthorized_and_not_applied() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(patch_as("u2", "/projects/p1", json!({"name": "Hijacked"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = parse_body(response).await;
    assert_eq!(body["error"]["type"], "authentication_error");

    let listed = list_projects_as(&app, "u1").await;
    assert_eq!(listed["datas"][0]["name"], "Alpha");
}

#[tokio::test]
async fn test_patch_unknown_project_is_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(patch_as("u1", "/projects/missing", json!({"name": "x"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_rejects_unparsable_action_date() {
    let app = create_test_app();

    let response = app
        .clone()
        .oneshot(patch_as(
            "u1",
            "/projects/p1",
            json!({"name": "Renamed", "action_date": "next tuesday"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse_body(response).await;
    assert_eq!(body["error"]["param"], "action_date");

    let listed = list_projects_as(&app, "u1").await;
    assert_eq!(listed["datas"][0]["name"], "Alpha");
}

#[tokio::test]
async fn test_non_owner_with_bad_date_gets_unauthorized_first() {
    let app = create_test_app();

    let response = app
        .oneshot(patch_as("u2", "/projects/p1", json!({"action_date": "garbage"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_requests_without_token_are_rejected() {
    let app = create_test_app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/projects")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/projects")
        .header(header::AUTHORIZATION, "Bearer not-a-jwt")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = create_test_app();
    let foreign = JwtService::new(JwtConfig::new("someone-else", 1))
        .generate(&uid("u1"), None)
        .unwrap();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/projects")
        .header(header::AUTHORIZATION, format!("Bearer {}", foreign))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_project_teams() {
    let app = create_test_app();

    let response = app.oneshot(get_as("u2", "/projects/p1/teams")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    let teams = body["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0]["id"], "web");
    assert_eq!(teams[0]["pid"], "p1");
    assert_eq!(teams[0]["chiefs"], json!(["u1"]));
}

#[tokio::test]
async fn test_teams_of_unknown_project_is_empty() {
    let app = create_test_app();

    for uri in ["/projects/p2/teams", "/projects/nope/teams"] {
        let response = app.clone().oneshot(get_as("u1", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(parse_body(response).await, json!({"teams": []}));
    }
}

#[tokio::test]
async fn test_team_page_found() {
    let app = create_test_app();

    let response = app.oneshot(get_as("u2", "/team/p1/web")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["team"]["name"], "Web");
    assert_eq!(body["project"], json!({"id": "p1", "name": "Alpha", "desc": "d"}));
}

#[tokio::test]
async fn test_team_page_redirects_home_when_missing() {
    let app = create_test_app();

    for uri in ["/team/p1/ops", "/team/p2/web", "/team/zz/web"] {
        let response = app.clone().oneshot(get_as("u1", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND, "{}", uri);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = create_test_app();

    for uri in ["/health", "/ready", "/live"] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
    }
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = create_test_app();

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-123");
}
