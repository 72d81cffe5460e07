use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use restcheck_lib::Profile;
use restcheck_server::api;
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> hyper::body::Bytes {
    hyper::body::to_bytes(response.into_body()).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, profile: &Profile) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(profile).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn complete_profile_resource_binds_path_variables() {
    let app = api::round_trip_router();

    let response = app.oneshot(get("/rest/test/profile/1/name")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let profile: Profile = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(profile, Profile::new(1, "name"));
}

#[tokio::test]
async fn upgrade_doubles_id_and_repeats_name() {
    let app = api::round_trip_router();
    let request = json_request(Method::POST, "/rest/test/profile", &Profile::new(1, "name"));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let profile: Profile = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(profile, Profile::new(2, "namename"));
}

#[tokio::test]
async fn bad_request_resource_answers_400_with_empty_body() {
    let app = api::round_trip_router();

    let response = app.oneshot(get("/rest/test/bad-request")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn unsupported_resource_answers_501_on_round_trip_fixture() {
    let app = api::round_trip_router();

    let response = app.oneshot(get("/rest/test/unsupported")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn unsupported_resource_answers_500_on_stub_fixture() {
    let app = api::controller_stub_router();

    let response = app.oneshot(get("/rest/test/unsupported")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn stub_bad_request_carries_error_desc_body() {
    let app = api::controller_stub_router();

    let response = app.oneshot(get("/rest/test/bad-request")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(body, serde_json::json!({}));
}

#[tokio::test]
async fn query_upgrade_accepts_required_param() {
    let app = api::controller_stub_router();
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/rest/test/profile?a=1&b=2&c=3")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn query_upgrade_tolerates_blank_optional_params() {
    let app = api::controller_stub_router();
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/rest/test/profile?a=&b=&c=3")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn query_upgrade_rejects_missing_required_param() {
    let app = api::controller_stub_router();
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/rest/test/profile?a=1&b=2")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn query_upgrade_rejects_unparsable_required_param() {
    let app = api::controller_stub_router();
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/rest/test/profile?c=abc")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_answers_no_content_with_empty_body() {
    let app = api::controller_stub_router();
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/rest/test/profile/42")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn concrete_put_answers_no_content_with_empty_body() {
    let app = api::controller_stub_router();
    let request = json_request(Method::PUT, "/rest/test/profile/42", &Profile::new(42, "name"));

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = api::round_trip_router();

    let response = app.oneshot(get("/rest/test/nope")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_is_rejected() {
    let app = api::round_trip_router();
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/rest/test/profile")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
