use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use restcheck_lib::Profile;
use serde::Deserialize;
use tracing::{event, instrument, Level};

use crate::fault::{Fault, RoundTripFault, StubFault};

pub const BASE_PATH: &str = "/rest/test";

// Route templates for the exposed resources.
const COMPLETE_PROFILE_RESOURCE: &str = "/profile/:id/:name";
const PROFILE_RESOURCE: &str = "/profile";
const CONCRETE_PROFILE_RESOURCE: &str = "/profile/:id";
const BAD_REQUEST_RESOURCE: &str = "/bad-request";
const UNSUPPORTED_RESOURCE: &str = "/unsupported";

/// Fixture used for full client-server round trips. Reports an unsupported
/// operation as 501.
pub fn round_trip_router() -> Router {
    let routes = Router::new()
        .route(COMPLETE_PROFILE_RESOURCE, get(get_profile))
        .route(PROFILE_RESOURCE, post(upgrade_profile))
        .route(BAD_REQUEST_RESOURCE, get(bad_request))
        .route(UNSUPPORTED_RESOURCE, get(unsupported));

    Router::new().nest(BASE_PATH, routes)
}

/// Fixture mirroring the controller stub: the full route table, an ErrorDesc
/// body on invalid-argument responses, and 500 for an unsupported operation.
pub fn controller_stub_router() -> Router {
    let routes = Router::new()
        .route(COMPLETE_PROFILE_RESOURCE, get(get_profile))
        .route(PROFILE_RESOURCE, post(upgrade_profile).put(put_query))
        .route(
            CONCRETE_PROFILE_RESOURCE,
            delete(delete_profile).put(put_profile),
        )
        .route(BAD_REQUEST_RESOURCE, get(stub_bad_request))
        .route(UNSUPPORTED_RESOURCE, get(stub_unsupported));

    Router::new().nest(BASE_PATH, routes)
}

#[instrument]
async fn get_profile(Path((id, name)): Path<(i32, String)>) -> Json<Profile> {
    event!(Level::INFO, "Serving complete profile");
    Json(Profile::new(id, name))
}

#[instrument]
async fn upgrade_profile(Json(profile): Json<Profile>) -> Json<Profile> {
    event!(Level::INFO, "Upgrading profile");
    let name = format!("{}{}", profile.name, profile.name);
    Json(Profile::new(profile.id * 2, name))
}

#[derive(Deserialize, Debug)]
struct UpgradeParams {
    a: Option<String>,
    b: Option<String>,
    c: Option<String>,
}

#[instrument]
async fn put_query(Query(params): Query<UpgradeParams>) -> Result<StatusCode, StubFault> {
    // `c` is required and must parse as an integer; `a` and `b` are optional
    // and blank values count as absent.
    let c = match params.c.as_deref().and_then(|raw| raw.parse::<i64>().ok()) {
        Some(c) => c,
        None => return Err(StubFault(Fault::InvalidArgument)),
    };
    let a = parse_optional(params.a.as_deref());
    let b = parse_optional(params.b.as_deref());

    event!(Level::DEBUG, ?a, ?b, c, "Accepted query upgrade");
    Ok(StatusCode::NO_CONTENT)
}

fn parse_optional(raw: Option<&str>) -> Option<i64> {
    raw.filter(|s| !s.is_empty()).and_then(|s| s.parse().ok())
}

#[instrument]
async fn delete_profile(Path(id): Path<i64>) -> StatusCode {
    event!(Level::INFO, id, "Deleting profile");
    StatusCode::NO_CONTENT
}

#[instrument(skip(profile))]
async fn put_profile(Path(id): Path<i64>, Json(profile): Json<Profile>) -> StatusCode {
    event!(Level::INFO, id, name = %profile.name, "Replacing profile");
    StatusCode::NO_CONTENT
}

#[instrument]
async fn bad_request() -> Result<Json<Profile>, RoundTripFault> {
    Err(RoundTripFault(Fault::InvalidArgument))
}

#[instrument]
async fn unsupported() -> Result<Json<Profile>, RoundTripFault> {
    Err(RoundTripFault(Fault::Unsupported))
}

#[instrument]
async fn stub_bad_request() -> Result<Json<Profile>, StubFault> {
    Err(StubFault(Fault::InvalidArgument))
}

#[instrument]
async fn stub_unsupported() -> Result<Json<Profile>, StubFault> {
    Err(StubFault(Fault::Unsupported))
}
