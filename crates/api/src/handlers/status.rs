use super::models::AppState;
use crate::errors::ApiError;
use crate::models::StatusResponse;
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

/// Successful lookups may be cached briefly by CDNs and served stale while
/// revalidating.
const CACHE_CONTROL_OK: &str = "public, s-maxage=60, stale-while-revalidate=120";

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    ip: Option<String>,
}

pub async fn get_status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Result<Response, ApiError> {
    let address = params
        .ip
        .as_deref()
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .ok_or(ApiError::MissingAddress)?;

    let reply = state.gateway.status(address).await?;

    let body = StatusResponse {
        status: reply.result,
        cache: reply.cache,
    };
    let mut response = Json(body).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(CACHE_CONTROL_OK),
    );
    Ok(response)
}
