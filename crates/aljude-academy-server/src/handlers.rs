use crate::AppState;
use aljude_academy_api::{
    capability_payload, categories_payload, category_payload, keywords_payload, openapi_v1_spec,
    params::parse_search_query, routes_payload, score_payload, search_payload,
    sub_capability_payload, validate_score_request, version_payload, ApiError, ScoreRequest,
};
use aljude_academy_assess::score_answers;
use aljude_academy_catalog::suggested_keywords;
use aljude_academy_core::sha256_hex;
use aljude_academy_query::{
    find_capability, find_category, find_sub_capability, search, sub_capability_neighbors,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::atomic::Ordering;
use tracing::info;

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

fn if_none_match(headers: &HeaderMap) -> Option<String> {
    headers
        .get("if-none-match")
        .and_then(|v| v.to_str().ok())
        .map(std::string::ToString::to_string)
}

fn put_cache_headers(headers: &mut HeaderMap, max_age_secs: u64, etag: &str) {
    if let Ok(value) = HeaderValue::from_str(&format!("public, max-age={max_age_secs}")) {
        headers.insert("cache-control", value);
    }
    if let Ok(value) = HeaderValue::from_str(etag) {
        headers.insert("etag", value);
    }
}

fn api_error_response(err: ApiError) -> Response {
    let status = StatusCode::from_u16(err.code.http_status()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(json!({"error": err}))).into_response()
}

async fn observe(state: &AppState, route: &str, status: StatusCode, request_id: &str) {
    state.metrics.observe_request(route, status).await;
    info!(request_id = %request_id, route = %route, status = status.as_u16(), "request complete");
}

async fn respond_error(
    state: &AppState,
    route: &str,
    request_id: &str,
    err: ApiError,
) -> Response {
    let resp = api_error_response(err);
    observe(state, route, resp.status(), request_id).await;
    with_request_id(resp, request_id)
}

async fn respond_json(
    state: &AppState,
    route: &str,
    request_id: &str,
    payload: Value,
) -> Response {
    let resp = Json(payload).into_response();
    observe(state, route, StatusCode::OK, request_id).await;
    with_request_id(resp, request_id)
}

/// Catalog-shaped responses never change while the process runs, so they get
/// a strong ETag over the serialized body and revalidate to 304.
async fn respond_cached_json(
    state: &AppState,
    headers: &HeaderMap,
    route: &str,
    request_id: &str,
    payload: Value,
) -> Response {
    let etag = format!(
        "\"{}\"",
        sha256_hex(&serde_json::to_vec(&payload).unwrap_or_default())
    );
    let max_age_secs = state.config.cache_max_age.as_secs();
    if if_none_match(headers).as_deref() == Some(etag.as_str()) {
        let mut resp = StatusCode::NOT_MODIFIED.into_response();
        put_cache_headers(resp.headers_mut(), max_age_secs, &etag);
        observe(state, route, StatusCode::NOT_MODIFIED, request_id).await;
        return with_request_id(resp, request_id);
    }
    let mut resp = Json(payload).into_response();
    put_cache_headers(resp.headers_mut(), max_age_secs, &etag);
    observe(state, route, StatusCode::OK, request_id).await;
    with_request_id(resp, request_id)
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> Response {
    let request_id = make_request_id(&state);
    let resp = (StatusCode::OK, "ok").into_response();
    observe(&state, "/healthz", StatusCode::OK, &request_id).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> Response {
    let request_id = make_request_id(&state);
    let (status, body) = if state.ready.load(Ordering::Relaxed) {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "not ready")
    };
    let resp = (status, body).into_response();
    observe(&state, "/readyz", status, &request_id).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> Response {
    let request_id = make_request_id(&state);
    let body = state.metrics.render().await;
    let resp = (StatusCode::OK, body).into_response();
    observe(&state, "/metrics", StatusCode::OK, &request_id).await;
    with_request_id(resp, &request_id)
}

pub(crate) async fn version_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    respond_json(
        &state,
        "/v1/version",
        &request_id,
        version_payload(env!("CARGO_PKG_VERSION")),
    )
    .await
}

pub(crate) async fn openapi_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    respond_cached_json(
        &state,
        &headers,
        "/v1/openapi.json",
        &request_id,
        openapi_v1_spec(),
    )
    .await
}

pub(crate) async fn categories_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    respond_cached_json(
        &state,
        &headers,
        "/v1/categories",
        &request_id,
        categories_payload(state.catalog),
    )
    .await
}

pub(crate) async fn category_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    let route = "/v1/categories/{slug}";
    let request_id = propagated_request_id(&headers, &state);
    match find_category(state.catalog, &slug) {
        Some(category) => {
            respond_cached_json(&state, &headers, route, &request_id, category_payload(category))
                .await
        }
        None => {
            respond_error(&state, route, &request_id, ApiError::category_not_found(&slug)).await
        }
    }
}

pub(crate) async fn capability_handler(
    State(state): State<AppState>,
    Path(cap): Path<String>,
    headers: HeaderMap,
) -> Response {
    let route = "/v1/capabilities/{cap}";
    let request_id = propagated_request_id(&headers, &state);
    match find_capability(state.catalog, &cap) {
        Some(found) => {
            respond_cached_json(&state, &headers, route, &request_id, capability_payload(&found))
                .await
        }
        None => {
            respond_error(&state, route, &request_id, ApiError::capability_not_found(&cap)).await
        }
    }
}

pub(crate) async fn sub_capability_handler(
    State(state): State<AppState>,
    Path((cap, sub)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    let route = "/v1/capabilities/{cap}/{sub}";
    let request_id = propagated_request_id(&headers, &state);
    let Some(found) = find_sub_capability(state.catalog, &cap, &sub) else {
        return respond_error(
            &state,
            route,
            &request_id,
            ApiError::sub_capability_not_found(&cap, &sub),
        )
        .await;
    };
    let Some(neighbors) = sub_capability_neighbors(found.capability, &sub) else {
        return respond_error(
            &state,
            route,
            &request_id,
            ApiError::internal("resolved sub-capability missing from its capability"),
        )
        .await;
    };
    respond_cached_json(
        &state,
        &headers,
        route,
        &request_id,
        sub_capability_payload(&found, &neighbors),
    )
    .await
}

pub(crate) async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let route = "/v1/search";
    let request_id = propagated_request_id(&headers, &state);
    let query = match parse_search_query(&params) {
        Ok(q) => q,
        Err(err) => return respond_error(&state, route, &request_id, err).await,
    };
    let results = search(state.catalog, &query);
    respond_json(&state, route, &request_id, search_payload(&query, &results)).await
}

pub(crate) async fn routes_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    respond_cached_json(
        &state,
        &headers,
        "/v1/routes",
        &request_id,
        routes_payload(state.catalog),
    )
    .await
}

pub(crate) async fn keywords_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    respond_cached_json(
        &state,
        &headers,
        "/v1/keywords",
        &request_id,
        keywords_payload(suggested_keywords()),
    )
    .await
}

pub(crate) async fn score_handler(
    State(state): State<AppState>,
    Path((cap, sub)): Path<(String, String)>,
    headers: HeaderMap,
    body: Result<Json<ScoreRequest>, JsonRejection>,
) -> Response {
    let route = "/v1/assessments/{cap}/{sub}/score";
    let request_id = propagated_request_id(&headers, &state);
    let Some(found) = find_sub_capability(state.catalog, &cap, &sub) else {
        return respond_error(
            &state,
            route,
            &request_id,
            ApiError::sub_capability_not_found(&cap, &sub),
        )
        .await;
    };
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return respond_error(
                &state,
                route,
                &request_id,
                ApiError::invalid_body(&rejection.body_text()),
            )
            .await;
        }
    };
    let assessment = &found.sub_capability.assessment;
    if let Err(err) = validate_score_request(&request, assessment) {
        return respond_error(&state, route, &request_id, err).await;
    }
    let breakdown = score_answers(&request.answers, assessment.questions.len());
    respond_json(&state, route, &request_id, score_payload(&breakdown)).await
}
