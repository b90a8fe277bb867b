//! Request handlers for the `/api` routes.

use super::AppState;
use crate::contact::{
    parse_contact_payload, ContactResponse, MSG_INVALID_INPUT, MSG_INVALID_JSON, MSG_SEND_FAILED,
};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use std::sync::Arc;

const CONTACT_METHODS: &str = "POST, OPTIONS";
const PING_METHODS: &str = "GET, OPTIONS";
const ANY_METHODS: &str = "GET, POST, OPTIONS";

fn cors_headers(methods: &'static str) -> [(HeaderName, &'static str); 3] {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        (header::ACCESS_CONTROL_ALLOW_METHODS, methods),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    ]
}

fn contact_reply(status: StatusCode, body: ContactResponse) -> Response {
    (status, cors_headers(CONTACT_METHODS), Json(body)).into_response()
}

/// `GET /api/ping`
pub(super) async fn ping(State(state): State<Arc<AppState>>) -> Response {
    (
        StatusCode::OK,
        cors_headers(PING_METHODS),
        Json(json!({ "message": state.ping_message })),
    )
        .into_response()
}

/// `/api/contact`, any method.
pub(super) async fn contact(
    State(state): State<Arc<AppState>>,
    method: Method,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return (StatusCode::NO_CONTENT, cors_headers(CONTACT_METHODS)).into_response();
    }
    if method != Method::POST {
        return contact_reply(
            StatusCode::METHOD_NOT_ALLOWED,
            ContactResponse::failure("Method not allowed"),
        );
    }

    let value: serde_json::Value = if body.is_empty() {
        json!({})
    } else {
        match serde_json::from_slice(&body) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("Rejecting contact body that is not JSON: {}", e);
                return contact_reply(StatusCode::BAD_REQUEST, ContactResponse::failure(MSG_INVALID_JSON));
            },
        }
    };

    let request = match parse_contact_payload(value) {
        Ok(request) => request,
        Err(e) => {
            log::debug!("Rejecting contact request: {}", e);
            return contact_reply(StatusCode::BAD_REQUEST, ContactResponse::failure(MSG_INVALID_INPUT));
        },
    };

    let relay_state = Arc::clone(&state);
    let response =
        match tokio::task::spawn_blocking(move || relay_state.contact.send_contact_email(&request)).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("Contact relay task failed: {}", e);
                ContactResponse::failure(MSG_SEND_FAILED)
            },
        };

    let status = if response.ok {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    contact_reply(status, response)
}

/// Any other `/api` path.
pub(super) async fn api_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        cors_headers(ANY_METHODS),
        Json(ContactResponse::failure("Not found")),
    )
        .into_response()
}

/// Non-API path with no static directory configured.
pub(super) async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, cors_headers(ANY_METHODS)).into_response()
}
