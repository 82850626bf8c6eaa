//! Request handlers
//!
//! Each handler decodes its input, runs one store operation and encodes the
//! result. Failures become an [`ApiError`] carrying a `{"message": ...}` body.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

use crate::error::CrmError;
use crate::protocol::{
    decode_customer, decode_load_request, encode_customer, encode_customers, encode_error,
};
use crate::store::CustomerStore;

/// Shared application state
pub struct AppState {
    pub store: Arc<CustomerStore>,
}

/// API error response
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!("Request failed ({}): {}", self.status, self.message);

        match encode_error(&self.message) {
            Ok(body) => json(self.status, body),
            Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        }
    }
}

impl From<CrmError> for ApiError {
    fn from(e: CrmError) -> Self {
        match e {
            CrmError::NotFound(_) => ApiError::not_found(e.to_string()),
            CrmError::Decode(_) | CrmError::InvalidId(_) | CrmError::Io(_) | CrmError::Config(_) => {
                ApiError::bad_request(e.to_string())
            }
            CrmError::IdsExhausted => ApiError::new(StatusCode::CONFLICT, e.to_string()),
            CrmError::Encode(_) => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    }
}

type ApiResult = Result<Response, ApiError>;

/// Build a JSON response from an already encoded body
fn json(status: StatusCode, body: Vec<u8>) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Parse a path parameter as a decimal customer id
fn parse_id(raw: &str) -> Result<i64, CrmError> {
    raw.parse().map_err(|_| CrmError::InvalidId(raw.to_string()))
}

// === Customers ===

/// List every customer
pub async fn list_customers(State(state): State<Arc<AppState>>) -> ApiResult {
    let customers = state.store.list_all();
    Ok(json(StatusCode::OK, encode_customers(&customers)?))
}

/// Get one customer by id
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult {
    let id = parse_id(&raw_id)?;
    let customer = state
        .store
        .get_by_id(id)
        .ok_or_else(|| ApiError::not_found(format!("unknown id {}", id)))?;

    Ok(json(StatusCode::OK, encode_customer(&customer)?))
}

/// Create a customer from the posted record; any id in the body is ignored
pub async fn add_customer(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult {
    let candidate = decode_customer(&body)?;
    let customer = state.store.create(
        &candidate.name,
        &candidate.role,
        &candidate.email,
        &candidate.phone,
    )?;

    Ok(json(StatusCode::CREATED, encode_customer(&customer)?))
}

/// Apply a partial update; serves both PATCH and PUT
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ApiResult {
    let id = parse_id(&raw_id)?;
    let patch = decode_customer(&body)?;
    let customer = state.store.update_by_id(id, &patch)?;

    Ok(json(StatusCode::OK, encode_customer(&customer)?))
}

/// Delete a customer, returning the removed record
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> ApiResult {
    let id = parse_id(&raw_id)?;
    let customer = state.store.delete_by_id(id)?;

    Ok(json(StatusCode::OK, encode_customer(&customer)?))
}

// === Test Data ===

/// Replace the store contents with a JSON file named in the body
pub async fn load_test_data(State(state): State<Arc<AppState>>, body: Bytes) -> ApiResult {
    let request = decode_load_request(&body)?;
    let data = tokio::fs::read(&request.path)
        .await
        .map_err(|e| ApiError::bad_request(format!("{}: {}", request.path, e)))?;
    state.store.load_all(&data)?;

    tracing::info!("Loaded {} customers from {}", state.store.count(), request.path);
    Ok(StatusCode::NO_CONTENT.into_response())
}
