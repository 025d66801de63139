//! HTTP handlers for the REST API.
//!
//! Each resource has one entry point that dispatches on the request method,
//! decodes the payload and delegates to the service layer.

use axum::{
    body::Bytes,
    extract::{FromRequest, Query, Request, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::info;

use super::dto::{IdBody, IdParams, MembershipRequest};
use super::error::AppError;
use super::state::AppState;
use crate::domain::{EntityId, RequestContext};
use crate::models::{Contact, Group};

/// Result type for handlers.
pub type HandlerResult = Result<Response, AppError>;

/// Decode a JSON body, reporting any failure as bad input.
fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidInput(format!("Invalid request body: {}", e)))
}

/// Identifier for a bodiless method: `?id=` first, then a `{"id"}` body.
fn resolve_id(params: IdParams, body: &Bytes) -> Result<Option<EntityId>, AppError> {
    if let Some(id) = params.id {
        return EntityId::new(id)
            .map(Some)
            .map_err(|e| AppError::InvalidInput(format!("Invalid id: {}", e)));
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    decode::<IdBody>(body).map(|b| b.id)
}

fn query_params(uri: &Uri) -> Result<IdParams, AppError> {
    Query::<IdParams>::try_from_uri(uri)
        .map(|Query(params)| params)
        .map_err(|e| AppError::InvalidInput(format!("Invalid query: {}", e)))
}

/// Buffer the body, honouring the router's `DefaultBodyLimit`.
async fn read_body(request: Request) -> Result<Bytes, AppError> {
    Bytes::from_request(request, &()).await.map_err(AppError::Body)
}

/// Query and body of a bodiless method, read only once the method is known.
async fn read_id(request: Request) -> Result<Option<EntityId>, AppError> {
    let params = query_params(request.uri())?;
    let body = read_body(request).await?;
    resolve_id(params, &body)
}

fn require_id(id: Option<EntityId>, kind: &str) -> Result<EntityId, AppError> {
    id.ok_or_else(|| AppError::InvalidInput(format!("Missing {} id", kind)))
}

// =============================================================================
// Contacts
// =============================================================================

/// GET | POST | PUT | DELETE /contacts
pub async fn contacts(
    State(state): State<AppState>,
    ctx: RequestContext,
    request: Request,
) -> HandlerResult {
    match request.method().clone() {
        Method::GET => get_contact(&state, &ctx, read_id(request).await?).await,
        Method::POST => create_contact(&state, &ctx, &read_body(request).await?).await,
        Method::PUT => update_contact(&state, &ctx, &read_body(request).await?).await,
        Method::DELETE => delete_contact(&state, &ctx, read_id(request).await?).await,
        _ => Err(AppError::MethodNotAllowed),
    }
}

async fn get_contact(state: &AppState, ctx: &RequestContext, id: Option<EntityId>) -> HandlerResult {
    let id = require_id(id, "contact")?;
    info!(contact_id = %id, "Getting contact");

    let contact = state
        .contacts
        .get_contact_by_id(ctx, id.as_str())
        .await
        .map_err(|e| AppError::use_case(e, state.error_status))?;

    Ok((StatusCode::OK, Json(contact)).into_response())
}

async fn create_contact(state: &AppState, ctx: &RequestContext, body: &Bytes) -> HandlerResult {
    info!("Creating contact");
    let contact: Contact = decode(body)?;

    let created = state
        .contacts
        .create_contact(ctx, contact)
        .await
        .map_err(|e| AppError::use_case(e, state.error_status))?;

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

async fn update_contact(state: &AppState, ctx: &RequestContext, body: &Bytes) -> HandlerResult {
    info!("Updating contact");
    let contact: Contact = decode(body)?;
    if contact.id.is_empty() {
        return Err(AppError::InvalidInput("Missing contact id".to_string()));
    }

    let updated = state
        .contacts
        .update_contact(ctx, contact)
        .await
        .map_err(|e| AppError::use_case(e, state.error_status))?;

    Ok((StatusCode::OK, Json(updated)).into_response())
}

async fn delete_contact(
    state: &AppState,
    ctx: &RequestContext,
    id: Option<EntityId>,
) -> HandlerResult {
    let id = require_id(id, "contact")?;
    info!(contact_id = %id, "Deleting contact");

    state
        .contacts
        .delete_contact(ctx, id.as_str())
        .await
        .map_err(|e| AppError::use_case(e, state.error_status))?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

// =============================================================================
// Groups
// =============================================================================

/// GET | POST | PUT | DELETE /groups
pub async fn groups(
    State(state): State<AppState>,
    ctx: RequestContext,
    request: Request,
) -> HandlerResult {
    match request.method().clone() {
        Method::GET => get_groups(&state, &ctx, read_id(request).await?).await,
        Method::POST => create_group(&state, &ctx, &read_body(request).await?).await,
        Method::PUT => add_contact_to_group(&state, &ctx, &read_body(request).await?).await,
        Method::DELETE => delete_group(&state, &ctx, read_id(request).await?).await,
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// With an id: one group. Without: every group.
async fn get_groups(state: &AppState, ctx: &RequestContext, id: Option<EntityId>) -> HandlerResult {
    match id {
        Some(id) => {
            info!(group_id = %id, "Getting group");
            let group = state
                .groups
                .get_group_by_id(ctx, id.as_str())
                .await
                .map_err(|e| AppError::use_case(e, state.error_status))?;
            Ok((StatusCode::OK, Json(group)).into_response())
        }
        None => {
            info!("Listing groups");
            let groups = state
                .groups
                .get_all_groups(ctx)
                .await
                .map_err(|e| AppError::use_case(e, state.error_status))?;
            Ok((StatusCode::OK, Json(groups)).into_response())
        }
    }
}

async fn create_group(state: &AppState, ctx: &RequestContext, body: &Bytes) -> HandlerResult {
    info!("Creating group");
    let group: Group = decode(body)?;

    let created = state
        .groups
        .create_group(ctx, group)
        .await
        .map_err(|e| AppError::use_case(e, state.error_status))?;

    Ok((StatusCode::CREATED, Json(created)).into_response())
}

async fn add_contact_to_group(
    state: &AppState,
    ctx: &RequestContext,
    body: &Bytes,
) -> HandlerResult {
    let request: MembershipRequest = decode(body)?;
    info!(
        contact_id = %request.contact_id,
        group_id = %request.group_id,
        "Adding contact to group"
    );

    let group = state
        .groups
        .add_contact_to_group(ctx, request.contact_id.as_str(), request.group_id.as_str())
        .await
        .map_err(|e| AppError::use_case(e, state.error_status))?;

    Ok((StatusCode::OK, Json(group)).into_response())
}

async fn delete_group(
    state: &AppState,
    ctx: &RequestContext,
    id: Option<EntityId>,
) -> HandlerResult {
    let id = require_id(id, "group")?;
    info!(group_id = %id, "Deleting group");

    state
        .groups
        .delete_group(ctx, id.as_str())
        .await
        .map_err(|e| AppError::use_case(e, state.error_status))?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
