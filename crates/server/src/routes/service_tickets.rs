use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use models::{views::ServiceTicketDetail, ServiceTicket};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(get, path = "/servicetickets", tag = "servicetickets", responses((status = 200, description = "All service tickets", body = [crate::openapi::ServiceTicketDoc])))]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<ServiceTicket>> {
    Json(state.directory.list_tickets().await)
}

/// Ticket with its assigned employee attached.
#[utoipa::path(
    get, path = "/servicetickets/{id}", tag = "servicetickets",
    params(("id" = i32, Path, description = "Service ticket ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ServiceTicketDetailDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<ServiceTicketDetail>, JsonApiError> {
    Ok(Json(state.directory.get_ticket(id).await?))
}

/// Create a ticket; any `id` in the body is replaced by the next free id.
#[utoipa::path(
    post, path = "/servicetickets", tag = "servicetickets",
    request_body = crate::openapi::ServiceTicketDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ServiceTicketDoc),
        (status = 400, description = "Unknown customer or employee", body = crate::openapi::ErrorDoc),
        (status = 409, description = "No ticket to derive an id from", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ServiceTicket>,
) -> Result<Json<ServiceTicket>, JsonApiError> {
    info!(customer_id = input.customer_id, emergency = input.emergency, "service_ticket_create_request");
    Ok(Json(state.directory.create_ticket(input).await?))
}

#[utoipa::path(
    put, path = "/servicetickets/{id}", tag = "servicetickets",
    params(("id" = i32, Path, description = "Service ticket ID")),
    request_body = crate::openapi::ServiceTicketDoc,
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::ServiceTicketDoc),
        (status = 400, description = "Body id differs from path id, or unknown reference", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<ServiceTicket>,
) -> Result<Json<ServiceTicket>, JsonApiError> {
    Ok(Json(state.directory.update_ticket(id, input).await?))
}

#[utoipa::path(
    delete, path = "/servicetickets/{id}", tag = "servicetickets",
    params(("id" = i32, Path, description = "Service ticket ID")),
    responses(
        (status = 200, description = "Removed ticket", body = crate::openapi::ServiceTicketDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<ServiceTicket>, JsonApiError> {
    Ok(Json(state.directory.delete_ticket(id).await?))
}

#[utoipa::path(
    post, path = "/servicetickets/{id}/complete", tag = "servicetickets",
    params(("id" = i32, Path, description = "Service ticket ID")),
    responses(
        (status = 204, description = "Completed"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn complete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.directory.complete_ticket(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
