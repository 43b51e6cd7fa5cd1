use axum::{
    extract::{Path, State},
    Json,
};
use models::Customer;

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(get, path = "/customers", tag = "customers", responses((status = 200, description = "All customers", body = [crate::openapi::CustomerDoc])))]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Customer>> {
    Json(state.directory.list_customers().await)
}

#[utoipa::path(
    get, path = "/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Customer>, JsonApiError> {
    Ok(Json(state.directory.get_customer(id).await?))
}
