use axum::{
    extract::{Path, State},
    Json,
};
use models::{views::EmployeeDetail, Employee};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(get, path = "/employees", tag = "employees", responses((status = 200, description = "All employees", body = [crate::openapi::EmployeeDoc])))]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Employee>> {
    Json(state.directory.list_employees().await)
}

/// Employee with the tickets currently assigned to them.
#[utoipa::path(
    get, path = "/employees/{id}", tag = "employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::EmployeeDetailDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<EmployeeDetail>, JsonApiError> {
    Ok(Json(state.directory.get_employee(id).await?))
}
