//! Filtered and ordered views over the directory.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use models::{Customer, Employee, PriorityRule, ServiceTicket};
use serde::Deserialize;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize)]
pub struct PriorityQuery {
    pub rule: Option<PriorityRule>,
}

#[utoipa::path(get, path = "/servicetickets/incompleteEmergencies", tag = "reports", responses((status = 200, description = "Open emergency tickets", body = [crate::openapi::ServiceTicketDoc])))]
pub async fn incomplete_emergencies(State(state): State<ServerState>) -> Json<Vec<ServiceTicket>> {
    Json(state.directory.incomplete_emergencies().await)
}

#[utoipa::path(get, path = "/servicetickets/unAssigned", tag = "reports", responses((status = 200, description = "Tickets without an employee", body = [crate::openapi::ServiceTicketDoc])))]
pub async fn unassigned(State(state): State<ServerState>) -> Json<Vec<ServiceTicket>> {
    Json(state.directory.unassigned_tickets().await)
}

#[utoipa::path(get, path = "/servicetickets/inactiveCustomers", tag = "reports", responses((status = 200, description = "Customers with no recently completed ticket", body = [crate::openapi::CustomerDoc])))]
pub async fn inactive_customers(State(state): State<ServerState>) -> Json<Vec<Customer>> {
    Json(state.directory.inactive_customers().await)
}

#[utoipa::path(get, path = "/employees/availableEmployees", tag = "reports", responses((status = 200, description = "Employees without an open ticket", body = [crate::openapi::EmployeeDoc])))]
pub async fn available_employees(State(state): State<ServerState>) -> Json<Vec<Employee>> {
    Json(state.directory.available_employees().await)
}

#[utoipa::path(
    get, path = "/employee/{id}/customers", tag = "reports",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Customers served by the employee", body = [crate::openapi::CustomerDoc]),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn employee_customers(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Customer>>, JsonApiError> {
    Ok(Json(state.directory.employee_customers(id).await?))
}

#[utoipa::path(
    get, path = "/employeeOfTheMonth", tag = "reports",
    responses(
        (status = 200, description = "Most tickets completed in the last month", body = crate::openapi::EmployeeDoc),
        (status = 404, description = "No employees", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn employee_of_the_month(State(state): State<ServerState>) -> Result<Json<Employee>, JsonApiError> {
    Ok(Json(state.directory.employee_of_the_month().await?))
}

#[utoipa::path(get, path = "/completedTickets", tag = "reports", responses((status = 200, description = "Completed tickets, oldest completion first", body = [crate::openapi::ServiceTicketDoc])))]
pub async fn completed_tickets(State(state): State<ServerState>) -> Json<Vec<ServiceTicket>> {
    Json(state.directory.completed_tickets().await)
}

#[utoipa::path(
    get, path = "/prioritizedTickets", tag = "reports",
    params(("rule" = Option<String>, Query, description = "unassigned_last | legacy_zero_employee_id")),
    responses(
        (status = 200, description = "Open tickets, emergencies first", body = [crate::openapi::ServiceTicketDoc]),
        (status = 400, description = "Unknown rule")
    )
)]
pub async fn prioritized_tickets(
    State(state): State<ServerState>,
    Query(q): Query<PriorityQuery>,
) -> Json<Vec<ServiceTicket>> {
    Json(state.directory.prioritized_tickets(q.rule).await)
}
