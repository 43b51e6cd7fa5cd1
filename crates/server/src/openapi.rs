use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

#[derive(Serialize, ToSchema)]
pub struct CustomerDoc { pub id: i32, pub name: String, pub address: String }

#[derive(Serialize, ToSchema)]
pub struct EmployeeDoc { pub id: i32, pub name: String, pub specialty: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicketDoc {
    /// Ignored on create; must equal the path id on update.
    pub id: i32,
    pub customer_id: i32,
    pub employee_id: Option<i32>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<DateTime<Utc>>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetailDoc {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    pub service_tickets: Vec<ServiceTicketDoc>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicketDetailDoc {
    pub id: i32,
    pub customer_id: i32,
    pub employee_id: Option<i32>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<DateTime<Utc>>,
    pub employee: Option<EmployeeDoc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::list,
        crate::routes::customers::get,
        crate::routes::employees::list,
        crate::routes::employees::get,
        crate::routes::service_tickets::list,
        crate::routes::service_tickets::get,
        crate::routes::service_tickets::create,
        crate::routes::service_tickets::update,
        crate::routes::service_tickets::delete,
        crate::routes::service_tickets::complete,
        crate::routes::reports::incomplete_emergencies,
        crate::routes::reports::unassigned,
        crate::routes::reports::inactive_customers,
        crate::routes::reports::available_employees,
        crate::routes::reports::employee_customers,
        crate::routes::reports::employee_of_the_month,
        crate::routes::reports::completed_tickets,
        crate::routes::reports::prioritized_tickets,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            CustomerDoc,
            EmployeeDoc,
            ServiceTicketDoc,
            EmployeeDetailDoc,
            ServiceTicketDetailDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customers"),
        (name = "employees"),
        (name = "servicetickets"),
        (name = "reports")
    )
)]
pub struct ApiDoc;
