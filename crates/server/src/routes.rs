use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod customers;
pub mod employees;
pub mod reports;
pub mod service_tickets;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router. Swagger UI is mounted at `/docs` when `docs` is set.
pub fn build_router(state: ServerState, cors: CorsLayer, docs: bool) -> Router {
    let directory = Router::new()
        .route("/health", get(health))
        .route("/customers", get(customers::list))
        .route("/customers/:id", get(customers::get))
        .route("/employees", get(employees::list))
        .route("/employees/availableEmployees", get(reports::available_employees))
        .route("/employees/:id", get(employees::get))
        .route("/employee/:id/customers", get(reports::employee_customers))
        .route("/employeeOfTheMonth", get(reports::employee_of_the_month))
        .route("/servicetickets", get(service_tickets::list).post(service_tickets::create))
        .route("/servicetickets/incompleteEmergencies", get(reports::incomplete_emergencies))
        .route("/servicetickets/unAssigned", get(reports::unassigned))
        .route("/servicetickets/inactiveCustomers", get(reports::inactive_customers))
        .route(
            "/servicetickets/:id",
            get(service_tickets::get)
                .put(service_tickets::update)
                .delete(service_tickets::delete),
        )
        .route("/servicetickets/:id/complete", post(service_tickets::complete))
        .route("/completedTickets", get(reports::completed_tickets))
        .route("/prioritizedTickets", get(reports::prioritized_tickets))
        .with_state(state);

    let app = if docs {
        directory.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
    } else {
        directory
    };

    app.layer(cors).layer(
        TraceLayer::new_for_http()
            // 每次请求创建 span，包含方法和路径
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            // 响应返回时打点，包含状态码与耗时
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
