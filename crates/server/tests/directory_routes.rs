use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Duration, TimeZone, Utc};
use models::seed;
use serde_json::{json, Value};
use service::shop::{DirectorySettings, FixedClock, InMemoryDirectory};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use server::routes;
use server::state::ServerState;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()
}

fn app_with(seed: seed::SeedData) -> Router {
    let clock = Arc::new(FixedClock::new(now()));
    let directory = InMemoryDirectory::new(seed, DirectorySettings::default(), clock);
    routes::build_router(ServerState::new(directory), CorsLayer::very_permissive(), false)
}

fn app() -> Router {
    app_with(seed::demo(now() - Duration::minutes(5)))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(b) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&b)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    Ok((status, value))
}

fn ids(v: &Value) -> Vec<i64> {
    v.as_array()
        .map(|a| a.iter().filter_map(|x| x["id"].as_i64()).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn health_ok() -> anyhow::Result<()> {
    let (status, body) = send(&app(), "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn lists_keep_insertion_order() -> anyhow::Result<()> {
    let app = app();
    let (status, customers) = send(&app, "GET", "/customers", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&customers), vec![1, 2, 3]);
    assert_eq!(customers[0]["name"], "Mr. Toad");

    let (_, employees) = send(&app, "GET", "/employees", None).await?;
    assert_eq!(ids(&employees), vec![1, 2, 3]);
    assert!(employees[0].get("serviceTickets").is_none());

    let (_, tickets) = send(&app, "GET", "/servicetickets", None).await?;
    assert_eq!(ids(&tickets), vec![1, 2, 3, 4, 5]);
    assert!(tickets[1]["employeeId"].is_null());
    Ok(())
}

#[tokio::test]
async fn single_fetches_attach_relations() -> anyhow::Result<()> {
    let app = app();
    let (status, customer) = send(&app, "GET", "/customers/2", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(customer["address"], "3563 Container Drive");
    let (status, _) = send(&app, "GET", "/customers/99", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, employee) = send(&app, "GET", "/employees/3", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(employee["name"], "Emily Williams");
    assert_eq!(ids(&employee["serviceTickets"]), vec![5]);
    let (status, _) = send(&app, "GET", "/employees/99", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, ticket) = send(&app, "GET", "/servicetickets/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["employee"]["id"], ticket["employeeId"]);
    let (_, ticket) = send(&app, "GET", "/servicetickets/2", None).await?;
    assert!(ticket["employee"].is_null());
    let (status, _) = send(&app, "GET", "/servicetickets/99", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() -> anyhow::Result<()> {
    let (status, _) = send(&app(), "GET", "/servicetickets/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn create_assigns_next_id() -> anyhow::Result<()> {
    let app = app();
    let body = json!({"customerId": 1, "description": "Broken hinge", "emergency": false});
    let (status, created) = send(&app, "POST", "/servicetickets", Some(body)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 6);

    // client ids are ignored
    let body = json!({"id": 100, "customerId": 2, "employeeId": 1, "description": "Fan noise"});
    let (_, created) = send(&app, "POST", "/servicetickets", Some(body)).await?;
    assert_eq!(created["id"], 7);

    let (_, tickets) = send(&app, "GET", "/servicetickets", None).await?;
    assert_eq!(ids(&tickets), vec![1, 2, 3, 4, 5, 6, 7]);
    Ok(())
}

#[tokio::test]
async fn create_rejects_unknown_customer_and_empty_directory() -> anyhow::Result<()> {
    let body = json!({"customerId": 42, "description": "Ghost"});
    let (status, err) = send(&app(), "POST", "/servicetickets", Some(body.clone())).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["error"], "Bad Request");

    let mut empty = seed::demo(now());
    empty.service_tickets.clear();
    let body = json!({"customerId": 1, "description": "First ever"});
    let (status, _) = send(&app_with(empty), "POST", "/servicetickets", Some(body)).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn delete_returns_removed_ticket() -> anyhow::Result<()> {
    let app = app();
    let (status, removed) = send(&app, "DELETE", "/servicetickets/5", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed["description"], "Printer setup");

    let (status, _) = send(&app, "DELETE", "/servicetickets/5", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // the freed maximum id is not handed out again
    let body = json!({"customerId": 1, "description": "Keyboard"});
    let (_, created) = send(&app, "POST", "/servicetickets", Some(body)).await?;
    assert_eq!(created["id"], 6);
    Ok(())
}

#[tokio::test]
async fn update_mismatch_is_rejected_and_leaves_ticket() -> anyhow::Result<()> {
    let app = app();
    let (_, before) = send(&app, "GET", "/servicetickets/3", None).await?;

    let body = json!({"id": 4, "customerId": 2, "description": "Swapped"});
    let (status, _) = send(&app, "PUT", "/servicetickets/3", Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, after) = send(&app, "GET", "/servicetickets/3", None).await?;
    assert_eq!(before, after);

    let body = json!({"id": 99, "customerId": 2, "description": "Nope"});
    let (status, _) = send(&app, "PUT", "/servicetickets/99", Some(body)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_assigns_employee() -> anyhow::Result<()> {
    let app = app();
    let body = json!({"id": 2, "customerId": 3, "employeeId": 2, "description": "Server maintenance", "emergency": true});
    let (status, updated) = send(&app, "PUT", "/servicetickets/2", Some(body)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["employeeId"], 2);

    let (_, unassigned) = send(&app, "GET", "/servicetickets/unAssigned", None).await?;
    assert_eq!(ids(&unassigned), vec![4]);
    let (_, available) = send(&app, "GET", "/employees/availableEmployees", None).await?;
    assert_eq!(ids(&available), vec![1]);
    Ok(())
}

#[tokio::test]
async fn complete_sets_completion_date() -> anyhow::Result<()> {
    let app = app();
    let (status, body) = send(&app, "POST", "/servicetickets/2/complete", None).await?;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (_, ticket) = send(&app, "GET", "/servicetickets/2", None).await?;
    let done: DateTime<Utc> = serde_json::from_value(ticket["dateCompleted"].clone())?;
    assert_eq!(done, now());

    let (status, _) = send(&app, "POST", "/servicetickets/99/complete", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn report_endpoints() -> anyhow::Result<()> {
    let app = app();
    let (_, v) = send(&app, "GET", "/servicetickets/incompleteEmergencies", None).await?;
    assert_eq!(ids(&v), vec![2, 5]);

    let (_, v) = send(&app, "GET", "/servicetickets/inactiveCustomers", None).await?;
    assert_eq!(ids(&v), vec![1, 3]);

    let (_, v) = send(&app, "GET", "/employees/availableEmployees", None).await?;
    assert_eq!(ids(&v), vec![1, 2]);

    let (status, v) = send(&app, "GET", "/employee/2/customers", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&v), vec![1]);
    let (status, _) = send(&app, "GET", "/employee/99/customers", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, v) = send(&app, "GET", "/employeeOfTheMonth", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["id"], 1);

    let (_, v) = send(&app, "GET", "/completedTickets", None).await?;
    assert_eq!(ids(&v), vec![1, 4, 3]);
    Ok(())
}

#[tokio::test]
async fn prioritized_tickets_rules() -> anyhow::Result<()> {
    let app = app();
    let body = json!({"customerId": 1, "description": "Routine", "emergency": false});
    send(&app, "POST", "/servicetickets", Some(body)).await?;

    let (_, v) = send(&app, "GET", "/prioritizedTickets", None).await?;
    assert_eq!(ids(&v), vec![5, 2, 6]);

    let (_, v) = send(&app, "GET", "/prioritizedTickets?rule=legacy_zero_employee_id", None).await?;
    assert_eq!(ids(&v), vec![2, 5, 6]);

    let (status, _) = send(&app, "GET", "/prioritizedTickets?rule=bogus", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}
