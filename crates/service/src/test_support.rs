#![cfg(test)]
use chrono::{DateTime, Duration, TimeZone, Utc};
use models::{seed, ServiceTicket};

use crate::shop::ShopState;

/// Reference "now" for time-window tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()
}

/// The demo data is seeded a few minutes before `fixed_now`, like a server that has
/// been up for a while.
pub fn seeded_at() -> DateTime<Utc> {
    fixed_now() - Duration::minutes(5)
}

pub fn seeded_state() -> ShopState {
    ShopState::new(seed::demo(seeded_at()))
}

pub fn ticket(
    id: i32,
    customer_id: i32,
    employee_id: Option<i32>,
    emergency: bool,
    date_completed: Option<DateTime<Utc>>,
) -> ServiceTicket {
    ServiceTicket {
        id,
        customer_id,
        employee_id,
        description: format!("ticket {id}"),
        emergency,
        date_completed,
    }
}
