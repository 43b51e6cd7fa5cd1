use chrono::{DateTime, Months, NaiveTime, Utc};

/// Same wall-clock instant `months` calendar months earlier (day clamped to month end).
pub fn months_before(at: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    at.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Midnight at the start of `at`'s day.
pub fn start_of_day(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive().and_time(NaiveTime::MIN).and_utc()
}
