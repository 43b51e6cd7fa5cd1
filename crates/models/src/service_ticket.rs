use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A unit of repair work reported by a customer.
///
/// `id` is owned by the directory: whatever a client sends is ignored on create
/// and only compared against the path on update, so it defaults to `0` when omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicket {
    #[serde(default)]
    pub id: i32,
    pub customer_id: i32,
    /// `None` means unassigned.
    #[serde(default)]
    pub employee_id: Option<i32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emergency: bool,
    /// `None` means the ticket is still open.
    #[serde(default)]
    pub date_completed: Option<DateTime<Utc>>,
}

impl ServiceTicket {
    pub fn is_open(&self) -> bool {
        self.date_completed.is_none()
    }

    pub fn is_assigned_to(&self, employee_id: i32) -> bool {
        self.employee_id == Some(employee_id)
    }

    /// Completed at or after `cutoff`. Open tickets never qualify.
    pub fn completed_since(&self, cutoff: DateTime<Utc>) -> bool {
        matches!(self.date_completed, Some(done) if done >= cutoff)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.customer_id <= 0 {
            return Err(ModelError::Validation("customerId must be a positive id".into()));
        }
        Ok(())
    }
}
