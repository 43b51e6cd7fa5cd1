//! Response projections that attach related records to a single fetched entity.

use serde::{Deserialize, Serialize};

use crate::{Employee, ServiceTicket};

/// An employee together with every ticket currently assigned to them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetail {
    #[serde(flatten)]
    pub employee: Employee,
    pub service_tickets: Vec<ServiceTicket>,
}

/// A ticket together with its assigned employee, if that employee exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicketDetail {
    #[serde(flatten)]
    pub ticket: ServiceTicket,
    pub employee: Option<Employee>,
}
