//! Entity types of the repair-shop directory.
//! - Stored records (`Customer`, `Employee`, `ServiceTicket`) carry no derived fields.
//! - Relationship projections live in `views` and are assembled at response time.

pub mod errors;
pub mod customer;
pub mod employee;
pub mod service_ticket;
pub mod views;
pub mod priority;
pub mod seed;
pub mod time;

pub use customer::Customer;
pub use employee::Employee;
pub use priority::PriorityRule;
pub use service_ticket::ServiceTicket;
