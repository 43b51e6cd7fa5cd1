//! Demo records loaded at start-up. Completion dates are relative to `now`.

use chrono::{DateTime, Utc};

use crate::time::{months_before, start_of_day};
use crate::{Customer, Employee, ServiceTicket};

#[derive(Clone, Debug, Default)]
pub struct SeedData {
    pub customers: Vec<Customer>,
    pub employees: Vec<Employee>,
    pub service_tickets: Vec<ServiceTicket>,
}

pub fn demo(now: DateTime<Utc>) -> SeedData {
    let today = start_of_day(now);

    let customers = vec![
        Customer::new(1, "Mr. Toad", "123 Nowhere Road"),
        Customer::new(2, "John Blanket", "3563 Container Drive"),
        Customer::new(3, "David Guitar", "210 Music Lane"),
    ];

    let employees = vec![
        Employee::new(1, "Sarah Johnson", "Software Development"),
        Employee::new(2, "Michael Smith", "Graphic Design"),
        Employee::new(3, "Emily Williams", "Marketing and Sales"),
    ];

    let service_tickets = vec![
        ServiceTicket {
            id: 1,
            customer_id: 1,
            employee_id: Some(2),
            description: "Issue with network connectivity".into(),
            emergency: true,
            date_completed: Some(months_before(now, 12)),
        },
        ServiceTicket {
            id: 2,
            customer_id: 3,
            employee_id: None,
            description: "Server maintenance".into(),
            emergency: true,
            date_completed: None,
        },
        ServiceTicket {
            id: 3,
            customer_id: 2,
            employee_id: Some(1),
            description: "Hardware replacement".into(),
            emergency: true,
            date_completed: Some(today),
        },
        ServiceTicket {
            id: 4,
            customer_id: 2,
            employee_id: None,
            description: "Software installation".into(),
            emergency: false,
            date_completed: Some(months_before(today, 5)),
        },
        ServiceTicket {
            id: 5,
            customer_id: 2,
            employee_id: Some(3),
            description: "Printer setup".into(),
            emergency: true,
            date_completed: None,
        },
    ];

    SeedData { customers, employees, service_tickets }
}
