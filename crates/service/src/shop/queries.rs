//! Read-only filters and orderings over the directory collections.
//!
//! Every function keeps the input collection order unless it documents a sort,
//! and every sort is stable.

use chrono::{DateTime, Utc};
use models::{Customer, Employee, PriorityRule, ServiceTicket};

pub fn tickets_for_employee(tickets: &[ServiceTicket], employee_id: i32) -> Vec<ServiceTicket> {
    tickets.iter().filter(|t| t.is_assigned_to(employee_id)).cloned().collect()
}

pub fn employee_for_ticket(employees: &[Employee], ticket: &ServiceTicket) -> Option<Employee> {
    let employee_id = ticket.employee_id?;
    employees.iter().find(|e| e.id == employee_id).cloned()
}

/// Open tickets flagged as emergencies.
pub fn incomplete_emergencies(tickets: &[ServiceTicket]) -> Vec<ServiceTicket> {
    tickets.iter().filter(|t| t.is_open() && t.emergency).cloned().collect()
}

pub fn unassigned(tickets: &[ServiceTicket]) -> Vec<ServiceTicket> {
    tickets.iter().filter(|t| t.employee_id.is_none()).cloned().collect()
}

/// Customers without any ticket completed at or after `cutoff`.
/// A customer with no tickets at all is inactive.
pub fn inactive_customers(
    customers: &[Customer],
    tickets: &[ServiceTicket],
    cutoff: DateTime<Utc>,
) -> Vec<Customer> {
    customers
        .iter()
        .filter(|c| {
            !tickets
                .iter()
                .any(|t| t.customer_id == c.id && t.completed_since(cutoff))
        })
        .cloned()
        .collect()
}

/// Employees with no open ticket assigned to them.
pub fn available_employees(employees: &[Employee], tickets: &[ServiceTicket]) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| !tickets.iter().any(|t| t.is_assigned_to(e.id) && t.is_open()))
        .cloned()
        .collect()
}

/// Distinct customers, in customer order, with at least one ticket assigned to `employee_id`.
pub fn customers_of_employee(
    customers: &[Customer],
    tickets: &[ServiceTicket],
    employee_id: i32,
) -> Vec<Customer> {
    customers
        .iter()
        .filter(|c| {
            tickets
                .iter()
                .any(|t| t.customer_id == c.id && t.is_assigned_to(employee_id))
        })
        .cloned()
        .collect()
}

/// The employee with the most tickets completed at or after `cutoff`.
/// Ties go to the earliest employee in collection order, including the all-zero case.
pub fn employee_of_the_month(
    employees: &[Employee],
    tickets: &[ServiceTicket],
    cutoff: DateTime<Utc>,
) -> Option<Employee> {
    let mut best: Option<(&Employee, usize)> = None;
    for e in employees {
        let count = tickets
            .iter()
            .filter(|t| t.is_assigned_to(e.id) && t.completed_since(cutoff))
            .count();
        match best {
            Some((_, top)) if count <= top => {}
            _ => best = Some((e, count)),
        }
    }
    best.map(|(e, _)| e.clone())
}

/// Completed tickets, oldest completion first.
pub fn completed_tickets(tickets: &[ServiceTicket]) -> Vec<ServiceTicket> {
    let mut done: Vec<ServiceTicket> = tickets
        .iter()
        .filter(|t| t.date_completed.is_some())
        .cloned()
        .collect();
    done.sort_by_key(|t| t.date_completed);
    done
}

/// Open tickets, emergencies first, then ordered by `rule`.
pub fn prioritized_tickets(tickets: &[ServiceTicket], rule: PriorityRule) -> Vec<ServiceTicket> {
    let mut open: Vec<ServiceTicket> = tickets.iter().filter(|t| t.is_open()).cloned().collect();
    open.sort_by_key(|t| (!t.emergency, sinks_to_bottom(t, rule)));
    open
}

fn sinks_to_bottom(ticket: &ServiceTicket, rule: PriorityRule) -> bool {
    match rule {
        PriorityRule::UnassignedLast => ticket.employee_id.is_none(),
        PriorityRule::LegacyZeroEmployeeId => ticket.employee_id == Some(0),
    }
}
