use chrono::{DateTime, Utc};
use models::seed::SeedData;
use models::views::{EmployeeDetail, ServiceTicketDetail};
use models::{Customer, Employee, ServiceTicket};

use crate::errors::ServiceError;
use crate::shop::queries;

/// The three directory collections plus the ticket id high-water mark.
///
/// Not synchronized on its own; `InMemoryDirectory` keeps it behind one lock.
#[derive(Debug, Default)]
pub struct ShopState {
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    service_tickets: Vec<ServiceTicket>,
    highest_ticket_id: i32,
}

impl ShopState {
    pub fn new(seed: SeedData) -> Self {
        let highest_ticket_id = seed.service_tickets.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            customers: seed.customers,
            employees: seed.employees,
            service_tickets: seed.service_tickets,
            highest_ticket_id,
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn service_tickets(&self) -> &[ServiceTicket] {
        &self.service_tickets
    }

    pub fn customer(&self, id: i32) -> Result<Customer, ServiceError> {
        self.customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("customer", id))
    }

    pub fn employee(&self, id: i32) -> Result<Employee, ServiceError> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("employee", id))
    }

    pub fn employee_detail(&self, id: i32) -> Result<EmployeeDetail, ServiceError> {
        let employee = self.employee(id)?;
        let service_tickets = queries::tickets_for_employee(&self.service_tickets, id);
        Ok(EmployeeDetail { employee, service_tickets })
    }

    pub fn ticket(&self, id: i32) -> Result<ServiceTicket, ServiceError> {
        self.position(id).map(|idx| self.service_tickets[idx].clone())
    }

    pub fn ticket_detail(&self, id: i32) -> Result<ServiceTicketDetail, ServiceError> {
        let ticket = self.ticket(id)?;
        let employee = queries::employee_for_ticket(&self.employees, &ticket);
        Ok(ServiceTicketDetail { ticket, employee })
    }

    /// Append `ticket` under a freshly allocated id and return the stored copy.
    pub fn create_ticket(&mut self, mut ticket: ServiceTicket) -> Result<ServiceTicket, ServiceError> {
        self.check_references(&ticket)?;
        ticket.id = self.next_ticket_id()?;
        self.highest_ticket_id = ticket.id;
        self.service_tickets.push(ticket.clone());
        Ok(ticket)
    }

    /// Replace the ticket stored under `id` wholesale, keeping its position.
    pub fn update_ticket(&mut self, id: i32, ticket: ServiceTicket) -> Result<ServiceTicket, ServiceError> {
        let idx = self.position(id)?;
        if ticket.id != id {
            return Err(ServiceError::IdMismatch { path: id, body: ticket.id });
        }
        self.check_references(&ticket)?;
        self.service_tickets[idx] = ticket.clone();
        Ok(ticket)
    }

    pub fn complete_ticket(&mut self, id: i32, at: DateTime<Utc>) -> Result<ServiceTicket, ServiceError> {
        let idx = self.position(id)?;
        let ticket = &mut self.service_tickets[idx];
        ticket.date_completed = Some(at);
        Ok(ticket.clone())
    }

    pub fn delete_ticket(&mut self, id: i32) -> Result<ServiceTicket, ServiceError> {
        let idx = self.position(id)?;
        Ok(self.service_tickets.remove(idx))
    }

    fn position(&self, id: i32) -> Result<usize, ServiceError> {
        self.service_tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ServiceError::not_found("service ticket", id))
    }

    /// `max(id) + 1`, never below an id handed out before.
    fn next_ticket_id(&self) -> Result<i32, ServiceError> {
        let max = self
            .service_tickets
            .iter()
            .map(|t| t.id)
            .max()
            .ok_or_else(|| ServiceError::Conflict("no service tickets to derive the next id from".into()))?;
        max.max(self.highest_ticket_id)
            .checked_add(1)
            .ok_or_else(|| ServiceError::Conflict("service ticket ids exhausted".into()))
    }

    fn check_references(&self, ticket: &ServiceTicket) -> Result<(), ServiceError> {
        ticket.validate()?;
        if !self.customers.iter().any(|c| c.id == ticket.customer_id) {
            return Err(ServiceError::Validation(format!("unknown customer {}", ticket.customer_id)));
        }
        if let Some(eid) = ticket.employee_id {
            if !self.employees.iter().any(|e| e.id == eid) {
                return Err(ServiceError::Validation(format!("unknown employee {}", eid)));
            }
        }
        Ok(())
    }
}
