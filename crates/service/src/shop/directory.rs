use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use models::seed::{self, SeedData};
use models::time::months_before;
use models::views::{EmployeeDetail, ServiceTicketDetail};
use models::{Customer, Employee, PriorityRule, ServiceTicket};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::shop::clock::{Clock, SystemClock};
use crate::shop::queries;
use crate::shop::state::ShopState;

/// Trait abstraction over the repair-shop directory used by the HTTP layer.
#[async_trait]
pub trait RepairShopDirectory: Send + Sync {
    async fn list_customers(&self) -> Vec<Customer>;
    async fn get_customer(&self, id: i32) -> Result<Customer, ServiceError>;
    async fn list_employees(&self) -> Vec<Employee>;
    async fn get_employee(&self, id: i32) -> Result<EmployeeDetail, ServiceError>;
    async fn list_tickets(&self) -> Vec<ServiceTicket>;
    async fn get_ticket(&self, id: i32) -> Result<ServiceTicketDetail, ServiceError>;
    async fn create_ticket(&self, ticket: ServiceTicket) -> Result<ServiceTicket, ServiceError>;
    async fn update_ticket(&self, id: i32, ticket: ServiceTicket) -> Result<ServiceTicket, ServiceError>;
    async fn complete_ticket(&self, id: i32) -> Result<ServiceTicket, ServiceError>;
    async fn delete_ticket(&self, id: i32) -> Result<ServiceTicket, ServiceError>;
    async fn incomplete_emergencies(&self) -> Vec<ServiceTicket>;
    async fn unassigned_tickets(&self) -> Vec<ServiceTicket>;
    async fn inactive_customers(&self) -> Vec<Customer>;
    async fn available_employees(&self) -> Vec<Employee>;
    async fn employee_customers(&self, employee_id: i32) -> Result<Vec<Customer>, ServiceError>;
    async fn employee_of_the_month(&self) -> Result<Employee, ServiceError>;
    async fn completed_tickets(&self) -> Vec<ServiceTicket>;
    /// `None` uses the configured default rule.
    async fn prioritized_tickets(&self, rule: Option<PriorityRule>) -> Vec<ServiceTicket>;
}

/// Time windows and ordering used by the report queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectorySettings {
    pub inactive_window_months: u32,
    pub employee_of_month_window_months: u32,
    pub priority_rule: PriorityRule,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            inactive_window_months: 12,
            employee_of_month_window_months: 1,
            priority_rule: PriorityRule::default(),
        }
    }
}

impl DirectorySettings {
    pub fn from_config(cfg: &configs::DirectoryConfig) -> Result<Self, ServiceError> {
        cfg.validate().map_err(|e| ServiceError::Validation(e.to_string()))?;
        Ok(Self {
            inactive_window_months: cfg.inactive_window_months,
            employee_of_month_window_months: cfg.employee_of_month_window_months,
            priority_rule: cfg.priority_rule.parse()?,
        })
    }
}

/// In-memory directory: one `RwLock` guards all collections so id allocation
/// and append happen atomically.
#[derive(Clone)]
pub struct InMemoryDirectory {
    inner: Arc<RwLock<ShopState>>,
    clock: Arc<dyn Clock>,
    settings: DirectorySettings,
}

impl InMemoryDirectory {
    pub fn new(seed: SeedData, settings: DirectorySettings, clock: Arc<dyn Clock>) -> Arc<Self> {
        Arc::new(Self {
            inner: Arc::new(RwLock::new(ShopState::new(seed))),
            clock,
            settings,
        })
    }

    /// Build from configuration, loading the demo records when `seed_demo_data` is set.
    pub fn from_config(cfg: &configs::DirectoryConfig) -> Result<Arc<Self>, ServiceError> {
        let settings = DirectorySettings::from_config(cfg)?;
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let seed = if cfg.seed_demo_data { seed::demo(clock.now()) } else { SeedData::default() };
        info!(
            event = "directory_seeded",
            customers = seed.customers.len(),
            employees = seed.employees.len(),
            service_tickets = seed.service_tickets.len(),
            priority_rule = %settings.priority_rule,
            "in-memory directory ready"
        );
        Ok(Self::new(seed, settings, clock))
    }

    fn cutoff(&self, months: u32) -> DateTime<Utc> {
        months_before(self.clock.now(), months)
    }
}

#[async_trait]
impl RepairShopDirectory for InMemoryDirectory {
    async fn list_customers(&self) -> Vec<Customer> {
        self.inner.read().await.customers().to_vec()
    }

    async fn get_customer(&self, id: i32) -> Result<Customer, ServiceError> {
        self.inner.read().await.customer(id)
    }

    async fn list_employees(&self) -> Vec<Employee> {
        self.inner.read().await.employees().to_vec()
    }

    async fn get_employee(&self, id: i32) -> Result<EmployeeDetail, ServiceError> {
        self.inner.read().await.employee_detail(id)
    }

    async fn list_tickets(&self) -> Vec<ServiceTicket> {
        self.inner.read().await.service_tickets().to_vec()
    }

    async fn get_ticket(&self, id: i32) -> Result<ServiceTicketDetail, ServiceError> {
        self.inner.read().await.ticket_detail(id)
    }

    async fn create_ticket(&self, ticket: ServiceTicket) -> Result<ServiceTicket, ServiceError> {
        let mut state = self.inner.write().await;
        match state.create_ticket(ticket) {
            Ok(created) => {
                info!(event = "ticket_created", ticket_id = created.id, customer_id = created.customer_id, "service ticket created");
                Ok(created)
            }
            Err(e) => {
                warn!(event = "ticket_create_rejected", error = %e, "service ticket rejected");
                Err(e)
            }
        }
    }

    async fn update_ticket(&self, id: i32, ticket: ServiceTicket) -> Result<ServiceTicket, ServiceError> {
        let mut state = self.inner.write().await;
        match state.update_ticket(id, ticket) {
            Ok(updated) => {
                info!(event = "ticket_updated", ticket_id = id, "service ticket replaced");
                Ok(updated)
            }
            Err(e) => {
                warn!(event = "ticket_update_rejected", ticket_id = id, error = %e, "service ticket update rejected");
                Err(e)
            }
        }
    }

    async fn complete_ticket(&self, id: i32) -> Result<ServiceTicket, ServiceError> {
        let now = self.clock.now();
        let done = self.inner.write().await.complete_ticket(id, now)?;
        info!(event = "ticket_completed", ticket_id = id, completed_at = %now, "service ticket completed");
        Ok(done)
    }

    async fn delete_ticket(&self, id: i32) -> Result<ServiceTicket, ServiceError> {
        let removed = self.inner.write().await.delete_ticket(id)?;
        info!(event = "ticket_deleted", ticket_id = id, "service ticket deleted");
        Ok(removed)
    }

    async fn incomplete_emergencies(&self) -> Vec<ServiceTicket> {
        queries::incomplete_emergencies(self.inner.read().await.service_tickets())
    }

    async fn unassigned_tickets(&self) -> Vec<ServiceTicket> {
        queries::unassigned(self.inner.read().await.service_tickets())
    }

    async fn inactive_customers(&self) -> Vec<Customer> {
        let cutoff = self.cutoff(self.settings.inactive_window_months);
        let state = self.inner.read().await;
        queries::inactive_customers(state.customers(), state.service_tickets(), cutoff)
    }

    async fn available_employees(&self) -> Vec<Employee> {
        let state = self.inner.read().await;
        queries::available_employees(state.employees(), state.service_tickets())
    }

    async fn employee_customers(&self, employee_id: i32) -> Result<Vec<Customer>, ServiceError> {
        let state = self.inner.read().await;
        state.employee(employee_id)?;
        Ok(queries::customers_of_employee(state.customers(), state.service_tickets(), employee_id))
    }

    async fn employee_of_the_month(&self) -> Result<Employee, ServiceError> {
        let cutoff = self.cutoff(self.settings.employee_of_month_window_months);
        let state = self.inner.read().await;
        queries::employee_of_the_month(state.employees(), state.service_tickets(), cutoff)
            .ok_or_else(|| ServiceError::NotFound("no employees on record".into()))
    }

    async fn completed_tickets(&self) -> Vec<ServiceTicket> {
        queries::completed_tickets(self.inner.read().await.service_tickets())
    }

    async fn prioritized_tickets(&self, rule: Option<PriorityRule>) -> Vec<ServiceTicket> {
        let rule = rule.unwrap_or(self.settings.priority_rule);
        queries::prioritized_tickets(self.inner.read().await.service_tickets(), rule)
    }
}
