use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use super::entity::Customer;
use super::value_objects::CustomerId;

// ============================================================================
// Customer Repository - Persistence Capability
// ============================================================================
//
// The service only ever calls `persist`. Storage lifetime, ordering and
// isolation belong to the implementation.
//
// ============================================================================

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// `Ok(true)` when the customer was durably stored, `Ok(false)` when the
    /// store rejected it without a specific reason.
    async fn persist(&self, customer: &Customer) -> Result<bool, RepositoryError>;
}

/// Map-backed repository; refuses a second customer with the same id.
#[derive(Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: &CustomerId) -> Option<Customer> {
        let customers = self.customers.read().await;
        customers.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn persist(&self, customer: &Customer) -> Result<bool, RepositoryError> {
        let mut customers = self.customers.write().await;
        if customers.contains_key(customer.id()) {
            return Ok(false);
        }

        customers.insert(customer.id().clone(), customer.clone());
        Ok(true)
    }
}
