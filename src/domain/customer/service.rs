use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::metrics::Metrics;

use super::entity::Customer;
use super::errors::CustomerError;
use super::id_generator::{IdGenerator, UuidV4Generator};
use super::repository::CustomerRepository;
use super::request::CreateCustomerRequest;
use super::validation::{validate_request, PhonePolicy};
use super::value_objects::CustomerId;

// ============================================================================
// Customer Creation Service
// ============================================================================
//
// Orchestrates: Request → Validation → Customer → Repository
//
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerServiceConfig {
    /// Whether a request without a phone number is accepted
    #[serde(default)]
    pub phone_policy: PhonePolicy,
}

impl CustomerServiceConfig {
    /// Every field, phone included, is mandatory
    pub fn strict() -> Self {
        Self {
            phone_policy: PhonePolicy::Required,
        }
    }

    /// Phone may be omitted
    pub fn lenient() -> Self {
        Self {
            phone_policy: PhonePolicy::Optional,
        }
    }
}

pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
    id_generator: Arc<dyn IdGenerator>,
    config: CustomerServiceConfig,
    metrics: Option<Arc<Metrics>>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            repository,
            id_generator: Arc::new(UuidV4Generator),
            config: CustomerServiceConfig::default(),
            metrics: None,
        }
    }

    pub fn with_config(mut self, config: CustomerServiceConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn config(&self) -> &CustomerServiceConfig {
        &self.config
    }

    /// Validate the request, build a customer with a fresh id and persist it.
    pub async fn create_customer(
        &self,
        request: CreateCustomerRequest,
    ) -> Result<Customer, CustomerError> {
        self.create(request, None).await
    }

    /// Same as `create_customer`, but keeps the caller's identifier.
    pub async fn create_customer_with_id(
        &self,
        request: CreateCustomerRequest,
        id: CustomerId,
    ) -> Result<Customer, CustomerError> {
        self.create(request, Some(id)).await
    }

    async fn create(
        &self,
        request: CreateCustomerRequest,
        id: Option<CustomerId>,
    ) -> Result<Customer, CustomerError> {
        let result = self.validate_and_persist(request, id).await;

        if let Some(metrics) = &self.metrics {
            match &result {
                Ok(_) => metrics.record_created(),
                Err(error) => metrics.record_failure(error),
            }
        }

        result
    }

    async fn validate_and_persist(
        &self,
        request: CreateCustomerRequest,
        id: Option<CustomerId>,
    ) -> Result<Customer, CustomerError> {
        tracing::debug!(
            phone_policy = ?self.config.phone_policy,
            "Validating customer creation request"
        );

        let validated = validate_request(&request, self.config.phone_policy).map_err(|error| {
            tracing::warn!(reason = error.kind(), error = %error, "Customer request rejected");
            error
        })?;

        let id = id.unwrap_or_else(|| self.id_generator.generate());
        let customer = Customer::from_validated(id, validated);

        tracing::debug!(customer_id = %customer.id(), "Request valid, persisting customer");

        let saved = self.repository.persist(&customer).await.map_err(|error| {
            tracing::error!(
                customer_id = %customer.id(),
                error = %error,
                "Repository failed while persisting customer"
            );
            CustomerError::from(error)
        })?;

        if !saved {
            tracing::error!(customer_id = %customer.id(), "Repository refused to persist customer");
            return Err(CustomerError::PersistenceFailure);
        }

        tracing::info!(customer_id = %customer.id(), "Customer created");
        Ok(customer)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
