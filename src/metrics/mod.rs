use prometheus::{IntCounter, IntCounterVec, Opts, Registry};

use crate::domain::customer::CustomerError;

// ============================================================================
// Metrics Module - Prometheus metrics for customer creation
// ============================================================================
//
// One outcome is recorded per creation call:
// - created
// - rejected by a field rule (labelled by reason)
// - failed to persist
//
// Exposition is left to the embedding application via `registry()`.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    pub customers_created: IntCounter,
    pub customer_rejections: IntCounterVec,
    pub persistence_failures: IntCounter,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let customers_created = IntCounter::new(
            "customers_created_total",
            "Total customers validated and persisted",
        )?;
        registry.register(Box::new(customers_created.clone()))?;

        let customer_rejections = IntCounterVec::new(
            Opts::new("customer_rejections_total", "Creation requests rejected by a field rule"),
            &["reason"],
        )?;
        registry.register(Box::new(customer_rejections.clone()))?;

        let persistence_failures = IntCounter::new(
            "customer_persistence_failures_total",
            "Valid customers the repository failed to store",
        )?;
        registry.register(Box::new(persistence_failures.clone()))?;

        Ok(Self {
            registry,
            customers_created,
            customer_rejections,
            persistence_failures,
        })
    }

    /// Get the Prometheus registry for exposing metrics
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_created(&self) {
        self.customers_created.inc();
    }

    /// Validation errors count as rejections, everything else as a
    /// persistence failure.
    pub fn record_failure(&self, error: &CustomerError) {
        if error.is_validation() {
            self.customer_rejections.with_label_values(&[error.kind()]).inc();
        } else {
            self.persistence_failures.inc();
        }
    }
}
