use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use customer_service::domain::customer::InMemoryCustomerRepository;
use customer_service::metrics::Metrics;
use customer_service::{CreateCustomerRequest, CustomerService, CustomerServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,customer_service=debug")),
        )
        .init();

    tracing::info!("Starting customer creation demo");

    let repository = Arc::new(InMemoryCustomerRepository::new());
    let metrics = Arc::new(Metrics::new()?);
    let service = CustomerService::new(repository.clone())
        .with_config(CustomerServiceConfig::strict())
        .with_metrics(metrics.clone());

    let requests = vec![
        CreateCustomerRequest::new("Maria Silva", "maria.silva@email.com", 34.0, Some(11912345678)),
        CreateCustomerRequest::new("ze   ", "ze@email.com", 20.0, Some(32912345678)),
        CreateCustomerRequest::new("Joana", "joana.email.com", 28.0, Some(21987654321)),
        CreateCustomerRequest::new("Carlos", "carlos@email.com", 21.3, Some(31998765432)),
        CreateCustomerRequest::new("Paulo", "paulo@email.com", 40.0, Some(1112345678)),
    ];

    for request in requests {
        match service.create_customer(request).await {
            Ok(customer) => tracing::info!(customer_id = %customer.id(), nome = customer.nome(), "✅ Created"),
            Err(error) => tracing::warn!(reason = error.kind(), "❌ {}", error),
        }
    }

    tracing::info!(
        stored = repository.len().await,
        created = metrics.customers_created.get(),
        persistence_failures = metrics.persistence_failures.get(),
        "Demo complete"
    );

    Ok(())
}
