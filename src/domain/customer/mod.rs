// ============================================================================
// Customer Domain - Validation and Creation of Customers
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (CustomerName, Email, Age, PhoneNumber, CustomerId)
// - Request (CreateCustomerRequest)
// - Validation pipeline (email → age → name → phone)
// - Errors (CustomerError enum)
// - Entity (Customer, only built from a validated request)
// - Repository capability and id generator seams
// - Service (CustomerService)
//
// ============================================================================

pub mod value_objects;
pub mod request;
pub mod errors;
pub mod validation;
pub mod entity;
pub mod repository;
pub mod id_generator;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export for convenience
pub use value_objects::*;
pub use request::*;
pub use errors::*;
pub use validation::*;
pub use entity::*;
pub use repository::*;
pub use id_generator::*;
pub use service::*;
