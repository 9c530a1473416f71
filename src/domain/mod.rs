// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with:
// - Value objects
// - Request
// - Errors
// - Entity
// - Repository capability
// - Service
//
// Storage and transport are not part of this layer; they are injected.
//
// ============================================================================

pub mod customer;
