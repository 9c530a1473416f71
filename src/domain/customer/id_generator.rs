use super::value_objects::CustomerId;

/// Source of identifiers for new customers
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> CustomerId;
}

/// Random version-4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn generate(&self) -> CustomerId {
        CustomerId::new_v4()
    }
}
