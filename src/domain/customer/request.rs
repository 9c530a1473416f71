use serde::{Deserialize, Serialize};

// ============================================================================
// Customer Creation Request
// ============================================================================

/// Untrusted input for creating a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub nome: String,
    pub email: String,
    /// Carried as a float so non-integer input can be rejected
    pub idade: f64,
    #[serde(default)]
    pub telefone: Option<u64>,
}

impl CreateCustomerRequest {
    pub fn new(
        nome: impl Into<String>,
        email: impl Into<String>,
        idade: f64,
        telefone: Option<u64>,
    ) -> Self {
        Self {
            nome: nome.into(),
            email: email.into(),
            idade,
            telefone,
        }
    }
}
