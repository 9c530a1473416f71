use serde::Serialize;

use super::validation::ValidatedRequest;
use super::value_objects::{Age, CustomerId, CustomerName, Email, PhoneNumber};

// ============================================================================
// Customer Entity
// ============================================================================

/// A customer that passed every field rule.
///
/// There is no public constructor: values only come out of
/// `CustomerService`, after validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    id: CustomerId,
    nome: CustomerName,
    email: Email,
    idade: Age,
    telefone: Option<PhoneNumber>,
}

impl Customer {
    pub(crate) fn from_validated(id: CustomerId, validated: ValidatedRequest) -> Self {
        let ValidatedRequest {
            email,
            age,
            name,
            phone,
        } = validated;

        Self {
            id,
            nome: name,
            email,
            idade: age,
            telefone: phone,
        }
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn nome(&self) -> &str {
        self.nome.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn idade(&self) -> f64 {
        self.idade.value()
    }

    pub fn telefone(&self) -> Option<u64> {
        self.telefone.map(|phone| phone.value())
    }
}
