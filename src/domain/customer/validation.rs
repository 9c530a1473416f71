use serde::{Deserialize, Serialize};

use super::errors::CustomerError;
use super::request::CreateCustomerRequest;
use super::value_objects::{Age, CustomerName, Email, PhoneNumber};

// ============================================================================
// Request Validation Pipeline
// ============================================================================
//
// Fields are checked in a fixed order: email, age, name, phone.
// The first failing rule aborts the pipeline.
//
// ============================================================================

/// Whether a request must carry a phone number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhonePolicy {
    /// A missing phone is rejected as `InvalidPhone`
    #[default]
    Required,
    /// A missing phone is accepted; a present one is still checked
    Optional,
}

/// Request whose every field passed its rule
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub(crate) email: Email,
    pub(crate) age: Age,
    pub(crate) name: CustomerName,
    pub(crate) phone: Option<PhoneNumber>,
}

pub fn validate_request(
    request: &CreateCustomerRequest,
    phone_policy: PhonePolicy,
) -> Result<ValidatedRequest, CustomerError> {
    let email = Email::parse(&request.email)?;
    let age = Age::parse(request.idade)?;
    let name = CustomerName::parse(&request.nome)?;
    let phone = validate_phone(request.telefone, phone_policy)?;

    Ok(ValidatedRequest {
        email,
        age,
        name,
        phone,
    })
}

fn validate_phone(
    phone: Option<u64>,
    policy: PhonePolicy,
) -> Result<Option<PhoneNumber>, CustomerError> {
    match (phone, policy) {
        (Some(phone), _) => PhoneNumber::parse(phone).map(Some),
        (None, PhonePolicy::Optional) => Ok(None),
        (None, PhonePolicy::Required) => Err(CustomerError::InvalidPhone(None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::errors::NameViolation;

    fn request(nome: &str, email: &str, idade: f64, telefone: Option<u64>) -> CreateCustomerRequest {
        CreateCustomerRequest::new(nome, email, idade, telefone)
    }

    #[test]
    fn test_valid_request_passes() {
        let validated = validate_request(
            &request("Nome Valido", "teste@email.com", 20.0, Some(32912345678)),
            PhonePolicy::Required,
        )
        .unwrap();

        assert_eq!(validated.name.as_str(), "Nome Valido");
        assert_eq!(validated.phone.map(|p| p.value()), Some(32912345678));
    }

    #[test]
    fn test_email_checked_before_age() {
        let err = validate_request(
            &request("Nome Valido", "teste.email.com", 21.3, Some(32912345678)),
            PhonePolicy::Required,
        )
        .unwrap_err();

        assert!(matches!(err, CustomerError::InvalidEmail(_)));
    }

    #[test]
    fn test_age_checked_before_name() {
        let err = validate_request(
            &request("ze", "teste@email.com", 111.0, Some(32912345678)),
            PhonePolicy::Required,
        )
        .unwrap_err();

        assert!(matches!(err, CustomerError::AgeTooHigh(_)));
    }

    #[test]
    fn test_name_checked_before_phone() {
        let err = validate_request(
            &request("ze", "teste@email.com", 20.0, Some(912345678)),
            PhonePolicy::Required,
        )
        .unwrap_err();

        assert!(matches!(err, CustomerError::InvalidName(NameViolation::TooShort)));
    }

    #[test]
    fn test_missing_phone_follows_policy() {
        let missing = request("Nome Valido", "teste@email.com", 20.0, None);

        assert!(matches!(
            validate_request(&missing, PhonePolicy::Required),
            Err(CustomerError::InvalidPhone(None))
        ));

        let validated = validate_request(&missing, PhonePolicy::Optional).unwrap();
        assert_eq!(validated.phone, None);
    }

    #[test]
    fn test_optional_policy_still_checks_present_phone() {
        let err = validate_request(
            &request("Nome Valido", "teste@email.com", 20.0, Some(1112345678)),
            PhonePolicy::Optional,
        )
        .unwrap_err();

        assert!(matches!(err, CustomerError::InvalidPhone(Some(1112345678))));
    }
}
