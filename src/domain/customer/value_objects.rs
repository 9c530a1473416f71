use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::errors::{CustomerError, NameViolation};

// ============================================================================
// Customer Value Objects
// ============================================================================
//
// Each value object owns exactly one field rule. `parse` is the only way to
// obtain one from untrusted input, so holding a value means it passed.
//
// ============================================================================

pub const NAME_MIN_LETTERS: usize = 3;
pub const NAME_MAX_LETTERS: usize = 50;
pub const MIN_AGE: f64 = 18.0;
pub const MAX_AGE: f64 = 110.0;

// `\w` is spelled out as ASCII so the shape does not widen to Unicode letters.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_\-.]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email pattern is valid")
});

// DDD + 9 + eight digits, anywhere in the number
static MOBILE_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{2}9[0-9]{8}").expect("phone pattern is valid"));

/// Unique customer identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random version-4 identifier
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Customer name, stored exactly as given
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct CustomerName(String);

impl CustomerName {
    /// Length bounds apply to the trimmed name, counted in UTF-16 code units
    /// so astral characters weigh two.
    pub fn parse(name: &str) -> Result<Self, CustomerError> {
        let letters = trim_whitespace(name).encode_utf16().count();

        if letters < NAME_MIN_LETTERS {
            return Err(CustomerError::InvalidName(NameViolation::TooShort));
        }
        if letters > NAME_MAX_LETTERS {
            return Err(CustomerError::InvalidName(NameViolation::TooLong));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CustomerName {
    type Error = CustomerError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::parse(&name)
    }
}

/// Customer email address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(email: &str) -> Result<Self, CustomerError> {
        if !EMAIL_REGEX.is_match(trim_whitespace(email)) {
            return Err(CustomerError::InvalidEmail(email.to_string()));
        }

        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = CustomerError;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        Self::parse(&email)
    }
}

/// Customer age in whole years
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64")]
pub struct Age(f64);

impl Age {
    /// Integrality is checked before range, so `21.3` is an invalid value
    /// while `-1` is simply too low.
    pub fn parse(age: f64) -> Result<Self, CustomerError> {
        if !age.is_finite() || age.fract() != 0.0 {
            return Err(CustomerError::InvalidAgeValue(age));
        }
        if age < MIN_AGE {
            return Err(CustomerError::AgeTooLow(age));
        }
        if age > MAX_AGE {
            return Err(CustomerError::AgeTooHigh(age));
        }

        Ok(Self(age))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Age {
    type Error = CustomerError;

    fn try_from(age: f64) -> Result<Self, Self::Error> {
        Self::parse(age)
    }
}

/// Brazilian mobile number: DDD followed by a 9-prefixed subscriber number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64")]
pub struct PhoneNumber(u64);

impl PhoneNumber {
    pub fn parse(phone: u64) -> Result<Self, CustomerError> {
        if !MOBILE_PHONE_REGEX.is_match(&phone.to_string()) {
            return Err(CustomerError::InvalidPhone(Some(phone)));
        }

        Ok(Self(phone))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for PhoneNumber {
    type Error = CustomerError;

    fn try_from(phone: u64) -> Result<Self, Self::Error> {
        Self::parse(phone)
    }
}

/// Strips the whitespace set of ECMAScript `String.prototype.trim`:
/// Unicode `White_Space` minus NEL, plus the BOM.
fn trim_whitespace(text: &str) -> &str {
    text.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}
