// Test doubles and request builders shared by the customer tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rand::Rng;

use super::entity::Customer;
use super::repository::{CustomerRepository, RepositoryError};
use super::request::CreateCustomerRequest;
use super::validation::{validate_request, PhonePolicy};
use super::value_objects::CustomerId;

/// Builds a valid random request; each `with_*` overrides one field.
pub struct CreateCustomerRequestBuilder {
    nome: String,
    email: String,
    idade: f64,
    telefone: Option<u64>,
}

impl CreateCustomerRequestBuilder {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();

        Self {
            nome: random_letters(&mut rng, 3),
            email: format!(
                "{}@{}.com",
                random_letters(&mut rng, 8),
                random_letters(&mut rng, 5)
            ),
            idade: rng.gen_range(18..=110) as f64,
            telefone: Some(32912345678),
        }
    }

    pub fn with_name(mut self, nome: &str) -> Self {
        self.nome = nome.to_string();
        self
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn with_age(mut self, idade: f64) -> Self {
        self.idade = idade;
        self
    }

    pub fn with_phone(mut self, telefone: Option<u64>) -> Self {
        self.telefone = telefone;
        self
    }

    pub fn build(self) -> CreateCustomerRequest {
        CreateCustomerRequest::new(self.nome, self.email, self.idade, self.telefone)
    }
}

fn random_letters(rng: &mut impl Rng, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}

/// Valid customer carrying the given id
pub fn customer_with_id(id: &str) -> Customer {
    let request = CreateCustomerRequestBuilder::new().build();
    let validated = validate_request(&request, PhonePolicy::Required).unwrap();
    Customer::from_validated(CustomerId::new(id), validated)
}

/// Counts persist calls and answers with a fixed result
pub struct RecordingRepository {
    accept: bool,
    calls: AtomicUsize,
    persisted: Mutex<Vec<Customer>>,
}

impl RecordingRepository {
    pub fn accepting() -> Self {
        Self::answering(true)
    }

    pub fn refusing() -> Self {
        Self::answering(false)
    }

    fn answering(accept: bool) -> Self {
        Self {
            accept,
            calls: AtomicUsize::new(0),
            persisted: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn persisted(&self) -> Vec<Customer> {
        self.persisted.lock().unwrap().clone()
    }
}

#[async_trait]
impl CustomerRepository for RecordingRepository {
    async fn persist(&self, customer: &Customer) -> Result<bool, RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.accept {
            self.persisted.lock().unwrap().push(customer.clone());
        }
        Ok(self.accept)
    }
}

/// Repository whose backend is always down
pub struct FailingRepository;

#[async_trait]
impl CustomerRepository for FailingRepository {
    async fn persist(&self, _customer: &Customer) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("connection refused".to_string()))
    }
}
