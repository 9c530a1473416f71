pub mod domain;
pub mod metrics;

pub use domain::customer::{
    CreateCustomerRequest, Customer, CustomerError, CustomerId, CustomerRepository,
    CustomerService, CustomerServiceConfig, PhonePolicy,
};
