//! Customer module: domain types, the store abstraction and the service that
//! validates requests and classifies store outcomes.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use repository::CustomerStore;
pub use service::CustomerService;
