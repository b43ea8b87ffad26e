//! Service layer providing the customer CRUD contract on top of models.
//! - Separates validation and outcome classification from data access.
//! - Reuses entity definitions and store primitives from the `models` crate.
//! - Exposes a store trait so transports and tests can inject any backend.

pub mod errors;
pub mod pagination;
pub mod customer;
#[cfg(test)]
pub mod test_support;
