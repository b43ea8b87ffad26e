use async_trait::async_trait;
use models::errors::ModelError;

use super::domain::Customer;

/// Persistence abstraction for customer records.
///
/// Implementations report a missing row as [`ModelError::NotFound`] and every
/// other failure as [`ModelError::Db`].
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn create(&self, full_name: &str, phone_number: &str) -> Result<Customer, ModelError>;
    async fn get(&self, id: i64) -> Result<Customer, ModelError>;
    /// Conditional overwrite of the mutable fields; `Ok(None)` when no row has `id`.
    async fn update(
        &self,
        id: i64,
        full_name: &str,
        phone_number: &str,
    ) -> Result<Option<Customer>, ModelError>;
    async fn delete(&self, id: i64) -> Result<(), ModelError>;
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Customer>, ModelError>;
}

/// In-memory store for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};
    use chrono::Utc;

    #[derive(Default)]
    struct Inner {
        rows: BTreeMap<i64, Customer>, // key: id, iteration order == insertion order
        last_id: i64,
    }

    #[derive(Default)]
    pub struct InMemoryCustomerStore {
        inner: Mutex<Inner>,
    }

    impl InMemoryCustomerStore {
        fn lock(&self) -> Result<MutexGuard<'_, Inner>, ModelError> {
            self.inner
                .lock()
                .map_err(|_| ModelError::Db("in-memory store lock poisoned".into()))
        }
    }

    #[async_trait]
    impl CustomerStore for InMemoryCustomerStore {
        async fn create(
            &self,
            full_name: &str,
            phone_number: &str,
        ) -> Result<Customer, ModelError> {
            let mut inner = self.lock()?;
            inner.last_id += 1;
            let customer = Customer {
                id: inner.last_id,
                full_name: full_name.to_string(),
                phone_number: phone_number.to_string(),
                created_at: Utc::now(),
            };
            inner.rows.insert(customer.id, customer.clone());
            Ok(customer)
        }

        async fn get(&self, id: i64) -> Result<Customer, ModelError> {
            let inner = self.lock()?;
            inner.rows.get(&id).cloned().ok_or(ModelError::NotFound)
        }

        async fn update(
            &self,
            id: i64,
            full_name: &str,
            phone_number: &str,
        ) -> Result<Option<Customer>, ModelError> {
            let mut inner = self.lock()?;
            Ok(inner.rows.get_mut(&id).map(|c| {
                c.full_name = full_name.to_string();
                c.phone_number = phone_number.to_string();
                c.clone()
            }))
        }

        async fn delete(&self, id: i64) -> Result<(), ModelError> {
            let mut inner = self.lock()?;
            inner.rows.remove(&id).map(|_| ()).ok_or(ModelError::NotFound)
        }

        async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Customer>, ModelError> {
            let inner = self.lock()?;
            let skip = usize::try_from(offset).unwrap_or(usize::MAX);
            let take = usize::try_from(limit).unwrap_or(usize::MAX);
            Ok(inner.rows.values().skip(skip).take(take).cloned().collect())
        }
    }
}
