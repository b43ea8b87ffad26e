use sea_orm::DatabaseConnection;

use models::customer;
use models::errors::ModelError;

use crate::customer::domain::Customer;
use crate::customer::repository::CustomerStore;

/// SeaORM-backed store over the `customer` table.
pub struct SeaOrmCustomerStore {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CustomerStore for SeaOrmCustomerStore {
    async fn create(&self, full_name: &str, phone_number: &str) -> Result<Customer, ModelError> {
        let created = customer::create(&self.db, full_name, phone_number).await?;
        Ok(created.into())
    }

    async fn get(&self, id: i64) -> Result<Customer, ModelError> {
        Ok(customer::find(&self.db, id).await?.into())
    }

    async fn update(
        &self,
        id: i64,
        full_name: &str,
        phone_number: &str,
    ) -> Result<Option<Customer>, ModelError> {
        let updated = customer::update(&self.db, id, full_name, phone_number).await?;
        Ok(updated.map(Customer::from))
    }

    async fn delete(&self, id: i64) -> Result<(), ModelError> {
        customer::delete(&self.db, id).await
    }

    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Customer>, ModelError> {
        let rows = customer::list(&self.db, limit, offset).await?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }
}
