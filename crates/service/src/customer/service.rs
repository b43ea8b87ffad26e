use std::sync::Arc;

use models::errors::ModelError;
use tracing::{error, info, instrument};

use super::domain::{CreateCustomerInput, Customer, UpdateCustomerInput};
use super::repository::CustomerStore;
use crate::errors::ServiceError;
use crate::pagination::PageRequest;

/// Customer business service independent of web framework.
///
/// Holds one long-lived store handle injected at construction; every call is
/// request-scoped and produces exactly one outcome.
pub struct CustomerService<R: CustomerStore + ?Sized> {
    repo: Arc<R>,
}

impl<R: CustomerStore + ?Sized> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a customer after checking both fields are present.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{CustomerService, domain::CreateCustomerInput};
    /// use service::customer::repository::mock::InMemoryCustomerStore;
    /// use std::sync::Arc;
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerStore::default()));
    /// let input = CreateCustomerInput {
    ///     full_name: "Karim Stam".into(),
    ///     phone_number: "+2131122334455".into(),
    /// };
    /// let c = tokio_test::block_on(svc.create_customer(input)).unwrap();
    /// assert_eq!(c.id, 1);
    /// assert_eq!(c.full_name, "Karim Stam");
    /// ```
    #[instrument(skip(self, input))]
    pub async fn create_customer(
        &self,
        input: CreateCustomerInput,
    ) -> Result<Customer, ServiceError> {
        let full_name = required("fullName", &input.full_name)?;
        let phone_number = required("phoneNumber", &input.phone_number)?;

        // any store failure on insert is internal, including a stray NotFound
        let created = self
            .repo
            .create(full_name, phone_number)
            .await
            .map_err(|e| internal("create", e))?;
        info!(customer_id = created.id, "customer_created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get_customer(&self, id: i64) -> Result<Customer, ServiceError> {
        positive_id(id)?;
        self.repo.get(id).await.map_err(|e| classify("get", e))
    }

    /// List one page of customers in insertion order; a page past the end is empty.
    ///
    /// # Examples
    /// ```
    /// use service::customer::{CustomerService, repository::mock::InMemoryCustomerStore};
    /// use service::pagination::PageRequest;
    /// use std::sync::Arc;
    /// let svc = CustomerService::new(Arc::new(InMemoryCustomerStore::default()));
    /// let page = tokio_test::block_on(svc.list_customers(PageRequest::new(1, 5))).unwrap();
    /// assert!(page.is_empty());
    /// assert!(tokio_test::block_on(svc.list_customers(PageRequest::new(1, 3))).is_err());
    /// ```
    #[instrument(skip(self), fields(page_id = page.page_id, page_size = page.page_size))]
    pub async fn list_customers(&self, page: PageRequest) -> Result<Vec<Customer>, ServiceError> {
        let window = page.window()?;
        let rows = self
            .repo
            .list(window.limit, window.offset)
            .await
            .map_err(|e| internal("list", e))?;
        info!(count = rows.len(), "customers_listed");
        Ok(rows)
    }

    /// Replace both mutable fields. Values are stored as given, blanks included.
    #[instrument(skip(self, input))]
    pub async fn update_customer(
        &self,
        id: i64,
        input: UpdateCustomerInput,
    ) -> Result<Customer, ServiceError> {
        positive_id(id)?;
        let updated = self
            .repo
            .update(id, &input.full_name, &input.phone_number)
            .await
            .map_err(|e| classify("update", e))?
            .ok_or_else(|| ServiceError::not_found("customer"))?;
        info!(customer_id = updated.id, "customer_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: i64) -> Result<(), ServiceError> {
        positive_id(id)?;
        self.repo.delete(id).await.map_err(|e| classify("delete", e))?;
        info!(customer_id = id, "customer_deleted");
        Ok(())
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, ServiceError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ServiceError::InvalidInput(format!("{} is required", field)));
    }
    Ok(v)
}

fn positive_id(id: i64) -> Result<(), ServiceError> {
    if id <= 0 {
        return Err(ServiceError::InvalidInput("id must be a positive integer".into()));
    }
    Ok(())
}

/// NotFound stays NotFound; everything else becomes Internal and is logged here.
fn classify(op: &'static str, e: ModelError) -> ServiceError {
    let err = ServiceError::from(e);
    if let ServiceError::Internal(msg) = &err {
        error!(operation = op, code = err.code(), error = %msg, "customer store failure");
    }
    err
}

/// Like [`classify`], but a missing row is also an internal failure.
fn internal(op: &'static str, e: ModelError) -> ServiceError {
    match e {
        ModelError::NotFound => classify(op, ModelError::Db("store reported a missing row".into())),
        other => classify(op, other),
    }
}
