//! Pagination utilities for service layer
//!
//! Pages are 1-based and the page size is bounded so a single request can never
//! turn into an unbounded scan.

use crate::errors::ServiceError;

/// Smallest page a caller may ask for.
pub const MIN_PAGE_SIZE: i64 = 5;
/// Largest page a caller may ask for.
pub const MAX_PAGE_SIZE: i64 = 10;

/// Pagination parameters as received from the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index
    pub page_id: i64,
    /// items per page
    pub page_size: i64,
}

/// Store-facing slice: `limit` rows after skipping `offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub limit: u64,
    pub offset: u64,
}

impl PageRequest {
    pub fn new(page_id: i64, page_size: i64) -> Self { Self { page_id, page_size } }

    /// Validate bounds and turn the page into a `(limit, offset)` window.
    pub fn window(self) -> Result<Window, ServiceError> {
        if self.page_id < 1 {
            return Err(ServiceError::InvalidInput("page_id must be >= 1".into()));
        }
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ServiceError::InvalidInput(format!(
                "page_size must be between {} and {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE
            )));
        }
        // offset stays within i64 so it binds as a Postgres BIGINT
        let offset = (self.page_id - 1)
            .checked_mul(self.page_size)
            .ok_or_else(|| ServiceError::InvalidInput("page_id is out of range".into()))?;
        Ok(Window { limit: self.page_size as u64, offset: offset as u64 })
    }
}
