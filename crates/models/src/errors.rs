use thiserror::Error;

/// Outcome of a failed store primitive. Row absence is kept apart from every
/// other storage failure so callers can answer "not found" precisely.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("row not found")]
    NotFound,
    #[error("database error: {0}")]
    Db(String),
}

impl From<sea_orm::DbErr> for ModelError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::RecordNotFound(_) => ModelError::NotFound,
            other => ModelError::Db(other.to_string()),
        }
    }
}
