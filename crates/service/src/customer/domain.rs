use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Customer record as seen by callers of the service (store-agnostic).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl From<models::customer::Model> for Customer {
    fn from(m: models::customer::Model) -> Self {
        Self {
            id: m.id,
            full_name: m.full_name,
            phone_number: m.phone_number,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

/// Create input; both fields are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_number: String,
}

/// Update input. Whatever is supplied replaces the stored value, blanks included.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_number: String,
}

/// `null` reads the same as an absent field.
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}
