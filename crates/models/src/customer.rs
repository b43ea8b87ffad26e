//! `customer` entity and the raw persistence primitives over it.
//!
//! These functions never validate input; they only translate between rows and
//! [`ModelError`], keeping "row absent" distinct from any other storage failure.
use sea_orm::{
    entity::prelude::*, ActiveModelTrait, DatabaseConnection, QueryOrder, QuerySelect, Set,
};
use sea_orm::sea_query::Expr;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a row; the database assigns `id`, `created_at` is stamped here.
pub async fn create(
    db: &DatabaseConnection,
    full_name: &str,
    phone_number: &str,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        full_name: Set(full_name.to_string()),
        phone_number: Set(phone_number.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find(db: &DatabaseConnection, id: i64) -> Result<Model, ModelError> {
    Entity::find_by_id(id).one(db).await?.ok_or(ModelError::NotFound)
}

/// Overwrite the mutable columns in one `UPDATE ... RETURNING` statement.
/// `Ok(None)` means no row carried that id.
pub async fn update(
    db: &DatabaseConnection,
    id: i64,
    full_name: &str,
    phone_number: &str,
) -> Result<Option<Model>, ModelError> {
    let rows = Entity::update_many()
        .col_expr(Column::FullName, Expr::value(full_name.to_string()))
        .col_expr(Column::PhoneNumber, Expr::value(phone_number.to_string()))
        .filter(Column::Id.eq(id))
        .exec_with_returning(db)
        .await?;
    Ok(rows.into_iter().next())
}

pub async fn delete(db: &DatabaseConnection, id: i64) -> Result<(), ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ModelError::NotFound);
    }
    Ok(())
}

/// Up to `limit` rows in insertion (id) order, skipping the first `offset`.
pub async fn list(
    db: &DatabaseConnection,
    limit: u64,
    offset: u64,
) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .order_by_asc(Column::Id)
        .limit(limit)
        .offset(offset)
        .all(db)
        .await?;
    Ok(rows)
}
