use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use service::customer::domain::{CreateCustomerInput, Customer, UpdateCustomerInput};
use service::pagination::PageRequest;

use crate::{errors::JsonApiError, observability::track, routes::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number
    pub page_id: i64,
    /// Customers per page, 5 to 10
    pub page_size: i64,
}

#[utoipa::path(
    post, path = "/customers", tag = "customer",
    request_body = crate::openapi::CreateCustomerRequestDoc,
    responses(
        (status = 200, description = "Created", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponseDoc),
        (status = 500, description = "Create Failed", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    input: Result<Json<CreateCustomerInput>, JsonRejection>,
) -> Result<Json<Customer>, JsonApiError> {
    let Json(input) = input?;
    let c = track("create", state.customers.create_customer(input)).await?;
    Ok(Json(c))
}

#[utoipa::path(
    get, path = "/customers/{id}", tag = "customer",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Invalid ID", body = crate::openapi::ErrorResponseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponseDoc),
        (status = 500, description = "Get Failed", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Customer>, JsonApiError> {
    let Path(id) = id?;
    let c = track("get", state.customers.get_customer(id)).await?;
    Ok(Json(c))
}

#[utoipa::path(
    get, path = "/customers", tag = "customer",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CustomerDoc]),
        (status = 400, description = "Invalid Page", body = crate::openapi::ErrorResponseDoc),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    q: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<Customer>>, JsonApiError> {
    let Query(q) = q?;
    let page = PageRequest::new(q.page_id, q.page_size);
    let rows = track("list", state.customers.list_customers(page)).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    put, path = "/customers/{id}", tag = "customer",
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = crate::openapi::UpdateCustomerRequestDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CustomerDoc),
        (status = 400, description = "Invalid ID", body = crate::openapi::ErrorResponseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponseDoc),
        (status = 500, description = "Update Failed", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
    input: Result<Json<UpdateCustomerInput>, JsonRejection>,
) -> Result<Json<Customer>, JsonApiError> {
    let Path(id) = id?;
    let Json(input) = input?;
    let c = track("update", state.customers.update_customer(id, input)).await?;
    Ok(Json(c))
}

#[utoipa::path(
    delete, path = "/customers/{id}", tag = "customer",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid ID", body = crate::openapi::ErrorResponseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponseDoc),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id?;
    track("delete", state.customers.delete_customer(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
