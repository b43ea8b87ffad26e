use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Customer record as returned by every customer endpoint.
#[derive(ToSchema)]
pub struct CustomerDoc {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Karim Stam")]
    pub full_name: String,
    #[schema(example = "+2131122334455")]
    pub phone_number: String,
    #[schema(format = DateTime, example = "2021-05-25T00:53:16.535668Z")]
    pub created_at: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CreateCustomerRequestDoc {
    #[schema(example = "Karim Stam")]
    pub full_name: String,
    #[schema(example = "+2131122334455")]
    pub phone_number: String,
}

/// Both fields replace the stored values; omitted fields become empty strings.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct UpdateCustomerRequestDoc {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorResponseDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::customers::create,
        crate::routes::customers::get,
        crate::routes::customers::list,
        crate::routes::customers::update,
        crate::routes::customers::delete,
    ),
    components(
        schemas(
            HealthResponse,
            CustomerDoc,
            CreateCustomerRequestDoc,
            UpdateCustomerRequestDoc,
            ErrorResponseDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "customer")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_customer_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/customers"));
        assert!(paths.iter().any(|p| p.as_str() == "/customers/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health"));
    }
}
