use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::customer::repository::mock::InMemoryCustomerStore;

struct TestApp {
    base_url: String,
}

/// Real router on an ephemeral port, backed by the in-memory store.
async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState::new(Arc::new(InMemoryCustomerStore::default()));
    let app: Router = routes::build_router(state, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

async fn create(
    c: &reqwest::Client,
    app: &TestApp,
    name: &str,
    phone: &str,
) -> anyhow::Result<Value> {
    let res = c.post(format!("{}/customers", app.base_url))
        .json(&json!({"fullName": name, "phoneNumber": phone}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    Ok(res.json::<Value>().await?)
}

#[tokio::test]
async fn health_is_public() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn create_then_get_returns_snake_case_record() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let created = create(&c, &app, "Karim Stam", "+2131122334455").await?;
    assert_eq!(created["full_name"], "Karim Stam");
    assert_eq!(created["phone_number"], "+2131122334455");
    assert!(created["created_at"].is_string());
    let id = created["id"].as_i64().expect("numeric id");

    let res = c.get(format!("{}/customers/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, created);
    Ok(())
}

#[tokio::test]
async fn create_without_required_fields_is_bad_request() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/customers", app.base_url))
        .json(&json!({"fullName": "Karim Stam"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body["error"].as_str().unwrap_or_default().contains("phoneNumber"));
    Ok(())
}

#[tokio::test]
async fn missing_customer_yields_single_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/customers/999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    // one JSON object, not two concatenated responses
    let body: Value = serde_json::from_str(&res.text().await?)?;
    assert!(body["error"].is_string());

    let res = c.put(format!("{}/customers/999", app.base_url))
        .json(&json!({"fullName": "x", "phoneNumber": "y"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.delete(format!("{}/customers/999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_with_empty_body_blanks_fields() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let created = create(&c, &app, "Karim Stam", "+2131122334455").await?;

    let res = c.put(format!("{}/customers/{}", app.base_url, created["id"]))
        .json(&json!({}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["full_name"], "");
    assert_eq!(body["phone_number"], "");
    assert_eq!(body["created_at"], created["created_at"]);
    Ok(())
}

#[tokio::test]
async fn update_stores_values_verbatim_and_null_as_blank() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let created = create(&c, &app, "Karim Stam", "+2131122334455").await?;
    let url = format!("{}/customers/{}", app.base_url, created["id"]);

    let res = c.put(&url)
        .json(&json!({"fullName": "  Ada Lovelace  ", "phoneNumber": null}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["full_name"], "  Ada Lovelace  ");
    assert_eq!(body["phone_number"], "");

    let res = c.get(&url).send().await?;
    assert_eq!(res.json::<Value>().await?, body);
    Ok(())
}

#[tokio::test]
async fn delete_then_get_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    let created = create(&c, &app, "Karim Stam", "1").await?;
    let url = format!("{}/customers/{}", app.base_url, created["id"]);

    let res = c.delete(&url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.get(&url).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn list_pages_in_insertion_order() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    for i in 1..=10 {
        create(&c, &app, &format!("Customer {i}"), &format!("{i}")).await?;
    }

    let res = c.get(format!("{}/customers?page_id=2&page_size=5", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let page = res.json::<Vec<Value>>().await?;
    let names: Vec<&str> = page.iter().filter_map(|v| v["full_name"].as_str()).collect();
    assert_eq!(names, vec!["Customer 6", "Customer 7", "Customer 8", "Customer 9", "Customer 10"]);

    let res = c.get(format!("{}/customers?page_id=3&page_size=5", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.json::<Vec<Value>>().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn list_rejects_out_of_range_pages() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/customers?page_id=1&page_size=3", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let res = c.get(format!("{}/customers?page_id=0&page_size=5", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let res = c.get(format!("{}/customers", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn non_positive_and_non_numeric_ids_are_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/customers/0", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let res = c.get(format!("{}/customers/abc", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert!(body["error"].is_string());
    Ok(())
}

#[tokio::test]
async fn openapi_and_metrics_are_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    create(&c, &app, "Karim Stam", "1").await?;

    let res = c.get(format!("{}/api-docs/openapi.json", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<Value>().await?;
    assert!(doc["paths"]["/customers/{id}"].is_object());

    let res = c.get(format!("{}/metrics", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.contains("customer_requests_total"));
    Ok(())
}
