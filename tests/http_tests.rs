//! HTTP round trips against the axum router on a random local port.

use carpark::config::{IdMode, ServerSettings};
use carpark::graphql::{build_schema, router};
use carpark::store::{self, CarPark};
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn spawn_server(settings: ServerSettings) -> String {
    let schema = build_schema(store::shared(CarPark::seeded(IdMode::Count)));
    let app = router(schema, &settings);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/graphql", addr)
}

async fn post(client: &reqwest::Client, url: &str, body: Value) -> Value {
    let resp = client.post(url).json(&body).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn test_sell_then_buy_over_http() {
    let url = spawn_server(ServerSettings::default()).await;
    let client = reqwest::Client::new();

    let body = post(
        &client,
        &url,
        json!({ "query": r#"mutation { sellOldCar(carId: "2") }"# }),
    )
    .await;
    assert_eq!(body, json!({ "data": { "sellOldCar": true } }));

    let body = post(&client, &url, json!({ "query": "{ getCars { carId } }" })).await;
    assert_eq!(
        body,
        json!({ "data": { "getCars": [{ "carId": "1" }, { "carId": "3" }] } })
    );

    let body = post(
        &client,
        &url,
        json!({
            "query": "mutation Buy($name: String!) { buyNewCar(name: $name, color: \"Blue\", price: 60000) { carId name } }",
            "variables": { "name": "Tesla" },
            "operationName": "Buy"
        }),
    )
    .await;
    assert_eq!(
        body,
        json!({ "data": { "buyNewCar": { "carId": "3", "name": "tesla" } } })
    );
}

#[tokio::test]
async fn test_malformed_query_reports_errors() {
    let url = spawn_server(ServerSettings::default()).await;
    let client = reqwest::Client::new();

    let body = post(&client, &url, json!({ "query": "{ getCars { " })).await;
    assert_eq!(body["data"], Value::Null);
    assert!(!body["errors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_query_hides_errors_when_disabled() {
    let settings = ServerSettings {
        expose_errors: false,
        ..Default::default()
    };
    let url = spawn_server(settings).await;
    let client = reqwest::Client::new();

    let body = post(&client, &url, json!({ "query": "{ getCars { " })).await;
    assert_eq!(body, json!({ "data": null }));
}

#[tokio::test]
async fn test_missing_query_field() {
    let url = spawn_server(ServerSettings::default()).await;
    let client = reqwest::Client::new();

    let body = post(&client, &url, json!({})).await;
    assert_eq!(body["data"], Value::Null);
    assert!(body.get("errors").is_some());
}

#[tokio::test]
async fn test_graphiql_page() {
    let url = spawn_server(ServerSettings::default()).await;

    let resp = reqwest::get(&url).await.unwrap();
    assert_eq!(resp.status(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn test_graphiql_can_be_disabled() {
    let settings = ServerSettings {
        graphiql: false,
        ..Default::default()
    };
    let url = spawn_server(settings).await;

    let resp = reqwest::get(&url).await.unwrap();
    assert_eq!(resp.status(), 405);
}
