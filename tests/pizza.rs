//! Drives a running server at `PIZZA_API_URL` (e.g. `http://localhost:3000`).
//! Ignored by default: `PIZZA_API_URL=... cargo test -- --ignored`.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("PIZZA_API_URL").expect("PIZZA_API_URL must point at a running server")
}

#[tokio::test]
#[ignore = "needs a running server at PIZZA_API_URL"]
async fn pizza_lifecycle() -> Result<(), reqwest::Error> {
    let base_url = base_url();
    let client = Client::new();

    let response = client
        .post(format!("{base_url}/pizza"))
        .json(&json!({ "name": "Margherita", "price": 1500 }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response.json::<Value>().await?;
    let id = created["id"].as_i64().expect("generated id");

    let pizzas = client
        .get(format!("{base_url}/pizza"))
        .send()
        .await?
        .json::<Vec<Value>>()
        .await?;
    assert!(pizzas.iter().any(|pizza| pizza["id"] == id));

    let response = client
        .put(format!("{base_url}/pizza/{id}"))
        .json(&json!({ "name": "Margherita", "price": 1600 }))
        .send()
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>().await?["affectedRows"], 1);

    let found = client
        .get(format!("{base_url}/pizza/{id}"))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(found, json!([{ "id": id, "name": "Margherita", "price": 1600 }]));

    for expected in [1, 0] {
        let response = client
            .delete(format!("{base_url}/pizza/{id}"))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.json::<Value>().await?["affectedRows"], expected);
    }

    Ok(())
}

#[tokio::test]
#[ignore = "needs a running server at PIZZA_API_URL"]
async fn missing_pizza_is_an_empty_array() -> Result<(), reqwest::Error> {
    let base_url = base_url();

    let response = Client::new()
        .get(format!("{base_url}/pizza/2147483647"))
        .send()
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await?, json!([]));

    Ok(())
}
