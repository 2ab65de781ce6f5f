use serde_json::{Value, json};

use crate::helpers::{TestApp, assert_redirects_to_login};

#[tokio::test]
async fn ordering_requires_a_session() {
    let app = TestApp::new().await;
    let product = app.add_product("Mug", 1_200).await;

    let response = app
        .post_orders(&json!([{ "product_id": product.id.to_string(), "quantity": 1 }]))
        .await;
    assert_redirects_to_login(&response);

    assert_redirects_to_login(&app.get_order_history("").await);
}

#[tokio::test]
async fn creates_orders_and_lists_them_in_history() {
    let app = TestApp::new().await;
    let mug = app.add_product("Mug", 1_200).await;
    let kettle = app.add_product("Kettle", 4_500).await;
    app.signup_random_user().await;

    let response = app
        .post_orders(&json!([
            { "product_id": mug.id.to_string(), "quantity": 2 },
            { "product_id": kettle.id.to_string(), "quantity": 1 },
        ]))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["count"], 2);

    let history: Value = app.get_order_history("").await.json().await.unwrap();
    let orders = history["previousOrders"].as_array().unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|order| order["created_at"].is_string()));

    let mug_order = orders
        .iter()
        .find(|order| order["product"]["id"] == mug.id.to_string())
        .expect("Mug order missing");
    assert_eq!(mug_order["quantity"], 2);
    assert_eq!(mug_order["product"]["name"], "Mug");
    assert_eq!(history["paginationDetails"]["hasNextPage"], false);
}

#[tokio::test]
async fn rejects_invalid_order_lines() {
    let app = TestApp::new().await;
    let mug = app.add_product("Mug", 1_200).await;
    app.signup_random_user().await;

    let bodies = [
        json!([]),
        json!([{ "product_id": "not-a-uuid", "quantity": 1 }]),
        json!([{ "product_id": mug.id.to_string(), "quantity": 0 }]),
        json!([{ "product_id": uuid::Uuid::new_v4().to_string(), "quantity": 1 }]),
        json!({ "product_id": mug.id.to_string() }),
    ];

    for body in bodies {
        let response = app.post_orders(&body).await;
        assert_eq!(response.status().as_u16(), 400, "body: {body}");
        let error: Value = response.json().await.unwrap();
        assert!(error["error"].is_string());
    }

    let history: Value = app.get_order_history("").await.json().await.unwrap();
    assert!(history["previousOrders"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn history_is_paginated() {
    let app = TestApp::new().await;
    let products = app.seed_products(7).await;
    app.signup_random_user().await;

    let lines: Vec<Value> = products
        .iter()
        .map(|product| json!({ "product_id": product.id.to_string(), "quantity": 1 }))
        .collect();
    let response = app.post_orders(&Value::Array(lines)).await;
    assert_eq!(response.status().as_u16(), 200);

    let first: Value = app.get_order_history("?skip=0").await.json().await.unwrap();
    assert_eq!(first["previousOrders"].as_array().unwrap().len(), 5);
    assert_eq!(first["paginationDetails"]["hasNextPage"], true);
    assert_eq!(first["paginationDetails"]["hasPreviousPage"], false);

    let second: Value = app.get_order_history("?skip=1").await.json().await.unwrap();
    assert_eq!(second["previousOrders"].as_array().unwrap().len(), 2);
    assert_eq!(second["paginationDetails"]["hasNextPage"], false);
    assert_eq!(second["paginationDetails"]["hasPreviousPage"], true);
}

#[tokio::test]
async fn history_never_shows_another_users_orders() {
    let app = TestApp::new().await;
    let mug = app.add_product("Mug", 1_200).await;

    app.signup_random_user().await;
    let response = app
        .post_orders(&json!([{ "product_id": mug.id.to_string(), "quantity": 3 }]))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    app.post_logout().await;

    app.signup_random_user().await;
    let history: Value = app.get_order_history("").await.json().await.unwrap();

    assert!(history["previousOrders"].as_array().unwrap().is_empty());
    assert_eq!(history["paginationDetails"]["hasNextPage"], false);
    assert_eq!(history["paginationDetails"]["hasPreviousPage"], false);
}
