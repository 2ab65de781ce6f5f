use serde_json::Value;

use crate::helpers::TestApp;

fn names(page: &Value) -> Vec<String> {
    page["catalog"]
        .as_array()
        .unwrap()
        .iter()
        .map(|product| product["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn pages_through_eleven_products() {
    let app = TestApp::new().await;
    app.seed_products(11).await;

    let first: Value = app.get_products("").await.json().await.unwrap();
    assert_eq!(first["catalog"].as_array().unwrap().len(), 5);
    assert_eq!(first["paginationDetails"]["hasNextPage"], true);
    assert_eq!(first["paginationDetails"]["hasPreviousPage"], false);
    assert_eq!(first["paginationDetails"]["nextPage"], 1);
    assert!(first["paginationDetails"].get("previousPage").is_none());
    assert_eq!(names(&first)[0], "Product 11");

    let second: Value = app.get_products("?skip=1").await.json().await.unwrap();
    assert_eq!(second["catalog"].as_array().unwrap().len(), 5);
    assert_eq!(second["paginationDetails"]["hasNextPage"], true);
    assert_eq!(second["paginationDetails"]["hasPreviousPage"], true);
    assert_eq!(second["paginationDetails"]["nextPage"], 2);
    assert_eq!(second["paginationDetails"]["previousPage"], 0);

    let third: Value = app.get_products("?skip=2").await.json().await.unwrap();
    assert_eq!(names(&third), vec!["Product 01"]);
    assert_eq!(third["paginationDetails"]["hasNextPage"], false);
    assert_eq!(third["paginationDetails"]["hasPreviousPage"], true);
}

#[tokio::test]
async fn an_unparseable_skip_means_the_first_page() {
    let app = TestApp::new().await;
    app.seed_products(6).await;

    for query in ["?skip=abc", "?skip=-3", "?skip="] {
        let response = app.get_products(query).await;
        assert_eq!(response.status().as_u16(), 200, "query: {query}");
        let page: Value = response.json().await.unwrap();
        assert_eq!(page["paginationDetails"]["hasPreviousPage"], false);
        assert_eq!(names(&page)[0], "Product 06");
    }
}

#[tokio::test]
async fn filters_by_case_insensitive_name_prefix() {
    let app = TestApp::new().await;
    app.add_product("Sofa", 90_000).await;
    app.add_product("sofa bed", 120_000).await;
    app.add_product("Armchair", 40_000).await;

    let page: Value = app.get_products("?name=SOF").await.json().await.unwrap();

    assert_eq!(names(&page), vec!["sofa bed", "Sofa"]);
    assert_eq!(page["paginationDetails"]["hasNextPage"], false);
}

#[tokio::test]
async fn get_product_returns_the_product() {
    let app = TestApp::new().await;
    let lamp = app.add_product("Lamp", 3_500).await;

    let response = app.get_product(&lamp.id.to_string()).await;

    assert_eq!(response.status().as_u16(), 200);
    let product: Value = response.json().await.unwrap();
    assert_eq!(product["id"], lamp.id.to_string());
    assert_eq!(product["name"], "Lamp");
    assert_eq!(product["price"], 3_500);
}

#[tokio::test]
async fn get_product_answers_null_for_unknown_or_malformed_ids() {
    let app = TestApp::new().await;
    app.seed_products(2).await;

    for id in [uuid::Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let response = app.get_product(&id).await;
        assert_eq!(response.status().as_u16(), 200, "id: {id}");
        let body: Value = response.json().await.unwrap();
        assert!(body.is_null());
    }
}
