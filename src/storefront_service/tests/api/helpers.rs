use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Response, redirect::Policy};
use secrecy::Secret;
use serde_json::{Value, json};
use storefront_adapters::{
    HashMapOrderStore, HashMapProductStore, HashMapUserStore, ScryptCredentialCodec,
    config::RateLimitSetting,
    http::AppState,
    session::{SameSitePolicy, SessionConfig},
};
use storefront_core::{Product, ProductId};
use storefront_service::StorefrontService;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const COOKIE_NAME: &str = "token";
pub const LOGIN_PATH: &str = "/login";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub product_store: HashMapProductStore,
    _shutdown: oneshot::Sender<()>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_rate_limit(RateLimitSetting {
            enabled: false,
            replenish_seconds: 60,
            burst: 5,
            trust_proxy_headers: false,
        })
        .await
    }

    pub async fn with_rate_limit(rate_limit: RateLimitSetting) -> Self {
        let product_store = HashMapProductStore::new();

        let state = AppState {
            user_store: Arc::new(HashMapUserStore::new()),
            product_store: Arc::new(product_store.clone()),
            order_store: Arc::new(HashMapOrderStore::new(product_store.clone())),
            credential_codec: Arc::new(ScryptCredentialCodec::new()),
            session: SessionConfig {
                cookie_name: COOKIE_NAME.to_string(),
                jwt_secret: Secret::new("api-test-secret".to_string()),
                token_ttl_in_seconds: 600,
                secure: false,
                same_site: SameSitePolicy::Lax,
                login_path: LOGIN_PATH.to_string(),
            },
            timeout: Duration::from_secs(10),
        };

        let listener = TcpListener::bind(storefront_adapters::config::test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let (shutdown, shutdown_signal) = oneshot::channel::<()>();
        let service = StorefrontService::new(state, &rate_limit);
        tokio::spawn(service.run_standalone(listener, async move {
            let _ = shutdown_signal.await;
        }));

        let http_client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .expect("Failed to build http client");

        Self {
            address,
            http_client,
            product_store,
            _shutdown: shutdown,
        }
    }

    /// Adds `count` products priced 100, 200, ... so the most expensive lists first.
    pub async fn seed_products(&self, count: i64) -> Vec<Product> {
        let mut products = Vec::new();
        for n in 1..=count {
            let product = Product {
                id: ProductId::new(),
                name: format!("Product {n:02}"),
                price: n * 100,
                image: format!("/images/{n}.png"),
                description: format!("Description {n}"),
            };
            self.product_store.add_product(product.clone()).await;
            products.push(product);
        }
        products
    }

    pub async fn add_product(&self, name: &str, price: i64) -> Product {
        let product = Product {
            id: ProductId::new(),
            name: name.to_string(),
            price,
            image: String::new(),
            description: String::new(),
        };
        self.product_store.add_product(product.clone()).await;
        product
    }

    pub async fn post_signup(&self, body: &Value) -> Response {
        self.http_client
            .post(format!("{}/users/signup", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(&self, body: &Value) -> Response {
        self.http_client
            .post(format!("{}/users/login", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_logout(&self) -> Response {
        self.http_client
            .post(format!("{}/users/logout", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_me(&self) -> Response {
        self.http_client
            .get(format!("{}/users/me", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_products(&self, query: &str) -> Response {
        self.http_client
            .get(format!("{}/products{}", &self.address, query))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_product(&self, product_id: &str) -> Response {
        self.http_client
            .get(format!("{}/products/{}", &self.address, product_id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_orders(&self, body: &Value) -> Response {
        self.http_client
            .post(format!("{}/orders", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_order_history(&self, query: &str) -> Response {
        self.http_client
            .get(format!("{}/orders/history{}", &self.address, query))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Signs up a fresh account; the client keeps its session cookie.
    pub async fn signup_random_user(&self) -> Value {
        let body = signup_body(&get_random_email(), "password123");
        let response = self.post_signup(&body).await;
        assert_eq!(response.status().as_u16(), 200);
        response.json().await.expect("Failed to parse user")
    }
}

pub fn get_random_email() -> String {
    format!("{}@example.com", uuid::Uuid::new_v4())
}

pub fn signup_body(email: &str, password: &str) -> Value {
    json!({
        "email": email,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "password": password,
    })
}

pub fn assert_redirects_to_login(response: &Response) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(
        response
            .headers()
            .get(reqwest::header::LOCATION)
            .and_then(|value| value.to_str().ok()),
        Some(LOGIN_PATH)
    );
}
