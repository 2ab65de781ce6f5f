use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use storefront_adapters::{
    config::RateLimitSetting,
    http::{
        AppState, auth_rate_limiter,
        routes::{
            create_orders, get_product, list_products, login, logout, me, order_history,
            signup,
        },
    },
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// In-flight requests get this long to finish once shutdown starts.
const GRACEFUL_SHUTDOWN_PERIOD: Duration = Duration::from_secs(10);

/// The storefront HTTP API: accounts, catalog and orders.
pub struct StorefrontService {
    router: Router,
}

impl StorefrontService {
    /// Builds the router over `state`.
    ///
    /// # Arguments
    /// * `state` - Stores, credential codec, session settings and the persistence timeout
    /// * `rate_limit` - Limits applied to signup and login only
    pub fn new(state: AppState, rate_limit: &RateLimitSetting) -> Self {
        let mut credential_routes: Router<AppState> = Router::new()
            .route("/users/signup", post(signup))
            .route("/users/login", post(login));

        if let Some(limiter) = auth_rate_limiter(rate_limit) {
            credential_routes = credential_routes.layer(limiter);
        }

        let router = Router::new()
            .route("/users/logout", post(logout))
            .route("/users/me", get(me))
            .route("/products", get(list_products))
            .route("/products/{product_id}", get(get_product))
            .route("/orders", post(create_orders))
            .route("/orders/history", get(order_history))
            .merge(credential_routes)
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be mounted on another router.
    pub fn as_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Serves on `listener` until `shutdown` resolves, then drains in-flight
    /// requests.
    pub async fn run_standalone<F>(
        self,
        listener: TcpListener,
        shutdown: F,
    ) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.as_router();

        tracing::info!("Storefront listening on {}", listener.local_addr()?);

        let handle = axum_server::Handle::new();
        let shutdown_handle = handle.clone();
        tokio::spawn(async move {
            shutdown.await;
            tracing::info!("Shutdown signal received, draining connections");
            shutdown_handle.graceful_shutdown(Some(GRACEFUL_SHUTDOWN_PERIOD));
        });

        axum_server::Server::<SocketAddr>::from_listener(listener)
            .handle(handle)
            .serve(router.into_make_service_with_connect_info::<SocketAddr>())
            .await
    }
}
