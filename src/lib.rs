//! # Storefront - E-commerce Backend Library
//!
//! This is a facade crate that re-exports all public APIs from the storefront components.
//! Use this crate to get access to accounts, catalog and orders in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Product`, `PreviousOrder`, pagination, etc.
//! - **Repository traits**: `UserStore`, `ProductStore`, `OrderStore`
//! - **Use cases**: `SignupUseCase`, `ListProductsUseCase`, etc.
//! - **Adapters**: `PostgresUserStore`, `HashMapProductStore`, `ScryptCredentialCodec`, etc.
//! - **Service**: `StorefrontService` - The main entry point for the HTTP API

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use storefront_core::*;
}

pub use storefront_core::{
    Email, NewOrderItem, OrderError, OrderLine, PAGE_SIZE, Page, PageRequest, PaginationDetails,
    Password, PersonName, PreviousOrder, Product, ProductId, Quantity, User, UserError, UserId,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

/// Repository trait definitions
pub mod repositories {
    pub use storefront_core::{
        OrderStore, OrderStoreError, ProductStore, ProductStoreError, UserStore, UserStoreError,
    };
}

pub use storefront_core::{
    CredentialCodec, CredentialCodecError, OrderStore, OrderStoreError, ProductStore,
    ProductStoreError, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use storefront_application::*;
}

pub use storefront_application::{
    CreateOrdersUseCase, CurrentUserUseCase, GetProductUseCase, ListProductsUseCase, LoginUseCase,
    OrderHistoryUseCase, SignupUseCase, with_timeout,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers, extractors and shared state
    pub mod http {
        pub use storefront_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use storefront_adapters::persistence::*;
    }

    /// Session cookies and tokens
    pub mod session {
        pub use storefront_adapters::session::*;
    }

    /// Configuration
    pub mod config {
        pub use storefront_adapters::config::*;
    }
}

pub use storefront_adapters::{
    HashMapOrderStore, HashMapProductStore, HashMapUserStore, PostgresOrderStore,
    PostgresProductStore, PostgresUserStore, ScryptCredentialCodec, http::AppState,
};

// ============================================================================
// Storefront Service (Main Entry Point)
// ============================================================================

pub use storefront_service::StorefrontService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
