pub mod hashmap_order_store;
pub mod hashmap_product_store;
pub mod hashmap_user_store;
pub mod postgres_order_store;
pub mod postgres_product_store;
pub mod postgres_user_store;

#[cfg(test)]
mod test_db;

pub use hashmap_order_store::HashMapOrderStore;
pub use hashmap_product_store::HashMapProductStore;
pub use hashmap_user_store::HashMapUserStore;
pub use postgres_order_store::PostgresOrderStore;
pub use postgres_product_store::PostgresProductStore;
pub use postgres_user_store::PostgresUserStore;

/// Schema for the Postgres stores.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
