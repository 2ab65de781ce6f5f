pub mod create_orders;
pub mod current_user;
pub mod get_product;
pub mod list_products;
pub mod login;
pub mod order_history;
pub mod signup;
