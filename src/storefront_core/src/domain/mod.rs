pub mod email;
pub mod order;
pub mod password;
pub mod product;
pub mod user;
