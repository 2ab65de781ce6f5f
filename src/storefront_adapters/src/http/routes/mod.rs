pub mod error;
pub mod login;
pub mod logout;
pub mod me;
pub mod orders;
pub mod products;
pub mod signup;

pub use error::{ApiError, ErrorResponse};
pub use login::{LoginRequest, login};
pub use logout::{LogoutResponse, logout};
pub use me::me;
pub use orders::{
    CreateOrdersResponse, OrderHistoryResponse, OrderItemRequest, create_orders, order_history,
};
pub use products::{CatalogResponse, PageQuery, ProductsQuery, get_product, list_products};
pub use signup::{SignupRequest, signup};
