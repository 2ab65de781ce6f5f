pub mod timeout;
pub mod use_cases;

pub use timeout::{DEFAULT_TIMEOUT, TimeoutError, with_timeout};

pub use use_cases::{
    create_orders::{CreateOrdersError, CreateOrdersUseCase},
    current_user::{CurrentUserError, CurrentUserUseCase},
    get_product::{GetProductError, GetProductUseCase},
    list_products::{ListProductsError, ListProductsUseCase},
    login::{LoginError, LoginUseCase},
    order_history::{OrderHistoryError, OrderHistoryUseCase},
    signup::{SignupError, SignupUseCase},
};
