pub mod domain;
pub mod pagination;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    order::{NewOrderItem, OrderError, OrderLine, PreviousOrder, Quantity},
    password::{Password, PasswordHash},
    product::{Product, ProductId, ProductQuery},
    user::{NewUser, PersonName, User, UserCredentials, UserError, UserId},
};

pub use pagination::{PAGE_SIZE, Page, PageRequest, PageWindow, PaginationDetails, paginate};

pub use ports::{
    repositories::{
        OrderStore, OrderStoreError, ProductStore, ProductStoreError, UserStore, UserStoreError,
    },
    services::{CredentialCodec, CredentialCodecError},
};
