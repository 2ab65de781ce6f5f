pub mod jwt_session;

pub use jwt_session::{
    SameSitePolicy, SessionClaims, SessionConfig, TokenAuthError, create_removal_cookie,
    create_session_cookie, extract_token, generate_session_cookie, generate_session_token,
    validate_session_token,
};
