pub mod auth;
pub mod error;

pub use auth::{require_api_key, AppState, AuthenticatedUser};
pub use error::{ApiError, ApiResult};
