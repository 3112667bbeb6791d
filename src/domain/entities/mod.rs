pub mod template;
pub mod user;

pub use template::*;
pub use user::*;
