pub mod template_service;
pub mod user_service;

pub use template_service::TemplateService;
pub use user_service::UserService;
