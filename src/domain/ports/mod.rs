pub mod template_repository;
pub mod user_repository;
