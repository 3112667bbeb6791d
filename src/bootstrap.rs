use crate::application::services::{TemplateService, UserService};
use crate::config::Config;
use crate::domain::entities::User;
use crate::domain::errors::DomainResult;
use crate::domain::ports::template_repository::TemplateRepository;
use crate::domain::ports::user_repository::UserRepository;
use crate::infrastructure::http::middleware::AppState;
use crate::infrastructure::persistence::Database;
use std::sync::Arc;

pub fn build_app_state(db: Database) -> AppState {
    let template_service =
        TemplateService::new(Arc::new(db.clone()) as Arc<dyn TemplateRepository>);
    tracing::info!("Template service initialized");

    let user_service = UserService::new(Arc::new(db) as Arc<dyn UserRepository>);
    tracing::info!("User service initialized");

    AppState {
        template_service,
        user_service,
    }
}

/// Creates the configured admin account on first start.
pub async fn initialize_admin(state: &AppState, config: &Config) -> DomainResult<User> {
    tracing::info!("Checking for admin user initialization");

    let admin = state
        .user_service
        .ensure_user(&config.admin_username, config.admin_api_key.as_deref())
        .await?;

    tracing::info!("Admin user ready: id={}, username={}", admin.id, admin.username);
    Ok(admin)
}
