use crate::domain::entities::{generate_api_key, User};
use crate::domain::errors::DomainResult;
use crate::domain::ports::user_repository::UserRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Stores the user and returns it with its generated id.
    pub async fn create_user(&self, mut user: User) -> DomainResult<User> {
        user.id = self.user_repo.create_user(&user).await?;
        Ok(user)
    }

    pub async fn get_user_by_api_key(&self, api_key: &str) -> DomainResult<Option<User>> {
        self.user_repo.get_user_by_api_key(api_key).await
    }

    pub async fn get_user_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        self.user_repo.get_user_by_username(username).await
    }

    /// Returns the existing user with `username`, or creates it. A missing
    /// `api_key` is replaced by a freshly generated one.
    pub async fn ensure_user(&self, username: &str, api_key: Option<&str>) -> DomainResult<User> {
        if let Some(user) = self.get_user_by_username(username).await? {
            tracing::info!("User already exists: {}", username);
            return Ok(user);
        }

        let api_key = match api_key {
            Some(key) => key.to_string(),
            None => {
                let key = generate_api_key();
                tracing::warn!("Generated API key for {}: {}", username, key);
                key
            }
        };

        self.create_user(User::new(username, api_key)).await
    }
}
