use crate::domain::entities::User;
use crate::domain::errors::DomainResult;

#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: &User) -> DomainResult<i64>;
    async fn get_user_by_api_key(&self, api_key: &str) -> DomainResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> DomainResult<Option<User>>;
}
