use serde::{Deserialize, Serialize};

/// Account that owns templates. Requests authenticate with `api_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub api_key: String,
}

impl User {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            id: 0,
            username: username.into(),
            api_key: api_key.into(),
        }
    }
}

/// 32 random bytes, hex encoded.
pub fn generate_api_key() -> String {
    use rand::RngCore;

    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
