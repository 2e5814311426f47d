use std::fmt;

use serde::Deserialize;

/// Login pair posted by API clients. Lives only for one handshake.
#[derive(Deserialize, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body of `/api/classes`.
#[derive(Deserialize, Debug, Clone)]
pub struct ClassesRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    pub quarter: String,
}
