//! Users and the account lookup used by the login page.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::server::Error;

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    id: u64,
    account: String,
    password: String,
    email: String,
}

impl User {
    pub fn new(
        id: u64,
        account: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            account: account.into(),
            password: password.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }
}

/// Lookup of users by account name.
pub trait UserRepository: Send + Sync {
    fn find_by_account(&self, account: &str) -> Option<User>;
}

/// A fixed set of users held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|user| (user.account.clone(), user))
                .collect(),
        }
    }

    /// Parse users from a JSON array of `{id, account, password, email}` objects.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let users: Vec<User> = serde_json::from_str(json)?;
        Ok(Self::new(users))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new([User::new(1, "gugu", "password", "hkkang@woowahan.com")])
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_account(&self, account: &str) -> Option<User> {
        self.users.get(account).cloned()
    }
}
