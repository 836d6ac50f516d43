//! Sessions and the values stored in them.

use std::collections::HashMap;

use uuid::Uuid;

use crate::app::User;

/// Attribute key under which the authenticated user is stored.
pub const USER_ATTRIBUTE: &str = "user";

/// A value stored in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    User(User),
    Text(String),
}

/// Server-side state for one browser, identified by an opaque id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: String,
    attributes: HashMap<String, Attribute>,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: HashMap::new(),
        }
    }

    /// Create a session with a fresh random (v4 UUID) id.
    pub fn generate() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    /// Create a fresh session holding an authenticated user.
    pub fn for_user(user: User) -> Self {
        let mut session = Self::generate();
        session.set_attribute(USER_ATTRIBUTE, Attribute::User(user));
        session
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: Attribute) {
        self.attributes.insert(key.into(), value);
    }

    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    pub fn remove_attribute(&mut self, key: &str) -> Option<Attribute> {
        self.attributes.remove(key)
    }

    /// The user stored under the `user` attribute.
    pub fn user(&self) -> Option<&User> {
        match self.attribute(USER_ATTRIBUTE)? {
            Attribute::User(user) => Some(user),
            Attribute::Text(_) => None,
        }
    }
}
