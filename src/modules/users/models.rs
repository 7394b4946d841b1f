use bookshelf_http::extract::required;
use bookshelf_store::Record;
use serde::{Deserialize, Serialize};

/// A registered user, keyed by identity document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub document: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Record for User {
    const KIND: &'static str = "user";

    fn key(&self) -> &str {
        &self.document
    }
}

/// Contact fields of a user, everything except the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl UserProfile {
    pub fn into_user(self, document: impl Into<String>) -> User {
        User {
            document: document.into(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
        }
    }
}

/// Request body for `POST /users` and `PUT /users/{document}`.
///
/// The document in a PUT body is ignored; the path decides which user is replaced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    pub document: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UserPayload {
    pub fn profile(&self) -> Option<UserProfile> {
        Some(UserProfile {
            name: required(&self.name)?.to_string(),
            email: required(&self.email)?.to_string(),
            phone: required(&self.phone)?.to_string(),
            address: required(&self.address)?.to_string(),
        })
    }

    /// Complete user for creation, `None` if any field is missing.
    pub fn into_user(self) -> Option<User> {
        let document = required(&self.document)?.to_string();
        self.profile().map(|profile| profile.into_user(document))
    }
}
