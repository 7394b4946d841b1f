use bookshelf_store::{JsonFileStore, StoreResult};

use super::models::{User, UserProfile};

/// User operations over the users collection file.
#[derive(Debug, Clone)]
pub struct UserService {
    store: JsonFileStore<User>,
}

impl UserService {
    pub fn new(store: JsonFileStore<User>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &JsonFileStore<User> {
        &self.store
    }

    pub async fn list(&self) -> StoreResult<Vec<User>> {
        self.store.list_all().await
    }

    pub async fn get(&self, document: &str) -> StoreResult<Option<User>> {
        self.store.find_by_key(document).await
    }

    /// `None` when a user with the same document already exists.
    pub async fn create(&self, user: User) -> StoreResult<Option<User>> {
        self.store.insert_unique(user).await
    }

    /// Replace the profile of `document`, keeping the document itself.
    pub async fn replace(&self, document: &str, profile: UserProfile) -> StoreResult<Option<User>> {
        self.store
            .replace_by_key(document, profile.into_user(document))
            .await
    }

    pub async fn delete(&self, document: &str) -> StoreResult<Option<User>> {
        self.store.delete_by_key(document).await
    }
}
