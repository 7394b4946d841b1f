use bookshelf_store::{JsonFileStore, StoreResult};

use super::models::{Book, BookDraft};

/// Book operations over the books collection file.
#[derive(Debug, Clone)]
pub struct BookService {
    store: JsonFileStore<Book>,
}

impl BookService {
    pub fn new(store: JsonFileStore<Book>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &JsonFileStore<Book> {
        &self.store
    }

    pub async fn list(&self) -> StoreResult<Vec<Book>> {
        self.store.list_all().await
    }

    pub async fn get(&self, id: &str) -> StoreResult<Option<Book>> {
        self.store.find_by_key(id).await
    }

    /// Store a new book under the next free id.
    pub async fn create(&self, draft: BookDraft) -> StoreResult<Book> {
        self.store
            .insert_with(|books| next_id(books).map(|id| Book::new(id, draft)))
            .await
    }

    /// Replace every field of book `id`; the id itself never changes.
    pub async fn replace(&self, id: &str, draft: BookDraft) -> StoreResult<Option<Book>> {
        self.store.replace_by_key(id, Book::new(id, draft)).await
    }

    pub async fn delete(&self, id: &str) -> StoreResult<Option<Book>> {
        self.store.delete_by_key(id).await
    }
}

/// Largest numeric id plus one. Ids that are not unsigned integers are ignored.
///
/// `None` once the largest id is `u64::MAX`.
pub fn next_id(books: &[Book]) -> Option<String> {
    books
        .iter()
        .filter_map(|book| book.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .map(|id| id.to_string())
}
