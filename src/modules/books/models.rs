use bookshelf_store::Record;
use serde::{Deserialize, Serialize};

/// A book in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Decimal id assigned by the store
    pub id: String,
    pub author: String,
    /// Title of the book
    pub name: String,
    pub owner: String,
}

impl Book {
    pub fn new(id: impl Into<String>, draft: BookDraft) -> Self {
        Self {
            id: id.into(),
            author: draft.author,
            name: draft.name,
            owner: draft.owner,
        }
    }
}

impl Record for Book {
    const KIND: &'static str = "book";

    fn key(&self) -> &str {
        &self.id
    }
}

/// Validated fields of a book without its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    pub author: String,
    pub name: String,
    pub owner: String,
}

/// Request body for creating or replacing a book.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPayload {
    pub author: Option<String>,
    pub name: Option<String>,
    pub owner: Option<String>,
}

impl BookPayload {
    /// `None` unless author, name and owner are all present and non-empty.
    pub fn into_draft(self) -> Option<BookDraft> {
        use bookshelf_http::extract::required;

        let author = required(&self.author)?.to_string();
        let name = required(&self.name)?.to_string();
        let owner = required(&self.owner)?.to_string();

        Some(BookDraft {
            author,
            name,
            owner,
        })
    }
}
