use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};

/// A record persisted in a collection file.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Human readable collection name used in logs.
    const KIND: &'static str;

    /// Unique key of the record within its collection.
    fn key(&self) -> &str;
}

/// Collection of `T` stored as a pretty-printed JSON array in one file.
///
/// No state is kept between calls: each mutation reads the whole file, changes the
/// array in memory and overwrites the file. A crash mid-write can truncate it.
#[derive(Debug, Clone)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the collection file holding an empty array if it does not exist yet.
    pub async fn ensure_exists(&self) -> StoreResult<()> {
        match tokio::fs::metadata(&self.path).await {
            Ok(_) => return Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(source) => return Err(self.io_error(source)),
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| self.io_error(source))?;
        }

        tracing::info!(
            kind = T::KIND,
            path = %self.path.display(),
            "creating empty collection file"
        );
        self.write_all(&[]).await
    }

    /// Read and decode the whole collection.
    pub async fn list_all(&self) -> StoreResult<Vec<T>> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        serde_json::from_str(&data).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    /// First record whose key equals `key`.
    pub async fn find_by_key(&self, key: &str) -> StoreResult<Option<T>> {
        let records = self.list_all().await?;
        Ok(records.into_iter().find(|record| record.key() == key))
    }

    /// Append a record built from the current contents, for stores that assign keys.
    ///
    /// `build` returns `None` when no unused key is left; nothing is written then.
    pub async fn insert_with<F>(&self, build: F) -> StoreResult<T>
    where
        F: FnOnce(&[T]) -> Option<T>,
    {
        let mut records = self.list_all().await?;
        let record = build(&records).ok_or_else(|| StoreError::KeysExhausted {
            path: self.path.clone(),
        })?;
        records.push(record.clone());
        self.write_all(&records).await?;

        tracing::debug!(kind = T::KIND, key = record.key(), "record inserted");
        Ok(record)
    }

    /// Append a record carrying a caller-supplied key.
    ///
    /// Returns `None` without writing when the key is already taken.
    pub async fn insert_unique(&self, record: T) -> StoreResult<Option<T>> {
        let mut records = self.list_all().await?;
        if records.iter().any(|existing| existing.key() == record.key()) {
            return Ok(None);
        }

        records.push(record.clone());
        self.write_all(&records).await?;

        tracing::debug!(kind = T::KIND, key = record.key(), "record inserted");
        Ok(Some(record))
    }

    /// Overwrite the slot holding `key` with `record`.
    pub async fn replace_by_key(&self, key: &str, record: T) -> StoreResult<Option<T>> {
        let mut records = self.list_all().await?;
        let Some(index) = records.iter().position(|existing| existing.key() == key) else {
            return Ok(None);
        };

        records[index] = record.clone();
        self.write_all(&records).await?;

        tracing::debug!(kind = T::KIND, key, "record replaced");
        Ok(Some(record))
    }

    /// Remove the record holding `key` and return it.
    pub async fn delete_by_key(&self, key: &str) -> StoreResult<Option<T>> {
        let mut records = self.list_all().await?;
        let Some(index) = records.iter().position(|existing| existing.key() == key) else {
            return Ok(None);
        };

        let removed = records.remove(index);
        self.write_all(&records).await?;

        tracing::debug!(kind = T::KIND, key, "record deleted");
        Ok(Some(removed))
    }

    async fn write_all(&self, records: &[T]) -> StoreResult<()> {
        let encoded = serde_json::to_string_pretty(records).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        tokio::fs::write(&self.path, encoded)
            .await
            .map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        slug: String,
        body: String,
    }

    impl Record for Note {
        const KIND: &'static str = "note";

        fn key(&self) -> &str {
            &self.slug
        }
    }

    fn note(slug: &str, body: &str) -> Note {
        Note {
            slug: slug.to_string(),
            body: body.to_string(),
        }
    }

    async fn seeded(dir: &TempDir, notes: &[Note]) -> JsonFileStore<Note> {
        let path = dir.path().join("notes.json");
        tokio::fs::write(&path, serde_json::to_string(notes).unwrap())
            .await
            .unwrap();
        JsonFileStore::new(path)
    }

    #[tokio::test]
    async fn ensure_exists_creates_empty_array() {
        let dir = TempDir::new().unwrap();
        let store: JsonFileStore<Note> = JsonFileStore::new(dir.path().join("nested/notes.json"));

        store.ensure_exists().await.unwrap();

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ensure_exists_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir, &[note("a", "first")]).await;

        store.ensure_exists().await.unwrap();

        assert_eq!(store.list_all().await.unwrap(), vec![note("a", "first")]);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let store: JsonFileStore<Note> = JsonFileStore::new(dir.path().join("absent.json"));

        let err = store.list_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(err.path(), dir.path().join("absent.json"));
    }

    #[tokio::test]
    async fn malformed_file_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.json");
        tokio::fs::write(&path, "{ not json").await.unwrap();
        let store: JsonFileStore<Note> = JsonFileStore::new(path);

        let err = store.find_by_key("a").await.unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[tokio::test]
    async fn find_by_key_returns_first_match_or_none() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir, &[note("a", "first"), note("a", "shadowed")]).await;

        assert_eq!(store.find_by_key("a").await.unwrap(), Some(note("a", "first")));
        assert_eq!(store.find_by_key("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn insert_with_sees_current_records() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir, &[note("a", "first")]).await;

        let created = store
            .insert_with(|existing| Some(note(&format!("n{}", existing.len()), "second")))
            .await
            .unwrap();

        assert_eq!(created, note("n1", "second"));
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn insert_with_without_key_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir, &[note("a", "first")]).await;
        let before = tokio::fs::read_to_string(store.path()).await.unwrap();

        let err = store.insert_with(|_| None).await.unwrap_err();

        assert!(matches!(err, StoreError::KeysExhausted { .. }));
        let after = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn insert_unique_rejects_taken_key_without_writing() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir, &[note("a", "first")]).await;
        let before = tokio::fs::read_to_string(store.path()).await.unwrap();

        assert_eq!(store.insert_unique(note("a", "dup")).await.unwrap(), None);

        let after = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn replace_keeps_position() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir, &[note("a", "1"), note("b", "2"), note("c", "3")]).await;

        let replaced = store.replace_by_key("b", note("b", "two")).await.unwrap();
        assert_eq!(replaced, Some(note("b", "two")));
        assert_eq!(
            store.list_all().await.unwrap(),
            vec![note("a", "1"), note("b", "two"), note("c", "3")]
        );
        assert_eq!(store.replace_by_key("z", note("z", "?")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_returns_removed_record() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir, &[note("a", "1"), note("b", "2")]).await;

        assert_eq!(store.delete_by_key("a").await.unwrap(), Some(note("a", "1")));
        assert_eq!(store.delete_by_key("a").await.unwrap(), None);
        assert_eq!(store.list_all().await.unwrap(), vec![note("b", "2")]);
    }

    #[tokio::test]
    async fn writes_are_pretty_printed_and_match_memory() {
        let dir = TempDir::new().unwrap();
        let store = seeded(&dir, &[]).await;

        store.insert_unique(note("a", "1")).await.unwrap();

        let on_disk = tokio::fs::read_to_string(store.path()).await.unwrap();
        let expected = serde_json::to_string_pretty(&vec![note("a", "1")]).unwrap();
        assert_eq!(on_disk, expected);
        assert!(on_disk.contains("\n  {\n    \"slug\": \"a\""));
    }
}
