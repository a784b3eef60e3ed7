//! Test doubles: a store that counts calls, and one that is always down.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use pet_records::{Cat, Dog, Fields, Record, RecordId, RecordStore, StoreError, Stored};

/// Wraps a store and counts every call made through it.
#[derive(Clone, Default)]
pub struct CountingStore<S> {
    inner: S,
    calls: Arc<AtomicUsize>,
}

impl<S> CountingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl<S: RecordStore> RecordStore for CountingStore<S> {
    async fn insert<R: Record>(&self, record: &R) -> Result<Stored<R>, StoreError> {
        self.hit();
        self.inner.insert(record).await
    }

    async fn find_one_by_name<R: Record>(
        &self,
        name: &str,
    ) -> Result<Option<Stored<R>>, StoreError> {
        self.hit();
        self.inner.find_one_by_name(name).await
    }

    async fn find_all<R: Record>(&self) -> Result<Vec<Stored<R>>, StoreError> {
        self.hit();
        self.inner.find_all().await
    }

    async fn save<R: Record>(
        &self,
        id: Option<RecordId>,
        record: &R,
    ) -> Result<Stored<R>, StoreError> {
        self.hit();
        self.inner.save(id, record).await
    }
}

/// A store whose backend is never reachable.
#[derive(Clone, Default)]
pub struct UnavailableStore;

fn down() -> StoreError {
    StoreError::Unavailable("connection refused".into())
}

#[async_trait]
impl RecordStore for UnavailableStore {
    async fn insert<R: Record>(&self, _record: &R) -> Result<Stored<R>, StoreError> {
        Err(down())
    }

    async fn find_one_by_name<R: Record>(
        &self,
        _name: &str,
    ) -> Result<Option<Stored<R>>, StoreError> {
        Err(down())
    }

    async fn find_all<R: Record>(&self) -> Result<Vec<Stored<R>>, StoreError> {
        Err(down())
    }

    async fn save<R: Record>(
        &self,
        _id: Option<RecordId>,
        _record: &R,
    ) -> Result<Stored<R>, StoreError> {
        Err(down())
    }
}

pub fn cat_fields(firstname: &str, lastname: &str, beds: &str) -> Fields {
    Fields::new()
        .with("firstname", firstname)
        .with("lastname", lastname)
        .with("beds", beds)
}

pub fn dog_fields(name: &str, breed: &str, age: &str) -> Fields {
    Fields::new()
        .with("name", name)
        .with("breed", breed)
        .with("age", age)
}

pub fn cat(name: &str, beds_owned: u32) -> Cat {
    Cat {
        name: name.into(),
        beds_owned,
    }
}

pub fn dog(name: &str, breed: &str, age: u32) -> Dog {
    Dog {
        name: name.into(),
        breed: breed.into(),
        age,
    }
}
