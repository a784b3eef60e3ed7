//! The service over a SQLite store, in memory and on disk.

use pet_records::{Cat, Dog, RecordService, SqliteRecordStore};

use crate::support::{cat, cat_fields, dog, dog_fields};

#[tokio::test]
async fn cat_lifecycle() {
    let service = RecordService::<Cat, _>::new(SqliteRecordStore::in_memory().unwrap());

    service.create(&cat_fields("Jane", "Doe", "3")).await.unwrap();
    service.mutate_last_added().await.unwrap();

    assert_eq!(service.list_all().await.unwrap(), vec![cat("Jane Doe", 4)]);
    assert_eq!(
        service.find_by_name(Some("Jane Doe")).await.unwrap(),
        Some(cat("Jane Doe", 4))
    );
}

#[tokio::test]
async fn records_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pets.db");

    {
        let store = SqliteRecordStore::open(&path).unwrap();
        let dogs = RecordService::<Dog, _>::new(store);
        dogs.create(&dog_fields("Rex", "mutt", "2")).await.unwrap();
    }

    let dogs = RecordService::<Dog, _>::new(SqliteRecordStore::open(&path).unwrap());
    assert_eq!(dogs.list_all().await.unwrap(), vec![dog("Rex", "mutt", 2)]);
    assert_eq!(
        dogs.find_by_name(Some("Rex")).await.unwrap(),
        Some(dog("Rex", "mutt", 3))
    );
    // the slot is process state and starts over
    assert_eq!(dogs.last_added_name().await, "unknown");
}
