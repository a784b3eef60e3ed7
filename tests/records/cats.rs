//! Cat service tests over the in-memory store.

use pet_records::{Cat, Fields, InMemoryRecordStore, RecordService, RecordStore, ServiceError};

use crate::support::{cat, cat_fields, CountingStore};

fn cats() -> RecordService<Cat, InMemoryRecordStore> {
    RecordService::new(InMemoryRecordStore::new())
}

#[tokio::test]
async fn create_composes_name_and_sets_last_added() {
    let service = cats();

    let name = service
        .create(&cat_fields("Jane", "Doe", "3"))
        .await
        .unwrap();
    assert_eq!(name, "Jane Doe");
    assert_eq!(service.last_added_name().await, "Jane Doe");
    assert_eq!(service.last_added().await, cat("Jane Doe", 3));

    let stored = service.list_all().await.unwrap();
    assert_eq!(stored, vec![cat("Jane Doe", 3)]);
}

#[tokio::test]
async fn last_added_starts_unknown() {
    let service = cats();
    assert_eq!(service.last_added_name().await, "unknown");
    assert_eq!(service.last_added().await, Cat::default());
}

#[tokio::test]
async fn last_added_follows_latest_create() {
    let service = cats();
    service.create(&cat_fields("Jane", "Doe", "3")).await.unwrap();
    service.create(&cat_fields("John", "Roe", "1")).await.unwrap();

    assert_eq!(service.last_added_name().await, "John Roe");
}

#[tokio::test]
async fn create_missing_beds_is_rejected_before_the_store() {
    let store = CountingStore::new(InMemoryRecordStore::new());
    let service = RecordService::<Cat, _>::new(store.clone());

    let fields = Fields::new().with("firstname", "Jane").with("lastname", "Doe");
    let err = service.create(&fields).await.unwrap_err();

    match err {
        ServiceError::Validation(msg) => assert!(msg.contains("beds"), "message: {msg}"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(store.calls(), 0);
    assert_eq!(service.last_added_name().await, "unknown");
    assert!(store.find_all::<Cat>().await.unwrap().is_empty());
}

#[tokio::test]
async fn every_missing_field_is_rejected() {
    let store = CountingStore::new(InMemoryRecordStore::new());
    let service = RecordService::<Cat, _>::new(store.clone());

    let cases = [
        cat_fields("", "Doe", "3"),
        cat_fields("Jane", "", "3"),
        cat_fields("Jane", "Doe", ""),
        Fields::new(),
    ];
    for fields in cases {
        let result = service.create(&fields).await;
        assert!(
            matches!(result, Err(ServiceError::Validation(_))),
            "fields {fields:?} gave {result:?}"
        );
    }
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn non_numeric_beds_is_a_validation_error() {
    let store = CountingStore::new(InMemoryRecordStore::new());
    let service = RecordService::<Cat, _>::new(store.clone());

    let result = service.create(&cat_fields("Jane", "Doe", "lots")).await;
    assert!(matches!(result, Err(ServiceError::Validation(_))));
    assert_eq!(store.calls(), 0);
}

#[tokio::test]
async fn find_by_name_requires_a_name() {
    let service = cats();

    assert!(matches!(
        service.find_by_name(Some("")).await,
        Err(ServiceError::Validation(_))
    ));
    assert!(matches!(
        service.find_by_name(None).await,
        Err(ServiceError::Validation(_))
    ));
}

#[tokio::test]
async fn find_by_name_returns_match_unchanged() {
    let service = cats();
    service.create(&cat_fields("Jane", "Doe", "3")).await.unwrap();

    let found = service.find_by_name(Some("Jane Doe")).await.unwrap();
    assert_eq!(found, Some(cat("Jane Doe", 3)));

    let again = service.find_by_name(Some("Jane Doe")).await.unwrap();
    assert_eq!(again, Some(cat("Jane Doe", 3)));
}

#[tokio::test]
async fn find_by_name_without_match_is_none() {
    let service = cats();
    service.create(&cat_fields("Jane", "Doe", "3")).await.unwrap();

    let found = service.find_by_name(Some("Nobody")).await.unwrap();
    assert_eq!(found, None);
    assert_eq!(service.list_all().await.unwrap(), vec![cat("Jane Doe", 3)]);
}

#[tokio::test]
async fn mutate_last_added_increments_and_persists() {
    let service = cats();
    service.create(&cat_fields("Jane", "Doe", "3")).await.unwrap();

    let updated = service.mutate_last_added().await.unwrap();
    assert_eq!(updated, cat("Jane Doe", 4));

    let updated = service.mutate_last_added().await.unwrap();
    assert_eq!(updated.beds_owned, 5);

    assert_eq!(service.list_all().await.unwrap(), vec![cat("Jane Doe", 5)]);
    assert_eq!(
        service.find_by_name(Some("Jane Doe")).await.unwrap(),
        Some(cat("Jane Doe", 5))
    );
}

#[tokio::test]
async fn mutate_last_added_only_touches_the_latest() {
    let service = cats();
    service.create(&cat_fields("Jane", "Doe", "3")).await.unwrap();
    service.create(&cat_fields("John", "Roe", "1")).await.unwrap();

    service.mutate_last_added().await.unwrap();

    assert_eq!(
        service.list_all().await.unwrap(),
        vec![cat("Jane Doe", 3), cat("John Roe", 2)]
    );
}

#[tokio::test]
async fn mutate_before_any_create_persists_the_placeholder() {
    let service = cats();

    let updated = service.mutate_last_added().await.unwrap();
    assert_eq!(updated, cat("unknown", 1));

    service.mutate_last_added().await.unwrap();
    assert_eq!(service.list_all().await.unwrap(), vec![cat("unknown", 2)]);
}

#[tokio::test]
async fn list_all_is_stable_without_writes() {
    let service = cats();
    for (first, last) in [("Jane", "Doe"), ("John", "Roe"), ("Max", "Moe")] {
        service.create(&cat_fields(first, last, "0")).await.unwrap();
    }

    let first = service.list_all().await.unwrap();
    let second = service.list_all().await.unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
        vec!["Jane Doe", "John Roe", "Max Moe"]
    );
}

#[tokio::test]
async fn list_all_empty() {
    assert!(cats().list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_creates_leave_one_winner() {
    let service = cats();
    let jane = cat_fields("Jane", "Doe", "1");
    let john = cat_fields("John", "Roe", "2");

    let (a, b) = tokio::join!(service.create(&jane), service.create(&john));
    a.unwrap();
    b.unwrap();

    let last = service.last_added_name().await;
    assert!(last == "Jane Doe" || last == "John Roe", "last: {last}");
    assert_eq!(service.list_all().await.unwrap().len(), 2);
}
