//! Service-level tests over the in-memory store, covering the seeded
//! scenario end to end: lookup by attraction, helpful flips on reviews and
//! embedded images, and 404 behavior for unknown ids.

use axum::http::StatusCode;
use reviews_backend::db::memory::MemoryReviewStore;
use reviews_backend::db::seed::generate_test_data;
use reviews_backend::db::store::ReviewStore;
use reviews_backend::service::{ReviewService, ServiceError};

const ATTRACTION_ID: &str = "200"; // any id above 100 stays clear of seeded data

async fn seeded_service() -> (ReviewService<MemoryReviewStore>, MemoryReviewStore) {
    let store = MemoryReviewStore::new();
    store
        .insert_many(generate_test_data(ATTRACTION_ID))
        .await
        .expect("seeding the memory store cannot fail");
    (ReviewService::new(store.clone()), store)
}

#[tokio::test]
async fn find_for_id_returns_all_reviews_for_an_attraction() {
    let (service, _store) = seeded_service().await;

    let reviews = service.find_for_id(ATTRACTION_ID).await.unwrap();
    assert_eq!(reviews.len(), 5);
    assert!(reviews.iter().all(|r| r.attraction_id == ATTRACTION_ID));
}

#[tokio::test]
async fn find_for_id_reports_not_found_for_an_unknown_attraction() {
    let (service, _store) = seeded_service().await;

    let err = service.find_for_id("300").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_review_marks_a_single_review_helpful() {
    let (service, store) = seeded_service().await;

    let reviews = store.find_by_attraction(ATTRACTION_ID).await.unwrap();
    let review_id = reviews[0].id.clone();
    assert!(!reviews[0].helpful);

    service.update_review(&review_id).await.unwrap();

    let reviews = store.find_by_attraction(ATTRACTION_ID).await.unwrap();
    let updated = reviews.iter().find(|r| r.id == review_id).unwrap();
    assert!(updated.helpful);

    // The rest of the batch stays untouched.
    assert!(reviews
        .iter()
        .filter(|r| r.id != review_id)
        .all(|r| !r.helpful));
}

#[tokio::test]
async fn update_review_is_idempotent() {
    let (service, store) = seeded_service().await;

    let reviews = store.find_by_attraction(ATTRACTION_ID).await.unwrap();
    let review_id = reviews[0].id.clone();

    service.update_review(&review_id).await.unwrap();
    service.update_review(&review_id).await.unwrap();

    let reviews = store.find_by_attraction(ATTRACTION_ID).await.unwrap();
    assert!(reviews.iter().find(|r| r.id == review_id).unwrap().helpful);
}

#[tokio::test]
async fn update_review_reports_not_found_for_an_unknown_id() {
    let (service, _store) = seeded_service().await;

    let err = service.update_review("0").await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_image_marks_only_the_targeted_image_helpful() {
    let (service, store) = seeded_service().await;

    let reviews = store.find_by_attraction(ATTRACTION_ID).await.unwrap();
    let image_id = reviews[0].upload_images[0].id.clone();

    service.update_image(&image_id).await.unwrap();

    let owner = store.find_by_image_id(&image_id).await.unwrap().unwrap();
    for image in &owner.upload_images {
        assert_eq!(image.helpful, image.id == image_id);
    }
    // The parent review's own flag is not touched by an image update.
    assert!(!owner.helpful);
}

#[tokio::test]
async fn update_image_reports_not_found_for_an_unknown_id() {
    let (service, _store) = seeded_service().await;

    let err = service.update_image("0").await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_by_attraction_removes_the_seeded_batch() {
    let (service, store) = seeded_service().await;

    let removed = store.delete_by_attraction(ATTRACTION_ID).await.unwrap();
    assert_eq!(removed, 5);

    let err = service.find_for_id(ATTRACTION_ID).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}
