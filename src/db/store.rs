use thiserror::Error;

use crate::db::models::Review;

/// Store-level failures, kept distinct from the expected "not found"
/// outcome so callers can branch on a single check.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence seam for review documents.
///
/// Mutations rely on the backing store's atomic per-document update, so no
/// in-process locking happens above this trait. Lookups report absence
/// through their return value; only the targeted updates use
/// [`StoreError::NotFound`].
#[allow(async_fn_in_trait)]
pub trait ReviewStore: Send + Sync {
    /// All reviews whose `attractionId` matches, in store-native order.
    async fn find_by_attraction(&self, attraction_id: &str) -> Result<Vec<Review>, StoreError>;

    /// The review containing an embedded image with the given id, if any.
    async fn find_by_image_id(&self, image_id: &str) -> Result<Option<Review>, StoreError>;

    /// Sets `helpful = true` on one review. Idempotent.
    async fn set_review_helpful(&self, review_id: &str) -> Result<(), StoreError>;

    /// Sets `helpful = true` on one embedded image, leaving the rest of the
    /// image list untouched. Idempotent.
    async fn set_image_helpful(&self, image_id: &str) -> Result<(), StoreError>;

    /// Inserts a batch of reviews, assigning each a fresh id. Returns the
    /// assigned ids in input order.
    async fn insert_many(&self, reviews: Vec<Review>) -> Result<Vec<String>, StoreError>;

    /// Bulk delete by attraction id, returning the number of rows removed.
    /// Used for seeding resets and test teardown.
    async fn delete_by_attraction(&self, attraction_id: &str) -> Result<u64, StoreError>;
}
