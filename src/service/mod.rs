//! The review operations behind the HTTP surface.
//!
//! Each operation normalizes its result into `Ok(data)` or a
//! [`ServiceError`] that already knows its status code, so the route
//! handlers carry no business logic.

use axum::http::StatusCode;
use thiserror::Error;

use crate::db::models::Review;
use crate::db::store::{ReviewStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Expected outcome for unknown ids; maps to 404.
    #[error("not found")]
    NotFound,
    /// Persistence failure, propagated unmodified for the adapter to
    /// surface as a server error.
    #[error("review store failure: {0}")]
    Store(#[source] sqlx::Error),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ServiceError::NotFound,
            StoreError::Database(e) => ServiceError::Store(e),
        }
    }
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub struct ReviewService<S> {
    store: S,
}

impl<S: ReviewStore> ReviewService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All reviews for one attraction. An empty result set is `NotFound`,
    /// not an empty 200.
    pub async fn find_for_id(&self, attraction_id: &str) -> Result<Vec<Review>, ServiceError> {
        let reviews = self.store.find_by_attraction(attraction_id).await?;
        if reviews.is_empty() {
            return Err(ServiceError::NotFound);
        }
        Ok(reviews)
    }

    /// Marks one review helpful. Idempotent; repeated calls succeed
    /// identically.
    pub async fn update_review(&self, review_id: &str) -> Result<(), ServiceError> {
        self.store
            .set_review_helpful(review_id)
            .await
            .map_err(Into::into)
    }

    /// Marks one embedded image helpful, located by image id alone. The
    /// review id in the request path plays no part in the lookup.
    pub async fn update_image(&self, image_id: &str) -> Result<(), ServiceError> {
        self.store
            .set_image_helpful(image_id)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(ServiceError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failures_map_to_500() {
        let err = ServiceError::Store(sqlx::Error::PoolClosed);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
