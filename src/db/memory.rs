use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::models::Review;
use crate::db::store::{ReviewStore, StoreError};

/// In-memory [`ReviewStore`] mirroring the PostgreSQL contract.
///
/// Backs the service tests; clones share the same underlying collection so a
/// test can keep a handle for assertions after handing one to the service.
#[derive(Clone, Default)]
pub struct MemoryReviewStore {
    reviews: Arc<RwLock<Vec<Review>>>,
}

impl MemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReviewStore for MemoryReviewStore {
    async fn find_by_attraction(&self, attraction_id: &str) -> Result<Vec<Review>, StoreError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .iter()
            .filter(|r| r.attraction_id == attraction_id)
            .cloned()
            .collect())
    }

    async fn find_by_image_id(&self, image_id: &str) -> Result<Option<Review>, StoreError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .iter()
            .find(|r| r.upload_images.iter().any(|img| img.id == image_id))
            .cloned())
    }

    async fn set_review_helpful(&self, review_id: &str) -> Result<(), StoreError> {
        let mut reviews = self.reviews.write().await;
        match reviews.iter_mut().find(|r| r.id == review_id) {
            Some(review) => {
                review.helpful = true;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn set_image_helpful(&self, image_id: &str) -> Result<(), StoreError> {
        let mut reviews = self.reviews.write().await;
        let image = reviews
            .iter_mut()
            .flat_map(|r| r.upload_images.iter_mut())
            .find(|img| img.id == image_id);
        match image {
            Some(image) => {
                image.helpful = true;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn insert_many(&self, mut batch: Vec<Review>) -> Result<Vec<String>, StoreError> {
        let mut reviews = self.reviews.write().await;
        let mut ids = Vec::with_capacity(batch.len());
        for review in &mut batch {
            review.id = Uuid::new_v4().to_string();
            ids.push(review.id.clone());
        }
        reviews.append(&mut batch);
        Ok(ids)
    }

    async fn delete_by_attraction(&self, attraction_id: &str) -> Result<u64, StoreError> {
        let mut reviews = self.reviews.write().await;
        let before = reviews.len();
        reviews.retain(|r| r.attraction_id != attraction_id);
        Ok((before - reviews.len()) as u64)
    }
}
