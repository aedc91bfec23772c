use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::db::models::{Review, ReviewImage, ReviewUser};
use crate::db::store::{ReviewStore, StoreError};

/// PostgreSQL-backed [`ReviewStore`].
///
/// Each review is one row; the embedded user profile and image list are
/// JSONB columns, so nested lookups and in-place image updates stay inside
/// a single atomic row update.
#[derive(Clone)]
pub struct PgReviewStore {
    pool: PgPool,
}

/// Row shape bridging the relational columns and the document model.
#[derive(FromRow)]
struct ReviewRow {
    id: String,
    attraction_id: String,
    rating: i32,
    travel_type: String,
    exp_date: DateTime<Utc>,
    lang: String,
    body: String,
    title: String,
    votes: i32,
    created_at: DateTime<Utc>,
    helpful: bool,
    user_profile: Json<ReviewUser>,
    upload_images: Json<Vec<ReviewImage>>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            attraction_id: row.attraction_id,
            rating: row.rating,
            travel_type: row.travel_type,
            exp_date: row.exp_date,
            lang: row.lang,
            body: row.body,
            title: row.title,
            votes: row.votes,
            created_at: row.created_at,
            helpful: row.helpful,
            user: row.user_profile.0,
            upload_images: row.upload_images.0,
        }
    }
}

const SELECT_REVIEW: &str = r#"
SELECT id, attraction_id, rating, travel_type, exp_date, lang, body, title,
       votes, created_at, helpful, user_profile, upload_images
  FROM reviews
"#;

impl PgReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ReviewStore for PgReviewStore {
    async fn find_by_attraction(&self, attraction_id: &str) -> Result<Vec<Review>, StoreError> {
        let rows = sqlx::query_as::<_, ReviewRow>(&format!(
            "{SELECT_REVIEW} WHERE attraction_id = $1"
        ))
        .bind(attraction_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn find_by_image_id(&self, image_id: &str) -> Result<Option<Review>, StoreError> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            "{SELECT_REVIEW} WHERE upload_images @> jsonb_build_array(jsonb_build_object('id', $1::text))"
        ))
        .bind(image_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Review::from))
    }

    async fn set_review_helpful(&self, review_id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE reviews SET helpful = TRUE WHERE id = $1")
            .bind(review_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn set_image_helpful(&self, image_id: &str) -> Result<(), StoreError> {
        // Rewrites the image list of the single owning row, flipping helpful
        // only on the element whose id matches.
        let result = sqlx::query(
            r#"
            UPDATE reviews
               SET upload_images = (
                   SELECT COALESCE(jsonb_agg(
                       CASE WHEN img->>'id' = $1::text
                            THEN jsonb_set(img, '{helpful}', 'true'::jsonb)
                            ELSE img
                       END
                   ), '[]'::jsonb)
                     FROM jsonb_array_elements(upload_images) AS img
               )
             WHERE upload_images @> jsonb_build_array(jsonb_build_object('id', $1::text))
            "#,
        )
        .bind(image_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn insert_many(&self, reviews: Vec<Review>) -> Result<Vec<String>, StoreError> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(reviews.len());

        for review in &reviews {
            let id = Uuid::new_v4().to_string();
            sqlx::query(
                r#"
                INSERT INTO reviews
                    (id, attraction_id, rating, travel_type, exp_date, lang, body,
                     title, votes, created_at, helpful, user_profile, upload_images)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                "#,
            )
            .bind(&id)
            .bind(&review.attraction_id)
            .bind(review.rating)
            .bind(&review.travel_type)
            .bind(review.exp_date)
            .bind(&review.lang)
            .bind(&review.body)
            .bind(&review.title)
            .bind(review.votes)
            .bind(review.created_at)
            .bind(review.helpful)
            .bind(Json(&review.user))
            .bind(Json(&review.upload_images))
            .execute(&mut *tx)
            .await?;
            ids.push(id);
        }

        tx.commit().await?;
        Ok(ids)
    }

    async fn delete_by_attraction(&self, attraction_id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM reviews WHERE attraction_id = $1")
            .bind(attraction_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
