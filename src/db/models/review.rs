use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// ✅ **Review Document Stored in PostgreSQL**
///
/// One row per review; the embedded user profile and image list live in
/// JSONB columns so the persisted shape matches the serialized document.
/// Field names stay camelCase on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Store-assigned id; empty until the review has been inserted.
    pub id: String,
    pub attraction_id: String,
    pub rating: i32,
    pub travel_type: String,
    pub exp_date: DateTime<Utc>,
    pub lang: String,
    pub body: String,
    pub title: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    /// The only mutable top-level field after creation.
    pub helpful: bool,
    pub user: ReviewUser,
    pub upload_images: Vec<ReviewImage>,
}

/// ✅ **Embedded Reviewer Profile** (no identity outside its review)
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUser {
    pub origin_country: String,
    pub origin_region: String,
    pub contributions: i32,
    pub name: String,
    pub profile_image: String,
}

/// ✅ **Embedded Review Image**
///
/// `review_title` and `review_rating` duplicate parent review data for
/// display convenience. `id` is only guaranteed unique within one review's
/// image list, but image lookup treats it as store-wide unique.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewImage {
    pub id: String,
    pub helpful: bool,
    pub url: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub review_title: String,
    pub review_rating: i32,
}
