use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    routing::{get, patch},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;

use crate::db::models::{Review, ReviewImage, ReviewUser};
use crate::db::pg::PgReviewStore;
use crate::service::{ReviewService, ServiceError};
use crate::utils::api_response::ApiResponse;

/// Defines the review routes to be used in the main router
pub fn review_routes() -> Router<PgPool> {
    Router::new()
        .route("/{attraction_id}/api/reviews", get(find_for_id))
        .route(
            "/{attraction_id}/api/reviews/{review_id}",
            patch(update_review),
        )
        .route(
            "/{attraction_id}/api/reviews/{review_id}/{image_id}",
            patch(update_image),
        )
}

fn service(pool: PgPool) -> ReviewService<PgReviewStore> {
    ReviewService::new(PgReviewStore::new(pool))
}

fn reject(err: ServiceError) -> ApiResponse<()> {
    if let ServiceError::Store(ref e) = err {
        tracing::error!(error = %e, "review store failure");
    }
    err.into()
}

#[axum::debug_handler]
#[utoipa::path(
    get,
    path = "/{attraction_id}/api/reviews",
    tag = "Reviews",
    params(
        ("attraction_id" = String, Path, description = "Attraction the reviews were written about"),
    ),
    responses(
        (status = 200, description = "Reviews retrieved successfully", body = Vec<Review>),
        (status = 404, description = "No reviews for this attraction"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn find_for_id(
    State(db_pool): State<PgPool>,
    AxumPath(attraction_id): AxumPath<String>,
) -> Result<ApiResponse<Vec<Review>>, ApiResponse<()>> {
    let reviews = service(db_pool)
        .find_for_id(&attraction_id)
        .await
        .map_err(reject)?;

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Reviews retrieved successfully",
        reviews,
    ))
}

#[axum::debug_handler]
#[utoipa::path(
    patch,
    path = "/{attraction_id}/api/reviews/{review_id}",
    tag = "Reviews",
    params(
        ("attraction_id" = String, Path, description = "Attraction the review belongs to"),
        ("review_id" = String, Path, description = "ID of the review to mark helpful"),
    ),
    responses(
        (status = 200, description = "Review marked helpful"),
        (status = 404, description = "Review not found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn update_review(
    State(db_pool): State<PgPool>,
    AxumPath((_attraction_id, review_id)): AxumPath<(String, String)>,
) -> Result<ApiResponse<()>, ApiResponse<()>> {
    service(db_pool)
        .update_review(&review_id)
        .await
        .map_err(reject)?;

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Review marked helpful",
        (),
    ))
}

#[axum::debug_handler]
#[utoipa::path(
    patch,
    path = "/{attraction_id}/api/reviews/{review_id}/{image_id}",
    tag = "Reviews",
    params(
        ("attraction_id" = String, Path, description = "Attraction the review belongs to"),
        ("review_id" = String, Path, description = "Review the image is attached to (not used for lookup)"),
        ("image_id" = String, Path, description = "ID of the image to mark helpful"),
    ),
    responses(
        (status = 200, description = "Image marked helpful"),
        (status = 404, description = "Image not found"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn update_image(
    State(db_pool): State<PgPool>,
    AxumPath((_attraction_id, _review_id, image_id)): AxumPath<(String, String, String)>,
) -> Result<ApiResponse<()>, ApiResponse<()>> {
    // Lookup is by image id alone; the review id in the path is not checked
    // against the owning review.
    service(db_pool)
        .update_image(&image_id)
        .await
        .map_err(reject)?;

    Ok(ApiResponse::success(
        StatusCode::OK,
        "Image marked helpful",
        (),
    ))
}

#[derive(OpenApi)]
#[openapi(
    paths(find_for_id, update_review, update_image),
    components(schemas(Review, ReviewUser, ReviewImage)),
    tags(
        (name = "Reviews", description = "Attraction Review Endpoints")
    )
)]
pub struct ReviewDoc;
