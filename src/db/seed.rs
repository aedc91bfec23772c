//! Synthetic review data used for seeding the store and driving tests.
//!
//! The generator is stateless apart from the attraction-id domain, which is
//! computed once and never regenerated. Values are random but every produced
//! document carries the full key set of the persisted shape.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::db::models::{Review, ReviewImage, ReviewUser};

static ATTRACTION_IDS: OnceLock<Vec<String>> = OnceLock::new();

/// The fixed attraction-id domain: `"001"` through `"100"`.
pub fn attraction_ids() -> &'static [String] {
    ATTRACTION_IDS.get_or_init(|| (1..=100).map(|n| format!("{n:03}")).collect())
}

const TRAVEL_TYPES: [&str; 5] = ["Family", "Couples", "Solo", "Business", "Friends"];

const LANGS: [&str; 6] = ["en", "es", "fr", "de", "pt", "zh"];

const ORIGINS: [(&str, &str); 8] = [
    ("United States", "California"),
    ("United Kingdom", "London"),
    ("Canada", "Ontario"),
    ("Australia", "New South Wales"),
    ("Germany", "Bavaria"),
    ("Japan", "Tokyo"),
    ("Brazil", "Sao Paulo"),
    ("France", "Ile-de-France"),
];

const USERNAMES: [&str; 8] = [
    "travelbug88",
    "wanderlustSam",
    "jetsetJo",
    "mileage_mike",
    "sunseeker_ana",
    "roamingRita",
    "backpack_ben",
    "cityhopper_cho",
];

const TITLES: [&str; 8] = [
    "Absolutely worth the trip",
    "Great for families",
    "Crowded but fun",
    "A hidden gem",
    "Exceeded expectations",
    "Decent way to spend an afternoon",
    "Magical at sunset",
    "Would not go again",
];

const BODIES: [&str; 6] = [
    "We spent the whole morning here and could easily have stayed longer. The staff were friendly and the lines moved quickly.",
    "Beautiful views, but get there early. By midday the crowds make it hard to enjoy.",
    "Booked on a whim and so glad we did. Highlight of the whole trip.",
    "It was fine. Not sure it lives up to the hype, but the kids enjoyed themselves.",
    "Skip the guided tour and wander on your own, you will see twice as much.",
    "Came back for a second visit this year and it was just as good as the first.",
];

/// Uniform random integer in `[min, max]` inclusive.
pub fn generate_num_between(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

/// Picks one candidate, weighted so the first gets half the probability mass
/// and the rest split the remainder evenly.
///
/// Panics on an empty slice; every caller passes a fixed non-empty pool.
pub fn pick_biased<T>(candidates: &[T]) -> &T {
    assert!(!candidates.is_empty(), "pick_biased needs candidates");
    let draw: f64 = rand::thread_rng().gen();
    if candidates.len() == 1 || draw < 0.5 {
        return &candidates[0];
    }
    let rest = (candidates.len() - 1) as f64;
    let idx = 1 + ((draw - 0.5) * 2.0 * rest) as usize;
    &candidates[idx.min(candidates.len() - 1)]
}

fn generate_image(username: &str, review_title: &str, review_rating: i32) -> ReviewImage {
    let id = Uuid::new_v4().to_string();
    ReviewImage {
        url: format!("https://picsum.photos/seed/{id}/640/480"),
        id,
        helpful: false,
        username: username.to_string(),
        created_at: days_ago(generate_num_between(0, 30)),
        review_title: review_title.to_string(),
        review_rating,
    }
}

fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

/// Builds one synthetic review. The id stays empty; the store assigns it at
/// insert.
pub fn generate_review(attraction_id: &str) -> Review {
    let rating = *pick_biased(&[5, 4, 3, 2, 1]);
    let title = (*pick_biased(&TITLES)).to_string();
    let username = *pick_biased(&USERNAMES);
    let (origin_country, origin_region) = *pick_biased(&ORIGINS);
    let created_at = days_ago(generate_num_between(0, 364));

    let image_count = *pick_biased(&[0usize, 1, 2, 3]);
    let upload_images = (0..image_count)
        .map(|_| generate_image(username, &title, rating))
        .collect();

    Review {
        id: String::new(),
        attraction_id: attraction_id.to_string(),
        rating,
        travel_type: (*pick_biased(&TRAVEL_TYPES)).to_string(),
        exp_date: created_at - Duration::days(generate_num_between(0, 90)),
        lang: (*pick_biased(&LANGS)).to_string(),
        body: (*pick_biased(&BODIES)).to_string(),
        title,
        votes: generate_num_between(0, 120) as i32,
        created_at,
        helpful: false,
        user: ReviewUser {
            origin_country: origin_country.to_string(),
            origin_region: origin_region.to_string(),
            contributions: generate_num_between(1, 500) as i32,
            name: username.to_string(),
            profile_image: format!("https://i.pravatar.cc/150?u={username}"),
        },
        upload_images,
    }
}

/// Five reviews for one attraction, shaped for the service tests: the first
/// always carries at least one image so image mutation can be exercised.
pub fn generate_test_data(attraction_id: &str) -> Vec<Review> {
    let mut reviews: Vec<Review> = (0..5).map(|_| generate_review(attraction_id)).collect();
    if reviews[0].upload_images.is_empty() {
        let image = generate_image(&reviews[0].user.name, &reviews[0].title, reviews[0].rating);
        reviews[0].upload_images.push(image);
    }
    reviews
}

/// The full seed corpus: 3 to 8 reviews for each attraction in the domain.
pub fn generate_seed_data() -> Vec<Review> {
    attraction_ids()
        .iter()
        .flat_map(|attraction_id| {
            (0..generate_num_between(3, 8)).map(move |_| generate_review(attraction_id))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn attraction_id_domain_ranges_from_001_to_100() {
        let ids = attraction_ids();
        assert_eq!(ids.len(), 100);
        assert_eq!(ids[0], "001");
        assert_eq!(ids[ids.len() - 1], "100");
    }

    #[test]
    fn generate_num_between_covers_the_full_range() {
        let mut seen = HashMap::new();
        for _ in 0..100 {
            *seen.entry(generate_num_between(0, 10)).or_insert(0u32) += 1;
        }
        for n in 0..=10i64 {
            assert!(seen.contains_key(&n), "never generated {n}");
        }
    }

    #[test]
    fn pick_biased_favors_the_first_candidate() {
        let mut seen = HashMap::new();
        for _ in 0..100 {
            *seen.entry(*pick_biased(&[0, 1, 2, 3])).or_insert(0u32) += 1;
        }
        let first = seen.get(&0).copied().unwrap_or(0);
        assert!(first > 25, "first candidate picked only {first} times");
    }

    #[test]
    fn pick_biased_never_leaves_the_candidate_set() {
        for _ in 0..100 {
            let picked = *pick_biased(&[7, 8, 9]);
            assert!((7..=9).contains(&picked));
        }
    }

    #[test]
    fn generated_reviews_carry_every_required_key() {
        let corpus = generate_seed_data();
        assert!(corpus.len() >= 200);

        let review = &corpus[generate_num_between(0, 200) as usize];
        let doc = serde_json::to_value(review).unwrap();

        for key in [
            "id",
            "attractionId",
            "rating",
            "travelType",
            "expDate",
            "lang",
            "body",
            "title",
            "votes",
            "createdAt",
            "helpful",
            "user",
            "uploadImages",
        ] {
            assert!(doc.get(key).is_some(), "review missing key {key}");
        }

        for key in [
            "originCountry",
            "originRegion",
            "contributions",
            "name",
            "profileImage",
        ] {
            assert!(doc["user"].get(key).is_some(), "user missing key {key}");
        }

        let images = doc["uploadImages"].as_array().unwrap();
        if let Some(image) = images.first() {
            for key in [
                "id",
                "helpful",
                "url",
                "username",
                "createdAt",
                "reviewTitle",
                "reviewRating",
            ] {
                assert!(image.get(key).is_some(), "image missing key {key}");
            }
        }
    }

    #[test]
    fn test_data_has_five_reviews_and_a_leading_image() {
        let reviews = generate_test_data("200");
        assert_eq!(reviews.len(), 5);
        assert!(!reviews[0].upload_images.is_empty());
        assert!(reviews.iter().all(|r| r.attraction_id == "200"));
        assert!(reviews.iter().all(|r| !r.helpful));
    }
}
