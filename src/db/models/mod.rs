pub mod review;

pub use review::{Review, ReviewImage, ReviewUser};
