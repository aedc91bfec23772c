pub mod memory;
pub mod models;
pub mod pg;
pub mod pool;
pub mod seed;
pub mod store;
