pub mod api;
pub mod config;
pub mod db;
pub mod service;
pub mod utils;
