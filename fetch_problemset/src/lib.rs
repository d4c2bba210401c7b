pub mod client;
pub mod config;
pub mod crawler;
pub mod error;
pub mod problem;
pub mod query;
pub mod storage;
pub mod transform;

pub use client::LeetCodeClient;
pub use config::Config;
pub use crawler::{CrawlSummary, Crawler};
pub use error::{FetchError, Result};
pub use storage::Storage;
