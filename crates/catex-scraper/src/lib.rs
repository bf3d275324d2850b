pub mod aggregate;
pub mod alias;
pub mod client;
pub mod crawl;
pub mod enrich;
pub mod error;
pub mod images;
pub mod links;
pub mod progress;
pub mod run;
pub mod types;

pub use aggregate::aggregate;
pub use alias::derive_alias;
pub use client::GateClient;
pub use crawl::{crawl_category, CategoryCrawl};
pub use enrich::enrich_product;
pub use error::ScrapeError;
pub use images::resolve_images;
pub use links::{normalize_links, split_links};
pub use progress::{NullSink, ProgressSink, ProgressTracker, ProgressUpdate};
pub use run::{run_scrape, RunReport};
