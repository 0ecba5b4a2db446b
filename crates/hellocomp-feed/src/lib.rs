pub mod assemble;
pub mod classify;
pub mod error;
pub mod fetch;
pub mod lineup;
pub mod parse;
pub mod price;
pub mod specs;
pub mod types;

pub use assemble::{build_catalogue, build_product};
pub use classify::classify_category;
pub use error::FeedError;
pub use fetch::FeedClient;
pub use lineup::detect_lineup;
pub use parse::parse_feed;
pub use price::{format_czk, parse_price};
pub use specs::extract_specs;
pub use types::RawFeedItem;
