mod feed_source;
pub mod sites;
pub mod solrenview;

pub use self::feed_source::FeedSource;
