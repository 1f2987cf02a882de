mod extractor;
mod models;

pub use extractor::TimestampExtractor;
pub use models::SubtitleTimeRange;
