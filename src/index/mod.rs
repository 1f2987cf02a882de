mod builder;
mod models;

pub use builder::IndexBuilder;
pub use models::{ClipRecord, ProjectIndex};
