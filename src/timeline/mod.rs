mod generator;

pub use generator::{TimelineGenerator, FRAME_RATE};
