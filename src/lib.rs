pub mod logger;
pub mod normalizer;
pub mod text;
pub mod unicode;

pub use normalizer::{normalize, normalize_with, NormalizeError, Options, Summary, TARGET_PATH};
