//! TextLens text heuristics
//!
//! Sentence-boundary chunking, reading metrics, and positional key-point
//! extraction. Everything here is pure and infallible.

mod chunking;
mod key_points;
mod metrics;
mod result;

pub use chunking::{chunk_text, DEFAULT_MAX_CHUNK_WORDS};
pub use key_points::{extract_key_points, DEFAULT_MAX_KEY_POINTS};
pub use metrics::{reading_time, word_count};
pub use result::AnalysisResult;
