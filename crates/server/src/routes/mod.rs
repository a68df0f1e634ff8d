pub mod analyze;
pub mod local;
