//! Report module - summarizing conversion options

pub mod summary;

pub use summary::*;
