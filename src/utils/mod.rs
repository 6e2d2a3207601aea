//! Utility module - terminal output helpers

mod styling;

pub use styling::*;
