//! tex2html: LaTeX/Markdown to HTML launcher
//!
//! A small library around a single pandoc invocation: check that pandoc is
//! installed, build its argument list from the conversion options, run it.

pub mod cli;
pub mod launcher;
pub mod report;
pub mod utils;
