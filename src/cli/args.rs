//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::launcher::{
    check_toc_depth, ConversionConfig, ConversionRequest, InputFormat, DEFAULT_OUTPUT,
};

const LONG_ABOUT: &str = "\
Converts LaTeX (.tex) or Markdown (.md) files to standalone HTML by running
pandoc with a fixed set of options: MathML equations, a custom HTML template,
a bibliography, and two filters for code highlighting (highlightCode.py) and
equation numbering (addEquationNumbers.py).

Requires pandoc on the PATH (https://pandoc.org/installing.html). The filters
need the Python packages pandocfilters and pygments, and must be executable.
The template, bibliography and filters are looked up next to the tex2html
executable unless an options file (--config) points elsewhere.";

/// tex2html - Convert LaTeX or Markdown to standalone HTML with pandoc
#[derive(Parser, Debug)]
#[command(name = "tex2html")]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Source file to convert (.tex or .md)
    pub target: PathBuf,

    /// Output HTML file
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Add a table of contents
    #[arg(long)]
    pub toc: bool,

    /// Table of contents depth (1-6), used with --toc
    #[arg(long, value_parser = validate_toc_depth)]
    pub toc_depth: Option<u8>,

    /// Input format. Detected from the file extension when omitted
    /// (.md and .markdown are Markdown, anything else is LaTeX).
    #[arg(long, value_enum)]
    pub from: Option<InputFormat>,

    /// JSON options file overriding the built-in defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable numbered section headings
    #[arg(long, default_value = "false")]
    pub no_number_sections: bool,

    /// Run pandoc without any filters
    #[arg(long, default_value = "false")]
    pub no_filters: bool,

    /// Show the resolved options before converting
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, default_value = "false", conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Input format from --from, or detected from the target's extension.
    pub fn input_format(&self) -> InputFormat {
        self.from
            .unwrap_or_else(|| InputFormat::from_path(&self.target))
    }

    pub fn request(&self) -> ConversionRequest {
        ConversionRequest::new(self.target.clone(), self.output.clone())
            .with_format(self.input_format())
    }

    /// Merge the command-line flags into `base`.
    pub fn merge_into(&self, base: ConversionConfig) -> ConversionConfig {
        let mut config = base.with_table_of_contents(self.toc);
        if let Some(depth) = self.toc_depth {
            config.toc_depth = Some(depth);
        }
        if self.no_number_sections {
            config.number_sections = false;
        }
        if self.no_filters {
            config.filters.clear();
        }
        config
    }
}

/// Validator for toc_depth parameter
fn validate_toc_depth(s: &str) -> Result<u8, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid depth", s))?;

    check_toc_depth(value)
}
