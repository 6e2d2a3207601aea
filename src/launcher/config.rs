//! Conversion options: static defaults plus optional JSON overrides

use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::LaunchError;

/// Output file used when no explicit output path is given
pub const DEFAULT_OUTPUT: &str = "output.html";

/// Table-of-contents nesting depth used when `--toc` is set
pub const DEFAULT_TOC_DEPTH: u8 = 2;

/// Heading levels pandoc accepts for `--toc-depth`
pub const TOC_DEPTH_RANGE: RangeInclusive<u8> = 1..=6;

/// Bibliography file, relative to the template directory
pub const DEFAULT_BIBLIOGRAPHY: &str = "lib2.bib";

/// HTML template file, relative to the template directory
pub const DEFAULT_TEMPLATE: &str = "canvasTemplate.html";

/// Filters in the order pandoc applies them, relative to the filter directory
pub const DEFAULT_FILTERS: [&str; 2] = ["highlightCode.py", "addEquationNumbers.py"];

/// Options for a single conversion.
///
/// Built once per run from [`ConversionConfig::default`], optional
/// [`ConfigOverrides`] and the command-line flags, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Emit numbered section headings
    pub number_sections: bool,
    /// Depth of the table of contents; only used when `table_of_contents` is set
    pub toc_depth: Option<u8>,
    /// Bibliography file, resolved against `template_dir`
    pub bibliography: Option<PathBuf>,
    /// HTML template file, resolved against `template_dir`
    pub template: Option<PathBuf>,
    pub template_dir: PathBuf,
    /// Filters, resolved against `filter_dir` and applied in this order
    pub filters: Vec<PathBuf>,
    pub filter_dir: PathBuf,
    /// Generate a table of contents
    pub table_of_contents: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::with_base_dir(install_dir())
    }
}

impl ConversionConfig {
    /// Default options with both the template and filter directory set to `dir`.
    pub fn with_base_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            number_sections: true,
            toc_depth: Some(DEFAULT_TOC_DEPTH),
            bibliography: Some(PathBuf::from(DEFAULT_BIBLIOGRAPHY)),
            template: Some(PathBuf::from(DEFAULT_TEMPLATE)),
            template_dir: dir.clone(),
            filters: DEFAULT_FILTERS.iter().map(PathBuf::from).collect(),
            filter_dir: dir,
            table_of_contents: false,
        }
    }

    pub fn with_table_of_contents(mut self, enabled: bool) -> Self {
        self.table_of_contents = enabled;
        self
    }

    /// Apply overrides from an options file. Fields absent from the file keep
    /// their current value; `null` clears an optional field.
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(number_sections) = overrides.number_sections {
            self.number_sections = number_sections;
        }
        if let Some(toc_depth) = overrides.toc_depth {
            self.toc_depth = toc_depth;
        }
        if let Some(bibliography) = overrides.bibliography {
            self.bibliography = bibliography;
        }
        if let Some(template) = overrides.template {
            self.template = template;
        }
        if let Some(template_dir) = overrides.template_dir {
            self.template_dir = template_dir;
        }
        if let Some(filters) = overrides.filters {
            self.filters = filters;
        }
        if let Some(filter_dir) = overrides.filter_dir {
            self.filter_dir = filter_dir;
        }
        self
    }

    pub fn bibliography_path(&self) -> Option<PathBuf> {
        self.bibliography
            .as_ref()
            .map(|file| self.template_dir.join(file))
    }

    pub fn template_path(&self) -> Option<PathBuf> {
        self.template.as_ref().map(|file| self.template_dir.join(file))
    }

    pub fn filter_paths(&self) -> Vec<PathBuf> {
        self.filters
            .iter()
            .map(|file| self.filter_dir.join(file))
            .collect()
    }

    /// TOC depth that actually reaches pandoc, `None` unless a TOC is requested.
    pub fn effective_toc_depth(&self) -> Option<u8> {
        if self.table_of_contents {
            self.toc_depth
        } else {
            None
        }
    }
}

/// Directory holding the running executable, falling back to the working directory.
pub fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.canonicalize().ok())
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Partial options as read from a JSON options file.
///
/// ```json
/// {
///   "number_sections": false,
///   "toc_depth": 3,
///   "bibliography": null,
///   "filters": ["highlightCode.py"]
/// }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub number_sections: Option<bool>,
    #[serde(default, deserialize_with = "present_toc_depth")]
    pub toc_depth: Option<Option<u8>>,
    #[serde(default, deserialize_with = "present")]
    pub bibliography: Option<Option<PathBuf>>,
    #[serde(default, deserialize_with = "present")]
    pub template: Option<Option<PathBuf>>,
    pub template_dir: Option<PathBuf>,
    pub filters: Option<Vec<PathBuf>>,
    pub filter_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Read overrides from `path`.
    ///
    /// Relative `template_dir`/`filter_dir` entries are taken relative to the
    /// directory containing the options file.
    pub fn from_path(path: &Path) -> Result<Self, LaunchError> {
        let contents = fs::read_to_string(path).map_err(|source| LaunchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut overrides = Self::from_json(&contents).map_err(|source| {
            LaunchError::ConfigParse {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        overrides.template_dir = overrides.template_dir.map(|dir| base.join(dir));
        overrides.filter_dir = overrides.filter_dir.map(|dir| base.join(dir));
        Ok(overrides)
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}

// Distinguishes an explicit `null` (Some(None)) from an absent key (None).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn present_toc_depth<'de, D>(deserializer: D) -> Result<Option<Option<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    let depth: Option<Option<u8>> = present(deserializer)?;
    if let Some(Some(value)) = depth {
        check_toc_depth(value).map_err(D::Error::custom)?;
    }
    Ok(depth)
}

/// Reject depths outside [`TOC_DEPTH_RANGE`].
pub fn check_toc_depth(depth: u8) -> Result<u8, String> {
    if TOC_DEPTH_RANGE.contains(&depth) {
        Ok(depth)
    } else {
        Err(format!(
            "toc_depth must be between {} and {}, got {}",
            TOC_DEPTH_RANGE.start(),
            TOC_DEPTH_RANGE.end(),
            depth
        ))
    }
}
