//! Assembly of the pandoc argument vector

use std::ffi::OsString;
use std::path::Path;

use clap::ValueEnum;

use super::ConversionConfig;

/// Name of the external converter executable
pub const PANDOC: &str = "pandoc";

/// Source markup handed to pandoc via `--from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Latex,
    Markdown,
}

impl InputFormat {
    /// Markdown for `.md`/`.markdown` files, LaTeX for everything else.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "md" | "markdown" => InputFormat::Markdown,
            _ => InputFormat::Latex,
        }
    }

    pub fn pandoc_name(&self) -> &'static str {
        match self {
            InputFormat::Latex => "latex",
            InputFormat::Markdown => "markdown",
        }
    }
}

/// Build the arguments passed to pandoc, excluding the program name.
///
/// Every flag precedes the target, which is always the last element.
/// Filters keep their configured order since pandoc chains them. Paths are
/// carried as `OsString` so non-UTF-8 file names reach pandoc unchanged.
pub fn build_argument_vector(
    config: &ConversionConfig,
    target: &Path,
    format: InputFormat,
    output: &Path,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "--mathml".into(),
        "--standalone".into(),
        "--to=html".into(),
        "--shift-heading-level-by=0".into(),
        format!("--from={}", format.pandoc_name()).into(),
    ];

    if config.number_sections {
        args.push("--number-offset=0".into());
    }
    if config.table_of_contents {
        args.push("--toc".into());
        if let Some(depth) = config.effective_toc_depth() {
            args.push(format!("--toc-depth={}", depth).into());
        }
    }
    if let Some(bibliography) = config.bibliography_path() {
        args.push(path_flag("--bibliography=", &bibliography));
    }
    if let Some(template) = config.template_path() {
        args.push(path_flag("--template=", &template));
    }
    for filter in config.filter_paths() {
        args.push(path_flag("--filter=", &filter));
    }

    args.push(path_flag("--output=", output));
    args.push(target.as_os_str().to_os_string());
    args
}

fn path_flag(flag: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(flag);
    arg.push(path);
    arg
}

/// Render `program` and `args` as a single shell-style line for display.
///
/// Display only: arguments that are not valid UTF-8 are shown lossily.
pub fn render_command_line(program: &str, args: &[OsString]) -> String {
    std::iter::once(program.to_string())
        .chain(args.iter().map(|arg| arg.to_string_lossy().into_owned()))
        .map(|arg| quote_arg(&arg))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_arg(arg: &str) -> String {
    if !arg.is_empty() && !arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(InputFormat::from_path(Path::new("notes.md")), InputFormat::Markdown);
        assert_eq!(
            InputFormat::from_path(Path::new("README.MARKDOWN")),
            InputFormat::Markdown
        );
        assert_eq!(InputFormat::from_path(Path::new("report.tex")), InputFormat::Latex);
        assert_eq!(InputFormat::from_path(Path::new("no_extension")), InputFormat::Latex);
    }

    #[test]
    fn test_render_quotes_whitespace() {
        let line = render_command_line(
            "pandoc",
            &[OsString::from("--output=out.html"), OsString::from("my report.tex")],
        );
        assert_eq!(line, "pandoc --output=out.html 'my report.tex'");
    }

    #[test]
    fn test_render_escapes_single_quote() {
        let line = render_command_line("pandoc", &[OsString::from("it's.tex")]);
        assert_eq!(line, r"pandoc 'it'\''s.tex'");
    }

    #[test]
    fn test_target_is_last() {
        let config = ConversionConfig::with_base_dir(PathBuf::from("/opt"));
        let args = build_argument_vector(
            &config,
            Path::new("report.tex"),
            InputFormat::Latex,
            Path::new("output.html"),
        );
        assert_eq!(args.last().unwrap(), "report.tex");
        assert_eq!(args[args.len() - 2], "--output=output.html");
    }
}
