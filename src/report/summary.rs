//! Resolved options card shown with `--verbose`

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::launcher::{ConversionConfig, ConversionRequest};
use crate::utils::truncate_path;

const PATH_WIDTH: usize = 48;

/// Table of the options a conversion will run with
pub struct OptionsSummary<'a> {
    config: &'a ConversionConfig,
    request: &'a ConversionRequest,
}

impl<'a> OptionsSummary<'a> {
    pub fn new(config: &'a ConversionConfig, request: &'a ConversionRequest) -> Self {
        Self { config, request }
    }

    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Option").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("Input"),
            Cell::new(truncate_path(&self.request.target, PATH_WIDTH)),
        ]);
        table.add_row(vec![
            Cell::new("Format"),
            Cell::new(self.request.format.pandoc_name()),
        ]);
        table.add_row(vec![
            Cell::new("Output"),
            Cell::new(truncate_path(&self.request.output, PATH_WIDTH)).fg(Color::Green),
        ]);
        table.add_row(vec![
            Cell::new("Section numbers"),
            toggle_cell(self.config.number_sections),
        ]);

        let toc = match self.config.effective_toc_depth() {
            Some(depth) => format!("yes (depth {})", depth),
            None if self.config.table_of_contents => "yes".to_string(),
            None => "no".to_string(),
        };
        table.add_row(vec![Cell::new("Table of contents"), Cell::new(toc)]);

        table.add_row(vec![
            Cell::new("Bibliography"),
            optional_path_cell(self.config.bibliography_path()),
        ]);
        table.add_row(vec![
            Cell::new("Template"),
            optional_path_cell(self.config.template_path()),
        ]);

        let filters = self.config.filter_paths();
        if filters.is_empty() {
            table.add_row(vec![Cell::new("Filters"), Cell::new("none").fg(Color::DarkGrey)]);
        }
        for (i, filter) in filters.iter().enumerate() {
            table.add_row(vec![
                Cell::new(format!("Filter {}", i + 1)),
                Cell::new(truncate_path(filter, PATH_WIDTH)),
            ]);
        }

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("⚙").cyan(),
            style("CONVERSION OPTIONS").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());

        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }
        println!();
    }
}

fn toggle_cell(enabled: bool) -> Cell {
    if enabled {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::DarkGrey)
    }
}

fn optional_path_cell(path: Option<std::path::PathBuf>) -> Cell {
    match path {
        Some(path) => Cell::new(truncate_path(&path, PATH_WIDTH)),
        None => Cell::new("none").fg(Color::DarkGrey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_filter() {
        let config = ConversionConfig::with_base_dir("/opt");
        let request = ConversionRequest::new("notes.md", "output.html");
        let rendered = OptionsSummary::new(&config, &request).table().to_string();

        assert!(rendered.contains("Filter 1"));
        assert!(rendered.contains("Filter 2"));
        assert!(rendered.contains("markdown"));
        assert!(rendered.contains("no"));
    }

    #[test]
    fn test_table_shows_toc_depth() {
        let config = ConversionConfig::with_base_dir("/opt").with_table_of_contents(true);
        let request = ConversionRequest::new("report.tex", "output.html");
        let rendered = OptionsSummary::new(&config, &request).table().to_string();

        assert!(rendered.contains("yes (depth 2)"));
    }
}
