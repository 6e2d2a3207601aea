//! tex2html: LaTeX/Markdown to HTML CLI Tool
//!
//! Runs pandoc with a fixed template, bibliography and filter chain to turn
//! a .tex or .md file into a standalone HTML page.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use tex2html::cli::Cli;
use tex2html::launcher::{
    ConfigOverrides, ConversionConfig, LaunchError, Launcher, PathLocator, SystemRunner,
};
use tex2html::report::OptionsSummary;
use tex2html::utils::{print_banner, print_error, print_info};

fn main() -> ExitCode {
    // --help and --version work without pandoc; any other parse error is only
    // reported once pandoc is known to be installed.
    let parsed = Cli::try_parse();
    if let Err(err) = &parsed {
        if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            err.exit();
        }
    }

    let launcher = Launcher::system();
    let program = match launcher.check_dependency() {
        Ok(program) => program,
        Err(err) => {
            println!("{}", err);
            return exit_code(err.exit_code());
        }
    };

    let cli = parsed.unwrap_or_else(|err| err.exit());
    match run(&cli, launcher.quiet(cli.quiet), &program) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{:#}", err));
            let code = err
                .downcast_ref::<LaunchError>()
                .map(LaunchError::exit_code)
                .unwrap_or(1);
            exit_code(code)
        }
    }
}

fn run(cli: &Cli, launcher: Launcher<PathLocator, SystemRunner>, program: &Path) -> Result<()> {
    let mut config = ConversionConfig::default();
    if let Some(path) = &cli.config {
        let overrides = ConfigOverrides::from_path(path)
            .with_context(|| format!("Loading options from {}", path.display()))?;
        config = config.apply(overrides);
    }
    let config = cli.merge_into(config);
    let request = cli.request();

    if !cli.quiet {
        print_banner(env!("CARGO_PKG_VERSION"));
        if cli.no_filters {
            print_info("Filters disabled for this run");
        }
    }
    if cli.verbose {
        OptionsSummary::new(&config, &request).display();
    }

    launcher.run_with(program, &config, &request)?;
    Ok(())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
