use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use jsonup_core::{Console, Options, Selection, StdConsole};

#[derive(Parser, Debug)]
#[command(
    name = "jsonup",
    about = "Walk a JSON config file and update each value from the console",
    version
)]
struct Cli {
    /// Directory to scan for JSON files (defaults to the current directory)
    #[arg(value_name = "DIR", conflicts_with_all = ["file", "directory"])]
    dir: Option<PathBuf>,
    /// JSON file to update; edits it once and exits
    #[arg(short, long, value_name = "FILE", conflicts_with = "directory")]
    file: Option<PathBuf>,
    /// Directory to scan for JSON files
    #[arg(short, long, value_name = "DIR")]
    directory: Option<PathBuf>,
    /// Spaces per indentation level when writing
    #[arg(long, default_value_t = jsonup_core::document::DEFAULT_INDENT)]
    indent: usize,
    /// Zip the original file next to it before saving
    #[arg(long, default_value_t = false)]
    backup: bool,
    /// Do not offer to print the file after editing
    #[arg(long, default_value_t = false)]
    no_print: bool,
    /// Directory levels to search for JSON files (at least 1)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    depth: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let opts = Options {
        indent: cli.indent,
        backup: cli.backup,
        offer_print: !cli.no_print,
        scan_depth: usize::try_from(cli.depth).unwrap_or(usize::MAX),
    };
    let mut console = StdConsole::new();
    match run(cli, &opts, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, opts: &Options, console: &mut StdConsole) -> Result<()> {
    console.write_line("\n=========================\n    JSON File Updater\n=========================\n")?;
    match cli.file {
        Some(file) => edit_single(console, &file, opts),
        None => {
            let dir = cli.directory.or(cli.dir).unwrap_or_else(|| PathBuf::from("."));
            edit_from_menu(console, &dir, opts)
        }
    }
}

fn edit_single(console: &mut StdConsole, file: &Path, opts: &Options) -> Result<()> {
    let path = absolute(file);
    jsonup_core::run_file(console, &path, opts)
        .with_context(|| format!("editing {}", path.display()))?;
    Ok(())
}

fn edit_from_menu(console: &mut StdConsole, dir: &Path, opts: &Options) -> Result<()> {
    let dir = absolute(dir);
    loop {
        console.write_line(&format!("Detecting JSON files in directory: {} ...", dir.display()))?;
        let files = jsonup_core::find_json_files(&dir, opts.scan_depth)
            .with_context(|| format!("scanning {}", dir.display()))?;
        match jsonup_core::select_file(console, &files)? {
            Selection::Quit => return Ok(()),
            Selection::Skip if files.is_empty() => return Ok(()),
            Selection::Skip => continue,
            Selection::File(path) => {
                // a broken file ends its own pass, not the session
                if let Err(e) = jsonup_core::run_file(console, &path, opts) {
                    eprintln!("error: {:#}", anyhow::Error::from(e));
                }
                console.write_line("\nReturning to file selection...\n")?;
            }
        }
    }
}

fn absolute(p: &Path) -> PathBuf {
    std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf())
}
