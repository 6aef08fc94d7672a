// One edit pass over one file: load, edit, persist or discard, optional print.
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::backup::zip_backup_file;
use crate::console::{Console, Input, read_input};
use crate::document::{self, DEFAULT_INDENT};
use crate::edit::TreeEditor;
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Spaces per nesting level when writing the file back.
    pub indent: usize,
    /// Zip the original file before overwriting it.
    pub backup: bool,
    /// Ask whether to print the resulting document after each pass.
    pub offer_print: bool,
    /// Directory levels searched for `.json` files.
    pub scan_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            backup: false,
            offer_print: true,
            scan_depth: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub saved: bool,
    pub edited: usize,
}

const HELP: &str = "For each item, enter the new value or:\n  '-n' to skip\n  '-s' to save and exit file\n  '-x' to exit file without saving\n";

pub fn run_file<C: Console + ?Sized>(console: &mut C, path: &Path, opts: &Options) -> Result<FileReport> {
    let mut root = document::load(path)?;
    console.write_line(&format!("\nUpdating file: {}", path.display()))?;
    console.write_line(HELP)?;

    let outcome = TreeEditor::new(console).edit_document(&mut root)?;

    let saved = if outcome.should_persist {
        if opts.backup {
            match zip_backup_file(path) {
                Ok(dest) => info!(backup = %dest.display(), "backed up original"),
                Err(e) => warn!(path = %path.display(), error = %e, "backup failed"),
            }
        }
        document::save(path, &root, opts.indent)?;
        info!(path = %path.display(), edited = outcome.edited, "document saved");
        console.write_line(&format!("\nChanges saved to {}", path.display()))?;
        true
    } else {
        info!(path = %path.display(), "edits discarded");
        console.write_line("\nExiting file without saving changes.")?;
        false
    };

    if opts.offer_print {
        console.write("\nEnter 'y' to print the file: ")?;
        if let Input::Line(answer) = read_input(console)?
            && answer.trim() == "y"
        {
            let bytes = document::encode(&root, opts.indent)?;
            console.write("\n")?;
            console.write(&String::from_utf8_lossy(&bytes))?;
        }
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        saved,
        edited: outcome.edited,
    })
}
