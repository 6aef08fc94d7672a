// File discovery and the interactive file menu.
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::console::{Console, Input, read_input};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    File(PathBuf),
    /// Nothing chosen this round (`-x` or empty listing).
    Skip,
    /// `-q` or end of input.
    Quit,
}

/// `.json` files under `dir`, at most `depth` levels down, sorted. Symlinks
/// are followed. A depth of 0 finds nothing.
pub fn find_json_files(dir: &Path, depth: usize) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in WalkDir::new(dir).follow_links(true).min_depth(1).max_depth(depth) {
        let entry = match entry {
            Ok(entry) => entry,
            // broken links and link loops below the root are skipped
            Err(e) if e.depth() > 0 => {
                warn!(path = ?e.path(), error = %e, "skipping unreadable entry");
                continue;
            }
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                return Err(Error::io(path, e.into()));
            }
        };
        let p = entry.path();
        if entry.file_type().is_file() && p.extension().and_then(|s| s.to_str()) == Some("json") {
            out.push(p.to_path_buf());
        }
    }
    out.sort();
    debug!(dir = %dir.display(), found = out.len(), "scanned for json files");
    Ok(out)
}

pub fn select_file<C: Console + ?Sized>(console: &mut C, files: &[PathBuf]) -> Result<Selection> {
    if files.is_empty() {
        console.write_line("No JSON files found.")?;
        return Ok(Selection::Skip);
    }
    console.write_line("Available JSON files:")?;
    for (i, f) in files.iter().enumerate() {
        console.write_line(&format!("  [{}] {}", i + 1, f.display()))?;
    }
    console.write("Enter the number of the file to edit, '-x' to skip, or '-q' to quit: ")?;
    loop {
        match read_input(console)? {
            Input::End => return Ok(Selection::Quit),
            Input::Unreadable => {}
            Input::Line(line) => match line.trim() {
                "-x" => return Ok(Selection::Skip),
                "-q" => return Ok(Selection::Quit),
                text => {
                    if let Ok(n) = text.parse::<usize>()
                        && (1..=files.len()).contains(&n)
                    {
                        return Ok(Selection::File(files[n - 1].clone()));
                    }
                }
            },
        }
        console.write(&format!(
            "Invalid input. Enter a number between 1 and {}, '-x' to skip, or '-q' to quit: ",
            files.len()
        ))?;
    }
}
