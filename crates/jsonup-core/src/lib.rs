//! jsonup-core: interactive editing of JSON configuration files
//!
//! This crate focuses on a small, well-factored surface:
//! - Tree editor that walks every leaf and prompts for a typed replacement
//! - Leaf input grammar and sentinel tokens (`-n`, `-x`, `-s`)
//! - Document load/save with all-or-nothing write-back
//! - File discovery, the file menu, and optional zip backups
//!
pub mod backup;
pub mod console;
pub mod document;
pub mod edit;
pub mod error;
pub mod input;
pub mod node;
pub mod select;
pub mod session;

pub use console::{Console, Input, ScriptedConsole, StdConsole, read_input};
pub use document::{decode, encode, load, save};
pub use edit::{Flow, Outcome, TreeEditor, edit_document};
pub use error::{Error, Result};
pub use input::{Command, InputError, parse_leaf};
pub use node::LeafKind;
pub use select::{Selection, find_json_files, select_file};
pub use session::{FileReport, Options, run_file};
