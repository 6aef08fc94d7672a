// Document store: bytes <-> tree, and whole-file load/save.
use std::fs;
use std::io::Write as _;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_INDENT: usize = 4;

pub fn decode(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(|source| Error::Decode { path: None, source })
}

/// Pretty-prints `value` with `indent` spaces per level and a trailing newline.
pub fn encode(value: &Value, indent: usize) -> Result<Vec<u8>> {
    let pad = vec![b' '; indent];
    let mut out = Vec::with_capacity(256);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&pad));
    value.serialize(&mut ser).map_err(Error::Encode)?;
    out.push(b'\n');
    Ok(out)
}

pub fn load(path: &Path) -> Result<Value> {
    let data = fs::read(path).map_err(|e| Error::io(path, e))?;
    let value = serde_json::from_slice(&data).map_err(|source| Error::Decode {
        path: Some(path.to_path_buf()),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "decoded document");
    Ok(value)
}

/// Serializes the whole tree, then replaces `path` in one rename. The
/// original file is untouched if anything before the rename fails.
pub fn save(path: &Path, value: &Value, indent: usize) -> Result<()> {
    let bytes = encode(value, indent)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| Error::io(tmp.path(), e))?;
    }
    tmp.write_all(&bytes).map_err(|e| Error::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| Error::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote document");
    Ok(())
}
