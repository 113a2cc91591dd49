//! Artifact I/O
//!
//! Generated catalogs and READMEs are replaced atomically: content goes to a
//! uniquely named sibling temp file which is then renamed over the target.
//! Readers see either the old file or the new one, never a partial write.
//! Concurrent writers never share a temp file; the last rename wins.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{Error, NormalizedPath, Result};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Removes the temp file unless the rename went through.
struct TempGuard {
    path: PathBuf,
    armed: bool,
}

impl Drop for TempGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Sibling of `target` on the same filesystem, e.g. `.catalog.json.4242-0.tmp`.
///
/// Unique per process and per call.
fn temp_path_for(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let sequence = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    target.with_file_name(format!(".{name}.{}-{sequence}.tmp", std::process::id()))
}

fn write_synced(file: &mut File, temp: &Path, content: &[u8]) -> Result<()> {
    file.write_all(content).map_err(|e| Error::io(temp, e))?;
    file.sync_all().map_err(|e| Error::io(temp, e))
}

/// Replace `path` with `content`, creating parent directories as needed.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let target = path.to_native();
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut guard = TempGuard {
        path: temp_path_for(&target),
        armed: true,
    };
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&guard.path)
        .map_err(|e| Error::io(&guard.path, e))?;
    write_synced(&mut file, &guard.path, content)?;
    drop(file);

    fs::rename(&guard.path, &target).map_err(|e| Error::io(&target, e))?;
    guard.armed = false;

    tracing::debug!(path = %path, bytes = content.len(), "Replaced file");
    Ok(())
}

pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    fs::read_to_string(&native).map_err(|e| Error::io(&native, e))
}

/// Read `path`, mapping a missing file to `None`.
///
/// Any other failure is still an error.
pub fn read_text_if_exists(path: &NormalizedPath) -> Result<Option<String>> {
    let native = path.to_native();
    match fs::read_to_string(&native) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native, e)),
    }
}

pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
