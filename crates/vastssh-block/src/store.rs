//! Line-oriented file store with atomic writes

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::error::{Error, Result};
use crate::locate::{locate, Markers, Region};

/// A text file modeled as an ordered sequence of lines.
///
/// Holds no region state: block boundaries are re-derived from the
/// current lines via [`ManagedFile::locate`] on every run, so edits
/// made by the user between runs are always picked up.
pub struct ManagedFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl ManagedFile {
    /// Load the file at `path` and split it into lines.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let lines = content.lines().map(str::to_string).collect();
        Ok(Self { path, lines })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Locate the managed block in the currently loaded lines.
    pub fn locate(&self, markers: &Markers) -> Result<Option<Region>> {
        locate(&self.lines, markers, &self.path)
    }

    /// Append a blank separator line followed by an adjacent start/end
    /// marker pair, persisting immediately.
    ///
    /// Must only be called when [`ManagedFile::locate`] returned
    /// `None`; the locator rejects files with more than one pair.
    pub fn append_empty_block(&mut self, markers: &Markers) -> Result<()> {
        self.lines.push(String::new());
        self.lines.push(markers.start.clone());
        self.lines.push(markers.end.clone());
        debug!(path = %self.path.display(), "appended empty managed block");
        self.save()
    }

    /// Replace the `interior` lines with `new_lines` and persist.
    ///
    /// `interior` must be the [`Region::interior`] of a freshly located
    /// block, so the marker lines themselves are never overwritten.
    /// Full overwrite semantics: no previous interior line survives
    /// unless present in `new_lines`.
    pub fn splice(&mut self, interior: Range<usize>, new_lines: Vec<String>) -> Result<()> {
        self.lines.splice(interior, new_lines);
        self.save()
    }

    /// Write all lines back to disk atomically.
    ///
    /// A non-empty file always ends with a final newline.
    pub fn save(&self) -> Result<()> {
        let mut content = self.lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        write_atomic(&self.path, content.as_bytes())
    }
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so no reader ever observes a
/// half-written file. Acquires an advisory lock on the temp file to
/// prevent concurrent access.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    // Temp file lives in the same directory, ensuring same filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}

/// Create `path` and its parent directory when missing, with
/// owner-only permissions on Unix (0700 directory, 0600 file).
/// Existing files and directories are left untouched.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            let mut builder = fs::DirBuilder::new();
            builder.recursive(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::DirBuilderExt;
                builder.mode(0o700);
            }
            builder.create(parent).map_err(|e| Error::io(parent, e))?;
        }
    }

    if !path.exists() {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        match options.open(path) {
            Ok(_) => debug!(path = %path.display(), "created empty config file"),
            // Lost the race against another creator; the file exists now
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(e) => return Err(Error::io(path, e)),
        }
    }

    Ok(())
}
