//! One visited file-system object and the extension rule used to match it

use std::fs::{self, FileType};
use std::path::{Path, PathBuf};

/// Kind of file-system object behind a tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

/// One file-system object encountered during traversal
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEntry {
    /// Path as produced by the walk, joined onto the scan root
    pub path: PathBuf,
    /// Depth below the root (the root itself is 0)
    pub depth: usize,
    pub kind: EntryKind,
    /// Size in bytes, 0 when metadata is unavailable
    pub size: u64,
    /// Unix permission bits, when the platform has them
    pub mode: Option<u32>,
}

impl TreeEntry {
    /// Build an entry from a walk item
    ///
    /// A symlinked root is always traversed, so it is described by its
    /// target. Every other link is described as the link itself.
    pub fn from_dir_entry(entry: &walkdir::DirEntry) -> Self {
        let resolved_root = if entry.depth() == 0 && entry.path_is_symlink() {
            fs::metadata(entry.path()).ok()
        } else {
            None
        };

        let (kind, metadata) = match resolved_root {
            Some(target) => (kind_of(target.file_type()), Some(target)),
            None => (kind_of(entry.file_type()), entry.metadata().ok()),
        };
        let size = metadata.as_ref().map_or(0, |m| m.len());
        let mode = metadata.as_ref().and_then(permission_mode);

        Self {
            path: entry.path().to_path_buf(),
            depth: entry.depth(),
            kind,
            size,
            mode,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Suffix after the last `.` of the file name
    pub fn extension(&self) -> Option<&str> {
        extension_of(&self.path)
    }

    /// Case-sensitive extension comparison; `ext` may carry a leading dot
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        self.extension() == Some(ext)
    }
}

fn kind_of(file_type: FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_symlink() {
        EntryKind::Symlink
    } else {
        EntryKind::Other
    }
}

/// Suffix after the last `.` of the path's file name
///
/// Unlike [`Path::extension`], a dot-file such as `.json` has the extension
/// `json`.
pub fn extension_of(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let dot = name.rfind('.')?;
    Some(&name[dot + 1..])
}

#[cfg(unix)]
fn permission_mode(metadata: &std::fs::Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn permission_mode(_metadata: &std::fs::Metadata) -> Option<u32> {
    None
}
