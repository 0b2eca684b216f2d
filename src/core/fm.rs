//! Directory enumeration and entry resolution for ffm.
//!
//! Provides the [FileEntry] struct which is used throughout ffm, the
//! [resolve_entry] function that turns one directory entry name into a fully
//! populated record, and [browse_dir] which builds the listing of a directory.

use crate::core::error::BrowseError;
use crate::core::formatter::{BROKEN_SYMLINK_LABEL, format_display_label};

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Number of entries the listing storage is allocated for before the first growth.
pub const INITIAL_CAPACITY: usize = 128;

/// Kind of a filesystem object, taken from its own (non-following) metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    File,
    Directory,
    Symlink,
    Other,
}

impl FileType {
    fn from_metadata(md: &Metadata) -> Self {
        let ft = md.file_type();
        if ft.is_symlink() {
            FileType::Symlink
        } else if ft.is_dir() {
            FileType::Directory
        } else if ft.is_file() {
            FileType::File
        } else {
            FileType::Other
        }
    }
}

/// Represents a single entry in a directory listing.
///
/// Entries are immutable once built by [resolve_entry]. A listing is replaced
/// as a whole on reload, entries are never patched in place.
#[derive(Debug, Clone)]
pub struct FileEntry {
    name: Box<OsStr>,
    file_type: FileType,
    flags: u8,
    size: i64,
    modified: SystemTime,
    path: Option<PathBuf>,
    label: String,
}

impl FileEntry {
    // Flag bit definitions
    const IS_BROKEN_SYM: u8 = 1 << 0;
    const TARGET_IS_DIR: u8 = 1 << 1;

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// Raw byte count from the entry's metadata. For directories this is the
    /// size of the directory inode, not of its contents.
    #[inline]
    pub fn size(&self) -> i64 {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> SystemTime {
        self.modified
    }

    /// Canonical absolute path, `None` for broken symlinks.
    #[inline]
    pub fn absolute_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Size and timestamp column, or the broken symlink marker.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Directory
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.file_type == FileType::Symlink
    }

    #[inline]
    pub fn is_broken_sym(&self) -> bool {
        self.flags & Self::IS_BROKEN_SYM != 0
    }

    /// Whether confirming on this entry should move into it.
    ///
    /// Directories always qualify. Symlinks qualify only when their target
    /// resolved to a directory; broken symlinks never do.
    pub fn is_navigable(&self) -> bool {
        match self.file_type {
            FileType::Directory => true,
            FileType::Symlink => self.flags & Self::TARGET_IS_DIR != 0,
            FileType::File | FileType::Other => false,
        }
    }
}

/// `.` and `..` are never part of a listing.
#[inline]
pub fn is_pseudo_entry(name: &OsStr) -> bool {
    name == "." || name == ".."
}

/// Builds the [FileEntry] for `name` inside `parent_dir`.
///
/// Metadata is read without following symlinks. A symlink whose target cannot
/// be canonicalized becomes a broken symlink entry; any other failure is an
/// error.
pub fn resolve_entry(parent_dir: &Path, name: OsString) -> Result<FileEntry, BrowseError> {
    let entry_path = parent_dir.join(&name);

    let md = fs::symlink_metadata(&entry_path).map_err(|source| BrowseError::Metadata {
        path: entry_path.clone(),
        source,
    })?;
    let modified = md.modified().map_err(|source| BrowseError::Metadata {
        path: entry_path.clone(),
        source,
    })?;

    let file_type = FileType::from_metadata(&md);
    let size = i64::try_from(md.len()).unwrap_or(i64::MAX);
    let mut flags = 0u8;

    let canonical = fs::canonicalize(&entry_path);
    let (path, label) = match resolved_path(&entry_path, file_type, canonical)? {
        Some(resolved) => {
            let target_is_dir = match file_type {
                FileType::Directory => true,
                FileType::Symlink => resolved.is_dir(),
                _ => false,
            };
            if target_is_dir {
                flags |= FileEntry::TARGET_IS_DIR;
            }
            let label = format_display_label(size, file_type == FileType::Directory, modified);
            (Some(resolved), label)
        }
        None => {
            flags |= FileEntry::IS_BROKEN_SYM;
            (None, BROKEN_SYMLINK_LABEL.to_string())
        }
    };

    Ok(FileEntry {
        name: name.into_boxed_os_str(),
        file_type,
        flags,
        size,
        modified,
        path,
        label,
    })
}

/// Interprets the canonicalization result of an entry.
///
/// A symlink that cannot be resolved is broken and yields `None`. For any
/// other kind the failure means the entry vanished or became unreadable
/// between lstat and resolution, which is [BrowseError::Resolve].
fn resolved_path(
    entry_path: &Path,
    file_type: FileType,
    canonical: io::Result<PathBuf>,
) -> Result<Option<PathBuf>, BrowseError> {
    match canonical {
        Ok(resolved) => Ok(Some(resolved)),
        Err(_) if file_type == FileType::Symlink => {
            log::debug!("broken symlink: {}", entry_path.display());
            Ok(None)
        }
        Err(source) => Err(BrowseError::Resolve {
            path: entry_path.to_path_buf(),
            source,
        }),
    }
}

/// Doubles the capacity of `entries` when it is full.
///
/// Uses fallible reservation so an allocation failure surfaces as
/// [BrowseError::Alloc] instead of aborting.
pub fn grow_if_full<T>(entries: &mut Vec<T>) -> Result<(), BrowseError> {
    if entries.len() < entries.capacity() {
        return Ok(());
    }
    let additional = entries.capacity().max(INITIAL_CAPACITY);
    entries
        .try_reserve_exact(additional)
        .map_err(|source| BrowseError::Alloc {
            requested: entries.capacity() + additional,
            source,
        })
}

/// Reads the contents of the provided directory into a vector of [FileEntry].
///
/// The order of the result follows the filesystem enumeration and carries no
/// meaning; callers sort it explicitly.
pub fn browse_dir(path: &Path) -> Result<Vec<FileEntry>, BrowseError> {
    let read = fs::read_dir(path).map_err(|source| BrowseError::OpenDir {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    entries
        .try_reserve_exact(INITIAL_CAPACITY)
        .map_err(|source| BrowseError::Alloc {
            requested: INITIAL_CAPACITY,
            source,
        })?;

    for entry in read {
        let entry = entry.map_err(|source| BrowseError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;

        let name = entry.file_name();
        if is_pseudo_entry(&name) {
            continue;
        }

        grow_if_full(&mut entries)?;
        entries.push(resolve_entry(path, name)?);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn resolve_regular_file() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let file_path = tmp.path().join("hello.txt");
        let mut file = File::create(&file_path)?;
        write!(file, "abc123")?;

        let entry = resolve_entry(tmp.path(), OsString::from("hello.txt"))?;
        assert_eq!(entry.name_str(), "hello.txt");
        assert_eq!(entry.file_type(), FileType::File);
        assert_eq!(entry.size(), 6);
        assert_eq!(entry.absolute_path(), Some(fs::canonicalize(&file_path)?.as_path()));
        assert!(entry.label().starts_with("     6 B  |  "));
        assert!(!entry.is_navigable());
        assert!(!entry.is_broken_sym());
        Ok(())
    }

    #[test]
    fn resolve_directory() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("docs"))?;

        let entry = resolve_entry(tmp.path(), OsString::from("docs"))?;
        assert!(entry.is_dir());
        assert!(entry.is_navigable());
        assert!(entry.label().starts_with("   <DIR>  |  "));
        Ok(())
    }

    #[test]
    fn resolve_missing_entry_is_metadata_error() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let result = resolve_entry(tmp.path(), OsString::from("ghost"));
        assert!(matches!(result, Err(BrowseError::Metadata { .. })));
        Ok(())
    }

    #[test]
    fn unresolvable_non_symlink_is_resolve_error() {
        let path = Path::new("/listing/vanished.txt");
        let gone = || Err(io::Error::from(io::ErrorKind::NotFound));

        let result = resolved_path(path, FileType::File, gone());
        assert!(matches!(result, Err(BrowseError::Resolve { ref path, .. }) if path.ends_with("vanished.txt")));

        let result = resolved_path(path, FileType::Directory, gone());
        assert!(matches!(result, Err(BrowseError::Resolve { .. })));

        // the same failure on a symlink only marks it broken
        assert!(matches!(resolved_path(path, FileType::Symlink, gone()), Ok(None)));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_broken_symlink() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        std::os::unix::fs::symlink(tmp.path().join("nowhere"), tmp.path().join("dangling"))?;

        let entry = resolve_entry(tmp.path(), OsString::from("dangling"))?;
        assert!(entry.is_symlink());
        assert!(entry.is_broken_sym());
        assert!(entry.absolute_path().is_none());
        assert_eq!(entry.label(), BROKEN_SYMLINK_LABEL);
        assert!(!entry.is_navigable());
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn symlink_navigability_follows_target() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        fs::create_dir(tmp.path().join("real_dir"))?;
        File::create(tmp.path().join("real_file"))?;
        std::os::unix::fs::symlink(tmp.path().join("real_dir"), tmp.path().join("to_dir"))?;
        std::os::unix::fs::symlink(tmp.path().join("real_file"), tmp.path().join("to_file"))?;

        let to_dir = resolve_entry(tmp.path(), OsString::from("to_dir"))?;
        assert!(to_dir.is_symlink());
        assert!(to_dir.is_navigable());
        assert_eq!(
            to_dir.absolute_path(),
            Some(fs::canonicalize(tmp.path().join("real_dir"))?.as_path())
        );

        let to_file = resolve_entry(tmp.path(), OsString::from("to_file"))?;
        assert!(to_file.is_symlink());
        assert!(!to_file.is_navigable());
        Ok(())
    }

    #[test]
    fn grow_doubles_full_storage() -> Result<(), Box<dyn std::error::Error>> {
        let mut storage: Vec<u32> = Vec::with_capacity(4);
        while storage.len() < storage.capacity() {
            storage.push(0);
        }
        let before = storage.capacity();

        grow_if_full(&mut storage)?;
        assert!(storage.capacity() >= before * 2);

        let after = storage.capacity();
        storage.push(1);
        grow_if_full(&mut storage)?;
        assert_eq!(storage.capacity(), after, "not full, should not grow");
        Ok(())
    }

    #[test]
    fn browse_matches_filesystem_snapshot() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let count = INITIAL_CAPACITY * 2 + 7;
        let mut expected = HashSet::new();
        for i in 0..count {
            let name = format!("file_{i:04}.txt");
            File::create(tmp.path().join(&name))?;
            expected.insert(name);
        }
        fs::create_dir(tmp.path().join("nested"))?;
        expected.insert("nested".to_string());

        let entries = browse_dir(tmp.path())?;
        let names: HashSet<String> = entries.iter().map(|e| e.name_str().into_owned()).collect();

        assert_eq!(entries.len(), expected.len(), "duplicates or omissions");
        assert_eq!(names, expected);
        assert!(!names.contains(".") && !names.contains(".."));
        Ok(())
    }

    #[test]
    fn browse_empty_dir() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        assert!(browse_dir(tmp.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn browse_nonexistent() {
        let result = browse_dir(Path::new("/path/does/not/exist"));
        assert!(matches!(result, Err(BrowseError::OpenDir { .. })));
    }

    #[test]
    fn browse_regular_file_fails() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = TempDir::new()?;
        let file = tmp.path().join("plain.txt");
        File::create(&file)?;
        assert!(matches!(browse_dir(&file), Err(BrowseError::OpenDir { .. })));
        Ok(())
    }

    #[test]
    fn pseudo_entries() {
        assert!(is_pseudo_entry(OsStr::new(".")));
        assert!(is_pseudo_entry(OsStr::new("..")));
        assert!(!is_pseudo_entry(OsStr::new("...")));
        assert!(!is_pseudo_entry(OsStr::new(".hidden")));
    }
}
