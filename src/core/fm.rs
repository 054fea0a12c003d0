//! Directory scanning for lista.
//!
//! Provides the [DirectoryEntry] struct which is used throughout lista,
//! the [EntryStat] metadata snapshot, and [scan_dir] which produces an [EntryBatch]
//! for one directory with the hidden-entry filter applied.

use crate::core::errors::{self, ListError};

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Kind of a filesystem entry as seen by `lstat`/`stat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Other,
}

impl EntryKind {
    pub fn from_file_type(ft: fs::FileType) -> Self {
        if ft.is_symlink() {
            EntryKind::Symlink
        } else if ft.is_dir() {
            EntryKind::Directory
        } else if ft.is_file() {
            EntryKind::Regular
        } else {
            EntryKind::Other
        }
    }
}

/// Snapshot of the metadata lista cares about for a single entry.
/// Immutable once read.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryStat {
    kind: EntryKind,
    mode: u32,
    nlink: u64,
    uid: u32,
    gid: u32,
    size: u64,
    modified: Option<SystemTime>,
    dev: u64,
    ino: u64,
}

impl EntryStat {
    /// Used to detect any execute bit (owner, group or other).
    pub const EXEC_FLAG: u32 = 0o111;

    pub fn from_metadata(md: &Metadata) -> Self {
        let kind = EntryKind::from_file_type(md.file_type());

        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            EntryStat {
                kind,
                mode: md.mode(),
                nlink: md.nlink(),
                uid: md.uid(),
                gid: md.gid(),
                size: md.size(),
                modified: md.modified().ok(),
                dev: md.dev(),
                ino: md.ino(),
            }
        }
        #[cfg(not(unix))]
        {
            // No permission bits here, so synthesize something close to what a unix box would show.
            let mut mode = if md.permissions().readonly() {
                0o444
            } else {
                0o644
            };
            if kind == EntryKind::Directory {
                mode |= Self::EXEC_FLAG;
            }
            EntryStat {
                kind,
                mode,
                nlink: 1,
                uid: 0,
                gid: 0,
                size: md.len(),
                modified: md.modified().ok(),
                dev: 0,
                ino: 0,
            }
        }
    }

    /// Metadata of `path`, following symbolic links.
    pub fn stat(path: &Path) -> io::Result<Self> {
        fs::metadata(path).map(|md| Self::from_metadata(&md))
    }

    /// Metadata of `path` itself, without following a final symbolic link.
    pub fn lstat(path: &Path) -> io::Result<Self> {
        fs::symlink_metadata(path).map(|md| Self::from_metadata(&md))
    }

    // Accessors

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn mode(&self) -> u32 {
        self.mode
    }

    #[inline]
    pub fn nlink(&self) -> u64 {
        self.nlink
    }

    #[inline]
    pub fn uid(&self) -> u32 {
        self.uid
    }

    #[inline]
    pub fn gid(&self) -> u32 {
        self.gid
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Device and inode pair identifying the physical object.
    /// `None` on platforms without inode numbers.
    #[inline]
    pub fn file_id(&self) -> Option<(u64, u64)> {
        cfg!(unix).then_some((self.dev, self.ino))
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    #[inline]
    pub fn is_executable(&self) -> bool {
        self.mode & Self::EXEC_FLAG != 0
    }
}

/// Represents a single entry in a directory listing.
/// Holds the name, the full path and the unresolved (`lstat`) metadata.
/// Created and populated by the [scan_dir] function.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    name: Box<OsStr>,
    path: PathBuf,
    stat: EntryStat,
}

impl DirectoryEntry {
    pub fn new(name: &OsStr, path: PathBuf, stat: EntryStat) -> Self {
        DirectoryEntry {
            name: name.into(),
            path,
            stat,
        }
    }

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
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn stat(&self) -> &EntryStat {
        &self.stat
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.stat.kind
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        is_hidden(&self.name)
    }
}

/// All entries produced by one scan of one directory.
///
/// Entries whose metadata could not be read are left out and their errors collected in
/// `skipped`, so the caller can report them without losing the rest of the batch.
#[derive(Debug, Default)]
pub struct EntryBatch {
    entries: Vec<DirectoryEntry>,
    skipped: Vec<ListError>,
}

impl EntryBatch {
    #[inline]
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    #[inline]
    pub fn entries_mut(&mut self) -> &mut [DirectoryEntry] {
        &mut self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns the errors collected for skipped entries.
    pub fn take_skipped(&mut self) -> Vec<ListError> {
        std::mem::take(&mut self.skipped)
    }
}

/// Hidden entries are the ones whose name begins with a dot.
#[inline]
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

/// The `.` and `..` pseudo-entries, which are never listed.
#[inline]
pub fn is_pseudo_entry(name: &OsStr) -> bool {
    name == "." || name == ".."
}

/// Reads the contents of the provided directory into an [EntryBatch].
///
/// Names starting with `.` are dropped unless `show_hidden` is set; `.` and `..` are always dropped.
/// The batch is returned in filesystem order, sorting is left to [crate::core::sort_entries].
///
/// If reading stops partway, the entries read so far are kept and the failure is recorded
/// in the batch as [ListError::ReadInterrupted].
///
/// # Returns
/// The batch, or [ListError::DirectoryUnreadable] if the directory could not be opened.
pub fn scan_dir(path: &Path, show_hidden: bool) -> errors::Result<EntryBatch> {
    let read_dir = fs::read_dir(path).map_err(|source| ListError::DirectoryUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    collect_entries(path, read_dir, show_hidden)
}

/// One raw item of a directory read. [fs::DirEntry] outside of tests.
trait RawEntry {
    fn file_name(&self) -> OsString;
    fn path(&self) -> PathBuf;
    fn metadata(&self) -> io::Result<Metadata>;
}

impl RawEntry for fs::DirEntry {
    fn file_name(&self) -> OsString {
        fs::DirEntry::file_name(self)
    }

    fn path(&self) -> PathBuf {
        fs::DirEntry::path(self)
    }

    // Does not traverse a final symlink, same as lstat
    fn metadata(&self) -> io::Result<Metadata> {
        fs::DirEntry::metadata(self)
    }
}

fn collect_entries<I, D>(dir: &Path, entries: I, show_hidden: bool) -> errors::Result<EntryBatch>
where
    I: IntoIterator<Item = io::Result<D>>,
    D: RawEntry,
{
    let mut batch = EntryBatch::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                batch.skipped.push(ListError::ReadInterrupted {
                    path: dir.to_path_buf(),
                    source,
                });
                break;
            }
        };

        let name = entry.file_name();
        if is_pseudo_entry(&name) || (!show_hidden && is_hidden(&name)) {
            continue;
        }

        let entry_path = entry.path();
        let stat = match entry.metadata() {
            Ok(md) => EntryStat::from_metadata(&md),
            Err(source) => {
                batch.skipped.push(ListError::EntryStatFailure {
                    path: entry_path,
                    source,
                });
                continue;
            }
        };

        // Growing the batch must never abort the process; a failed allocation fails the scan.
        batch.entries.try_reserve(1).map_err(|e| ListError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::OutOfMemory, e),
        })?;
        batch
            .entries
            .push(DirectoryEntry::new(&name, entry_path, stat));
    }

    Ok(batch)
}
