//! Error kinds raised while listing directories.
//!
//! [ListError::Io] is the only kind that ends a run: it is what [crate::core::Lister::list_paths]
//! returns when the output or error stream itself breaks. Every other kind is reported on the
//! error stream and the listing carries on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

#[derive(Debug, Error)]
pub enum ListError {
    /// The directory could not be opened.
    #[error("cannot open directory '{}': {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the directory failed after it was opened. Entries read before the failure are kept.
    #[error("reading directory '{}' failed: {source}", path.display())]
    ReadInterrupted {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Metadata for a single entry could not be fetched (deleted mid-scan, broken link, ...).
    #[error("cannot access '{}': {source}", path.display())]
    EntryStatFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A directory already listed during this recursive walk was reached again.
    #[error("skipping '{}': directory already listed", path.display())]
    AlreadyVisited { path: PathBuf },

    /// Recursion stopped at the configured depth.
    #[error("skipping '{}': deeper than {limit} levels", path.display())]
    DepthLimit { path: PathBuf, limit: usize },

    /// A uid or gid has no name. Recovered locally by printing the numeric id.
    #[error("no name found for id {id}")]
    IdentityResolutionFailure { id: u32 },

    /// Writing to the output or error stream failed.
    #[error("write error: {0}")]
    Io(#[from] io::Error),
}
