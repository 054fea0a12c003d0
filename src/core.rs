//! Core listing logic for lista.
//!
//! This module contains the engine behind `lst`:
//! - [fm]: directory scanning and the entry metadata snapshot (see [scan_dir], [DirectoryEntry]).
//! - [sort]: deterministic, case-insensitive name ordering.
//! - [formatter]: long-format records (permissions, owner, group, size, timestamp).
//! - [layout]: the column grid used by the default view.
//! - [classify]: entry classification and color decoration.
//! - [identity]: uid/gid to name resolution.
//! - [terminal]: display width and tty detection.
//! - [walker]: the rendering pipeline and the recursive walker ([Lister]).
//! - [errors]: the [ListError] kinds.
//!
//! Most callers only need [Lister], [RenderConfig] and a [Decorator].

pub mod classify;
pub mod errors;
pub mod fm;
pub mod formatter;
pub mod identity;
pub mod layout;
pub mod sort;
pub mod terminal;
pub mod walker;

pub use classify::{DecorationClass, Decorator, classify};
pub use errors::ListError;
pub use fm::{DirectoryEntry, EntryBatch, EntryKind, EntryStat, scan_dir};
pub use formatter::{LongRecord, format_permissions, format_timestamp};
pub use identity::{IdentityResolver, SystemIdentity};
pub use layout::{Cell, FALLBACK_WIDTH, LayoutPlan, effective_width, render_columns};
pub use sort::{compare_names, sort_entries};
pub use walker::{ListSummary, Lister, RenderConfig, RenderMode};
