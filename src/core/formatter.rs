//! Long-format metadata rendering for lista.
//!
//! Turns an [EntryStat] plus resolved owner/group names into the fixed-layout record
//! printed by `lst -l`:
//!
//! `drwxr-xr-x   2 alice    staff        4096 Mar  7 09:41 src`

use crate::core::fm::EntryStat;

use chrono::{DateTime, Local};
use humansize::{DECIMAL, format_size};

use std::time::SystemTime;

/// chrono pattern for the `Mon DD HH:MM` timestamp column.
const TIME_FORMAT: &str = "%b %e %H:%M";
/// Shown in place of the timestamp when the platform reports no mtime.
const UNKNOWN_TIME: &str = "??? ?? ??:??";

/// Formats the permission bits in the classic 10 character form, e.g. `drwxr-x---`.
///
/// The first character is `d` for directories and `-` for everything else,
/// followed by the `rwx` triplets for owner, group and other.
pub fn format_permissions(mode: u32, is_dir: bool) -> String {
    let first = if is_dir { 'd' } else { '-' };
    let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1u32 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1u32 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1u32 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Formats a modification time as local wall-clock `Mon DD HH:MM`.
pub fn format_timestamp(modified: Option<SystemTime>) -> String {
    modified
        .map(|mtime| format_local_time(&DateTime::<Local>::from(mtime)))
        .unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

/// Minute-granularity rendering of an already converted timestamp.
pub fn format_local_time(dt: &DateTime<Local>) -> String {
    dt.format(TIME_FORMAT).to_string()
}

/// Formats a size in bytes, or in decimal units (`4.1 kB`) when `human` is set.
pub fn format_file_size(size: u64, human: bool) -> String {
    if human {
        format_size(size, DECIMAL)
    } else {
        size.to_string()
    }
}

/// The text columns of one long-format record, already resolved.
///
/// Kept separate from the filesystem so the layout can be checked with fixed values.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    pub permissions: String,
    pub links: u64,
    pub owner: String,
    pub group: String,
    pub size: String,
    pub timestamp: String,
}

impl LongRecord {
    /// Builds the record for a followed (`stat`) snapshot.
    pub fn new(stat: &EntryStat, owner: String, group: String, human_sizes: bool) -> Self {
        LongRecord {
            permissions: format_permissions(stat.mode(), stat.is_dir()),
            links: stat.nlink(),
            owner,
            group,
            size: format_file_size(stat.size(), human_sizes),
            timestamp: format_timestamp(stat.modified()),
        }
    }

    /// Renders the record followed by the (possibly decorated) name.
    pub fn render(&self, decorated_name: &str) -> String {
        format!(
            "{} {:>3} {:<8} {:<8} {:>8} {} {}",
            self.permissions,
            self.links,
            self.owner,
            self.group,
            self.size,
            self.timestamp,
            decorated_name
        )
    }
}
