//! The listing pipeline: scan, sort, render. Once per directory.
//!
//! [RenderConfig] picks a [RenderMode]; [Lister] then runs the same
//! scanner → sorter → renderer pipeline for every directory argument, and in recursive mode
//! walks into subdirectories depth-first in sorted order.
//!
//! Listing text goes to `out`, one-line reports to `err`. Neither a directory that fails to
//! open nor an entry that fails to stat stops the run; only a failing `out`/`err` does.

use crate::core::classify::{DecorationClass, Decorator, classify};
use crate::core::errors::{self, ListError};
use crate::core::fm::{DirectoryEntry, EntryBatch, EntryStat, scan_dir};
use crate::core::formatter::LongRecord;
use crate::core::identity::{IdentityResolver, group_or_id, owner_or_id};
use crate::core::layout::{Cell, display_width, render_columns};
use crate::core::sort::sort_entries;
use crate::utils::DEFAULT_MAX_DEPTH;

use std::collections::HashSet;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Prefix for every report written to the error stream.
pub const PROGRAM_NAME: &str = "lst";

/// Display options for one listing pass. Built once from flags and config, read-only after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub show_hidden: bool,
    pub long_format: bool,
    pub recursive: bool,
    pub colorize: bool,
    pub human_sizes: bool,
    /// Deepest level below a root that `recursive` descends to.
    pub max_depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            show_hidden: false,
            long_format: false,
            recursive: false,
            colorize: false,
            human_sizes: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// How each directory is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Columns,
    Long,
    Recursive,
}

impl RenderConfig {
    /// Recursive wins over long format.
    pub fn mode(&self) -> RenderMode {
        if self.recursive {
            RenderMode::Recursive
        } else if self.long_format {
            RenderMode::Long
        } else {
            RenderMode::Columns
        }
    }
}

/// Counters for one [Lister::list_paths] run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListSummary {
    /// Directories scanned successfully.
    pub listed: usize,
    /// Directories that could not be opened.
    pub failed: usize,
    /// Entries left out because their metadata could not be read, plus directory reads
    /// cut short partway.
    pub skipped_entries: usize,
}

/// Output streams plus running state shared across a whole run.
struct Output<'w, W: Write, E: Write> {
    out: &'w mut W,
    err: &'w mut E,
    summary: ListSummary,
    blocks: usize,
}

impl<W: Write, E: Write> Output<'_, W, E> {
    /// Writes a one-line report. `out` is flushed first so the report lands after the
    /// listing text it belongs to when both streams share a terminal or pipe.
    fn report(&mut self, error: &ListError) -> io::Result<()> {
        tracing::debug!(?error, "reported");
        self.out.flush()?;
        writeln!(self.err, "{}: {}", PROGRAM_NAME, error)
    }

    /// Header for a recursive block, with a blank line between blocks.
    fn block_header(&mut self, dir: &Path) -> io::Result<()> {
        if self.blocks > 0 {
            writeln!(self.out)?;
        }
        self.blocks += 1;
        writeln!(self.out, "{}:", dir.display())
    }
}

/// Drives the listing pipeline for a set of directories.
pub struct Lister<'a> {
    config: &'a RenderConfig,
    decorator: &'a Decorator,
    identity: &'a dyn IdentityResolver,
    display_width: usize,
}

impl<'a> Lister<'a> {
    pub fn new(
        config: &'a RenderConfig,
        decorator: &'a Decorator,
        identity: &'a dyn IdentityResolver,
        display_width: usize,
    ) -> Self {
        Lister {
            config,
            decorator,
            identity,
            display_width,
        }
    }

    /// Lists every path in order.
    ///
    /// With more than one path (outside recursive mode) each listing is preceded by a
    /// `<path>:` header and followed by a blank line.
    ///
    /// Recursive mode prints its own `<path>:` header for every directory, arguments
    /// included, and separates consecutive blocks with a single blank line. There is no
    /// blank line after the last block, and none is added per argument, so several
    /// arguments read as one continuous run of blocks.
    ///
    /// # Returns
    /// A [ListSummary], or [ListError::Io] carrying the first write error on `out`/`err`.
    pub fn list_paths<W: Write, E: Write>(
        &self,
        paths: &[PathBuf],
        out: &mut W,
        err: &mut E,
    ) -> errors::Result<ListSummary> {
        let mut output = Output {
            out,
            err,
            summary: ListSummary::default(),
            blocks: 0,
        };

        let mode = self.config.mode();
        let with_headers = paths.len() > 1;

        for path in paths {
            match mode {
                RenderMode::Recursive => {
                    let mut visited = HashSet::new();
                    if let Ok(stat) = EntryStat::stat(path)
                        && let Some(id) = stat.file_id()
                    {
                        visited.insert(id);
                    }
                    self.walk(path, 0, &mut visited, &mut output)?;
                }
                RenderMode::Columns | RenderMode::Long => {
                    if with_headers {
                        writeln!(output.out, "{}:", path.display())?;
                    }
                    if let Some(batch) = self.scan(path, &mut output)? {
                        if mode == RenderMode::Long {
                            self.render_long(&batch, &mut output)?;
                        } else {
                            self.render_grid(&batch, &mut output)?;
                        }
                    }
                    if with_headers {
                        writeln!(output.out)?;
                    }
                }
            }
        }

        output.out.flush()?;
        Ok(output.summary)
    }

    /// Scans and sorts one directory, reporting whatever went wrong along the way.
    fn scan<W: Write, E: Write>(
        &self,
        dir: &Path,
        output: &mut Output<'_, W, E>,
    ) -> io::Result<Option<EntryBatch>> {
        let _span = tracing::debug_span!("scan", dir = %dir.display()).entered();

        match scan_dir(dir, self.config.show_hidden) {
            Ok(mut batch) => {
                for skipped in batch.take_skipped() {
                    output.summary.skipped_entries += 1;
                    output.report(&skipped)?;
                }
                sort_entries(batch.entries_mut());
                output.summary.listed += 1;
                tracing::debug!(entries = batch.len(), "scanned");
                Ok(Some(batch))
            }
            Err(e) => {
                output.summary.failed += 1;
                output.report(&e)?;
                Ok(None)
            }
        }
    }

    /// Decorated name, skipping the classification lookup entirely when colors are off.
    fn decorated_name(&self, entry: &DirectoryEntry) -> String {
        let name = entry.name_str();
        if self.decorator.is_enabled() {
            self.decorator.decorate(&name, classify(entry))
        } else {
            name.into_owned()
        }
    }

    fn render_grid<W: Write, E: Write>(
        &self,
        batch: &EntryBatch,
        output: &mut Output<'_, W, E>,
    ) -> io::Result<()> {
        let cells: Vec<Cell> = batch
            .entries()
            .iter()
            .map(|e| Cell::new(self.decorated_name(e), display_width(&e.name_str())))
            .collect();

        for line in render_columns(&cells, self.display_width) {
            writeln!(output.out, "{}", line)?;
        }
        Ok(())
    }

    fn render_long<W: Write, E: Write>(
        &self,
        batch: &EntryBatch,
        output: &mut Output<'_, W, E>,
    ) -> io::Result<()> {
        for entry in batch.entries() {
            // Permissions and sizes describe the link target, like stat(2)
            let stat = match EntryStat::stat(entry.path()) {
                Ok(stat) => stat,
                Err(source) => {
                    output.summary.skipped_entries += 1;
                    output.report(&ListError::EntryStatFailure {
                        path: entry.path().to_path_buf(),
                        source,
                    })?;
                    continue;
                }
            };

            let record = LongRecord::new(
                &stat,
                owner_or_id(self.identity, stat.uid()),
                group_or_id(self.identity, stat.gid()),
                self.config.human_sizes,
            );
            writeln!(output.out, "{}", record.render(&self.decorated_name(entry)))?;
        }
        Ok(())
    }

    /// Lists `dir`, then every subdirectory classed as [DecorationClass::Directory],
    /// depth-first in sorted order.
    ///
    /// Symlinks are classed as symlinks and therefore never entered. The `visited` set of
    /// (device, inode) pairs and the depth limit stop anything that still loops.
    fn walk<W: Write, E: Write>(
        &self,
        dir: &Path,
        depth: usize,
        visited: &mut HashSet<(u64, u64)>,
        output: &mut Output<'_, W, E>,
    ) -> io::Result<()> {
        output.block_header(dir)?;

        let Some(batch) = self.scan(dir, output)? else {
            return Ok(());
        };

        let mut children = Vec::new();
        for entry in batch.entries() {
            let class = classify(entry);
            writeln!(
                output.out,
                "{}",
                self.decorator.decorate(&entry.name_str(), class)
            )?;
            if class == DecorationClass::Directory {
                children.push(entry);
            }
        }

        for child in children {
            if depth + 1 > self.config.max_depth {
                output.report(&ListError::DepthLimit {
                    path: child.path().to_path_buf(),
                    limit: self.config.max_depth,
                })?;
                continue;
            }
            if let Some(id) = child.stat().file_id()
                && !visited.insert(id)
            {
                output.report(&ListError::AlreadyVisited {
                    path: child.path().to_path_buf(),
                })?;
                continue;
            }
            self.walk(child.path(), depth + 1, visited, output)?;
        }
        Ok(())
    }
}
