//! Entry classification and name decoration.
//!
//! [classify] maps an entry to a [DecorationClass] using its unresolved metadata.
//! [Decorator] turns a name plus its class into display text. With colors disabled it is the
//! identity function, so classification never leaks into sort order or filtering.

use crate::config::Theme;
use crate::core::fm::{DirectoryEntry, EntryKind, EntryStat};

use crossterm::style::{Attribute, Color, ContentStyle, Stylize};

/// Display class of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecorationClass {
    Directory,
    Symlink,
    Executable,
    Plain,
    /// The entry could not be looked up (broken symlink, vanished entry).
    Error,
}

/// Classifies an entry from its `lstat` snapshot.
///
/// A symlink stays a symlink regardless of what it points at; it is only classed as
/// [DecorationClass::Error] when its target cannot be resolved.
pub fn classify(entry: &DirectoryEntry) -> DecorationClass {
    match entry.kind() {
        EntryKind::Symlink => match EntryStat::stat(entry.path()) {
            Ok(_) => DecorationClass::Symlink,
            Err(_) => DecorationClass::Error,
        },
        _ => classify_stat(entry.stat()),
    }
}

/// Classification for an already fetched snapshot, without touching the filesystem.
pub fn classify_stat(stat: &EntryStat) -> DecorationClass {
    match stat.kind() {
        EntryKind::Directory => DecorationClass::Directory,
        EntryKind::Symlink => DecorationClass::Symlink,
        EntryKind::Regular if stat.is_executable() => DecorationClass::Executable,
        EntryKind::Regular | EntryKind::Other => DecorationClass::Plain,
    }
}

/// Decoration sink: colors names by class, or leaves them untouched.
#[derive(Debug, Clone)]
pub struct Decorator {
    styles: Option<ClassStyles>,
}

#[derive(Debug, Clone)]
struct ClassStyles {
    directory: ContentStyle,
    symlink: ContentStyle,
    executable: ContentStyle,
    plain: ContentStyle,
    error: ContentStyle,
}

impl ClassStyles {
    fn from_theme(theme: &Theme) -> Self {
        let mut directory = fg(theme.directory());
        if theme.bold_directories() {
            directory = directory.attribute(Attribute::Bold);
        }
        ClassStyles {
            directory,
            symlink: fg(theme.symlink()),
            executable: fg(theme.executable()).attribute(Attribute::Bold),
            plain: fg(theme.plain()),
            error: fg(theme.error()),
        }
    }

    fn for_class(&self, class: DecorationClass) -> &ContentStyle {
        match class {
            DecorationClass::Directory => &self.directory,
            DecorationClass::Symlink => &self.symlink,
            DecorationClass::Executable => &self.executable,
            DecorationClass::Plain => &self.plain,
            DecorationClass::Error => &self.error,
        }
    }
}

/// "default"/reset in the theme means no color at all, not an explicit reset code.
fn fg(color: Color) -> ContentStyle {
    if color == Color::Reset {
        ContentStyle::new()
    } else {
        ContentStyle::new().with(color)
    }
}

impl Decorator {
    /// Decorator that colors names with the given theme.
    pub fn colored(theme: &Theme) -> Self {
        Decorator {
            styles: Some(ClassStyles::from_theme(theme)),
        }
    }

    /// Decorator that returns names unchanged.
    pub fn plain() -> Self {
        Decorator { styles: None }
    }

    pub fn new(colorize: bool, theme: &Theme) -> Self {
        if colorize {
            Self::colored(theme)
        } else {
            Self::plain()
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.styles.is_some()
    }

    /// Decorates `text` for `class`.
    ///
    /// The visible width of the result always equals the width of `text`;
    /// only escape sequences are added.
    pub fn decorate(&self, text: &str, class: DecorationClass) -> String {
        match &self.styles {
            Some(styles) => {
                let style = styles.for_class(class);
                if *style == ContentStyle::new() {
                    text.to_string()
                } else {
                    style.apply(text).to_string()
                }
            }
            None => text.to_string(),
        }
    }
}
