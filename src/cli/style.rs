//! CLI styling utilities
//!
//! Provides semantic styling via the [`Stylize`] trait with automatic
//! terminal color support detection (delegated to `owo-colors`).
//!
//! Author names and selected forms are cyan, timestamps and locations are
//! dimmed, headers are bold. Spam entries carry a yellow [`spam_tag`] and
//! the form the endpoint would read is marked with a green [`selected`].

use std::fmt::{self, Display};

use owo_colors::{OwoColorize, Stream, Style};

const ACCENT: Style = Style::new().cyan();
const SELECTED: Style = Style::new().green();
const SPAM: Style = Style::new().yellow();
const MUTED: Style = Style::new().dimmed();
const EMPHASIS: Style = Style::new().bold();

/// A value with semantic styling applied.
///
/// Implements [`Display`] to render with ANSI codes when supported.
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, style: Style, stream: Stream) -> Self {
        Self {
            value,
            style,
            stream,
        }
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // owo-colors handles NO_COLOR, CLICOLOR, CLICOLOR_FORCE, TTY detection.
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.stream, |v| v.style(self.style))
        )
    }
}

/// Extension trait for semantic terminal styling.
///
/// Automatically implemented for all [`Display`] types.
pub trait Stylize: Display {
    /// Accent color (cyan) for primary information.
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, ACCENT, Stream::Stdout)
    }

    /// Muted style (dim) for secondary information.
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, MUTED, Stream::Stdout)
    }

    /// Emphasis style (bold) for headers.
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, EMPHASIS, Stream::Stdout)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Marker for the form the guestbook reads from
pub const SELECTED_MARK: &str = "✓";

/// Marker for other forms and guestbook entries
pub const ENTRY_MARK: &str = "○";

/// Green marker for the resolved guestbook form.
#[inline]
pub const fn selected() -> Styled<&'static str> {
    Styled::new(SELECTED_MARK, SELECTED, Stream::Stdout)
}

/// Dimmed marker for list entries.
#[inline]
pub const fn entry() -> Styled<&'static str> {
    Styled::new(ENTRY_MARK, MUTED, Stream::Stdout)
}

/// Yellow `[spam]` tag shown next to spam-state entries.
#[inline]
pub const fn spam_tag() -> Styled<&'static str> {
    Styled::new("[spam]", SPAM, Stream::Stdout)
}
