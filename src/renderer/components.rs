use crate::outline::bullet_lines;
use crate::renderer::traits::*;

/// Sectioning command level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    Section,
    Subsection,
}

impl HeadingLevel {
    pub fn command(&self) -> &'static str {
        match self {
            HeadingLevel::Section => "section",
            HeadingLevel::Subsection => "subsection",
        }
    }
}

/// A `\section{..}` or `\subsection{..}` line followed by a blank line.
#[derive(Debug, Clone)]
pub struct Heading<'a> {
    pub level: HeadingLevel,
    pub title: &'a str,
}

/// An `itemize` list built from a note.
#[derive(Debug, Clone)]
pub struct BulletList<'a> {
    pub items: Vec<&'a str>,
}

impl<'a> BulletList<'a> {
    pub fn from_note(note: &'a str) -> Self {
        Self {
            items: bullet_lines(note),
        }
    }
}

/// One `column` environment of a two-column frame.
#[derive(Debug, Clone)]
pub struct Column<'a> {
    /// Fraction of `\textwidth`, written verbatim.
    pub width: &'static str,
    /// `None` renders a column holding a single indentation-only line.
    pub content: Option<BulletList<'a>>,
}

/// Width of the bullet column in a two-column frame.
pub const PRIMARY_COLUMN_WIDTH: &str = "0.6";
/// Width of the reserved, always empty column in a two-column frame.
pub const RESERVED_COLUMN_WIDTH: &str = "0.3";

/// A complete beamer frame.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub title: &'a str,
    pub note: &'a str,
    pub layout: FrameLayout,
}

impl<'a> Frame<'a> {
    pub fn new(title: &'a str, note: &'a str, layout: FrameLayout) -> Self {
        Self {
            title,
            note,
            layout,
        }
    }

    pub fn columns(&self) -> [Column<'a>; 2] {
        [
            Column {
                width: PRIMARY_COLUMN_WIDTH,
                content: Some(BulletList::from_note(self.note)),
            },
            Column {
                width: RESERVED_COLUMN_WIDTH,
                content: None,
            },
        ]
    }
}

/// Helper for LaTeX environment delimiters
pub struct EnvironmentRenderer;

impl EnvironmentRenderer {
    pub fn begin(&self, name: &str, argument: Option<&str>, context: &RenderContext) -> String {
        match argument {
            Some(arg) => format!("{}\\begin{{{}}}{{{}}}\n", context.indent(), name, arg),
            None => format!("{}\\begin{{{}}}\n", context.indent(), name),
        }
    }

    pub fn end(&self, name: &str, context: &RenderContext) -> String {
        format!("{}\\end{{{}}}\n", context.indent(), name)
    }
}
