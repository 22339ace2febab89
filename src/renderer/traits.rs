/// Width of one indentation level in generated LaTeX.
pub const INDENT_UNIT: &str = "    ";

/// Indentation context for rendering operations
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext {
    pub depth: usize,
}

impl RenderContext {
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self { depth }
    }

    pub fn nested(&self) -> Self {
        self.with_depth(self.depth + 1)
    }

    pub fn indent(&self) -> String {
        INDENT_UNIT.repeat(self.depth)
    }
}

/// Per-run rendering switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderConfig {
    /// Emit `\subsection` markup for layer-2 nodes.
    pub two_level_sections: bool,
    /// Use the two-column frame body instead of the one-column one.
    pub two_column_frames: bool,
}

impl RenderConfig {
    pub fn new(two_level_sections: bool, two_column_frames: bool) -> Self {
        Self {
            two_level_sections,
            two_column_frames,
        }
    }

    pub fn frame_layout(&self) -> FrameLayout {
        if self.two_column_frames {
            FrameLayout::TwoColumn
        } else {
            FrameLayout::OneColumn
        }
    }
}

/// Frame body layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameLayout {
    OneColumn,
    /// Bullets on the left, an empty column reserved for images on the right.
    TwoColumn,
}

/// Core rendering trait for beamer building blocks.
///
/// Each call returns the fragments to append, in order.
pub trait Render {
    fn render(&self, context: &RenderContext) -> Vec<String>;
}
