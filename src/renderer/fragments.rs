//! Formatting functions for every fragment type of a beamer document.
//!
//! Frame functions assume a non-empty note; skipping empty notes is left to
//! the caller.

use crate::error::Result;
use crate::renderer::components::*;
use crate::renderer::templates::{template_lines, TemplateSource};
use crate::renderer::traits::*;

/// Lines of the front template, verbatim.
pub fn preamble<T: TemplateSource>(templates: &T) -> Result<Vec<String>> {
    Ok(template_lines(&templates.front()?))
}

/// Lines of the back template, verbatim.
pub fn postamble<T: TemplateSource>(templates: &T) -> Result<Vec<String>> {
    Ok(template_lines(&templates.back()?))
}

pub fn section(title: &str) -> Vec<String> {
    Heading {
        level: HeadingLevel::Section,
        title,
    }
    .render(&RenderContext::new())
}

pub fn subsection(title: &str) -> Vec<String> {
    Heading {
        level: HeadingLevel::Subsection,
        title,
    }
    .render(&RenderContext::new())
}

pub fn one_column_frame(title: &str, note: &str) -> Vec<String> {
    frame(title, note, FrameLayout::OneColumn)
}

/// Bullets go in a 60% column; the 30% column is always left empty.
pub fn two_column_frame(title: &str, note: &str) -> Vec<String> {
    frame(title, note, FrameLayout::TwoColumn)
}

pub fn frame(title: &str, note: &str, layout: FrameLayout) -> Vec<String> {
    Frame::new(title, note, layout).render(&RenderContext::new())
}
