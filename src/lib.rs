//! # autobeamer
//!
//! Turns a hierarchical outline into LaTeX-beamer source. Layer-1 nodes become
//! sections, layer-2 nodes optionally become subsections, and every node with
//! a note becomes a frame whose bullets are the note's lines. The document is
//! wrapped in a front and back template copied verbatim.

pub mod config;
pub mod error;
pub mod outline;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use outline::*;
pub use renderer::*;

/// Renders `root` with the given switches and templates into document text.
pub fn render_to_string<T: TemplateSource>(
    root: &OutlineNode,
    config: RenderConfig,
    templates: T,
) -> Result<String> {
    let renderer = BeamerRenderer::new(config, templates);
    Ok(renderer.render_document(root)?.to_text())
}
