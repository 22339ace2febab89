use tracing::{debug, instrument};

use crate::error::Result;
use crate::outline::types::{check_layer, OutlineNode};
use crate::renderer::buffer::TexBuffer;
use crate::renderer::fragments;
use crate::renderer::templates::TemplateSource;
use crate::renderer::traits::*;

/// Walks an outline tree and emits beamer markup for every node.
pub struct BeamerRenderer<T> {
    config: RenderConfig,
    templates: T,
}

impl<T: TemplateSource> BeamerRenderer<T> {
    pub fn new(config: RenderConfig, templates: T) -> Self {
        Self { config, templates }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders a whole document: preamble, every node in pre-order, postamble.
    #[instrument(level = "debug", skip_all, fields(config = ?self.config))]
    pub fn render_document(&self, root: &OutlineNode) -> Result<TexBuffer> {
        check_layer(root, 0)?;

        let mut output = TexBuffer::new();
        self.render_node(root, &mut output)?;
        output.extend(fragments::postamble(&self.templates)?);

        debug!(fragments = output.len(), "document rendered");
        Ok(output)
    }

    /// Emits the fragments of `node`, then recurses into its children in order.
    ///
    /// Children are checked to sit exactly one layer below `node` before any
    /// of them is rendered.
    pub fn render_node(&self, node: &OutlineNode, output: &mut TexBuffer) -> Result<()> {
        debug!(layer = node.layer, title = %node.title, "rendering node");

        match node.layer {
            0 => output.extend(fragments::preamble(&self.templates)?),
            1 => {
                output.extend(fragments::section(&node.title));
                self.render_frame(node, output);
            }
            2 if self.config.two_level_sections => {
                output.extend(fragments::subsection(&node.title));
                self.render_frame(node, output);
            }
            _ => self.render_frame(node, output),
        }

        node.validate_children()?;
        for child in &node.children {
            self.render_node(child, output)?;
        }

        Ok(())
    }

    fn render_frame(&self, node: &OutlineNode, output: &mut TexBuffer) {
        if !node.has_note() {
            return;
        }
        output.extend(fragments::frame(
            &node.title,
            &node.note,
            self.config.frame_layout(),
        ));
    }
}
