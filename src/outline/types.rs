use crate::error::{Error, Result};

/// Delimiter separating the lines of a node's note.
pub const NOTE_LINE_BREAK: char = '\n';

/// One unit of outline content.
///
/// Layer 0 is the document root, layer 1 a top-level section, layer 2 a
/// second-level section or a frame, and anything deeper is a frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutlineNode {
    pub title: String,
    pub note: String,
    pub layer: usize,
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Creates an empty document root (layer 0).
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(title: impl Into<String>, note: impl Into<String>, layer: usize) -> Self {
        Self {
            title: title.into(),
            note: note.into(),
            layer,
            children: Vec::new(),
        }
    }

    /// Appends a child one layer below this node and returns it for further nesting.
    pub fn add_child(
        &mut self,
        title: impl Into<String>,
        note: impl Into<String>,
    ) -> &mut OutlineNode {
        let child = OutlineNode::new(title, note, self.layer + 1);
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Builder-style variant of [`add_child`](Self::add_child) taking a finished subtree.
    pub fn with_child(mut self, child: OutlineNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }

    /// Lines of the note that become bullet items.
    ///
    /// The segment after the final line break is always dropped, so
    /// `"a\nb\n"` yields `["a", "b"]` and `"a\nb"` yields `["a"]`.
    pub fn bullet_lines(&self) -> Vec<&str> {
        bullet_lines(&self.note)
    }

    /// Checks that the root sits at layer 0 and every child is exactly one
    /// layer below its parent.
    pub fn validate(&self) -> Result<()> {
        check_layer(self, 0)?;
        self.validate_subtree()
    }

    fn validate_subtree(&self) -> Result<()> {
        for child in &self.children {
            check_layer(child, self.layer + 1)?;
            child.validate_subtree()?;
        }
        Ok(())
    }

    /// Checks the direct children of this node only.
    pub fn validate_children(&self) -> Result<()> {
        self.children
            .iter()
            .try_for_each(|child| check_layer(child, self.layer + 1))
    }

    /// Total node count including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::node_count).sum::<usize>()
    }

    /// Pre-order iterator over this node and all of its descendants.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder { stack: vec![self] }
    }
}

pub(crate) fn check_layer(node: &OutlineNode, expected: usize) -> Result<()> {
    if node.layer != expected {
        return Err(Error::MalformedTree {
            title: node.title.clone(),
            expected,
            found: node.layer,
        });
    }
    Ok(())
}

/// Splits a note into bullet lines, discarding the trailing segment.
pub fn bullet_lines(note: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = note.split(NOTE_LINE_BREAK).collect();
    lines.pop();
    lines
}

pub struct PreOrder<'a> {
    stack: Vec<&'a OutlineNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a OutlineNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
