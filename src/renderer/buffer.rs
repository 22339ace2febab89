use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Append-only sequence of generated text fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TexBuffer {
    fragments: Vec<String>,
}

impl TexBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Concatenates every fragment in order.
    pub fn to_text(&self) -> String {
        self.fragments.concat()
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for fragment in &self.fragments {
            writer.write_all(fragment.as_bytes())?;
        }
        writer.flush()
    }

    /// Creates or truncates `path` and writes the document to it.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(fs::File::create(path)?);
        self.write_to(&mut writer)?;
        Ok(())
    }
}

impl Extend<String> for TexBuffer {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.fragments.extend(iter);
    }
}
