//! Front and back template resources copied verbatim around the generated body.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};

pub const FRONT_TEMPLATE: &str = "front.tex";
pub const BACK_TEMPLATE: &str = "back.tex";

/// Source of the preamble and postamble text.
pub trait TemplateSource {
    fn front(&self) -> Result<String>;
    fn back(&self) -> Result<String>;
}

/// Templates read from `front.tex` and `back.tex` in a directory.
#[derive(Debug, Clone)]
pub struct TemplateDir {
    root: PathBuf,
}

impl TemplateDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    fn read(&self, file: &str) -> Result<String> {
        let path = self.root.join(file);
        debug!(path = %path.display(), "reading template");
        fs::read_to_string(&path).map_err(|source| Error::TemplateRead { path, source })
    }
}

impl TemplateSource for TemplateDir {
    fn front(&self) -> Result<String> {
        self.read(FRONT_TEMPLATE)
    }

    fn back(&self) -> Result<String> {
        self.read(BACK_TEMPLATE)
    }
}

/// In-memory templates.
#[derive(Debug, Clone, Default)]
pub struct InlineTemplates {
    pub front: String,
    pub back: String,
}

impl InlineTemplates {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

impl TemplateSource for InlineTemplates {
    fn front(&self) -> Result<String> {
        Ok(self.front.clone())
    }

    fn back(&self) -> Result<String> {
        Ok(self.back.clone())
    }
}

/// Splits template text into lines, each keeping its line terminator.
pub fn template_lines(text: &str) -> Vec<String> {
    text.split_inclusive('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_lines_keep_terminators() {
        assert_eq!(
            template_lines("\\documentclass{beamer}\n\\begin{document}\n"),
            vec!["\\documentclass{beamer}\n", "\\begin{document}\n"]
        );
        assert_eq!(template_lines("no newline"), vec!["no newline"]);
        assert!(template_lines("").is_empty());
    }

    #[test]
    fn test_template_dir_reads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FRONT_TEMPLATE), "front\n").unwrap();
        fs::write(dir.path().join(BACK_TEMPLATE), "back\n").unwrap();

        let templates = TemplateDir::new(dir.path());
        assert_eq!(templates.front().unwrap(), "front\n");
        assert_eq!(templates.back().unwrap(), "back\n");
    }

    #[test]
    fn test_missing_template_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FRONT_TEMPLATE), "front\n").unwrap();

        let templates = TemplateDir::new(dir.path());
        match templates.back() {
            Err(Error::TemplateRead { path, .. }) => {
                assert_eq!(path, dir.path().join(BACK_TEMPLATE))
            }
            other => panic!("expected TemplateRead, got {:?}", other),
        }
    }
}
