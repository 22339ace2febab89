//! Per-run settings supplied by the command line.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::renderer::RenderConfig;

/// Template directory looked up relative to the working directory.
pub const LOCAL_TEMPLATE_DIR: &str = "templates";
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";
pub const OUTPUT_EXTENSION: &str = "tex";

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub render: RenderConfig,
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Overrides the output base name; only meaningful for a single input.
    pub output_name: Option<String>,
    pub to_stdout: bool,
}

impl RunConfig {
    /// Path of the `.tex` file written for an outline displayed as `name`.
    pub fn output_path(&self, name: &str) -> PathBuf {
        let base = self.output_name.as_deref().unwrap_or(name);
        self.output_dir
            .join(format!("{}.{}", base, OUTPUT_EXTENSION))
    }
}

/// Parses the one/two column answer (`1` or `2`).
pub fn parse_columns(value: &str) -> Result<bool, String> {
    match value.trim() {
        "1" => Ok(false),
        "2" => Ok(true),
        other => Err(format!("expected 1 or 2 columns, got '{}'", other)),
    }
}

/// Picks the template directory: explicit choice, then `./templates`, then
/// the per-user config directory.
pub fn resolve_template_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    let local = PathBuf::from(LOCAL_TEMPLATE_DIR);
    if local.is_dir() {
        debug!(dir = %local.display(), "using local templates");
        return local;
    }

    match dirs::config_dir() {
        Some(config) => config.join("autobeamer").join(LOCAL_TEMPLATE_DIR),
        None => {
            warn!("no config directory available, falling back to ./templates");
            local
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(output_name: Option<&str>) -> RunConfig {
        RunConfig {
            render: RenderConfig::default(),
            template_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("out"),
            output_name: output_name.map(str::to_string),
            to_stdout: false,
        }
    }

    #[test]
    fn test_output_path_defaults_to_display_name() {
        assert_eq!(config(None).output_path("talk"), Path::new("out/talk.tex"));
    }

    #[test]
    fn test_output_path_prefers_explicit_name() {
        assert_eq!(
            config(Some("final")).output_path("talk"),
            Path::new("out/final.tex")
        );
    }

    #[test]
    fn test_output_path_keeps_dots_in_name() {
        assert_eq!(
            config(None).output_path("talk.v2"),
            Path::new("out/talk.v2.tex")
        );
    }

    #[test]
    fn test_parse_columns() {
        assert_eq!(parse_columns("1"), Ok(false));
        assert_eq!(parse_columns("2"), Ok(true));
        assert!(parse_columns("3").is_err());
    }

    #[test]
    fn test_explicit_template_dir_wins() {
        assert_eq!(
            resolve_template_dir(Some(Path::new("/tmp/tpl"))),
            Path::new("/tmp/tpl")
        );
    }
}
