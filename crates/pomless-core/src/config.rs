use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Reader configuration shared by every read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReaderConfig {
    /// Module directories whose name ends with this suffix build test bundles.
    pub test_suffix: String,
    /// Outermost directory the parent walk may inspect.
    pub project_root: Option<PathBuf>,
    /// Rewrite OSGi `.qualifier` versions to `-SNAPSHOT`.
    pub snapshot_qualifier: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            test_suffix: Self::default_test_suffix(),
            project_root: None,
            snapshot_qualifier: false,
        }
    }
}

impl ReaderConfig {
    fn default_test_suffix() -> String {
        ".tests".to_string()
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_test_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.test_suffix = suffix.into();
        self
    }

    pub fn with_project_root(mut self, root: Option<PathBuf>) -> Self {
        self.project_root = root;
        self
    }

    pub fn with_snapshot_qualifier(mut self, enabled: bool) -> Self {
        self.snapshot_qualifier = enabled;
        self
    }

    /// Version as it should appear on a model.
    pub fn model_version_of(&self, version: &str) -> String {
        match version.strip_suffix(".qualifier") {
            Some(base) if self.snapshot_qualifier => format!("{base}-SNAPSHOT"),
            _ => version.to_string(),
        }
    }

    /// Whether `module_dir` names a test module.
    pub fn is_test_module(&self, module_dir: &Path) -> bool {
        if self.test_suffix.is_empty() {
            return false;
        }
        module_dir
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.test_suffix))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read reader config {}", path.display()))?;
        let config: ReaderConfig =
            toml::from_str(&text).with_context(|| format!("invalid TOML in {}", path.display()))?;
        Ok(config)
    }
}
