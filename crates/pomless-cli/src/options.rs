//! Reader options shared by every pomless subcommand.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use pomless_core::{FixedGroupId, ModelReader, ReaderConfig};

/// Options controlling how module directories are read.
#[derive(Args, Debug, Clone, Default)]
pub struct ReaderArgs {
    /// TOML file with reader settings; flags below override it.
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Outermost directory searched for a parent descriptor.
    #[arg(long = "project-root", value_name = "DIR", global = true)]
    pub project_root: Option<PathBuf>,

    /// Directory-name suffix marking test bundles.
    #[arg(long = "test-suffix", value_name = "SUFFIX", global = true)]
    pub test_suffix: Option<String>,

    /// Rewrite `.qualifier` versions to `-SNAPSHOT`.
    #[arg(long = "snapshot-qualifier", global = true)]
    pub snapshot_qualifier: bool,

    /// Group id used for parents that do not declare one.
    #[arg(long = "group-id", value_name = "GROUP", global = true)]
    pub group_id: Option<String>,
}

impl ReaderArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config file values overlaid with command-line flags.
    pub fn reader_config(&self) -> Result<ReaderConfig> {
        let mut config = match &self.config {
            Some(path) => ReaderConfig::from_path(path)?,
            None => ReaderConfig::default(),
        };
        if let Some(root) = &self.project_root {
            config.project_root = Some(root.clone());
        }
        if let Some(suffix) = &self.test_suffix {
            config.test_suffix = suffix.clone();
        }
        if self.snapshot_qualifier {
            config.snapshot_qualifier = true;
        }
        Ok(config)
    }

    pub fn build_reader(&self) -> Result<ModelReader> {
        let reader = ModelReader::new(self.reader_config()?);
        Ok(match &self.group_id {
            Some(group_id) => reader.with_group_resolver(Arc::new(FixedGroupId(group_id.clone()))),
            None => reader,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn flags_override_config_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("pomless.toml");
        fs::write(&path, "test-suffix = \".itests\"\nproject-root = \"/from/file\"\n")
            .expect("write config");

        let args = ReaderArgs {
            config: Some(path),
            project_root: Some(PathBuf::from("/from/flag")),
            ..ReaderArgs::default()
        };
        let config = args.reader_config().expect("config");
        assert_eq!(config.project_root, Some(PathBuf::from("/from/flag")));
        assert_eq!(config.test_suffix, ".itests");
        assert!(!config.snapshot_qualifier);
    }

    #[test]
    fn defaults_without_config() {
        let config = ReaderArgs::new().reader_config().expect("config");
        assert_eq!(config, ReaderConfig::default());
    }

    #[test]
    fn missing_config_file_is_reported() {
        let args = ReaderArgs {
            config: Some(PathBuf::from("/does/not/exist/pomless.toml")),
            ..ReaderArgs::default()
        };
        let err = args.reader_config().unwrap_err();
        assert!(err.to_string().contains("failed to read reader config"));
    }
}
