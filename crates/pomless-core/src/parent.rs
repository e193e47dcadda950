//! Parent resolution by walking up the directory tree.
//!
//! The nearest ancestor holding a descriptor becomes the parent; siblings are
//! never consulted. The walk ends at the configured project root (inclusive)
//! or at the filesystem root.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pomless_error::{Error, Result};
use pomless_model::Parent;
use tracing::debug;

use crate::config::ReaderConfig;
use crate::detect::{AncestorDescriptor, detect_ancestor};
use crate::group::{GroupIdResolver, MarkerGroupIdResolver};
use crate::paths;
use crate::pom::read_coordinates;

pub struct ParentResolver {
    config: ReaderConfig,
    group_ids: Arc<dyn GroupIdResolver>,
}

impl ParentResolver {
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            config,
            group_ids: Arc::new(MarkerGroupIdResolver),
        }
    }

    pub fn with_group_resolver(mut self, resolver: Arc<dyn GroupIdResolver>) -> Self {
        self.group_ids = resolver;
        self
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Parent reference of the module in `module_dir`.
    pub fn find_parent(&self, module_dir: &Path) -> Result<Parent> {
        let module_dir = paths::absolute(module_dir)
            .map_err(|err| Error::io(module_dir, err).with_operation("parent::find_parent"))?;
        let start = module_dir.parent().unwrap_or(&module_dir).to_path_buf();
        let boundary = self.boundary_for(&module_dir);

        for dir in module_dir.ancestors().skip(1) {
            if let Some(root) = &boundary {
                if !dir.starts_with(root) {
                    debug!(dir = %dir.display(), root = %root.display(), "left project root");
                    break;
                }
            }
            if let Some(found) = detect_ancestor(dir) {
                debug!(dir = %dir.display(), descriptor = ?found, "parent descriptor found");
                return self
                    .parent_from(dir, found)
                    .map_err(|err| err.with_operation("parent::find_parent"));
            }
        }

        Err(Error::parent_not_found(&start).with_operation("parent::find_parent"))
    }

    /// The configured project root, when it encloses `module_dir`.
    fn boundary_for(&self, module_dir: &Path) -> Option<PathBuf> {
        let root = self.config.project_root.as_deref()?;
        let root = paths::absolute(root).ok()?;
        module_dir.starts_with(&root).then_some(root)
    }

    fn parent_from(&self, dir: &Path, found: AncestorDescriptor) -> Result<Parent> {
        match found {
            AncestorDescriptor::Pom(pom) => {
                let coordinates = read_coordinates(&pom)?;
                let group_id = match coordinates.group_id {
                    Some(group_id) => group_id,
                    None => self.group_ids.resolve_group_id(dir)?,
                };
                Ok(Parent::new(group_id, coordinates.artifact_id, coordinates.version))
            }
            AncestorDescriptor::Pomless(kind) => {
                let identity = kind.extract(dir, &self.config)?;
                let group_id = self.group_ids.resolve_group_id(dir)?;
                Ok(Parent::new(group_id, identity.artifact_id, identity.version))
            }
        }
    }
}
