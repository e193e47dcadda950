//! Group id lookup for directories that do not declare one.

use std::path::Path;

use pomless_error::{Error, Result};

use crate::marker::{GROUP_ID_KEY, read_marker};

/// Resolves the effective group id of a project directory.
pub trait GroupIdResolver: Send + Sync {
    fn resolve_group_id(&self, dir: &Path) -> Result<String>;
}

impl<F> GroupIdResolver for F
where
    F: Fn(&Path) -> Result<String> + Send + Sync,
{
    fn resolve_group_id(&self, dir: &Path) -> Result<String> {
        self(dir)
    }
}

/// Reads `pom.model.groupId` from the directory's `build.properties`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerGroupIdResolver;

impl GroupIdResolver for MarkerGroupIdResolver {
    fn resolve_group_id(&self, dir: &Path) -> Result<String> {
        read_marker(dir)?
            .and_then(|mut marker| marker.remove(GROUP_ID_KEY))
            .map(|group| group.trim().to_string())
            .filter(|group| !group.is_empty())
            .ok_or_else(|| Error::group_id_unresolved(dir).with_operation("group::resolve_group_id"))
    }
}

/// The same group id for every directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedGroupId(pub String);

impl GroupIdResolver for FixedGroupId {
    fn resolve_group_id(&self, _dir: &Path) -> Result<String> {
        Ok(self.0.clone())
    }
}
