//! Descriptor detection by fixed relative paths.

use std::path::{Path, PathBuf};

use strum_macros::{Display, IntoStaticStr};
use tracing::debug;

use crate::marker::MARKER_FILE;

/// Relative path of an OSGi bundle manifest.
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";
/// Relative path of a feature descriptor.
pub const FEATURE_PATH: &str = "feature.xml";
/// Relative path of a site (repository category) descriptor.
pub const SITE_PATH: &str = "category.xml";
/// Native project descriptor, only looked for in ancestors.
pub const POM_PATH: &str = "pom.xml";

/// The descriptor kinds a pomless module can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum DescriptorKind {
    Bundle,
    Feature,
    Site,
}

impl DescriptorKind {
    /// Detection order: first existing file wins.
    pub const ALL: [DescriptorKind; 3] = [
        DescriptorKind::Bundle,
        DescriptorKind::Feature,
        DescriptorKind::Site,
    ];

    pub fn relative_path(&self) -> &'static str {
        match self {
            DescriptorKind::Bundle => MANIFEST_PATH,
            DescriptorKind::Feature => FEATURE_PATH,
            DescriptorKind::Site => SITE_PATH,
        }
    }

    pub fn descriptor_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.relative_path())
    }
}

/// Which descriptor kind `module_dir` holds, if any.
pub fn detect(module_dir: &Path) -> Option<DescriptorKind> {
    let found = DescriptorKind::ALL
        .into_iter()
        .find(|kind| kind.descriptor_in(module_dir).is_file());
    debug!(dir = %module_dir.display(), kind = ?found, "descriptor detection");
    found
}

/// A descriptor found in an ancestor directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AncestorDescriptor {
    /// A native `pom.xml`.
    Pom(PathBuf),
    /// A pomless module: a marker file plus one of the pomless descriptors.
    Pomless(DescriptorKind),
}

/// Descriptor an ancestor directory contributes to parent resolution.
///
/// `pom.xml` takes priority. Pomless descriptors only count when the
/// directory also carries the marker file.
pub fn detect_ancestor(dir: &Path) -> Option<AncestorDescriptor> {
    let pom = dir.join(POM_PATH);
    if pom.is_file() {
        return Some(AncestorDescriptor::Pom(pom));
    }
    if !dir.join(MARKER_FILE).is_file() {
        return None;
    }
    detect(dir).map(AncestorDescriptor::Pomless)
}
