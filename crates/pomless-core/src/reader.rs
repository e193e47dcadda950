//! Model synthesis for pomless module directories.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pomless_error::{Error, Result};
use pomless_model::{
    InputSource, MODEL_LOCATION_KEY, MODEL_VERSION, Model, Parent, SourceLocation,
};
use tracing::info;

use crate::config::ReaderConfig;
use crate::detect::detect;
use crate::extract::Identity;
use crate::group::GroupIdResolver;
use crate::marker::{model_properties, read_marker};
use crate::parent::ParentResolver;
use crate::paths;

/// Per-read options handed over by the host build system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Location of the module's `build.properties`.
    pub source: Option<PathBuf>,
}

impl ReaderOptions {
    pub fn from_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }
}

/// Reads pomless module directories into [`Model`]s.
///
/// Holds no per-read state; one reader can serve concurrent reads.
pub struct ModelReader {
    parents: ParentResolver,
}

impl ModelReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self {
            parents: ParentResolver::new(config),
        }
    }

    pub fn with_group_resolver(mut self, resolver: Arc<dyn GroupIdResolver>) -> Self {
        self.parents = self.parents.with_group_resolver(resolver);
        self
    }

    pub fn config(&self) -> &ReaderConfig {
        self.parents.config()
    }

    /// Synthesize the model of the module whose marker file is `options.source`.
    pub fn read(&self, options: &ReaderOptions) -> Result<Model> {
        let source = options.source.as_deref().ok_or_else(|| {
            Error::invalid_argument("no source location given").with_operation("reader::read")
        })?;
        let marker = paths::absolute(source)
            .map_err(|err| Error::io(source, err).with_operation("reader::read"))?;
        let module_dir = marker.parent().ok_or_else(|| {
            Error::invalid_argument(format!("{} has no parent directory", marker.display()))
                .with_operation("reader::read")
        })?;

        let kind = detect(module_dir).ok_or_else(|| {
            Error::descriptor_not_found(module_dir).with_operation("reader::read")
        })?;
        let identity = kind
            .extract(module_dir, self.config())
            .map_err(|err| err.with_operation("reader::read"))?;
        let parent = self
            .parents
            .find_parent(module_dir)
            .map_err(|err| err.with_operation("reader::read"))?;
        let properties = read_marker(module_dir)
            .map_err(|err| err.with_operation("reader::read"))?
            .map(|marker| model_properties(&marker))
            .unwrap_or_default();

        let model = assemble(identity, parent, &marker, properties);
        info!(
            dir = %module_dir.display(),
            %kind,
            artifact_id = %model.artifact_id,
            version = %model.version,
            packaging = %model.packaging,
            "model synthesized"
        );
        Ok(model)
    }

    /// Parent reference of the module in `module_dir`.
    pub fn find_parent(&self, module_dir: &Path) -> Result<Parent> {
        self.parents.find_parent(module_dir)
    }
}

/// Build the model. Properties are located in the marker file, every other
/// field in the descriptor.
fn assemble(
    identity: Identity,
    parent: Parent,
    marker: &Path,
    properties: BTreeMap<String, String>,
) -> Model {
    let model_id = format!(
        "{}:{}:{}",
        parent.group_id, identity.artifact_id, identity.version
    );
    let location = SourceLocation::file(InputSource::new(
        identity.descriptor.display().to_string(),
        model_id.clone(),
    ));

    let mut fields = vec![
        MODEL_LOCATION_KEY,
        "modelVersion",
        "artifactId",
        "version",
        "packaging",
        "parent",
    ];
    if identity.name.is_some() {
        fields.push("name");
    }
    let mut locations: BTreeMap<String, SourceLocation> = fields
        .into_iter()
        .map(|field| (field.to_string(), location.clone()))
        .collect();
    if !properties.is_empty() {
        locations.insert(
            "properties".to_string(),
            SourceLocation::file(InputSource::new(marker.display().to_string(), model_id)),
        );
    }

    Model {
        model_version: MODEL_VERSION.to_string(),
        artifact_id: identity.artifact_id,
        version: identity.version,
        packaging: identity.packaging,
        parent: Some(parent),
        name: identity.name,
        properties,
        locations,
    }
}
