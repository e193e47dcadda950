//! Identity extraction, dispatched over [`DescriptorKind`].

use std::fs;
use std::path::{Path, PathBuf};

use pomless_error::{Error, Result};
use pomless_model::Packaging;
use tracing::debug;

use crate::config::ReaderConfig;
use crate::detect::DescriptorKind;
use crate::{feature, manifest, site};

/// Identity fields read from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub artifact_id: String,
    pub version: String,
    pub packaging: Packaging,
    pub name: Option<String>,
    /// Absolute path of the descriptor the fields came from.
    pub descriptor: PathBuf,
}

impl DescriptorKind {
    /// Extract identity fields from this kind's descriptor in `module_dir`.
    pub fn extract(&self, module_dir: &Path, config: &ReaderConfig) -> Result<Identity> {
        let descriptor = self.descriptor_in(module_dir);
        let mut identity = match self {
            DescriptorKind::Bundle => {
                manifest::extract(&descriptor, config.is_test_module(module_dir))
            }
            DescriptorKind::Feature => feature::extract(&descriptor),
            DescriptorKind::Site => site::extract(&descriptor),
        }?;
        identity.version = config.model_version_of(&identity.version);
        Ok(identity)
    }
}

/// Read a descriptor as text, replacing invalid UTF-8.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|err| Error::io(path, err))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub(crate) fn parse_xml<'input>(
    path: &Path,
    text: &'input str,
) -> Result<roxmltree::Document<'input>> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    roxmltree::Document::parse_with_options(text, options)
        .map_err(|err| Error::malformed(path, &err).set_source(err))
}

/// Identity from the `id`, `version` and `label` attributes of the root element.
///
/// `noun` names the descriptor in diagnostics (`missing <noun> id in <file>`).
pub(crate) fn root_identity(
    path: &Path,
    noun: &str,
    packaging: Packaging,
    operation: &'static str,
) -> Result<Identity> {
    let text = read_text(path).map_err(|err| err.with_operation(operation))?;
    let doc = parse_xml(path, &text).map_err(|err| err.with_operation(operation))?;
    let root = doc.root_element();

    let artifact_id = attribute(root, "id").ok_or_else(|| {
        Error::missing_field("id", format!("missing {} id in {}", noun, path.display()))
            .with_operation(operation)
    })?;
    let version = attribute(root, "version").ok_or_else(|| {
        Error::missing_field(
            "version",
            format!("missing {} version in {}", noun, path.display()),
        )
        .with_operation(operation)
    })?;

    debug!(%artifact_id, %version, noun, "descriptor read");
    Ok(Identity {
        artifact_id,
        version,
        packaging,
        name: attribute(root, "label"),
        descriptor: path.to_path_buf(),
    })
}

/// Non-blank attribute value of `node`, trimmed.
pub(crate) fn attribute(node: roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    node.attribute(name)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn dispatches_to_feature_extractor() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join("feature.xml"),
            r#"<feature id="org.acme.feature" version="2.0.0" label="Acme"/>"#,
        )
        .expect("write feature");

        let identity = DescriptorKind::Feature
            .extract(dir.path(), &ReaderConfig::default())
            .expect("identity");
        assert_eq!(identity.artifact_id, "org.acme.feature");
        assert_eq!(identity.packaging, Packaging::EclipseFeature);
        assert_eq!(identity.name.as_deref(), Some("Acme"));
        assert_eq!(identity.descriptor, dir.path().join("feature.xml"));
    }

    #[test]
    fn qualifier_rewrite_applies_after_extraction() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join("category.xml"),
            r#"<site id="s" version="1.2.0.qualifier"/>"#,
        )
        .expect("write site");

        let config = ReaderConfig::default().with_snapshot_qualifier(true);
        let identity = DescriptorKind::Site.extract(dir.path(), &config).expect("identity");
        assert_eq!(identity.version, "1.2.0-SNAPSHOT");
    }

    #[test]
    fn missing_descriptor_is_io_failure() {
        let dir = tempdir().expect("tempdir");
        let err = DescriptorKind::Site
            .extract(dir.path(), &ReaderConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), pomless_error::ErrorKind::FileNotFound);
    }

    #[test]
    fn blank_attributes_count_as_missing() {
        let doc = roxmltree::Document::parse(r#"<a id="  " version=" 1.0 "/>"#).expect("xml");
        let root = doc.root_element();
        assert_eq!(attribute(root, "id"), None);
        assert_eq!(attribute(root, "version").as_deref(), Some("1.0"));
        assert_eq!(attribute(root, "label"), None);
    }
}
