//! Feature descriptors (`feature.xml`).

use std::path::Path;

use pomless_error::Result;
use pomless_model::Packaging;

use crate::extract::{Identity, root_identity};

/// Extract feature identity from the `<feature>` root element at `path`.
pub fn extract(path: &Path) -> Result<Identity> {
    root_identity(path, "feature", Packaging::EclipseFeature, "feature::extract")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomless_error::{ErrorClass, ErrorKind};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn write_feature(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("feature.xml");
        fs::write(&path, content).expect("write feature");
        (dir, path)
    }

    #[test]
    fn reads_id_and_version() {
        let (_dir, path) = write_feature(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<feature id="pomless.feature" version="1.0.0.qualifier" provider-name="Acme">
   <plugin id="pomless.bundle" version="0.0.0"/>
</feature>"#,
        );

        let identity = extract(&path).expect("identity");
        assert_eq!(identity.artifact_id, "pomless.feature");
        assert_eq!(identity.version, "1.0.0.qualifier");
        assert_eq!(identity.packaging, Packaging::EclipseFeature);
        assert_eq!(identity.name, None);
    }

    #[test]
    fn missing_id() {
        let (_dir, path) = write_feature(r#"<feature version="1.0.0"/>"#);
        let err = extract(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.message(), format!("missing feature id in {}", path.display()));
    }

    #[test]
    fn missing_version() {
        let (_dir, path) = write_feature(r#"<feature id="f"/>"#);
        let err = extract(&path).unwrap_err();
        assert!(err.message().contains("missing feature version in"));
    }

    #[test]
    fn ill_formed_xml_is_not_a_missing_field() {
        let (_dir, path) = write_feature(r#"<feature id="f" version="1"><plugin></feature>"#);
        let err = extract(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedDescriptor);
        assert_eq!(err.class(), ErrorClass::Parse);
        assert!(err.message().starts_with(&path.display().to_string()));
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn dtd_is_accepted() {
        let (_dir, path) = write_feature(
            r#"<?xml version="1.0"?>
<!DOCTYPE feature>
<feature id="f" version="3.1.0"/>"#,
        );
        assert_eq!(extract(&path).expect("identity").version, "3.1.0");
    }
}
