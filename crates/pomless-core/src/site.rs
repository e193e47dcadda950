//! Site descriptors (`category.xml`) built as p2 repositories.
//!
//! Plain Eclipse category files carry no identity of their own. A pomless
//! site module is expected to state it on the `<site>` root element, as
//! `<site id="..." version="...">`, the same way a feature does; a category
//! file without those attributes fails with `missing site id` or
//! `missing site version`.

use std::path::Path;

use pomless_error::Result;
use pomless_model::Packaging;

use crate::extract::{Identity, root_identity};

/// Extract repository identity from the `<site>` root element at `path`.
pub fn extract(path: &Path) -> Result<Identity> {
    root_identity(path, "site", Packaging::EclipseRepository, "site::extract")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pomless_error::ErrorKind;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_site_identity() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("category.xml");
        fs::write(
            &path,
            r#"<site id="pomless.repository" version="4.2.0" label="Pomless Updates">
   <feature id="pomless.feature" version="0.0.0"/>
</site>"#,
        )
        .expect("write site");

        let identity = extract(&path).expect("identity");
        assert_eq!(identity.artifact_id, "pomless.repository");
        assert_eq!(identity.version, "4.2.0");
        assert_eq!(identity.packaging, Packaging::EclipseRepository);
        assert_eq!(identity.name.as_deref(), Some("Pomless Updates"));
    }

    #[test]
    fn missing_fields_name_the_site() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("category.xml");

        fs::write(&path, r#"<site version="1"/>"#).expect("write site");
        let err = extract(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.message(), format!("missing site id in {}", path.display()));

        fs::write(&path, r#"<site id="s"/>"#).expect("write site");
        let err = extract(&path).unwrap_err();
        assert_eq!(err.message(), format!("missing site version in {}", path.display()));
    }

    #[test]
    fn plain_category_file_lacks_identity() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("category.xml");
        fs::write(
            &path,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<site>
   <feature id="pomless.feature" version="0.0.0">
      <category name="main"/>
   </feature>
   <category-def name="main" label="Main"/>
</site>"#,
        )
        .expect("write site");

        let err = extract(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.message(), format!("missing site id in {}", path.display()));
    }

    #[test]
    fn empty_file_is_malformed() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("category.xml");
        fs::write(&path, "").expect("write site");
        assert_eq!(extract(&path).unwrap_err().kind(), ErrorKind::MalformedDescriptor);
    }
}
