//! The `build.properties` marker file.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use pomless_error::{Error, Result};

/// File whose presence marks a directory as a pomless module.
pub const MARKER_FILE: &str = "build.properties";

/// Keys with this prefix become model properties.
pub const PROPERTY_PREFIX: &str = "pom.model.property.";

/// Key naming the group id of a module directory.
pub const GROUP_ID_KEY: &str = "pom.model.groupId";

/// Read the marker file of `dir`. A missing marker yields `None`.
pub fn read_marker(dir: &Path) -> Result<Option<HashMap<String, String>>> {
    let path = dir.join(MARKER_FILE);
    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(Error::io(&path, err).with_operation("marker::read_marker")),
    };

    java_properties::read(BufReader::new(file))
        .map(Some)
        .map_err(|err| {
            Error::malformed(&path, &err)
                .with_operation("marker::read_marker")
                .set_source(err)
        })
}

/// `pom.model.property.*` entries with the prefix stripped.
pub fn model_properties(marker: &HashMap<String, String>) -> BTreeMap<String, String> {
    marker
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(PROPERTY_PREFIX)
                .filter(|name| !name.is_empty())
                .map(|name| (name.to_string(), value.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_marker_is_none() {
        let dir = tempdir().expect("tempdir");
        assert!(read_marker(dir.path()).expect("read").is_none());
    }

    #[test]
    fn reads_properties_with_continuations() {
        let dir = tempdir().expect("tempdir");
        fs::write(
            dir.path().join(MARKER_FILE),
            "bin.includes = META-INF/,\\\n               .\npom.model.groupId=org.acme\n",
        )
        .expect("write marker");

        let marker = read_marker(dir.path()).expect("read").expect("marker");
        assert_eq!(marker.get("bin.includes").map(String::as_str), Some("META-INF/,."));
        assert_eq!(marker.get(GROUP_ID_KEY).map(String::as_str), Some("org.acme"));
    }

    #[test]
    fn only_prefixed_keys_become_properties() {
        let mut marker = HashMap::new();
        marker.insert("pom.model.property.skipTests".to_string(), "true".to_string());
        marker.insert("pom.model.property.".to_string(), "ignored".to_string());
        marker.insert("bin.includes".to_string(), ".".to_string());

        let properties = model_properties(&marker);
        assert_eq!(properties.len(), 1);
        assert_eq!(properties.get("skipTests").map(String::as_str), Some("true"));
    }
}
