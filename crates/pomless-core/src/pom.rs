//! Coordinates of native `pom.xml` descriptors found while resolving parents.

use std::path::Path;

use pomless_error::{Error, Result};

use crate::extract::{parse_xml, read_text};

/// Coordinates declared by a `pom.xml`, with values inherited from its `<parent>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomCoordinates {
    /// `None` when neither the project nor its parent declares one.
    pub group_id: Option<String>,
    pub artifact_id: String,
    pub version: String,
}

fn child<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

fn child_text(node: roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    child(node, name)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Read the coordinates of the `pom.xml` at `path`.
pub fn read_coordinates(path: &Path) -> Result<PomCoordinates> {
    let text = read_text(path).map_err(|err| err.with_operation("pom::read_coordinates"))?;
    let doc = parse_xml(path, &text).map_err(|err| err.with_operation("pom::read_coordinates"))?;
    let project = doc.root_element();
    let parent = child(project, "parent");

    let inherited = |name: &str| {
        child_text(project, name).or_else(|| parent.and_then(|parent| child_text(parent, name)))
    };

    let artifact_id = child_text(project, "artifactId").ok_or_else(|| {
        Error::missing_field("artifactId", format!("missing artifactId in {}", path.display()))
            .with_operation("pom::read_coordinates")
    })?;
    let version = inherited("version").ok_or_else(|| {
        Error::missing_field("version", format!("missing version in {}", path.display()))
            .with_operation("pom::read_coordinates")
    })?;

    Ok(PomCoordinates {
        group_id: inherited("groupId"),
        artifact_id,
        version,
    })
}
