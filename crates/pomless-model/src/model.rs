use std::collections::BTreeMap;
use std::fmt;

use crate::location::SourceLocation;
use crate::packaging::Packaging;

/// Model version written into every synthesized model.
pub const MODEL_VERSION: &str = "4.0.0";

/// Field path of the location covering the whole model.
pub const MODEL_LOCATION_KEY: &str = "";

/// Reference to the project a model inherits from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Parent {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Parent {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Parent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Project model synthesized from a manifest, feature or site descriptor.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub model_version: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: Packaging,
    pub parent: Option<Parent>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "BTreeMap::is_empty"))]
    pub properties: BTreeMap<String, String>,
    /// Field path to provenance; `""` covers the whole model.
    pub locations: BTreeMap<String, SourceLocation>,
}

impl Model {
    /// Location recorded for a field path.
    pub fn location(&self, field: &str) -> Option<&SourceLocation> {
        self.locations.get(field)
    }

    /// Group id inherited from the parent reference.
    pub fn group_id(&self) -> Option<&str> {
        self.parent.as_ref().map(|parent| parent.group_id.as_str())
    }

    /// `groupId:artifactId:version` of this model, when the group is known.
    pub fn id(&self) -> Option<String> {
        self.group_id()
            .map(|group| format!("{}:{}:{}", group, self.artifact_id, self.version))
    }
}
