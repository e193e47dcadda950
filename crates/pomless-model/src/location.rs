/// The file a model field was read from, plus the id of the model owning it.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSource {
    /// Absolute path of the descriptor file.
    pub location: String,
    /// `groupId:artifactId:version` of the owning model.
    pub model_id: String,
}

impl InputSource {
    pub fn new(location: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            model_id: model_id.into(),
        }
    }
}

/// Provenance of a single model field.
///
/// Line and column stay `0`: descriptors are tracked per file, not per position.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
    pub source: InputSource,
}

impl SourceLocation {
    /// Location covering a whole file.
    pub fn file(source: InputSource) -> Self {
        Self {
            line: 0,
            column: 0,
            source,
        }
    }
}
