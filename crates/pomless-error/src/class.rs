//! Error class for caller-side handling

use std::fmt;

/// The broad class of a failure.
///
/// Hosts react differently to each class:
/// - `Parse`: a descriptor exists but is malformed or lacks a required field
/// - `Discovery`: the expected project structure is absent (no descriptor, no parent)
/// - `Usage`: the reader was invoked with bad options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorClass {
    /// Descriptor content is broken.
    ///
    /// Examples: MalformedDescriptor, MissingField
    Parse,

    /// Project structure is missing or unreadable.
    ///
    /// Examples: DescriptorNotFound, ParentNotFound, IoFailed
    Discovery,

    /// Caller error.
    #[default]
    Usage,
}

impl ErrorClass {
    /// Whether the failure points at descriptor content
    pub fn is_parse(&self) -> bool {
        matches!(self, ErrorClass::Parse)
    }

    /// Whether the failure points at missing project structure
    pub fn is_discovery(&self) -> bool {
        matches!(self, ErrorClass::Discovery)
    }

    /// Get class as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorClass::Parse => "parse",
            ErrorClass::Discovery => "discovery",
            ErrorClass::Usage => "usage",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
