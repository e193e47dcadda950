//! Error kinds for pomless operations

use strum_macros::{Display, IntoStaticStr};

use crate::ErrorClass;

/// The kind of error that occurred.
///
/// Users can match on ErrorKind to decide how to handle specific error cases,
/// or on [`ErrorKind::class`] when only the broad category matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // General errors
    // =========================================================================
    /// Invalid argument passed to the reader
    InvalidArgument,

    // =========================================================================
    // Descriptor content errors
    // =========================================================================
    /// Descriptor is not well-formed (bad XML, bad properties syntax)
    MalformedDescriptor,

    /// A required field is absent from an otherwise well-formed descriptor
    MissingField,

    // =========================================================================
    // Project structure errors
    // =========================================================================
    /// No manifest, feature or site descriptor in the module directory
    DescriptorNotFound,

    /// No ancestor directory holds a descriptor
    ParentNotFound,

    /// The group id of a directory could not be determined
    GroupIdUnresolved,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// The class this kind belongs to
    pub fn class(&self) -> ErrorClass {
        match self {
            ErrorKind::MalformedDescriptor | ErrorKind::MissingField => ErrorClass::Parse,
            ErrorKind::DescriptorNotFound
            | ErrorKind::ParentNotFound
            | ErrorKind::GroupIdUnresolved
            | ErrorKind::FileNotFound
            | ErrorKind::PermissionDenied
            | ErrorKind::IoFailed => ErrorClass::Discovery,
            ErrorKind::InvalidArgument => ErrorClass::Usage,
        }
    }
}
