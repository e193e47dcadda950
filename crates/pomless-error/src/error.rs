//! The main Error type for pomless.

use std::fmt;
use std::path::Path;

use crate::{ErrorClass, ErrorKind};

/// Unified error type for all pomless operations.
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the class of the error kind.
    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }

    /// Get the error message.
    ///
    /// This is the diagnostic text exactly as produced, without kind or context.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the operation that caused this error
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Get the context key-value pairs
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_ref().map(|e| e.as_ref())
    }

    /// Set the operation that caused this error.
    ///
    /// If an operation was already set, the previous one is moved to context
    /// as "called" to preserve the call chain.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Add context to the error
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.class())?;

        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}) at {}", self.kind, self.class(), self.operation)?;

        if !self.message.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Message: {}", self.message)?;
        }

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "    Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }

        if let Some(source) = &self.source {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", source)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl Error {
    /// Create an InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create a MalformedDescriptor error for `file`.
    pub fn malformed(file: &Path, detail: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::MalformedDescriptor,
            format!("{} is not a well-formed descriptor: {}", file.display(), detail),
        )
        .with_context("file", file.display().to_string())
    }

    /// Create a MissingField error.
    ///
    /// `message` is kept verbatim; `field` only goes into the context.
    pub fn missing_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingField, message).with_context("field", field)
    }

    /// Create a DescriptorNotFound error for a module directory
    pub fn descriptor_not_found(dir: &Path) -> Self {
        Self::new(
            ErrorKind::DescriptorNotFound,
            format!(
                "No known descriptor (manifest/feature/site) found in {}",
                dir.display()
            ),
        )
        .with_context("dir", dir.display().to_string())
    }

    /// Create a ParentNotFound error naming the directory the walk started from
    pub fn parent_not_found(start: &Path) -> Self {
        Self::new(
            ErrorKind::ParentNotFound,
            format!("No parent pom file found in {}", start.display()),
        )
        .with_context("dir", start.display().to_string())
    }

    /// Create a GroupIdUnresolved error
    pub fn group_id_unresolved(dir: &Path) -> Self {
        Self::new(
            ErrorKind::GroupIdUnresolved,
            format!("No groupId could be resolved for {}", dir.display()),
        )
        .with_context("dir", dir.display().to_string())
    }

    /// Create an IoFailed error for `path`, keeping the io error as source.
    pub fn io(path: &Path, err: std::io::Error) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Self::new(kind, format!("failed to read {}: {}", path.display(), err))
            .with_context("path", path.display().to_string())
            .set_source(err)
    }
}
