//! # pomless-error
//!
//! Unified error handling for pomless.
//!
//! ## Design Philosophy
//!
//! - **ErrorKind**: Know what went wrong (e.g., MissingField, ParentNotFound)
//! - **ErrorClass**: Decide how to react (a broken descriptor vs. missing project structure)
//! - **Error Context**: Assist in locating the cause with rich context
//! - **Error Source**: Wrap underlying errors without leaking raw types
//!
//! ## Usage
//!
//! ```rust
//! use pomless_error::{Error, ErrorClass, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::MissingField, "Bundle-Version missing in /ws/a/META-INF/MANIFEST.MF")
//!         .with_operation("manifest::extract")
//!         .with_context("header", "Bundle-Version"))
//! }
//!
//! let err = example().unwrap_err();
//! assert_eq!(err.class(), ErrorClass::Parse);
//! ```
//!
//! ## Principles
//!
//! - All functions return `Result<T, pomless_error::Error>`
//! - `message()` is the exact diagnostic callers match on; never decorate it
//! - External errors are wrapped with `set_source(err)`
//! - Same error handled once, subsequent ops only append context

mod class;
mod error;
mod kind;

pub use class::ErrorClass;
pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using pomless Error
pub type Result<T> = std::result::Result<T, Error>;
