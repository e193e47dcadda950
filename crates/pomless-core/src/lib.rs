//! Synthesizes project models for module directories that carry no `pom.xml`.
//!
//! A module directory is marked by a `build.properties` file and holds one of
//! three descriptors: an OSGi bundle manifest, a `feature.xml`, or a
//! `category.xml`. [`ModelReader::read`] detects which one is present, extracts
//! the artifact id, version and packaging from it, and attaches the nearest
//! ancestor project as parent.
//!
//! ```no_run
//! use pomless_core::{ModelReader, ReaderConfig, ReaderOptions};
//!
//! let reader = ModelReader::new(ReaderConfig::default());
//! let model = reader.read(&ReaderOptions::from_source("/ws/bundle/build.properties"))?;
//! println!("{} {}", model.artifact_id, model.packaging);
//! # Ok::<(), pomless_core::Error>(())
//! ```

pub mod config;
pub mod detect;
pub mod extract;
pub mod feature;
pub mod group;
pub mod manifest;
pub mod marker;
pub mod parent;
pub mod paths;
pub mod pom;
pub mod reader;
pub mod site;

pub use config::ReaderConfig;
pub use detect::{AncestorDescriptor, DescriptorKind, detect, detect_ancestor};
pub use extract::Identity;
pub use group::{FixedGroupId, GroupIdResolver, MarkerGroupIdResolver};
pub use parent::ParentResolver;
pub use reader::{ModelReader, ReaderOptions};

pub use pomless_error::{Error, ErrorClass, ErrorKind, Result};
pub use pomless_model::{InputSource, Model, Packaging, Parent, SourceLocation};
