#![forbid(unsafe_code)]

pub mod location;
pub mod model;
pub mod packaging;

pub use location::*;
pub use model::*;
pub use packaging::*;
