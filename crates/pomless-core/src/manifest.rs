//! OSGi bundle manifests (`META-INF/MANIFEST.MF`).

use std::path::Path;

use pomless_error::{Error, Result};
use pomless_model::Packaging;
use tracing::debug;

use crate::extract::{Identity, read_text};

pub const SYMBOLIC_NAME: &str = "Bundle-SymbolicName";
pub const BUNDLE_VERSION: &str = "Bundle-Version";
pub const BUNDLE_NAME: &str = "Bundle-Name";

/// Main-section headers of a manifest, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    headers: Vec<(String, String)>,
}

impl Manifest {
    /// Parse the main section of a manifest.
    ///
    /// Continuation lines start with a single space. The first blank line
    /// ends the main section; per-entry sections after it are not read.
    pub fn parse(text: &str) -> std::result::Result<Self, String> {
        let mut headers: Vec<(String, String)> = Vec::new();

        for (index, raw) in text.split('\n').enumerate() {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if line.is_empty() {
                if headers.is_empty() {
                    continue;
                }
                break;
            }

            if let Some(rest) = line.strip_prefix(' ') {
                match headers.last_mut() {
                    Some((_, value)) => value.push_str(rest),
                    None => return Err(format!("line {}: continuation without header", index + 1)),
                }
                continue;
            }

            let Some((name, value)) = line.split_once(':') else {
                return Err(format!("line {}: invalid header '{}'", index + 1, line));
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(format!("line {}: empty header name", index + 1));
            }
            headers.push((name.to_string(), value.trim_start().to_string()));
        }

        Ok(Self { headers })
    }

    /// Value of a header, matched case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Symbolic name without directives or attributes (`;singleton:=true`).
    pub fn symbolic_name(&self) -> Option<&str> {
        self.get(SYMBOLIC_NAME)
            .and_then(|value| value.split(';').next())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn version(&self) -> Option<&str> {
        self.get(BUNDLE_VERSION)
            .map(str::trim)
            .filter(|version| !version.is_empty())
    }

    pub fn name(&self) -> Option<&str> {
        self.get(BUNDLE_NAME)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Extract bundle identity from the manifest at `path`.
pub fn extract(path: &Path, is_test_module: bool) -> Result<Identity> {
    let text = read_text(path).map_err(|err| err.with_operation("manifest::extract"))?;
    let manifest = Manifest::parse(&text)
        .map_err(|detail| Error::malformed(path, detail).with_operation("manifest::extract"))?;

    let artifact_id = manifest.symbolic_name().ok_or_else(|| {
        Error::missing_field(
            SYMBOLIC_NAME,
            format!("{} missing in {}", SYMBOLIC_NAME, path.display()),
        )
        .with_operation("manifest::extract")
    })?;
    let version = manifest.version().ok_or_else(|| {
        Error::missing_field(
            BUNDLE_VERSION,
            format!("{} missing in {}", BUNDLE_VERSION, path.display()),
        )
        .with_operation("manifest::extract")
    })?;

    debug!(artifact_id, version, is_test_module, "bundle manifest read");
    Ok(Identity {
        artifact_id: artifact_id.to_string(),
        version: version.to_string(),
        packaging: Packaging::bundle(is_test_module),
        name: manifest.name().map(str::to_string),
        descriptor: path.to_path_buf(),
    })
}
