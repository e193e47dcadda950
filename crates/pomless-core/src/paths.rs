//! Absolute, lexically normalized paths.

use std::io;
use std::path::{Component, Path, PathBuf};

/// `path` made absolute with `.` and `..` folded away.
///
/// Purely lexical: symlinks are not resolved and nothing has to exist.
pub fn absolute(path: &Path) -> io::Result<PathBuf> {
    Ok(normalize(&std::path::absolute(path)?))
}

/// Fold `.` and `..` components. `..` at the root stays at the root.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component);
            }
        }
    }
    normalized
}
