use std::path::{Path, PathBuf};

/// Sentinel file whose presence marks the project root.
pub const ROOT_MARKER: &str = "yeetroot.lock";

/// Walk upward from `start` until a directory containing the root marker is
/// found. Returns `None` once the filesystem root is passed without a hit.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(ROOT_MARKER).is_file() {
            return Some(current);
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}
