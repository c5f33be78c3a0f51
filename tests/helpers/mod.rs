use std::path::{Path, PathBuf};

use temp_dir::TempDir;

/// Writes `contents` to `name` inside `dir` and returns its path.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> anyhow::Result<PathBuf> {
    let path = dir.child(name);
    std::fs::write(&path, contents)?;

    Ok(path)
}

pub fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
