use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// An explicit path wins; otherwise substitute the process working
/// directory. Detection itself never reads ambient process state, so the
/// substitution lives here at the command layer.
pub fn resolve_root(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => env::current_dir().context("resolve current directory"),
    }
}
