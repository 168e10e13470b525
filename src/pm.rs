use anyhow::{bail, Result};
use serde::Serialize;
use std::path::Path;

use crate::resolver::ExecutableResolver;

const MANIFEST: &str = "package.json";

/// Which package manager family a project uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerKind {
    Npm,
    Yarn,
}

impl PackageManagerKind {
    pub fn name(self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "npm",
            PackageManagerKind::Yarn => "yarn",
        }
    }

    pub fn descriptor(self, os: OsFamily) -> PackageManager {
        match self {
            PackageManagerKind::Npm => PackageManager {
                kind: self,
                lock_file: "package-lock.json",
                executable: match os {
                    OsFamily::Unix => "npm",
                    OsFamily::Windows => "npm.cmd",
                },
            },
            PackageManagerKind::Yarn => PackageManager {
                kind: self,
                lock_file: "yarn.lock",
                executable: match os {
                    OsFamily::Unix => "yarn",
                    OsFamily::Windows => "yarn.cmd",
                },
            },
        }
    }
}

/// Host OS family. Only affects executable names (`.cmd` shims on Windows).
/// Passed explicitly so descriptor tables are testable on any host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OsFamily {
    Unix,
    Windows,
}

impl OsFamily {
    pub fn host() -> OsFamily {
        if cfg!(windows) {
            OsFamily::Windows
        } else {
            OsFamily::Unix
        }
    }
}

/// A package manager together with the lock file and executable that go with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManager {
    #[serde(rename = "packageManager")]
    pub kind: PackageManagerKind,
    pub lock_file: &'static str,
    pub executable: &'static str,
}

/// Decide which package manager governs `root`, preferring yarn over npm:
/// a yarn.lock plus a yarn executable on PATH selects yarn; otherwise a
/// package-lock.json selects npm (no executable check on that branch);
/// otherwise yarn on PATH wins; npm is the universal fallback.
///
/// A directory without package.json yields `Ok(None)`. The only error is a
/// `root` that does not exist.
pub fn detect(
    root: &Path,
    os: OsFamily,
    resolver: &dyn ExecutableResolver,
) -> Result<Option<PackageManager>> {
    if !root.exists() {
        bail!("root path {} does not exist", root.display());
    }

    if !root.join(MANIFEST).exists() {
        return Ok(None);
    }

    let yarn = PackageManagerKind::Yarn.descriptor(os);
    let npm = PackageManagerKind::Npm.descriptor(os);

    // The yarn.lock branch and the no-lock-file fallback ask the same
    // question; remember the answer so one detection issues at most one
    // PATH search.
    let mut yarn_on_path: Option<bool> = None;

    if root.join(yarn.lock_file).exists() {
        let found = resolver.resolve(yarn.executable).is_some();
        yarn_on_path = Some(found);
        if found {
            return Ok(Some(yarn));
        }
    }

    if root.join(npm.lock_file).exists() {
        return Ok(Some(npm));
    }

    // No lock file decided it.
    let yarn_on_path =
        yarn_on_path.unwrap_or_else(|| resolver.resolve(yarn.executable).is_some());
    Ok(Some(if yarn_on_path { yarn } else { npm }))
}
