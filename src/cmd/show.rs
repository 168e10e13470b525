use anyhow::Result;
use std::path::Path;

use crate::pm::{self, OsFamily, PackageManager};
use crate::resolver::SystemPath;
use crate::ui;
use crate::util::resolve_root;

pub fn cmd_exe(log: &ui::Logger, path: Option<&Path>) -> Result<i32> {
    let Some(m) = detect_or_report(log, path)? else {
        return Ok(2);
    };
    println!("{}", m.executable);
    Ok(0)
}

pub fn cmd_lockfile(log: &ui::Logger, path: Option<&Path>) -> Result<i32> {
    let Some(m) = detect_or_report(log, path)? else {
        return Ok(2);
    };
    println!("{}", m.lock_file);
    Ok(0)
}

fn detect_or_report(log: &ui::Logger, path: Option<&Path>) -> Result<Option<PackageManager>> {
    let root = resolve_root(path)?;
    let found = pm::detect(&root, OsFamily::host(), &SystemPath)?;
    if found.is_none() {
        log.errorf(&format!("no package.json in {}", root.display()));
    }
    Ok(found)
}
