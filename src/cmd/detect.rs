use anyhow::Result;
use std::path::Path;

use crate::pm::{self, OsFamily};
use crate::resolver::SystemPath;
use crate::ui;
use crate::util::resolve_root;

pub fn cmd_detect(log: &ui::Logger, path: Option<&Path>, json: bool) -> Result<i32> {
    let root = resolve_root(path)?;
    let found = pm::detect(&root, OsFamily::host(), &SystemPath)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&found)?);
        return Ok(0);
    }

    match found {
        Some(m) => println!("{}", m.kind.name()),
        None => {
            log.infof(&format!("no package.json in {}", root.display()));
            println!("(none)");
        }
    }
    Ok(0)
}
