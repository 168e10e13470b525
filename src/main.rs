use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod cli;
mod cmd;
mod pm;
mod resolver;
mod ui;
mod util;

use cli::{Cli, Cmd, USAGE_TEXT};
use cmd::{cmd_detect, cmd_exe, cmd_lockfile};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("[whichpm] ERROR: {e}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<i32> {
    let log = ui::Logger;

    let cli = Cli::parse();
    let Some(cmd) = cli.cmd else {
        eprintln!("{USAGE_TEXT}");
        return Ok(2);
    };

    match cmd {
        Cmd::Help => {
            print!("{USAGE_TEXT}");
            Ok(0)
        }

        Cmd::Detect { path, json } => cmd_detect(&log, path.as_deref(), json),

        Cmd::Exe { path } => cmd_exe(&log, path.as_deref()),

        Cmd::Lockfile { path } => cmd_lockfile(&log, path.as_deref()),
    }
}
