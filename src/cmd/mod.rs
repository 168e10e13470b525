mod detect;
mod show;

pub use detect::cmd_detect;
pub use show::{cmd_exe, cmd_lockfile};
