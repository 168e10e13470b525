use std::path::PathBuf;

/// Resolves a bare executable name against the system's search path.
///
/// Implementations never fail: anything that prevents resolution (not on
/// PATH, PATH unset, unreadable entry) is a plain "not found".
pub trait ExecutableResolver {
    fn resolve(&self, name: &str) -> Option<PathBuf>;
}

/// PATH-backed resolver used outside of tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemPath;

impl ExecutableResolver for SystemPath {
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}
