//! Pre-flight lookup of the converter executable

use std::path::PathBuf;

/// Resolves an executable name to a path.
///
/// Production code searches `PATH`; tests substitute a fixed answer.
pub trait DependencyLocator {
    fn locate(&self, program: &str) -> Option<PathBuf>;
}

/// Searches the directories listed in `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PathLocator;

impl DependencyLocator for PathLocator {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

impl<L: DependencyLocator + ?Sized> DependencyLocator for &L {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        (**self).locate(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_program_not_found() {
        let locator = PathLocator;
        assert!(locator
            .locate("tex2html-definitely-not-installed-7f3a")
            .is_none());
    }
}
