//! Executable resolution
//!
//! Picks which cucumber invocation to use for the current project.

use std::path::Path;

/// Resolve the cucumber invocation, probing in strict priority order:
/// the project's wrapper script, a Bundler-managed invocation, the legacy
/// script location, then the bare name left to the spawn-time search path.
///
/// The order matters: later fallbacks can silently succeed with a different
/// binary, so the first match always wins. A project with none of the
/// candidates still gets the bare name; "command not found" surfaces at
/// spawn time, not here.
pub fn resolve_executable(project_root: &Path) -> String {
    if project_root.join("bin/cucumber").exists() {
        "bin/cucumber".to_string()
    } else if bundler_enabled(project_root) {
        "bundle exec cucumber".to_string()
    } else if project_root.join("script/cucumber").is_file() {
        "script/cucumber".to_string()
    } else {
        "cucumber".to_string()
    }
}

/// A project-level Gemfile (or gems.rb) makes Bundler the active
/// dependency manager.
fn bundler_enabled(project_root: &Path) -> bool {
    ["Gemfile", "gems.rb"]
        .iter()
        .any(|name| project_root.join(name).exists())
}
