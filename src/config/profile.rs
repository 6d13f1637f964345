//! Cucumber profile discovery
//!
//! Probes the project's cucumber config files for a `parallel:` profile.

use std::path::Path;

/// Candidate config locations, config-dir variants before the bare root,
/// `.yml` before `.yaml`.
const PROFILE_LOCATIONS: &[&str] = &[
    ".config/cucumber.yml",
    ".config/cucumber.yaml",
    "config/cucumber.yml",
    "config/cucumber.yaml",
    "cucumber.yml",
    "cucumber.yaml",
];

/// Return the `--profile parallel` flag when the first existing cucumber
/// config under `project_root` defines a `parallel:` profile.
///
/// No config file, or a config without the profile, is not an error; the
/// caller passes its options through unchanged.
pub fn profile_from_config(project_root: &Path) -> Option<&'static str> {
    let config = PROFILE_LOCATIONS
        .iter()
        .map(|candidate| project_root.join(candidate))
        .find(|path| path.exists())?;

    let contents = std::fs::read_to_string(config).ok()?;
    contents
        .lines()
        .any(|line| line.starts_with("parallel:"))
        .then_some("--profile parallel")
}
