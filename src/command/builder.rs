//! Command line composition
//!
//! Assembles the shell command line for one worker and handles the
//! profile and color option merging.

use std::io::IsTerminal;
use std::path::PathBuf;

use regex::Regex;

use super::executable::resolve_executable;
use crate::config::profile_from_config;
use crate::models::RunOptions;

/// Relative path of the runtime log consumed for future grouping decisions.
/// Written by the invoked executable, never by this tool.
pub const RUNTIME_LOG: &str = "tmp/parallel_runtime_cucumber.log";

/// Builds one shell command line per worker.
///
/// Stateless per call apart from the project root it was created with;
/// callers hold one builder per working directory.
pub struct CommandBuilder {
    project_root: PathBuf,
    short_profile: Regex,
}

impl CommandBuilder {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            short_profile: Regex::new(r"(^|\s)-p ").unwrap(),
        }
    }

    /// Assemble the command line for one worker's feature files.
    ///
    /// Fixed segment order: executable, runtime-log flags (when requested),
    /// merged test options, then each feature path individually escaped.
    /// Absent or empty segments are dropped before joining.
    pub fn build(&self, features: &[PathBuf], options: &RunOptions) -> String {
        let mut segments = vec![resolve_executable(&self.project_root)];

        if let Some(logging) = self.runtime_logging() {
            segments.push(logging);
        }
        if let Some(opts) = self.cucumber_opts(options.test_options.as_deref()) {
            segments.push(opts);
        }
        for feature in features {
            segments.push(shell_words::quote(&feature.to_string_lossy()).into_owned());
        }

        segments.retain(|segment| !segment.is_empty());
        segments.join(" ")
    }

    /// Runtime-log format flags, included only when the log's parent
    /// directory already exists. The directory is never created here.
    fn runtime_logging(&self) -> Option<String> {
        let parent = self.project_root.join(RUNTIME_LOG);
        let parent = parent.parent()?;
        parent
            .is_dir()
            .then(|| format!("--format usage --out {RUNTIME_LOG}"))
    }

    /// Merge the user's test options with a discovered profile flag.
    ///
    /// An explicit profile selector anywhere in the string (`--profile`, or
    /// `-p ` at the start or after whitespace) passes the options through
    /// unmodified. The substring match is intentionally permissive;
    /// downstream tooling relies on it.
    fn cucumber_opts(&self, given: Option<&str>) -> Option<String> {
        if let Some(given) = given {
            if given.contains("--profile") || self.short_profile.is_match(given) {
                return Some(given.to_string());
            }
        }

        match (given, profile_from_config(&self.project_root)) {
            (Some(given), Some(profile)) => Some(format!("{given} {profile}")),
            (Some(given), None) => Some(given.to_string()),
            (None, Some(profile)) => Some(profile.to_string()),
            (None, None) => None,
        }
    }

    /// When stdout is attached to a terminal, return an augmented copy of
    /// the options that forces colorized child output. Color auto-detection
    /// inside a piped subprocess would otherwise disable it. The command
    /// line itself is never altered.
    pub fn forward_color(&self, options: &RunOptions) -> RunOptions {
        self.forward_color_if(options, std::io::stdout().is_terminal())
    }

    fn forward_color_if(&self, options: &RunOptions, tty: bool) -> RunOptions {
        if tty {
            options.clone().with_env("AUTOTEST", "1")
        } else {
            options.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn features(paths: &[&str]) -> Vec<PathBuf> {
        paths.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_bare_command_line() {
        let dir = tempdir().unwrap();
        let builder = CommandBuilder::new(dir.path());

        let cmd = builder.build(
            &features(&["features/login.feature"]),
            &RunOptions::new(),
        );
        assert_eq!(cmd, "cucumber features/login.feature");
    }

    #[test]
    fn test_paths_with_metacharacters_round_trip() {
        let dir = tempdir().unwrap();
        let builder = CommandBuilder::new(dir.path());
        let tricky = "features/log in & pay$.feature";

        let cmd = builder.build(&features(&[tricky]), &RunOptions::new());

        let tokens = shell_words::split(&cmd).unwrap();
        assert_eq!(tokens, vec!["cucumber".to_string(), tricky.to_string()]);
    }

    #[test]
    fn test_runtime_logging_only_when_parent_exists() {
        let dir = tempdir().unwrap();
        let builder = CommandBuilder::new(dir.path());
        let cmd = builder.build(&features(&["a.feature"]), &RunOptions::new());
        assert!(!cmd.contains("--format usage"));

        fs::create_dir(dir.path().join("tmp")).unwrap();
        let cmd = builder.build(&features(&["a.feature"]), &RunOptions::new());
        assert_eq!(
            cmd,
            format!("cucumber --format usage --out {RUNTIME_LOG} a.feature")
        );
    }

    #[test]
    fn test_test_options_are_passed_through() {
        let dir = tempdir().unwrap();
        let builder = CommandBuilder::new(dir.path());
        let options = RunOptions::new().with_test_options("--tags @smoke");

        let cmd = builder.build(&features(&["a.feature"]), &options);
        assert_eq!(cmd, "cucumber --tags @smoke a.feature");
    }

    #[test]
    fn test_profile_discovery_appends_parallel_profile() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cucumber.yml"), "parallel: --format progress\n").unwrap();
        let builder = CommandBuilder::new(dir.path());

        let cmd = builder.build(&features(&["a.feature"]), &RunOptions::new());
        assert_eq!(cmd, "cucumber --profile parallel a.feature");

        let options = RunOptions::new().with_test_options("--tags @smoke");
        let cmd = builder.build(&features(&["a.feature"]), &options);
        assert_eq!(cmd, "cucumber --tags @smoke --profile parallel a.feature");
    }

    #[test]
    fn test_explicit_profile_suppresses_discovery() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cucumber.yml"), "parallel: --format progress\n").unwrap();
        let builder = CommandBuilder::new(dir.path());

        for given in ["--profile foo", "-p foo", "--tags @x -p foo"] {
            let options = RunOptions::new().with_test_options(given);
            let cmd = builder.build(&features(&["a.feature"]), &options);
            assert_eq!(cmd, format!("cucumber {given} a.feature"));
        }
    }

    #[test]
    fn test_short_profile_requires_trailing_space() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cucumber.yml"), "parallel: --format progress\n").unwrap();
        let builder = CommandBuilder::new(dir.path());

        // a trailing "-p" with no space after it is not a profile selector
        let options = RunOptions::new().with_test_options("--tags @x -p");
        let cmd = builder.build(&features(&["a.feature"]), &options);
        assert_eq!(cmd, "cucumber --tags @x -p --profile parallel a.feature");
    }

    #[test]
    fn test_no_double_spaces_in_command() {
        let dir = tempdir().unwrap();
        let builder = CommandBuilder::new(dir.path());
        let options = RunOptions::new().with_test_options("");

        let cmd = builder.build(&features(&["a.feature"]), &options);
        assert!(!cmd.contains("  "), "double space in: {cmd}");
    }

    #[test]
    fn test_color_forwarding_augments_a_copy() {
        let dir = tempdir().unwrap();
        let builder = CommandBuilder::new(dir.path());
        let options = RunOptions::new();

        let augmented = builder.forward_color_if(&options, true);
        assert!(augmented.has_env("AUTOTEST"));
        assert!(options.env.is_empty());

        // command line is unaffected by the color env
        let cmd = builder.build(&features(&["a.feature"]), &augmented);
        assert_eq!(cmd, "cucumber a.feature");

        let untouched = builder.forward_color_if(&options, false);
        assert!(!untouched.has_env("AUTOTEST"));
    }
}
