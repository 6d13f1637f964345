//! Step-count grouping
//!
//! Weighs a feature file by the number of Gherkin step lines it contains,
//! so features with many short scenarios spread as evenly as long ones.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

use super::GroupingStrategy;

pub struct StepGrouper {
    step: Regex,
}

impl StepGrouper {
    pub fn new() -> Self {
        Self {
            step: Regex::new(r"^\s*(Given|When|Then|And|But|\*)\s").unwrap(),
        }
    }

    fn count_steps(&self, contents: &str) -> u64 {
        contents
            .lines()
            .filter(|line| self.step.is_match(line))
            .count() as u64
    }
}

impl GroupingStrategy for StepGrouper {
    fn name(&self) -> &'static str {
        "steps"
    }

    fn weigh(&self, file: &Path) -> Result<u64> {
        let contents = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read feature file: {}", file.display()))?;
        Ok(self.count_steps(&contents))
    }
}

impl Default for StepGrouper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const FEATURE: &str = "\
Feature: Login

  Scenario: Successful login
    Given a registered user
    When they sign in with valid credentials
    Then they see the dashboard
    And a welcome banner appears

  Scenario: Bad password
    Given a registered user
    When they sign in with a wrong password
    Then they see an error
    * the account is not locked
";

    #[test]
    fn test_counts_step_keywords_only() {
        let grouper = StepGrouper::new();
        assert_eq!(grouper.count_steps(FEATURE), 8);
    }

    #[test]
    fn test_keywords_need_a_following_word() {
        let grouper = StepGrouper::new();
        // prose mentioning a keyword mid-line does not count
        assert_eq!(grouper.count_steps("  # Given this is a comment? no:\n"), 0);
        assert_eq!(grouper.count_steps("Whenever something\n"), 0);
        assert_eq!(grouper.count_steps("Given\n"), 0);
    }

    #[test]
    fn test_weighs_a_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("login.feature");
        fs::write(&path, FEATURE).unwrap();

        let grouper = StepGrouper::new();
        assert_eq!(grouper.weigh(&path).unwrap(), 8);
    }
}
