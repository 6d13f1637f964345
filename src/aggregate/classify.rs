//! Output line classification
//!
//! Tags each raw worker line as a count line, a failing-scenario line, or
//! passthrough noise.

use regex::Regex;

/// The two non-additive result categories cucumber reports per run.
///
/// A scenario total and a step total are semantically distinct and are never
/// summed together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupKind {
    Scenario,
    Step,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupKind::Scenario => "scenario",
            GroupKind::Step => "step",
        }
    }

    /// The kind that is not `self`
    pub fn other(&self) -> GroupKind {
        match self {
            GroupKind::Scenario => GroupKind::Step,
            GroupKind::Step => GroupKind::Scenario,
        }
    }

    /// Both kinds, in report order
    pub fn all() -> [GroupKind; 2] {
        [GroupKind::Scenario, GroupKind::Step]
    }
}

/// Classification of a single output line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Leading unsigned integer followed by "step(s)" or "scenario(s)"
    Count { kind: GroupKind },
    /// Failed scenario location, e.g. `cucumber features/login.feature:12`
    FailingScenario,
    /// Anything else; echoed but excluded from the summary
    Other,
}

/// Two-pattern line matcher.
///
/// The count pattern is checked before the failing-scenario pattern so a
/// line can never be counted twice.
pub struct LineClassifier {
    counts: Regex,
    failing: Regex,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self {
            counts: Regex::new(r"^\d+ (steps?|scenarios?)").unwrap(),
            failing: Regex::new(r"^cucumber features/.+:\d+").unwrap(),
        }
    }

    /// Classify one raw line.
    pub fn classify(&self, line: &str) -> LineKind {
        if let Some(captures) = self.counts.captures(line) {
            let kind = if captures[1].starts_with("step") {
                GroupKind::Step
            } else {
                GroupKind::Scenario
            };
            return LineKind::Count { kind };
        }
        if self.failing.is_match(line) {
            return LineKind::FailingScenario;
        }
        LineKind::Other
    }

    /// Whether the line feeds the summarizer at all.
    pub fn is_result_line(&self, line: &str) -> bool {
        self.classify(line) != LineKind::Other
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_lines_both_kinds() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("12 scenarios (3 failed, 9 passed)"),
            LineKind::Count {
                kind: GroupKind::Scenario
            }
        );
        assert_eq!(
            classifier.classify("1 step (1 failed)"),
            LineKind::Count {
                kind: GroupKind::Step
            }
        );
    }

    #[test]
    fn test_singular_and_plural_match_same_kind() {
        let classifier = LineClassifier::new();
        for line in ["1 scenario (1 passed)", "2 scenarios (2 passed)"] {
            assert_eq!(
                classifier.classify(line),
                LineKind::Count {
                    kind: GroupKind::Scenario
                }
            );
        }
    }

    #[test]
    fn test_failing_scenario_line() {
        let classifier = LineClassifier::new();
        assert_eq!(
            classifier.classify("cucumber features/login.feature:12 # Scenario: bad password"),
            LineKind::FailingScenario
        );
    }

    #[test]
    fn test_noise_is_other() {
        let classifier = LineClassifier::new();
        assert_eq!(classifier.classify("Feature: Login"), LineKind::Other);
        assert_eq!(classifier.classify(""), LineKind::Other);
        assert_eq!(classifier.classify("steps 12"), LineKind::Other);
        // count must start the line
        assert_eq!(classifier.classify(" 3 steps (3 passed)"), LineKind::Other);
    }

    #[test]
    fn test_result_line_predicate() {
        let classifier = LineClassifier::new();
        assert!(classifier.is_result_line("3 steps (3 passed)"));
        assert!(classifier.is_result_line("cucumber features/a.feature:1"));
        assert!(!classifier.is_result_line("Using the default profile..."));
    }

    #[test]
    fn test_kind_helpers() {
        assert_eq!(GroupKind::Scenario.other(), GroupKind::Step);
        assert_eq!(GroupKind::Step.as_str(), "step");
        assert_eq!(GroupKind::all()[0], GroupKind::Scenario);
    }
}
