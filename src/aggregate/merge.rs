//! Summary merging
//!
//! Folds the classified result lines of every worker into one report:
//! a failing-scenario block followed by one merged count line per kind.

use regex::Regex;

use super::classify::{GroupKind, LineClassifier, LineKind};

/// Header prepended to the failing-scenario block
const FAILING_HEADER: &str = "Failing Scenarios:";

/// Canonical status-word priority after the two kind words
const STATUS_ORDER: &[&str] = &["failed", "undefined", "skipped", "pending", "passed"];

/// Merge all workers' result lines into the final report.
///
/// The failing-scenario block and the counts block are joined by a blank
/// line; an absent block is omitted entirely. No classifiable lines at all
/// yields an empty string.
pub fn summarize_results(lines: &[String]) -> String {
    let classifier = LineClassifier::new();
    let blocks: Vec<String> = [
        summarize_failing_scenarios(lines, &classifier),
        summarize_counts(lines, &classifier),
    ]
    .into_iter()
    .flatten()
    .collect();

    blocks.join("\n\n")
}

/// Failing-scenario lines in the order workers reported them, deduplication-
/// free, under a constant header. `None` when no scenario failed.
fn summarize_failing_scenarios(lines: &[String], classifier: &LineClassifier) -> Option<String> {
    let failing: Vec<&str> = lines
        .iter()
        .filter(|line| classifier.classify(line) == LineKind::FailingScenario)
        .map(String::as_str)
        .collect();

    if failing.is_empty() {
        return None;
    }

    let mut block = vec![FAILING_HEADER];
    block.extend(failing);
    Some(block.join("\n"))
}

/// One merged count line per kind, "scenario" before "step", kinds with no
/// lines skipped entirely.
///
/// Cucumber prints two result lines per run that cannot be added to each
/// other:
///   1 scenario (1 failed)
///   1 step (1 failed)
fn summarize_counts(lines: &[String], classifier: &LineClassifier) -> Option<String> {
    let mut rendered = Vec::new();

    for kind in GroupKind::all() {
        let group_lines: Vec<&str> = lines
            .iter()
            .filter(|line| classifier.classify(line) == LineKind::Count { kind })
            .map(String::as_str)
            .collect();

        if group_lines.is_empty() {
            continue;
        }

        let mut sums = sum_up_results(&group_lines);
        sums.sort_by_key(|(word, _)| sort_rank(word, kind));

        let entries: Vec<String> = sums
            .iter()
            .map(|(word, number)| {
                // only the kind's own word ever pluralizes
                let plural = if word == kind.as_str() && *number != 1 {
                    "s"
                } else {
                    ""
                };
                format!("{number} {word}{plural}")
            })
            .collect();

        rendered.push(if entries.len() == 1 {
            entries[0].clone()
        } else {
            format!("{} ({})", entries[0], entries[1..].join(", "))
        });
    }

    if rendered.is_empty() {
        None
    } else {
        Some(rendered.join("\n"))
    }
}

/// Scan every `<number> <word>` pair across the lines of one kind and sum
/// same-named entries, singularized, preserving first-seen order.
///
/// The pattern match guarantees the number token; a token that still fails
/// to parse is a contract violation upstream, so this asserts rather than
/// dropping the line.
fn sum_up_results(lines: &[&str]) -> Vec<(String, u64)> {
    let pair = Regex::new(r"(\d+) (\w+)").unwrap();
    let mut sums: Vec<(String, u64)> = Vec::new();

    for line in lines {
        for captures in pair.captures_iter(line) {
            let number: u64 = captures[1]
                .parse()
                .expect("count line carries a non-integer count token");
            let word = singularize(&captures[2]);

            match sums.iter_mut().find(|(existing, _)| *existing == word) {
                Some((_, total)) => *total += number,
                None => sums.push((word, number)),
            }
        }
    }

    sums
}

fn singularize(word: &str) -> String {
    word.strip_suffix('s').unwrap_or(word).to_string()
}

/// Sort priority within one kind's merged entries: the kind's own word,
/// the other kind's word, then the canonical status words. Unrecognized
/// words sort last, keeping first-seen order (the sort is stable).
fn sort_rank(word: &str, kind: GroupKind) -> usize {
    if word == kind.as_str() {
        return 0;
    }
    if word == kind.other().as_str() {
        return 1;
    }
    STATUS_ORDER
        .iter()
        .position(|status| *status == word)
        .map(|position| position + 2)
        .unwrap_or(usize::MAX)
}
