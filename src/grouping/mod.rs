//! Feature discovery and grouping
//!
//! Collects `.feature` files and splits them into balanced groups, one per
//! worker process.

mod steps;

pub use steps::StepGrouper;

use anyhow::{ensure, Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// File extension of a cucumber feature file
const FEATURE_SUFFIX: &str = "feature";

/// One worker's share of the feature files.
#[derive(Clone, Debug, Default)]
pub struct FeatureGroup {
    pub files: Vec<PathBuf>,
    pub weight: u64,
}

/// Seam for weighing a feature file when balancing groups.
///
/// The step-count strategy lives behind this trait so the default size
/// strategy never reads file contents.
pub trait GroupingStrategy {
    fn name(&self) -> &'static str;
    fn weigh(&self, file: &Path) -> Result<u64>;
}

/// Default strategy: balance groups by file byte size.
pub struct SizeGrouper;

impl GroupingStrategy for SizeGrouper {
    fn name(&self) -> &'static str {
        "size"
    }

    fn weigh(&self, file: &Path) -> Result<u64> {
        let metadata = std::fs::metadata(file)
            .with_context(|| format!("Failed to stat feature file: {}", file.display()))?;
        Ok(metadata.len())
    }
}

/// Grouping mode selected on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupBy {
    Size,
    Steps,
}

impl GroupBy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "size" => Some(GroupBy::Size),
            "steps" => Some(GroupBy::Steps),
            _ => None,
        }
    }

    pub fn strategy(&self) -> Box<dyn GroupingStrategy> {
        match self {
            GroupBy::Size => Box::new(SizeGrouper),
            GroupBy::Steps => Box::new(StepGrouper::new()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Size => "size",
            GroupBy::Steps => "steps",
        }
    }
}

/// Collect feature files from the given paths.
///
/// Directories are searched recursively for `.feature` files; explicit file
/// paths are taken as given. The result is sorted and deduplicated so group
/// assignment is deterministic.
pub fn find_feature_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut features = Vec::new();

    for path in paths {
        if path.is_dir() {
            collect_features(path, &mut features)?;
        } else if path.is_file() {
            features.push(path.clone());
        } else {
            warn!("Skipping missing path: {}", path.display());
        }
    }

    features.sort();
    features.dedup();
    Ok(features)
}

fn collect_features(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<_>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            collect_features(&path, out)?;
        } else if path
            .extension()
            .map(|ext| ext == FEATURE_SUFFIX)
            .unwrap_or(false)
        {
            out.push(path);
        }
    }

    Ok(())
}

/// Assign files into `count` balanced groups: heaviest file first, each
/// into the currently lightest group. Ties break toward the lower group
/// index, so the assignment is deterministic.
pub fn in_even_groups(
    files: &[PathBuf],
    count: usize,
    strategy: &dyn GroupingStrategy,
) -> Result<Vec<FeatureGroup>> {
    ensure!(count > 0, "at least one worker process is required");

    let mut weighed: Vec<(PathBuf, u64)> = files
        .iter()
        .map(|file| strategy.weigh(file).map(|weight| (file.clone(), weight)))
        .collect::<Result<_>>()?;
    weighed.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut groups = vec![FeatureGroup::default(); count];
    for (file, weight) in weighed {
        let lightest = groups
            .iter_mut()
            .min_by_key(|group| group.weight)
            .expect("group count is non-zero");
        lightest.files.push(file);
        lightest.weight += weight;
    }

    Ok(groups)
}
