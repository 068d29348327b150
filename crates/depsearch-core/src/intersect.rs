//! Common-dependency computation across a batch of packages.
//!
//! One concurrent upstream fetch per identifier, then a commutative fold:
//! the first list seeds the running result and every later list shrinks it
//! by set intersection. Completion order therefore never affects the result,
//! so the only synchronization needed is waiting for the whole batch.

use crate::error::Result;
use crate::index::PackageIndex;
use futures::future::join_all;
use serde::Deserialize;
use std::collections::HashSet;

/// How dependency paths are compared when intersecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectMode {
    /// Full import paths, compared by literal string equality.
    Raw,
    /// Paths collapsed to `org/repo` form and deduplicated before comparing.
    Human,
}

/// What a failed per-identifier fetch means for the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FetchFailurePolicy {
    /// Abort the batch and surface the upstream error.
    #[default]
    Fail,
    /// Drop the failed identifier from the batch; it no longer constrains
    /// the intersection.
    Skip,
    /// Treat the failure as an empty document. For intersection this
    /// collapses the result to the empty set.
    ZeroValue,
}

impl std::str::FromStr for FetchFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            "zero-value" => Ok(Self::ZeroValue),
            other => Err(format!("unknown fetch failure policy: {other}")),
        }
    }
}

/// Collapses an import path to its first two `/`-delimited segments.
///
/// Idempotent: paths with two or fewer segments come back unchanged.
///
/// # Examples
///
/// ```
/// use depsearch_core::humanize;
///
/// assert_eq!(humanize("org/repo/sub/pkg"), "org/repo");
/// assert_eq!(humanize("org/repo"), "org/repo");
/// ```
pub fn humanize(path: &str) -> String {
    let mut segments = path.splitn(3, '/');
    match (segments.next(), segments.next()) {
        (Some(first), Some(second)) => format!("{}/{}", first, second),
        _ => path.to_string(),
    }
}

/// Removes duplicates, keeping the first occurrence of each element.
fn dedupe(list: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    list.into_iter().filter(|item| seen.insert(item.clone())).collect()
}

/// Keeps the elements of `current` present in `other`, deduplicated.
fn intersect(current: Vec<String>, other: &HashSet<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    current
        .into_iter()
        .filter(|item| other.contains(item) && seen.insert(item.clone()))
        .collect()
}

/// Computes the dependencies shared by every package in `ids`.
///
/// Fetches each package's import list concurrently, then folds the lists by
/// set intersection. An empty batch returns an empty result without any
/// upstream calls; a single-element batch returns that package's list
/// directly (normalized and deduplicated in [`IntersectMode::Human`]).
///
/// The returned list keeps the order of the first successfully fetched
/// list, with duplicates removed once a second list participates.
///
/// # Errors
///
/// Under [`FetchFailurePolicy::Fail`], the first per-identifier fetch error
/// aborts the batch. The other policies degrade instead of erroring.
pub async fn common_imports<I>(
    index: &I,
    ids: &[String],
    mode: IntersectMode,
    policy: FetchFailurePolicy,
) -> Result<Vec<String>>
where
    I: PackageIndex + ?Sized,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let futures: Vec<_> = ids
        .iter()
        .map(|id| async move { (id.as_str(), index.imported_packages(id).await) })
        .collect();

    let mut lists = Vec::with_capacity(ids.len());
    for (id, result) in join_all(futures).await {
        match result {
            Ok(list) => lists.push(list),
            Err(e) => match policy {
                FetchFailurePolicy::Fail => return Err(e),
                FetchFailurePolicy::Skip => {
                    tracing::warn!("dropping {} from batch: {}", id, e);
                }
                FetchFailurePolicy::ZeroValue => {
                    tracing::warn!("treating {} as having no imports: {}", id, e);
                    lists.push(Vec::new());
                }
            },
        }
    }

    let mut lists = lists.into_iter();
    let Some(first) = lists.next() else {
        // every fetch failed under the skip policy
        return Ok(Vec::new());
    };

    let mut result = match mode {
        IntersectMode::Raw => first,
        IntersectMode::Human => dedupe(first.iter().map(|dep| humanize(dep)).collect()),
    };

    for list in lists {
        let other: HashSet<String> = match mode {
            IntersectMode::Raw => list.into_iter().collect(),
            IntersectMode::Human => list.iter().map(|dep| humanize(dep)).collect(),
        };
        result = intersect(result, &other);
    }

    Ok(result)
}
