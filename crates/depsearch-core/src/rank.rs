//! Popularity ordering for aggregated records.

use crate::error::Result;
use crate::index::{PackageIndex, PackageRecord};
use crate::intersect::FetchFailurePolicy;
use futures::future::join_all;

/// Sorts records by star count, highest first.
///
/// The sort is stable: records tied on popularity keep their incoming
/// order.
pub fn rank_by_popularity(mut records: Vec<PackageRecord>) -> Vec<PackageRecord> {
    records.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    records
}

/// Fetches full records for up to the first `limit` identifiers and ranks
/// them by popularity.
///
/// The lookups run concurrently. A failed lookup follows `policy`: `Fail`
/// aborts, `Skip` drops the identifier, `ZeroValue` keeps a zero-valued
/// record the way the upstream's absent fields would decode.
///
/// # Errors
///
/// Under [`FetchFailurePolicy::Fail`], the first lookup error aborts the
/// whole call.
pub async fn ranked_records<I>(
    index: &I,
    ids: &[String],
    limit: usize,
    policy: FetchFailurePolicy,
) -> Result<Vec<PackageRecord>>
where
    I: PackageIndex + ?Sized,
{
    let futures: Vec<_> = ids
        .iter()
        .take(limit)
        .map(|id| async move { (id.as_str(), index.package_record(id).await) })
        .collect();

    let mut records = Vec::with_capacity(futures.len());
    for (id, result) in join_all(futures).await {
        match result {
            Ok(record) => records.push(record),
            Err(e) => match policy {
                FetchFailurePolicy::Fail => return Err(e),
                FetchFailurePolicy::Skip => {
                    tracing::warn!("dropping record for {}: {}", id, e);
                }
                FetchFailurePolicy::ZeroValue => {
                    tracing::warn!("zero-valued record for {}: {}", id, e);
                    records.push(PackageRecord {
                        name: String::new(),
                        popularity: 0,
                        source_url: String::new(),
                    });
                }
            },
        }
    }

    Ok(rank_by_popularity(records))
}
