//! Search with per-hit popularity enrichment.

use crate::error::{CoreError, Result};
use crate::index::{EnrichedHit, PackageIndex};
use crate::intersect::FetchFailurePolicy;
use futures::future::join_all;

/// Searches the index and joins every retained hit with its star count.
///
/// Issues one search call plus one lookup per retained hit, so at most
/// `1 + limit` upstream calls. The lookups run concurrently; output order is
/// the search's relevance order, not popularity order.
///
/// A failed per-hit lookup follows `policy`: `Fail` aborts, `Skip` drops the
/// hit, `ZeroValue` keeps it with a popularity of zero.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] for an empty query, and any upstream
/// error from the search call itself.
pub async fn search_and_enrich<I>(
    index: &I,
    query: &str,
    limit: usize,
    policy: FetchFailurePolicy,
) -> Result<Vec<EnrichedHit>>
where
    I: PackageIndex + ?Sized,
{
    if query.is_empty() {
        return Err(CoreError::InvalidInput("query".into()));
    }

    let hits = index.search(query, limit).await?;

    // The index may return more rows than asked for; the cap is ours to hold.
    let futures: Vec<_> = hits
        .into_iter()
        .take(limit)
        .map(|hit| async move {
            let record = index.package_record(&hit.name).await;
            (hit, record)
        })
        .collect();

    let mut enriched = Vec::with_capacity(futures.len());
    for (hit, record) in join_all(futures).await {
        match record {
            Ok(record) => enriched.push(EnrichedHit {
                name: hit.name,
                author: hit.author,
                popularity: record.popularity,
            }),
            Err(e) => match policy {
                FetchFailurePolicy::Fail => return Err(e),
                FetchFailurePolicy::Skip => {
                    tracing::warn!("dropping hit {}: {}", hit.name, e);
                }
                FetchFailurePolicy::ZeroValue => {
                    tracing::warn!("no star count for {}: {}", hit.name, e);
                    enriched.push(EnrichedHit {
                        name: hit.name,
                        author: hit.author,
                        popularity: 0,
                    });
                }
            },
        }
    }

    Ok(enriched)
}
