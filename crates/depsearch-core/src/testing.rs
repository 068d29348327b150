//! In-memory [`PackageIndex`] stub for aggregation tests.

use crate::error::{CoreError, Result};
use crate::index::{PackageIndex, PackageRecord, SearchHit};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub(crate) struct StubIndex {
    pub imports: HashMap<String, Vec<String>>,
    pub records: HashMap<String, PackageRecord>,
    pub hits: Vec<SearchHit>,
    pub failing: HashSet<String>,
    pub fail_search: bool,
    calls: AtomicUsize,
}

impl StubIndex {
    pub fn with_imports(entries: &[(&str, &[&str])]) -> Self {
        let imports = entries
            .iter()
            .map(|(id, deps)| {
                (
                    (*id).to_string(),
                    deps.iter().map(|d| (*d).to_string()).collect(),
                )
            })
            .collect();

        Self {
            imports,
            ..Self::default()
        }
    }

    pub fn with_hits(hits: &[(&str, &str)]) -> Self {
        let hits = hits
            .iter()
            .map(|(name, author)| SearchHit {
                name: (*name).to_string(),
                author: (*author).to_string(),
            })
            .collect();

        Self {
            hits,
            ..Self::default()
        }
    }

    pub fn record(mut self, name: &str, popularity: i64) -> Self {
        self.records.insert(
            name.to_string(),
            PackageRecord {
                name: name.to_string(),
                popularity,
                source_url: format!("https://{name}"),
            },
        );
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn failure(id: &str) -> CoreError {
        CoreError::Status {
            url: format!("stub://{id}"),
            status: 500,
        }
    }
}

#[async_trait]
impl PackageIndex for StubIndex {
    async fn imported_packages(&self, id: &str) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(id) {
            return Err(Self::failure(id));
        }
        Ok(self.imports.get(id).cloned().unwrap_or_default())
    }

    async fn package_record(&self, id: &str) -> Result<PackageRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(id) {
            return Err(Self::failure(id));
        }
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| Self::failure(id))
    }

    async fn search(&self, query: &str, _limit: usize) -> Result<Vec<SearchHit>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_search {
            return Err(Self::failure(query));
        }
        // Deliberately ignores `limit` so callers must enforce their cap.
        Ok(self.hits.clone())
    }
}
