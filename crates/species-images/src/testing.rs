//! In-memory backend and fetcher for unit tests

use crate::backend::{FileNaming, MediaPage, TaxonBackend, TaxonMatch};
use crate::error::{HarvestError, Result};
use crate::fetch::ImageFetcher;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub fn taxon(id: u64, accepted_id: u64, name: &str) -> TaxonMatch {
    TaxonMatch {
        id,
        accepted_id,
        scientific_name: name.to_string(),
    }
}

/// Backend answering from fixed tables and recording every query
#[derive(Default)]
pub struct FakeBackend {
    pub exact: HashMap<String, Vec<TaxonMatch>>,
    pub contains: HashMap<String, Vec<TaxonMatch>>,
    /// Media records per taxon id, served in pages of `page_size`
    pub media: HashMap<u64, Vec<Vec<String>>>,
    pub page_size: u32,
    pub naming: FileNaming,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            ..Default::default()
        }
    }

    pub fn with_exact(mut self, name: &str, matches: Vec<TaxonMatch>) -> Self {
        self.exact.insert(name.to_string(), matches);
        self
    }

    pub fn with_contains(mut self, name: &str, matches: Vec<TaxonMatch>) -> Self {
        self.contains.insert(name.to_string(), matches);
        self
    }

    pub fn with_media(mut self, taxon_id: u64, records: Vec<Vec<&str>>) -> Self {
        let records = records
            .into_iter()
            .map(|urls| urls.into_iter().map(str::to_string).collect())
            .collect();
        self.media.insert(taxon_id, records);
        self
    }

    pub fn with_naming(mut self, naming: FileNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl TaxonBackend for FakeBackend {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn file_naming(&self) -> FileNaming {
        self.naming
    }

    async fn lookup_exact(&self, name: &str) -> Result<Vec<TaxonMatch>> {
        self.record(format!("exact:{}", name));
        Ok(self.exact.get(name).cloned().unwrap_or_default())
    }

    async fn lookup_contains(&self, name: &str) -> Result<Vec<TaxonMatch>> {
        self.record(format!("contains:{}", name));
        Ok(self.contains.get(name).cloned().unwrap_or_default())
    }

    async fn media_page(&self, taxon_id: u64, offset: u64, limit: u32) -> Result<MediaPage> {
        self.record(format!("media:{}:{}:{}", taxon_id, offset, limit));
        let all = self.media.get(&taxon_id).cloned().unwrap_or_default();
        let start = (offset as usize).min(all.len());
        let end = start.saturating_add(limit as usize).min(all.len());
        Ok(MediaPage {
            records: all[start..end].to_vec(),
            total: all.len() as u64,
        })
    }
}

/// Fetcher serving bytes derived from the URL; listed URLs fail
#[derive(Default)]
pub struct FakeFetcher {
    pub failing: HashSet<String>,
    pub fetched: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn failing(urls: &[&str]) -> Self {
        Self {
            failing: urls.iter().map(|u| u.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.fetched.lock().unwrap().push(url.to_string());
        if self.failing.contains(url) {
            return Err(HarvestError::Io(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("connection refused: {}", url),
            ))));
        }
        Ok(format!("bytes of {}", url).into_bytes())
    }
}
