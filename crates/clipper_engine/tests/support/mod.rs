#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local, TimeZone};
use clipper_engine::{
    ArticleExtractor, FailureKind, FetchError, FetchMetadata, FetchOutput, Fetcher,
    ReadableArticle,
};

/// Canned responses keyed by URL. Unknown URLs answer 404.
#[derive(Default)]
pub struct StubFetcher {
    pages: Mutex<HashMap<String, Result<String, FetchError>>>,
    calls: AtomicUsize,
    user_agents: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn page(self: &Arc<Self>, url: &str, html: &str) -> Arc<Self> {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), Ok(html.to_string()));
        self.clone()
    }

    pub fn fail(self: &Arc<Self>, url: &str, kind: FailureKind) -> Arc<Self> {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), Err(FetchError::new(kind, "stubbed failure")));
        self.clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str, user_agent: &str) -> Result<FetchOutput, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.user_agents.lock().unwrap().push(user_agent.to_string());
        let page = self.pages.lock().unwrap().get(url).cloned();
        match page {
            Some(Ok(html)) => Ok(FetchOutput {
                metadata: FetchMetadata {
                    original_url: url.to_string(),
                    final_url: url.to_string(),
                    status: 200,
                    content_type: Some("text/html; charset=utf-8".to_string()),
                    byte_len: html.len() as u64,
                },
                bytes: html.into_bytes(),
            }),
            Some(Err(err)) => Err(err),
            None => Err(FetchError::new(FailureKind::HttpStatus(404), "not stubbed")),
        }
    }
}

/// Never finds an article.
pub struct NoArticle;

impl ArticleExtractor for NoArticle {
    fn extract(&self, _html: &str, _base_url: &str) -> Option<ReadableArticle> {
        None
    }
}

/// Returns the same article for every page.
pub struct FixedArticle(pub ReadableArticle);

impl ArticleExtractor for FixedArticle {
    fn extract(&self, _html: &str, _base_url: &str) -> Option<ReadableArticle> {
        Some(self.0.clone())
    }
}

pub fn fixed_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
}
