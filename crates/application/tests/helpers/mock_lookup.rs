#![allow(dead_code)]

use async_trait::async_trait;
use dnslink_application::ports::TxtLookup;
use dnslink_domain::{LookupEntry, LookupError, RCodeError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Table-backed lookup; unknown names answer NXDOMAIN.
#[derive(Clone)]
pub struct MockTxtLookup {
    records: Arc<RwLock<HashMap<String, Vec<LookupEntry>>>>,
    errors: Arc<RwLock<HashMap<String, LookupError>>>,
    queries: Arc<RwLock<Vec<String>>>,
}

impl MockTxtLookup {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            errors: Arc::new(RwLock::new(HashMap::new())),
            queries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn set_records(&self, domain: &str, values: &[&str], ttl: u32) {
        let entries = values
            .iter()
            .map(|value| LookupEntry::new(*value, ttl))
            .collect();
        self.records
            .write()
            .await
            .insert(domain.to_string(), entries);
    }

    pub async fn set_entries(&self, domain: &str, entries: Vec<LookupEntry>) {
        self.records
            .write()
            .await
            .insert(domain.to_string(), entries);
    }

    pub async fn set_error(&self, domain: &str, error: LookupError) {
        self.errors.write().await.insert(domain.to_string(), error);
    }

    pub async fn queries(&self) -> Vec<String> {
        self.queries.read().await.clone()
    }
}

impl Default for MockTxtLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TxtLookup for MockTxtLookup {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<LookupEntry>, LookupError> {
        self.queries.write().await.push(domain.to_string());

        if let Some(error) = self.errors.read().await.get(domain) {
            return Err(error.clone());
        }

        self.records
            .read()
            .await
            .get(domain)
            .cloned()
            .ok_or_else(|| RCodeError::nxdomain(domain).into())
    }
}
