use async_trait::async_trait;
use dnslink_application::ports::TxtLookup;
use dnslink_domain::{LookupEntry, LookupError};
use std::time::Duration;

/// Bounds every lookup of the wrapped capability by `timeout`.
pub struct DeadlineTxtLookup<L> {
    inner: L,
    timeout: Duration,
}

impl<L: TxtLookup> DeadlineTxtLookup<L> {
    pub fn new(inner: L, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<L: TxtLookup> TxtLookup for DeadlineTxtLookup<L> {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<LookupEntry>, LookupError> {
        tokio::time::timeout(self.timeout, self.inner.lookup_txt(domain))
            .await
            .map_err(|_| LookupError::Timeout {
                domain: domain.to_string(),
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            })?
    }
}
