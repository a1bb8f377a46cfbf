use async_trait::async_trait;
use dnslink_domain::{LookupEntry, LookupError};
use std::sync::Arc;

/// Fetches the TXT records published at a domain.
///
/// Implementations must report a missing name as an NXDOMAIN
/// [`dnslink_domain::RCodeError`] so the resolver can fall back from the
/// `_dnslink.` form; an existing name without TXT data is an empty list.
#[async_trait]
pub trait TxtLookup: Send + Sync {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<LookupEntry>, LookupError>;
}

#[async_trait]
impl<T: TxtLookup + ?Sized> TxtLookup for Arc<T> {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<LookupEntry>, LookupError> {
        (**self).lookup_txt(domain).await
    }
}
