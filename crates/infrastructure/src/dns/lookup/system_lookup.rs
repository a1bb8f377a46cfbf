use async_trait::async_trait;
use dnslink_application::ports::TxtLookup;
use dnslink_domain::{decode_txt, LookupEntry, LookupError, RCodeError};
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioResolver;
use tracing::debug;

/// TXT lookups through the host's resolver configuration.
pub struct SystemTxtLookup {
    resolver: TokioResolver,
}

impl SystemTxtLookup {
    /// Reads the system configuration (`/etc/resolv.conf` on Unix).
    pub fn from_system_conf() -> Result<Self, LookupError> {
        let resolver = TokioResolver::builder_tokio()
            .map_err(|e| LookupError::Resolver(e.to_string()))?
            .build();
        Ok(Self { resolver })
    }
}

#[async_trait]
impl TxtLookup for SystemTxtLookup {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<LookupEntry>, LookupError> {
        let fqdn = if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{}.", domain)
        };

        debug!(domain = %fqdn, "Resolving TXT via system resolver");

        match self.resolver.lookup(fqdn.as_str(), RecordType::TXT).await {
            Ok(lookup) => Ok(lookup
                .records()
                .iter()
                .filter_map(|record| match record.data() {
                    RData::TXT(txt) => Some(LookupEntry::new(
                        decode_txt(txt.txt_data()),
                        record.ttl(),
                    )),
                    _ => None,
                })
                .collect()),
            Err(e) if e.is_nx_domain() => Err(RCodeError::nxdomain(domain).into()),
            Err(e) if e.is_no_records_found() => Ok(Vec::new()),
            Err(e) => Err(LookupError::Resolver(e.to_string())),
        }
    }
}
