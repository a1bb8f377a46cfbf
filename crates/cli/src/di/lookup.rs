use dnslink_application::ports::TxtLookup;
use dnslink_domain::config::LookupConfig;
use dnslink_infrastructure::dns::{DeadlineTxtLookup, SystemTxtLookup, UdpTxtLookup};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Builds the TXT lookup: UDP against the configured servers, or the host
/// resolver when none are set, bounded by the configured timeout.
pub async fn build_lookup(config: &LookupConfig) -> anyhow::Result<Arc<dyn TxtLookup>> {
    let lookup: Arc<dyn TxtLookup> = if config.servers.is_empty() {
        debug!("Using system resolver for TXT lookups");
        Arc::new(SystemTxtLookup::from_system_conf()?)
    } else {
        debug!(servers = ?config.servers, udp_size = config.udp_size, "Using UDP TXT lookups");
        Arc::new(UdpTxtLookup::from_strings(&config.servers, config.udp_size).await?)
    };

    if config.timeout_ms == 0 {
        return Ok(lookup);
    }

    Ok(Arc::new(DeadlineTxtLookup::new(
        lookup,
        Duration::from_millis(config.timeout_ms),
    )))
}
