use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use crate::dns::transport::UdpTransport;
use async_trait::async_trait;
use dnslink_application::ports::TxtLookup;
use dnslink_domain::config::{parse_server, split_host_port};
use dnslink_domain::{LookupEntry, LookupError};
use std::net::SocketAddr;
use tokio::net::lookup_host;
use tracing::{debug, warn};

/// Smallest receive buffer, the RFC 1035 UDP limit.
const MIN_UDP_BUFFER: usize = 512;

/// Queries TXT records over plain UDP against a fixed server list.
///
/// Each lookup goes to one server picked uniformly at random; a failure from
/// that server is returned as-is.
pub struct UdpTxtLookup {
    servers: Vec<SocketAddr>,
    udp_size: u16,
}

impl UdpTxtLookup {
    pub fn new(servers: Vec<SocketAddr>, udp_size: u16) -> Result<Self, LookupError> {
        if servers.is_empty() {
            return Err(LookupError::NoServers);
        }
        Ok(Self { servers, udp_size })
    }

    /// Builds the server list from `host:port` or bare `host` (port 53)
    /// strings. Names are resolved once, keeping every address they map to.
    pub async fn from_strings(servers: &[String], udp_size: u16) -> Result<Self, LookupError> {
        let mut addrs = Vec::with_capacity(servers.len());
        for server in servers {
            if let Some(addr) = parse_server(server) {
                addrs.push(addr);
                continue;
            }

            let (host, port) = split_host_port(server)
                .ok_or_else(|| LookupError::InvalidServer(server.clone()))?;
            let resolved: Vec<SocketAddr> = lookup_host((host.as_str(), port))
                .await
                .map_err(|e| {
                    debug!(server = %server, error = %e, "Failed to resolve DNS server");
                    LookupError::InvalidServer(server.clone())
                })?
                .collect();
            if resolved.is_empty() {
                return Err(LookupError::InvalidServer(server.clone()));
            }

            debug!(server = %server, addrs = ?resolved, "Resolved DNS server");
            addrs.extend(resolved);
        }
        Self::new(addrs, udp_size)
    }

    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }

    fn pick_server(&self) -> SocketAddr {
        self.servers[fastrand::usize(..self.servers.len())]
    }
}

#[async_trait]
impl TxtLookup for UdpTxtLookup {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<LookupEntry>, LookupError> {
        let fqdn = if domain.ends_with('.') {
            domain.to_string()
        } else {
            format!("{}.", domain)
        };

        let server = self.pick_server();
        let (id, query) = MessageBuilder::build_txt_query(&fqdn, self.udp_size)?;

        debug!(domain = %fqdn, server = %server, id = id, "Sending TXT query");

        let transport = UdpTransport::new(server, usize::from(self.udp_size).max(MIN_UDP_BUFFER));
        let bytes = transport.send(&query).await?;

        let invalid = |reason: String| LookupError::InvalidResponse {
            server: server.to_string(),
            reason,
        };

        let response = ResponseParser::parse(&bytes).map_err(|e| invalid(e.to_string()))?;

        if response.id != id {
            return Err(invalid(format!(
                "message id mismatch: sent {}, received {}",
                id, response.id
            )));
        }
        if !response.is_response {
            return Err(invalid("reply is not a response".to_string()));
        }

        if response.truncated {
            warn!(
                domain = %fqdn,
                server = %server,
                "TXT reply truncated, entries may be incomplete"
            );
        }

        Ok(response.into_entries(&fqdn)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_servers() {
        assert!(matches!(
            UdpTxtLookup::new(Vec::new(), 4096),
            Err(LookupError::NoServers)
        ));
    }

    #[tokio::test]
    async fn test_from_strings() {
        let lookup = UdpTxtLookup::from_strings(
            &["1.1.1.1".to_string(), "127.0.0.1:5353".to_string()],
            4096,
        )
        .await
        .unwrap();

        assert_eq!(
            lookup.servers(),
            &[
                "1.1.1.1:53".parse::<SocketAddr>().unwrap(),
                "127.0.0.1:5353".parse::<SocketAddr>().unwrap(),
            ]
        );
    }

    #[tokio::test]
    async fn test_from_strings_resolves_hostnames() {
        let lookup = UdpTxtLookup::from_strings(&["localhost:5353".to_string()], 4096)
            .await
            .unwrap();

        assert!(!lookup.servers().is_empty());
        assert!(lookup
            .servers()
            .iter()
            .all(|addr| addr.ip().is_loopback() && addr.port() == 5353));
    }

    #[tokio::test]
    async fn test_from_strings_rejects_malformed() {
        let result = UdpTxtLookup::from_strings(&["dns.example:port".to_string()], 4096).await;
        assert!(matches!(result, Err(LookupError::InvalidServer(s)) if s == "dns.example:port"));
    }

    #[test]
    fn test_pick_server_stays_in_list() {
        let servers: Vec<SocketAddr> = vec![
            "10.0.0.1:53".parse().unwrap(),
            "10.0.0.2:53".parse().unwrap(),
        ];
        let lookup = UdpTxtLookup::new(servers.clone(), 4096).unwrap();

        for _ in 0..32 {
            assert!(servers.contains(&lookup.pick_server()));
        }
    }
}
