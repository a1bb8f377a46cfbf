use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

const DEFAULT_DNS_PORT: u16 = 53;

/// Where TXT records are fetched from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    /// `host:port` or bare `host` strings, host being an IP or a name;
    /// empty means the host resolver.
    #[serde(default)]
    pub servers: Vec<String>,

    /// EDNS0 payload size advertised to the servers.
    #[serde(default = "default_udp_size")]
    pub udp_size: u16,

    /// Deadline per TXT lookup in milliseconds, `0` disables it.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl LookupConfig {
    /// Checks every configured server is an address or a `host[:port]`,
    /// returning the first one that is neither.
    pub fn check_servers(&self) -> Result<(), String> {
        match self
            .servers
            .iter()
            .find(|server| parse_server(server).is_none() && split_host_port(server).is_none())
        {
            Some(server) => Err(server.clone()),
            None => Ok(()),
        }
    }
}

/// Parses `ip:port`, `[ipv6]:port` or a bare IP (port 53).
pub fn parse_server(server: &str) -> Option<SocketAddr> {
    let server = server.trim();
    server.parse::<SocketAddr>().ok().or_else(|| {
        server
            .parse::<IpAddr>()
            .ok()
            .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
    })
}

/// Splits `host:port` or bare `host` (port 53) for names that still need
/// resolving. IP literals are handled by [`parse_server`].
pub fn split_host_port(server: &str) -> Option<(String, u16)> {
    let server = server.trim();
    let (host, port) = match server.rsplit_once(':') {
        Some((host, port)) => (host, port.parse::<u16>().ok()?),
        None => (server, DEFAULT_DNS_PORT),
    };
    let valid = !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_');
    valid.then(|| (host.to_string(), port))
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            servers: Vec::new(),
            udp_size: default_udp_size(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_udp_size() -> u16 {
    4096
}

fn default_timeout_ms() -> u64 {
    10_000
}
