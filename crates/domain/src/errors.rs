use thiserror::Error;

use crate::rcode::RCodeError;
use crate::reason::Reason;
use crate::resolution::Resolution;

#[derive(Error, Debug, Clone)]
pub enum LookupError {
    #[error(transparent)]
    RCode(#[from] RCodeError),

    #[error("No DNS servers configured")]
    NoServers,

    #[error("Invalid DNS server address: {0}")]
    InvalidServer(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Transport error with {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("Invalid DNS response from {server}: {reason}")]
    InvalidResponse { server: String, reason: String },

    #[error("TXT lookup for {domain} timed out after {timeout_ms}ms")]
    Timeout { domain: String, timeout_ms: u64 },

    #[error("Resolver error: {0}")]
    Resolver(String),
}

impl LookupError {
    /// True when the server answered NXDOMAIN.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RCode(e) if e.is_nxdomain())
    }
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Invalid domain {domain}: {reason}")]
    InvalidDomain { domain: String, reason: Reason },

    #[error("Lookup of {domain} failed: {source}")]
    Lookup {
        domain: String,
        #[source]
        source: LookupError,
        /// Log and path accumulated before the failing hop.
        partial: Box<Resolution>,
    },
}

impl ResolveError {
    pub fn partial(&self) -> Option<&Resolution> {
        match self {
            Self::Lookup { partial, .. } => Some(partial),
            Self::InvalidDomain { .. } => None,
        }
    }
}
