use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolveConfig {
    /// Follow `dnslink=/dnslink/<domain>` redirects.
    #[serde(default)]
    pub recursive: bool,

    /// Percent-decode entry identifiers.
    #[serde(default)]
    pub decode_identifiers: bool,
}
