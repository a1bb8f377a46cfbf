use percent_encoding::percent_decode_str;
use serde::Serialize;
use url::form_urlencoded;

use crate::path::{escape_segment, PathEntry, Search};
use crate::reason::Reason;

/// Label prepended to a hostname to look up its DNSLink record.
pub const DNSLINK_PREFIX: &str = "_dnslink.";

const MAX_DOMAIN_LEN: usize = 253 - DNSLINK_PREFIX.len();
const MAX_LABEL_LEN: usize = 63;

/// A domain-or-URL input split into hostname, escaped pathname and query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlParts {
    pub domain: String,
    pub pathname: String,
    pub search: Search,
}

impl UrlParts {
    /// Splits `input` without validating the hostname.
    ///
    /// Accepts `host`, `host/path?query#fragment` and `scheme://host/...`;
    /// the fragment is discarded.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let input = match input.find("://") {
            Some(idx) if is_scheme(&input[..idx]) => &input[idx + 3..],
            _ => input,
        };
        let input = input.split('#').next().unwrap_or_default();

        let (location, query) = match input.split_once('?') {
            Some((location, query)) => (location, query),
            None => (input, ""),
        };
        let (domain, pathname) = match location.find('/') {
            Some(idx) => (&location[..idx], &location[idx..]),
            None => (location, ""),
        };

        let pathname = if pathname.is_empty() {
            String::new()
        } else {
            pathname
                .split('/')
                .map(escape_segment)
                .collect::<Vec<_>>()
                .join("/")
        };

        let mut search = Search::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            search
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }

        Self {
            domain: percent_decode_str(domain).decode_utf8_lossy().into_owned(),
            pathname,
            search,
        }
    }

    pub fn path(&self) -> PathEntry {
        PathEntry::new(self.pathname.clone(), self.search.clone())
    }

    /// The hostname with the `_dnslink.` label removed, if present.
    pub fn bare_domain(&self) -> &str {
        self.domain
            .strip_prefix(DNSLINK_PREFIX)
            .unwrap_or(&self.domain)
    }

    pub fn has_dnslink_prefix(&self) -> bool {
        self.domain.starts_with(DNSLINK_PREFIX)
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Parses a domain-or-URL and returns its DNSLink lookup form.
///
/// The hostname gets `_dnslink.` prepended unless it already carries it once;
/// pathname and query are kept as given.
pub fn validate_domain(input: &str) -> Result<UrlParts, Reason> {
    let mut parts = UrlParts::parse(input);

    let domain = parts.domain.trim_end_matches('.');
    if domain.starts_with(DNSLINK_PREFIX)
        && domain[DNSLINK_PREFIX.len()..].starts_with(DNSLINK_PREFIX)
    {
        return Err(Reason::RecursiveDnslinkPrefix);
    }

    let bare = domain.strip_prefix(DNSLINK_PREFIX).unwrap_or(domain);
    check_fqdn(bare)?;

    parts.domain = format!("{}{}", DNSLINK_PREFIX, bare);
    Ok(parts)
}

/// Length and label checks for a hostname without the `_dnslink.` label.
pub fn check_fqdn(domain: &str) -> Result<(), Reason> {
    if domain.len() > MAX_DOMAIN_LEN {
        return Err(Reason::TooLong);
    }

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(Reason::EmptyPart);
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(Reason::TooLong);
        }
    }

    Ok(())
}
