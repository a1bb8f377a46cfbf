use serde::Serialize;

use crate::path::PathEntry;
use crate::reason::Reason;
use crate::url_parts::UrlParts;

/// One event in the audit trail of a resolution.
///
/// Serializes as a flat object tagged by `code`; empty pathname and search
/// are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogStatement {
    /// About to look up `domain`, consuming `path`.
    Resolve {
        domain: String,
        #[serde(flatten)]
        path: PathEntry,
    },
    /// The hop at `domain` redirected elsewhere.
    Redirect {
        domain: String,
        #[serde(flatten)]
        path: PathEntry,
    },
    InvalidEntry {
        entry: String,
        reason: Reason,
    },
    /// Valid entry shadowed by a redirect or by an earlier redirect entry.
    UnusedEntry {
        entry: String,
    },
    EndlessRedirect {
        domain: String,
        #[serde(flatten)]
        path: PathEntry,
    },
    TooManyRedirects {
        domain: String,
        #[serde(flatten)]
        path: PathEntry,
    },
    InvalidRedirect {
        entry: String,
        reason: Reason,
    },
    #[serde(rename = "RECURSIVE_DNSLINK_PREFIX")]
    RecursivePrefix {
        domain: String,
    },
    /// No `_dnslink.` record existed, continuing with the bare `domain`.
    Fallback {
        domain: String,
    },
}

impl LogStatement {
    pub fn resolve(lookup: &UrlParts) -> Self {
        Self::Resolve {
            domain: lookup.domain.clone(),
            path: lookup.path(),
        }
    }

    pub fn redirect(lookup: &UrlParts) -> Self {
        Self::Redirect {
            domain: lookup.domain.clone(),
            path: lookup.path(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Resolve { .. } => "RESOLVE",
            Self::Redirect { .. } => "REDIRECT",
            Self::InvalidEntry { .. } => "INVALID_ENTRY",
            Self::UnusedEntry { .. } => "UNUSED_ENTRY",
            Self::EndlessRedirect { .. } => "ENDLESS_REDIRECT",
            Self::TooManyRedirects { .. } => "TOO_MANY_REDIRECTS",
            Self::InvalidRedirect { .. } => "INVALID_REDIRECT",
            Self::RecursivePrefix { .. } => "RECURSIVE_DNSLINK_PREFIX",
            Self::Fallback { .. } => "FALLBACK",
        }
    }

    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::Resolve { domain, .. }
            | Self::Redirect { domain, .. }
            | Self::EndlessRedirect { domain, .. }
            | Self::TooManyRedirects { domain, .. }
            | Self::RecursivePrefix { domain }
            | Self::Fallback { domain } => Some(domain),
            _ => None,
        }
    }

    pub fn entry(&self) -> Option<&str> {
        match self {
            Self::InvalidEntry { entry, .. }
            | Self::UnusedEntry { entry }
            | Self::InvalidRedirect { entry, .. } => Some(entry),
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<Reason> {
        match self {
            Self::InvalidEntry { reason, .. } | Self::InvalidRedirect { reason, .. } => {
                Some(*reason)
            }
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&PathEntry> {
        match self {
            Self::Resolve { path, .. }
            | Self::Redirect { path, .. }
            | Self::EndlessRedirect { path, .. }
            | Self::TooManyRedirects { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Derives the resolved path from a log, last hop first.
///
/// Each `RESOLVE` opens a hop; a following `REDIRECT` closes that same hop,
/// so every hop contributes at most once. Empty contributions are dropped.
pub fn path_from_log(log: &[LogStatement]) -> Vec<PathEntry> {
    let mut hops: Vec<&PathEntry> = Vec::new();
    for statement in log {
        match statement {
            LogStatement::Resolve { path, .. } => hops.push(path),
            LogStatement::Redirect { path, .. } => {
                if let Some(last) = hops.last_mut() {
                    *last = path;
                }
            }
            _ => {}
        }
    }

    hops.into_iter()
        .rev()
        .filter(|path| !path.is_empty())
        .cloned()
        .collect()
}
