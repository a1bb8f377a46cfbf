use serde::Serialize;

use crate::links::Links;
use crate::log::{path_from_log, LogStatement};
use crate::path::PathEntry;

/// Outcome of resolving one domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub links: Links,
    /// Path contributions, last hop first.
    pub path: Vec<PathEntry>,
    pub log: Vec<LogStatement>,
}

impl Resolution {
    /// A resolution that found links, with `path` derived from `log`.
    pub fn resolved(links: Links, log: Vec<LogStatement>) -> Self {
        Self {
            links,
            path: path_from_log(&log),
            log,
        }
    }

    /// A resolution that stopped before reaching a terminal record.
    pub fn unresolved(log: Vec<LogStatement>) -> Self {
        Self::resolved(Links::new(), log)
    }

    /// Path contributions in the order they were taken, first hop first.
    pub fn hop_order_path(&self) -> Vec<PathEntry> {
        self.path.iter().rev().cloned().collect()
    }
}
