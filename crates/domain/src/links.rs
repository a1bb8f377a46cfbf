use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entry::{is_dnslink_entry, validate_entry, EntryRules};
use crate::log::LogStatement;

/// One TXT record value with the TTL it was served with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub value: String,
    pub ttl: u32,
}

impl LookupEntry {
    pub fn new(value: impl Into<String>, ttl: u32) -> Self {
        Self {
            value: value.into(),
            ttl,
        }
    }
}

/// A validated link identifier within a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceEntry {
    pub identifier: String,
    pub ttl: u32,
}

impl NamespaceEntry {
    pub fn new(identifier: impl Into<String>, ttl: u32) -> Self {
        Self {
            identifier: identifier.into(),
            ttl,
        }
    }
}

/// Links grouped by namespace, each list sorted by identifier.
pub type Links = BTreeMap<String, Vec<NamespaceEntry>>;

/// A DNSLink entry that passed validation, still in TXT order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub namespace: String,
    pub identifier: String,
    pub ttl: u32,
    /// The TXT value the entry was read from.
    pub raw: String,
}

/// Validates every DNSLink entry in `entries`, preserving TXT order.
///
/// Values without the `dnslink=` prefix are skipped silently; invalid
/// entries produce an `INVALID_ENTRY` statement.
pub fn parse_entries(
    entries: &[LookupEntry],
    rules: EntryRules,
) -> (Vec<ParsedEntry>, Vec<LogStatement>) {
    let mut parsed = Vec::with_capacity(entries.len());
    let mut log = Vec::new();

    for entry in entries {
        if !is_dnslink_entry(&entry.value) {
            continue;
        }

        match validate_entry(&entry.value, rules) {
            Ok((namespace, identifier)) => parsed.push(ParsedEntry {
                namespace,
                identifier,
                ttl: entry.ttl,
                raw: entry.value.clone(),
            }),
            Err(reason) => log.push(LogStatement::InvalidEntry {
                entry: entry.value.clone(),
                reason,
            }),
        }
    }

    (parsed, log)
}

/// Groups parsed entries by namespace and sorts each group by identifier.
pub fn group(parsed: Vec<ParsedEntry>) -> Links {
    let mut links = Links::new();
    for entry in parsed {
        links
            .entry(entry.namespace)
            .or_default()
            .push(NamespaceEntry::new(entry.identifier, entry.ttl));
    }

    for list in links.values_mut() {
        list.sort_by(|a, b| a.identifier.cmp(&b.identifier));
    }

    links
}

/// Parses and groups one TXT set.
pub fn group_entries(entries: &[LookupEntry], rules: EntryRules) -> (Links, Vec<LogStatement>) {
    let (parsed, log) = parse_entries(entries, rules);
    (group(parsed), log)
}

/// Lowers every entry's TTL to at most `ceiling`.
pub fn clamp_ttl(links: &mut Links, ceiling: u32) {
    for entry in links.values_mut().flatten() {
        entry.ttl = entry.ttl.min(ceiling);
    }
}
