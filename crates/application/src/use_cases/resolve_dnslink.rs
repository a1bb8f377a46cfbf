use crate::ports::TxtLookup;
use dnslink_domain::links::{clamp_ttl, group, parse_entries};
use dnslink_domain::{
    validate_domain, EntryRules, LogStatement, ParsedEntry, Reason, ResolveError, Resolution,
    UrlParts, REDIRECT_NAMESPACE,
};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::debug;

/// Domains a single resolution may visit, the starting one included.
pub const MAX_CHAIN_LENGTH: usize = 32;

pub struct ResolveDnsLinkUseCase {
    lookup: Arc<dyn TxtLookup>,
    rules: EntryRules,
}

/// Where a hop sends the resolver next.
enum Hop {
    Done(Vec<ParsedEntry>),
    Redirect(UrlParts),
}

impl ResolveDnsLinkUseCase {
    pub fn new(lookup: Arc<dyn TxtLookup>) -> Self {
        Self {
            lookup,
            rules: EntryRules::default(),
        }
    }

    pub fn with_identifier_decoding(mut self, decode: bool) -> Self {
        self.rules.decode_identifiers = decode;
        self
    }

    /// Resolves the DNSLink record for `input`, a domain optionally followed
    /// by a path and query.
    ///
    /// With `recursive` set, `dnslink=/dnslink/<domain>` entries are followed
    /// until a terminal record, a cycle or the chain limit. Lookup failures
    /// other than a missing `_dnslink.` name abort with the partial result.
    pub async fn execute(&self, input: &str, recursive: bool) -> Result<Resolution, ResolveError> {
        let mut log = Vec::new();

        let mut lookup = match validate_domain(input) {
            Ok(parts) => parts,
            Err(Reason::RecursiveDnslinkPrefix) => {
                let domain = UrlParts::parse(input).domain;
                debug!(domain = %domain, "Rejecting doubled _dnslink. prefix");
                log.push(LogStatement::RecursivePrefix { domain });
                return Ok(Resolution::unresolved(log));
            }
            Err(reason) => {
                return Err(ResolveError::InvalidDomain {
                    domain: input.to_string(),
                    reason,
                })
            }
        };

        let mut chain: FxHashSet<String> = FxHashSet::default();
        let mut min_ttl = u32::MAX;

        loop {
            chain.insert(lookup.domain.clone());
            log.push(LogStatement::resolve(&lookup));
            debug!(domain = %lookup.domain, hop = chain.len(), "Looking up DNSLink TXT records");

            let entries = match self.lookup.lookup_txt(&lookup.domain).await {
                Ok(entries) => Some(entries),
                Err(e) if e.is_not_found() && lookup.has_dnslink_prefix() => None,
                Err(source) => {
                    debug!(domain = %lookup.domain, error = %source, "TXT lookup failed");
                    return Err(ResolveError::Lookup {
                        domain: lookup.domain.clone(),
                        source,
                        partial: Box::new(Resolution::unresolved(log)),
                    });
                }
            };

            let hop = match entries {
                Some(entries) => {
                    let (parsed, invalid) = parse_entries(&entries, self.rules);
                    log.extend(invalid);
                    select_redirect(parsed, recursive, &mut min_ttl, &mut log)
                }
                None => {
                    let bare = lookup.bare_domain().to_string();
                    debug!(domain = %bare, "No _dnslink. record, falling back to bare domain");
                    log.push(LogStatement::Fallback {
                        domain: bare.clone(),
                    });
                    Hop::Redirect(UrlParts {
                        domain: bare,
                        ..UrlParts::default()
                    })
                }
            };

            let next = match hop {
                Hop::Done(entries) => {
                    let mut links = group(entries);
                    clamp_ttl(&mut links, min_ttl);
                    debug!(
                        domain = %lookup.domain,
                        namespaces = links.len(),
                        "DNSLink resolved"
                    );
                    return Ok(Resolution::resolved(links, log));
                }
                Hop::Redirect(next) => next,
            };

            if chain.contains(&next.domain) {
                debug!(domain = %next.domain, "Redirect cycle detected");
                log.push(LogStatement::EndlessRedirect {
                    domain: next.domain.clone(),
                    path: next.path(),
                });
                return Ok(Resolution::unresolved(log));
            }

            if chain.len() >= MAX_CHAIN_LENGTH {
                debug!(domain = %next.domain, hops = chain.len(), "Redirect chain too long");
                log.push(LogStatement::TooManyRedirects {
                    domain: next.domain.clone(),
                    path: next.path(),
                });
                return Ok(Resolution::unresolved(log));
            }

            debug!(from = %lookup.domain, to = %next.domain, "Following redirect");
            log.push(LogStatement::redirect(&lookup));
            lookup = next;
        }
    }
}

/// Splits one hop's entries into a redirect target or the terminal links.
///
/// Every redirect entry is validated in TXT order: invalid ones are logged
/// `INVALID_REDIRECT`, the first valid one wins and later valid ones are
/// logged `UNUSED_ENTRY`. With a winner, the other namespaces are shadowed
/// and logged `UNUSED_ENTRY` after the redirects. Without `recursive` no
/// redirect is taken and redirect entries are logged `UNUSED_ENTRY`.
fn select_redirect(
    parsed: Vec<ParsedEntry>,
    recursive: bool,
    min_ttl: &mut u32,
    log: &mut Vec<LogStatement>,
) -> Hop {
    let (redirects, links): (Vec<_>, Vec<_>) = parsed
        .into_iter()
        .partition(|entry| entry.namespace == REDIRECT_NAMESPACE);

    if !recursive {
        log.extend(
            redirects
                .into_iter()
                .map(|entry| LogStatement::UnusedEntry { entry: entry.raw }),
        );
        return Hop::Done(links);
    }

    let mut target: Option<UrlParts> = None;
    for entry in redirects {
        match validate_domain(&entry.identifier) {
            Ok(parts) if target.is_none() => {
                *min_ttl = (*min_ttl).min(entry.ttl);
                target = Some(parts);
            }
            Ok(_) => log.push(LogStatement::UnusedEntry { entry: entry.raw }),
            Err(reason) => log.push(LogStatement::InvalidRedirect {
                entry: entry.raw,
                reason,
            }),
        }
    }

    match target {
        Some(parts) => {
            log.extend(
                links
                    .into_iter()
                    .map(|entry| LogStatement::UnusedEntry { entry: entry.raw }),
            );
            Hop::Redirect(parts)
        }
        None => Hop::Done(links),
    }
}
