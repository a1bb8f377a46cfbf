use percent_encoding::percent_decode_str;

use crate::reason::Reason;

/// Prefix every DNSLink TXT value starts with.
pub const TXT_PREFIX: &str = "dnslink=";

/// Namespace whose identifier names another domain to continue from.
pub const REDIRECT_NAMESPACE: &str = "dnslink";

/// How identifiers are read out of an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryRules {
    /// Percent-decode the identifier after splitting off the namespace.
    pub decode_identifiers: bool,
}

/// True for TXT values that are meant as DNSLink entries at all.
pub fn is_dnslink_entry(raw: &str) -> bool {
    raw.starts_with(TXT_PREFIX)
}

/// Splits a `dnslink=/<namespace>/<identifier>` value into its two parts.
///
/// Namespace and identifier come back with surrounding whitespace removed.
pub fn validate_entry(raw: &str, rules: EntryRules) -> Result<(String, String), Reason> {
    let body = raw.strip_prefix(TXT_PREFIX).ok_or(Reason::WrongStart)?;
    if !body.starts_with('/') {
        return Err(Reason::WrongStart);
    }

    // RFC 4343 §2.1: values must be representable as a character-string.
    if !body.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
        return Err(Reason::InvalidCharacter);
    }

    let mut parts = body[1..].split('/');
    let namespace = parts.next().map(str::trim).unwrap_or_default();
    if namespace.is_empty() {
        return Err(Reason::NamespaceMissing);
    }

    let identifier = parts.collect::<Vec<_>>().join("/");
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(Reason::NoIdentifier);
    }

    let identifier = if rules.decode_identifiers {
        decode_identifier(identifier)?
    } else {
        identifier.to_string()
    };

    Ok((namespace.to_string(), identifier))
}

fn decode_identifier(identifier: &str) -> Result<String, Reason> {
    let bytes = identifier.as_bytes();
    for (idx, byte) in bytes.iter().enumerate() {
        if *byte == b'%' {
            let valid = bytes
                .get(idx + 1..idx + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(Reason::InvalidEncoding);
            }
        }
    }

    percent_decode_str(identifier)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| Reason::InvalidEncoding)
}
