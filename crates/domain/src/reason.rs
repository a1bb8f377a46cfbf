use serde::Serialize;
use std::fmt;

/// Why a TXT entry or a domain was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    /// Entry does not start with `dnslink=/`.
    WrongStart,
    /// Entry contains bytes outside printable ASCII.
    InvalidCharacter,
    NamespaceMissing,
    NoIdentifier,
    /// Malformed percent sequence in the identifier.
    InvalidEncoding,
    TooLong,
    EmptyPart,
    /// Domain carries `_dnslink.` twice.
    RecursiveDnslinkPrefix,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WrongStart => "WRONG_START",
            Self::InvalidCharacter => "INVALID_CHARACTER",
            Self::NamespaceMissing => "NAMESPACE_MISSING",
            Self::NoIdentifier => "NO_IDENTIFIER",
            Self::InvalidEncoding => "INVALID_ENCODING",
            Self::TooLong => "TOO_LONG",
            Self::EmptyPart => "EMPTY_PART",
            Self::RecursiveDnslinkPrefix => "RECURSIVE_DNSLINK_PREFIX",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
