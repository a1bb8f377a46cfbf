//! DNSLink Domain Layer
pub mod config;
pub mod entry;
pub mod errors;
pub mod escape;
pub mod links;
pub mod log;
pub mod path;
pub mod rcode;
pub mod reason;
pub mod resolution;
pub mod url_parts;

pub use config::{CliOverrides, Config, ConfigError};
pub use entry::{validate_entry, EntryRules, REDIRECT_NAMESPACE, TXT_PREFIX};
pub use errors::{LookupError, ResolveError};
pub use escape::decode_txt;
pub use links::{group_entries, Links, LookupEntry, NamespaceEntry, ParsedEntry};
pub use log::{path_from_log, LogStatement};
pub use path::{reduce, PathEntry, Search};
pub use rcode::RCodeError;
pub use reason::Reason;
pub use resolution::Resolution;
pub use url_parts::{validate_domain, UrlParts, DNSLINK_PREFIX};
