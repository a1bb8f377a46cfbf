pub mod resolve_dnslink;

pub use resolve_dnslink::{ResolveDnsLinkUseCase, MAX_CHAIN_LENGTH};
