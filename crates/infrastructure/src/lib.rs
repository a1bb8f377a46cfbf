//! DNSLink Infrastructure Layer
pub mod dns;
