mod errors;
mod logging;
mod lookup;
mod resolve;
mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use lookup::{parse_server, split_host_port, LookupConfig};
pub use resolve::ResolveConfig;
pub use root::{CliOverrides, Config};
