mod lookup;

pub use lookup::build_lookup;

use dnslink_application::use_cases::ResolveDnsLinkUseCase;
use dnslink_domain::Config;

pub async fn build_use_case(config: &Config) -> anyhow::Result<ResolveDnsLinkUseCase> {
    let lookup = build_lookup(&config.lookup).await?;
    Ok(ResolveDnsLinkUseCase::new(lookup)
        .with_identifier_decoding(config.resolve.decode_identifiers))
}
