//! DNS resolver initialization.
//!
//! This module builds the hickory resolver used for every lookup.

use std::time::Duration;

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for a single lookup.
///
/// Uses the system configuration (`/etc/resolv.conf` on Unix) so results match
/// what other tools on the host see. When it cannot be read, falls back to the
/// library's default upstreams and logs a warning.
///
/// The resolver's per-query timeout is set to the lookup deadline, address
/// lookups return both IPv4 and IPv6 results, and only one attempt is made
/// per name server.
pub fn init_resolver(timeout: Duration) -> TokioAsyncResolver {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = timeout;
    opts.attempts = 1;
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    // CNAME lookups read the alias chain out of the address answer
    opts.preserve_intermediates = true;

    log::debug!(
        "Resolver using {} name server(s), timeout {:?}",
        config.name_servers().len(),
        opts.timeout
    );

    TokioAsyncResolver::tokio(config, opts)
}
