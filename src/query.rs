//! Lookup selection.
//!
//! Turns a [`Config`] into the single [`Query`] to run. A positional argument
//! wins over named flags; among the flags the first non-empty one in the order
//! A, CNAME, MX, NS, PTR, SRV, TXT is used.

use std::net::IpAddr;

use strum_macros::{Display, EnumIter};

use crate::config::{non_empty, Config, UNSUPPORTED_PROTOCOL};
use crate::error_handling::LookupError;

/// DNS record type label as printed in the second output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RecordKind {
    /// IPv4/IPv6 address
    A,
    /// Canonical name
    Cname,
    /// Mail exchange
    Mx,
    /// Name server
    Ns,
    /// Reverse pointer
    Ptr,
    /// Service location
    Srv,
    /// Text
    Txt,
}

/// One lookup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Addresses of a hostname
    A(String),
    /// Canonical name of a hostname
    Cname(String),
    /// Mail exchangers of a domain
    Mx(String),
    /// Name servers of a domain
    Ns(String),
    /// Host names of an IP address
    Ptr(String),
    /// Service records of `_<service>._<protocol>.<domain>`
    Srv {
        /// Domain the service lives under
        domain: String,
        /// `tcp` or `udp`
        protocol: Option<String>,
        /// Service name, e.g. `xmpp-server`
        service: Option<String>,
    },
    /// Text records of a domain
    Txt(String),
}

impl Query {
    /// Picks the lookup requested by `config`, or `None` when nothing was asked for.
    pub fn select(config: &Config) -> Option<Query> {
        if let Some(target) = non_empty(&config.target) {
            return Some(Self::infer(target));
        }

        let owned = |value: &Option<String>| non_empty(value).map(str::to_string);

        if let Some(host) = owned(&config.a_record) {
            Some(Query::A(host))
        } else if let Some(host) = owned(&config.cname) {
            Some(Query::Cname(host))
        } else if let Some(domain) = owned(&config.mx) {
            Some(Query::Mx(domain))
        } else if let Some(domain) = owned(&config.ns) {
            Some(Query::Ns(domain))
        } else if let Some(addr) = owned(&config.ptr) {
            Some(Query::Ptr(addr))
        } else if let Some(domain) = owned(&config.srv) {
            Some(Query::Srv {
                domain,
                protocol: owned(&config.protocol),
                service: owned(&config.service),
            })
        } else {
            owned(&config.txt).map(Query::Txt)
        }
    }

    /// IP literal → PTR lookup, anything else → A lookup.
    pub fn infer(target: &str) -> Query {
        if target.parse::<IpAddr>().is_ok() {
            Query::Ptr(target.to_string())
        } else {
            Query::A(target.to_string())
        }
    }

    /// Record type this query asks for.
    pub fn kind(&self) -> RecordKind {
        match self {
            Query::A(_) => RecordKind::A,
            Query::Cname(_) => RecordKind::Cname,
            Query::Mx(_) => RecordKind::Mx,
            Query::Ns(_) => RecordKind::Ns,
            Query::Ptr(_) => RecordKind::Ptr,
            Query::Srv { .. } => RecordKind::Srv,
            Query::Txt(_) => RecordKind::Txt,
        }
    }

    /// The name or address printed in the first output column.
    pub fn target(&self) -> &str {
        match self {
            Query::A(t) | Query::Cname(t) | Query::Mx(t) | Query::Ns(t) | Query::Ptr(t) => t,
            Query::Txt(t) => t,
            Query::Srv { domain, .. } => domain,
        }
    }

    /// Checks that the query can be sent at all.
    ///
    /// Only SRV queries carry extra arguments; `-p` is ignored by every other
    /// lookup.
    ///
    /// # Errors
    ///
    /// [`LookupError::MissingArgument`] for an SRV query without both protocol
    /// and service, and a resolution failure for a protocol other than tcp or udp.
    pub fn validate(&self) -> Result<(), LookupError> {
        match self {
            Query::Srv {
                domain,
                protocol: Some(protocol),
                service: Some(service),
            } => {
                if protocol.eq_ignore_ascii_case("tcp") || protocol.eq_ignore_ascii_case("udp") {
                    Ok(())
                } else {
                    Err(LookupError::resolution_failed(
                        format!("_{service}._{protocol}.{domain}"),
                        format!("{UNSUPPORTED_PROTOCOL} {protocol:?}, expected tcp or udp"),
                    ))
                }
            }
            Query::Srv { .. } => Err(LookupError::MissingArgument),
            _ => Ok(()),
        }
    }
}
