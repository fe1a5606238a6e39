//! hickory-resolver backed lookups.
//!
//! Address and reverse lookups use the resolver's dedicated calls; every other
//! record type goes through the generic `lookup` and picks the matching
//! `RData` variants out of the answer.

use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::lookup::Lookup;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{Name, RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::config::UNRECOGNIZED_ADDRESS;
use crate::dns::{LookupBackend, Record};
use crate::error_handling::LookupError;
use crate::query::Query;

/// [`LookupBackend`] over a hickory `TokioAsyncResolver`.
pub struct HickoryBackend {
    resolver: TokioAsyncResolver,
}

impl HickoryBackend {
    /// Wraps a configured resolver, see [`init_resolver`](crate::initialization::init_resolver).
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }

    async fn lookup(&self, name: &str, record_type: RecordType) -> Result<Lookup, LookupError> {
        self.resolver
            .lookup(name, record_type)
            .await
            .map_err(|e| map_resolve_error(name, &e))
    }

    async fn lookup_a(&self, host: &str) -> Result<Vec<Record>, LookupError> {
        let response = self
            .resolver
            .lookup_ip(host)
            .await
            .map_err(|e| map_resolve_error(host, &e))?;
        Ok(response.iter().map(Record::A).collect())
    }

    async fn lookup_cname(&self, host: &str) -> Result<Vec<Record>, LookupError> {
        // Address queries make the resolver follow the whole alias chain
        for record_type in [RecordType::A, RecordType::AAAA] {
            match self.resolver.lookup(host, record_type).await {
                Ok(lookup) => {
                    return Ok(vec![Record::Cname(canonical_name(&lookup).to_utf8())]);
                }
                Err(e) if is_no_data(&e) => continue,
                Err(e) => return Err(map_resolve_error(host, &e)),
            }
        }
        // The name exists but has no addresses: it is its own canonical name
        Ok(vec![Record::Cname(fqdn(host))])
    }

    async fn lookup_mx(&self, domain: &str) -> Result<Vec<Record>, LookupError> {
        let lookup = self.lookup(domain, RecordType::MX).await?;
        Ok(lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::MX(mx) => Some(Record::Mx {
                    exchange: mx.exchange().to_utf8(),
                    preference: mx.preference(),
                }),
                _ => None,
            })
            .collect())
    }

    async fn lookup_ns(&self, domain: &str) -> Result<Vec<Record>, LookupError> {
        let lookup = self.lookup(domain, RecordType::NS).await?;
        Ok(lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::NS(ns) => Some(Record::Ns(ns.to_utf8())),
                _ => None,
            })
            .collect())
    }

    async fn lookup_ptr(&self, addr: &str) -> Result<Vec<Record>, LookupError> {
        let ip: IpAddr = addr
            .parse()
            .map_err(|_| LookupError::resolution_failed(addr, UNRECOGNIZED_ADDRESS))?;
        let response = self
            .resolver
            .reverse_lookup(ip)
            .await
            .map_err(|e| map_resolve_error(addr, &e))?;
        Ok(response
            .iter()
            .map(|name| Record::Ptr(name.to_utf8()))
            .collect())
    }

    async fn lookup_srv(
        &self,
        service: &str,
        protocol: &str,
        domain: &str,
    ) -> Result<Vec<Record>, LookupError> {
        let name = format!("_{service}._{protocol}.{domain}");
        let lookup = self.lookup(&name, RecordType::SRV).await?;
        let responder = lookup.query().name().to_utf8();
        Ok(lookup
            .iter()
            .filter_map(|rdata| match rdata {
                RData::SRV(srv) => Some(Record::Srv {
                    target: srv.target().to_utf8(),
                    port: srv.port(),
                    priority: srv.priority(),
                    weight: srv.weight(),
                    responder: responder.clone(),
                }),
                _ => None,
            })
            .collect())
    }

    async fn lookup_txt(&self, domain: &str) -> Result<Vec<Record>, LookupError> {
        let lookup = self.lookup(domain, RecordType::TXT).await?;
        Ok(lookup
            .iter()
            .filter_map(|rdata| match rdata {
                // TXT records can contain multiple strings - join them
                RData::TXT(txt) => Some(Record::Txt(
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                        .collect::<Vec<String>>()
                        .join(""),
                )),
                _ => None,
            })
            .collect())
    }
}

#[async_trait]
impl LookupBackend for HickoryBackend {
    async fn resolve(&self, query: &Query) -> Result<Vec<Record>, LookupError> {
        log::debug!("Resolving {} record for {}", query.kind(), query.target());
        match query {
            Query::A(host) => self.lookup_a(host).await,
            Query::Cname(host) => self.lookup_cname(host).await,
            Query::Mx(domain) => self.lookup_mx(domain).await,
            Query::Ns(domain) => self.lookup_ns(domain).await,
            Query::Ptr(addr) => self.lookup_ptr(addr).await,
            Query::Srv {
                domain,
                protocol: Some(protocol),
                service: Some(service),
            } => self.lookup_srv(service, protocol, domain).await,
            Query::Srv { .. } => Err(LookupError::MissingArgument),
            Query::Txt(domain) => self.lookup_txt(domain).await,
        }
    }
}

/// Maps a hickory error onto the lookup error kinds.
///
/// NXDOMAIN and empty answers read "no such host"; the resolver's own timeout
/// is the same failure as the lookup deadline.
pub(crate) fn map_resolve_error(target: &str, error: &ResolveError) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if matches!(*response_code, ResponseCode::NXDomain | ResponseCode::NoError) =>
        {
            LookupError::no_such_host(target)
        }
        ResolveErrorKind::Timeout => LookupError::Timeout,
        _ => LookupError::resolution_failed(target, error.to_string()),
    }
}

/// Follows the CNAME records in `lookup` from the queried name to the end of the chain.
///
/// A name that is not an alias is its own canonical name.
fn canonical_name(lookup: &Lookup) -> Name {
    let records = lookup.records();
    let mut canonical = lookup.query().name().clone();
    // At most one hop per record, so a looping chain terminates
    for _ in 0..records.len() {
        let next = records.iter().find_map(|record| match record.data() {
            Some(RData::CNAME(cname)) if record.name() == &canonical => Some(cname.0.clone()),
            _ => None,
        });
        match next {
            Some(name) => canonical = name,
            None => break,
        }
    }
    canonical
}

/// True when the name exists but holds no record of the queried type.
fn is_no_data(error: &ResolveError) -> bool {
    matches!(
        error.kind(),
        ResolveErrorKind::NoRecordsFound {
            response_code: ResponseCode::NoError,
            ..
        }
    )
}

/// `host` with a trailing dot, the form resolvers print names in.
pub(crate) fn fqdn(host: &str) -> String {
    if host.ends_with('.') {
        host.to_string()
    } else {
        format!("{host}.")
    }
}
