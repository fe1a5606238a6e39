//! DNS module tests.

use super::resolution::{fqdn, map_resolve_error};
use super::*;
use crate::error_handling::LookupError;
use crate::query::{Query, RecordKind};
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::{Message, MessageType, OpCode, Query as DnsQuery, ResponseCode};
use hickory_resolver::proto::rr::rdata::{A, CNAME, MX, SRV, TXT};
use hickory_resolver::proto::rr::{Name, RData, Record as DnsRecord, RecordType};
use hickory_resolver::TokioAsyncResolver;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;

fn no_records(response_code: ResponseCode) -> ResolveError {
    let name = Name::from_ascii("example.invalid.").expect("valid name");
    ResolveErrorKind::NoRecordsFound {
        query: Box::new(DnsQuery::query(name, RecordType::A)),
        soa: None,
        negative_ttl: None,
        response_code,
        trusted: true,
    }
    .into()
}

#[test]
fn test_a_line_has_space_before_address() {
    let record = Record::A(IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34)));
    assert_eq!(record.to_line("example.com"), "example.com\tA\t 93.184.216.34");

    let record = Record::A(IpAddr::V6(Ipv6Addr::LOCALHOST));
    assert_eq!(record.to_line("localhost"), "localhost\tA\t ::1");
}

#[test]
fn test_cname_line() {
    let record = Record::Cname("example.com.".to_string());
    assert_eq!(
        record.to_line("www.example.com"),
        "www.example.com\tCNAME\t example.com."
    );
}

#[test]
fn test_mx_line() {
    let record = Record::Mx {
        exchange: "mail.example.com".to_string(),
        preference: 10,
    };
    assert_eq!(
        record.to_line("example.com"),
        "example.com\tMX\tmail.example.com\t 10"
    );
}

#[test]
fn test_ns_and_ptr_lines() {
    let ns = Record::Ns("a.iana-servers.net.".to_string());
    assert_eq!(ns.to_line("example.com"), "example.com\tNS\ta.iana-servers.net.");

    let ptr = Record::Ptr("dns.google.".to_string());
    assert_eq!(ptr.to_line("8.8.8.8"), "8.8.8.8\tPTR\tdns.google.");
}

#[test]
fn test_srv_line_field_order() {
    let record = Record::Srv {
        target: "xmpp.example.com.".to_string(),
        port: 5269,
        priority: 5,
        weight: 0,
        responder: "_xmpp-server._tcp.example.com.".to_string(),
    };
    assert_eq!(
        record.to_line("example.com"),
        "example.com\tSRV\txmpp.example.com.\t_xmpp-server._tcp.example.com.\t5269\t5\t0"
    );
}

#[test]
fn test_txt_line() {
    let record = Record::Txt("v=spf1 -all".to_string());
    assert_eq!(record.to_line("example.com"), "example.com\tTXT\tv=spf1 -all");
}

#[test]
fn test_record_kinds() {
    assert_eq!(Record::Txt(String::new()).kind(), RecordKind::Txt);
    assert_eq!(
        Record::Mx {
            exchange: String::new(),
            preference: 0
        }
        .kind(),
        RecordKind::Mx
    );
}

#[test]
fn test_nxdomain_maps_to_no_such_host() {
    let err = map_resolve_error("example.invalid", &no_records(ResponseCode::NXDomain));
    assert_eq!(err, LookupError::no_such_host("example.invalid"));
    assert_eq!(err.to_string(), "lookup example.invalid: no such host");
}

#[test]
fn test_empty_answer_maps_to_no_such_host() {
    let err = map_resolve_error("example.invalid", &no_records(ResponseCode::NoError));
    assert_eq!(err, LookupError::no_such_host("example.invalid"));
}

#[test]
fn test_servfail_keeps_resolver_text() {
    let err = map_resolve_error("example.com", &no_records(ResponseCode::ServFail));
    match err {
        LookupError::ResolutionFailed { target, reason } => {
            assert_eq!(target, "example.com");
            assert!(!reason.is_empty());
        }
        other => panic!("expected ResolutionFailed, got {other:?}"),
    }
}

#[test]
fn test_resolver_timeout_maps_to_timeout() {
    let err = map_resolve_error("example.com", &ResolveErrorKind::Timeout.into());
    assert_eq!(err, LookupError::Timeout);
}

#[test]
fn test_other_errors_keep_message() {
    let err = map_resolve_error(
        "example.com",
        &ResolveErrorKind::Message("network unreachable").into(),
    );
    assert_eq!(
        err,
        LookupError::resolution_failed("example.com", "network unreachable")
    );
}

#[test]
fn test_fqdn() {
    assert_eq!(fqdn("example.com"), "example.com.");
    assert_eq!(fqdn("example.com."), "example.com.");
}

// Local name server answering from a fixed zone, so the hickory backend can be
// exercised without network access.

fn name(text: &str) -> Name {
    Name::from_ascii(text).expect("valid name")
}

fn zone_record(owner: &str, rdata: RData) -> DnsRecord {
    DnsRecord::from_rdata(name(owner), 300, rdata)
}

/// Answers for `qname`/`qtype`, following aliases the way a recursive server does.
fn zone_answers(zone: &[DnsRecord], qname: &Name, qtype: RecordType) -> Vec<DnsRecord> {
    let mut answers = Vec::new();
    let mut current = qname.clone();
    for _ in 0..=zone.len() {
        answers.extend(
            zone.iter()
                .filter(|r| r.name() == &current && r.record_type() == qtype)
                .cloned(),
        );
        if qtype == RecordType::CNAME {
            break;
        }
        let alias = zone
            .iter()
            .find(|r| r.name() == &current && r.record_type() == RecordType::CNAME);
        match alias.and_then(|r| r.data().cloned()) {
            Some(RData::CNAME(target)) => {
                answers.push(alias.cloned().expect("alias present"));
                current = target.0;
            }
            _ => break,
        }
    }
    answers
}

fn zone_response(zone: &[DnsRecord], request: &Message) -> Message {
    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(request.recursion_desired())
        .set_recursion_available(true);

    let Some(query) = request.queries().first() else {
        response.set_response_code(ResponseCode::FormErr);
        return response;
    };
    response.add_query(query.clone());

    let answers = zone_answers(zone, query.name(), query.query_type());
    if answers.is_empty() && !zone.iter().any(|r| r.name() == query.name()) {
        response.set_response_code(ResponseCode::NXDomain);
    }
    for answer in answers {
        response.add_answer(answer);
    }
    response
}

async fn spawn_zone_server(zone: Vec<DnsRecord>) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0")
        .await
        .expect("bind local name server");
    let addr = socket.local_addr().expect("local address");

    tokio::spawn(async move {
        let mut buf = [0u8; 4096];
        loop {
            let Ok((len, peer)) = socket.recv_from(&mut buf).await else {
                break;
            };
            let Ok(request) = Message::from_vec(&buf[..len]) else {
                continue;
            };
            let Ok(bytes) = zone_response(&zone, &request).to_vec() else {
                continue;
            };
            let _ = socket.send_to(&bytes, peer).await;
        }
    });

    addr
}

fn backend_for(addr: SocketAddr) -> HickoryBackend {
    let group = NameServerConfigGroup::from_ips_clear(&[addr.ip()], addr.port(), true);
    let config = ResolverConfig::from_parts(None, vec![], group);
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(2);
    opts.attempts = 1;
    opts.use_hosts_file = false;
    HickoryBackend::new(TokioAsyncResolver::tokio(config, opts))
}

async fn zone_backend(zone: Vec<DnsRecord>) -> HickoryBackend {
    backend_for(spawn_zone_server(zone).await)
}

#[tokio::test]
async fn test_cname_follows_whole_alias_chain() {
    let backend = zone_backend(vec![
        zone_record("www.test.", RData::CNAME(CNAME(name("mid.test.")))),
        zone_record("mid.test.", RData::CNAME(CNAME(name("final.test.")))),
        zone_record("final.test.", RData::A(A(Ipv4Addr::new(10, 0, 0, 1)))),
    ])
    .await;

    let records = backend
        .resolve(&Query::Cname("www.test.".to_string()))
        .await
        .expect("alias chain resolves");

    assert_eq!(records, vec![Record::Cname("final.test.".to_string())]);
    assert_eq!(records[0].to_line("www.test."), "www.test.\tCNAME\t final.test.");
}

#[tokio::test]
async fn test_cname_of_plain_host_is_itself() {
    let backend = zone_backend(vec![zone_record(
        "host.test.",
        RData::A(A(Ipv4Addr::new(10, 0, 0, 2))),
    )])
    .await;

    let records = backend
        .resolve(&Query::Cname("host.test.".to_string()))
        .await
        .expect("plain host resolves");

    assert_eq!(records, vec![Record::Cname("host.test.".to_string())]);
}

#[tokio::test]
async fn test_cname_without_addresses_falls_back_to_fqdn() {
    let backend = zone_backend(vec![zone_record(
        "text-only.test.",
        RData::TXT(TXT::new(vec!["hello".to_string()])),
    )])
    .await;

    let records = backend
        .resolve(&Query::Cname("text-only.test.".to_string()))
        .await
        .expect("no-data answer is not a failure");

    assert_eq!(records, vec![Record::Cname("text-only.test.".to_string())]);
}

#[tokio::test]
async fn test_cname_of_missing_name_is_no_such_host() {
    let backend = zone_backend(Vec::new()).await;

    let err = backend
        .resolve(&Query::Cname("missing.test.".to_string()))
        .await
        .expect_err("unknown name fails");

    assert_eq!(err, LookupError::no_such_host("missing.test."));
}

#[tokio::test]
async fn test_srv_queries_service_name_and_reports_responder() {
    let backend = zone_backend(vec![zone_record(
        "_xmpp-server._tcp.test.",
        RData::SRV(SRV::new(5, 10, 5269, name("xmpp.test."))),
    )])
    .await;

    let query = Query::Srv {
        domain: "test.".to_string(),
        protocol: Some("tcp".to_string()),
        service: Some("xmpp-server".to_string()),
    };
    let records = backend.resolve(&query).await.expect("srv resolves");

    assert_eq!(
        records,
        vec![Record::Srv {
            target: "xmpp.test.".to_string(),
            port: 5269,
            priority: 5,
            weight: 10,
            responder: "_xmpp-server._tcp.test.".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_txt_strings_are_joined() {
    let backend = zone_backend(vec![zone_record(
        "test.",
        RData::TXT(TXT::new(vec![
            "v=spf1 include:_spf.test.".to_string(),
            " -all".to_string(),
        ])),
    )])
    .await;

    let records = backend
        .resolve(&Query::Txt("test.".to_string()))
        .await
        .expect("txt resolves");

    assert_eq!(
        records,
        vec![Record::Txt("v=spf1 include:_spf.test. -all".to_string())]
    );
}

#[tokio::test]
async fn test_mx_keeps_preference() {
    let backend = zone_backend(vec![
        zone_record("test.", RData::MX(MX::new(10, name("mail.test.")))),
        zone_record("test.", RData::MX(MX::new(20, name("backup.test.")))),
    ])
    .await;

    let mut records = backend
        .resolve(&Query::Mx("test.".to_string()))
        .await
        .expect("mx resolves");
    records.sort_by_key(|record| match record {
        Record::Mx { preference, .. } => *preference,
        _ => u16::MAX,
    });

    assert_eq!(
        records,
        vec![
            Record::Mx {
                exchange: "mail.test.".to_string(),
                preference: 10,
            },
            Record::Mx {
                exchange: "backup.test.".to_string(),
                preference: 20,
            },
        ]
    );
}

#[tokio::test]
async fn test_ptr_rejects_non_address() {
    // Never reaches a name server
    let backend = backend_for(SocketAddr::from(([127, 0, 0, 1], 9)));

    let err = backend
        .resolve(&Query::Ptr("not-an-ip".to_string()))
        .await
        .expect_err("non-address input fails");

    assert_eq!(err.to_string(), "lookup not-an-ip: unrecognized address");
}
