//! Record results and their output lines.
//!
//! Each record becomes one tab-separated line starting with the queried name
//! and the record type. A, CNAME and MX values keep the single space after the
//! tab that scripts written against the historical output expect.

use std::net::IpAddr;

use crate::query::RecordKind;

/// One answer returned by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// Address of the host
    A(IpAddr),
    /// Canonical name at the end of the alias chain
    Cname(String),
    /// Mail exchanger
    Mx {
        /// Exchange host
        exchange: String,
        /// Preference, lower is preferred
        preference: u16,
    },
    /// Name server host
    Ns(String),
    /// Host name of the address
    Ptr(String),
    /// Service location
    Srv {
        /// Host providing the service
        target: String,
        /// Port the service listens on
        port: u16,
        /// Priority, lower is preferred
        priority: u16,
        /// Relative weight among equal priorities
        weight: u16,
        /// Name that answered the query
        responder: String,
    },
    /// Text record with its character-strings joined
    Txt(String),
}

impl Record {
    /// Record type label for the second column.
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::A(_) => RecordKind::A,
            Record::Cname(_) => RecordKind::Cname,
            Record::Mx { .. } => RecordKind::Mx,
            Record::Ns(_) => RecordKind::Ns,
            Record::Ptr(_) => RecordKind::Ptr,
            Record::Srv { .. } => RecordKind::Srv,
            Record::Txt(_) => RecordKind::Txt,
        }
    }

    /// Formats the output line for a record found while looking up `target`.
    pub fn to_line(&self, target: &str) -> String {
        let kind = self.kind();
        match self {
            Record::A(ip) => format!("{target}\t{kind}\t {ip}"),
            Record::Cname(name) => format!("{target}\t{kind}\t {name}"),
            Record::Mx {
                exchange,
                preference,
            } => format!("{target}\t{kind}\t{exchange}\t {preference}"),
            Record::Ns(host) | Record::Ptr(host) => format!("{target}\t{kind}\t{host}"),
            Record::Srv {
                target: srv_target,
                port,
                priority,
                weight,
                responder,
            } => format!("{target}\t{kind}\t{srv_target}\t{responder}\t{port}\t{priority}\t{weight}"),
            Record::Txt(text) => format!("{target}\t{kind}\t{text}"),
        }
    }
}
