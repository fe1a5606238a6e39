//! Configuration types and CLI options.
//!
//! `Opt` is the clap definition of the command line. It is converted once into
//! the immutable [`Config`] that the rest of the crate reads.

use std::time::Duration;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::constants::DEFAULT_TIMEOUT_SECS;

/// Logging level for the application.
///
/// Controls the verbosity of diagnostics on standard error, from most
/// restrictive (Error) to most verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy for lookup failures.
///
/// Scripts historically rely on `lookup` exiting 0 even when the lookup
/// failed, so `Never` is the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 after a lookup, whatever happened
    Never,
    /// Exit non-zero when the lookup failed or timed out
    Error,
}

/// Command-line options.
///
/// Options are single-dash words (`-mx example.com`); see
/// [`normalize_args`](crate::config::normalize_args) for how they reach clap.
/// Help and version are handled by hand so the usage text keeps its
/// historical layout.
#[derive(Debug, Parser)]
#[command(
    name = "lookup",
    about = "Succinct DNS record lookup",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Opt {
    /// A record lookup. Hostname required
    #[arg(long = "a", value_name = "string")]
    pub a_record: Option<String>,

    /// CNAME record lookup. Hostname required
    #[arg(long = "cname", value_name = "string")]
    pub cname: Option<String>,

    /// MX record lookup. Domain name required
    #[arg(long = "mx", value_name = "string")]
    pub mx: Option<String>,

    /// NS record lookup. Domain name required
    #[arg(long = "ns", value_name = "string")]
    pub ns: Option<String>,

    /// PTR record lookup. IP address required {IPv4 or IPv6}
    #[arg(long = "ptr", value_name = "string")]
    pub ptr: Option<String>,

    /// Domain name required. See -p and -s
    #[arg(long = "srv", value_name = "string")]
    pub srv: Option<String>,

    /// Protocol required {tcp or udp}.  See -srv
    #[arg(long = "p", value_name = "string")]
    pub protocol: Option<String>,

    /// Service required {e.g., xmpp-server}. See -srv
    #[arg(long = "s", value_name = "string")]
    pub service: Option<String>,

    /// Domain name required
    #[arg(long = "txt", value_name = "string")]
    pub txt: Option<String>,

    /// Timeout value (seconds)
    #[arg(long = "timeout", value_name = "int", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log level: error, warn, info, debug, trace
    #[arg(long = "log-level", value_name = "string", value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain, json
    #[arg(long = "log-format", value_name = "string", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Exit policy for failed lookups: never, error
    #[arg(long = "fail-on", value_name = "string", value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// Show usage
    #[arg(long = "help", alias = "h", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Show version
    #[arg(long = "version", action = ArgAction::SetTrue)]
    pub version: bool,

    /// Hostname or IP address; an IP address selects a PTR lookup, anything else an A lookup
    #[arg(value_name = "HOST|IP")]
    pub positional: Vec<String>,
}

/// Lookup configuration.
///
/// Built once from [`Opt`] (or by hand in tests) and only ever read
/// afterwards. Empty strings are treated the same as absent values.
///
/// # Examples
///
/// ```
/// use lookup::Config;
///
/// let config = Config {
///     mx: Some("example.com".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.timeout().as_secs(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// First positional argument (hostname or IP address)
    pub target: Option<String>,

    /// `-a` hostname
    pub a_record: Option<String>,

    /// `-cname` hostname
    pub cname: Option<String>,

    /// `-mx` domain
    pub mx: Option<String>,

    /// `-ns` domain
    pub ns: Option<String>,

    /// `-ptr` address
    pub ptr: Option<String>,

    /// `-srv` domain
    pub srv: Option<String>,

    /// `-p` SRV protocol
    pub protocol: Option<String>,

    /// `-s` SRV service
    pub service: Option<String>,

    /// `-txt` domain
    pub txt: Option<String>,

    /// Overall lookup deadline in seconds
    pub timeout_seconds: u64,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Exit code policy for failed lookups
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: None,
            a_record: None,
            cname: None,
            mx: None,
            ns: None,
            ptr: None,
            srv: None,
            protocol: None,
            service: None,
            txt: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
        }
    }
}

impl Config {
    /// The lookup deadline as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            target: opt.positional.into_iter().next(),
            a_record: opt.a_record,
            cname: opt.cname,
            mx: opt.mx,
            ns: opt.ns,
            ptr: opt.ptr,
            srv: opt.srv,
            protocol: opt.protocol,
            service: opt.service,
            txt: opt.txt,
            timeout_seconds: opt.timeout,
            log_level: opt.log_level,
            log_format: opt.log_format,
            fail_on: opt.fail_on,
        }
    }
}

/// Returns the value when it is present and not empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
