//! Configuration constants.
//!
//! Defaults and the fixed messages that scripts parsing `lookup` output rely on.

/// Overall lookup deadline in seconds when `-timeout` is not given.
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Program name used in usage, version and hint output.
pub const PROGRAM_NAME: &str = "lookup";

/// Crate version, printed by `-version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Printed when no lookup mode was selected.
pub const NO_QUERY_HINT: &str = "Try \"lookup -help\"";

/// Printed when an SRV lookup is missing its service or protocol.
pub const SRV_ARGUMENTS_REQUIRED: &str = "service (-s), protocol (-p) and domain (-d) required";

/// Printed when the lookup deadline elapses.
pub const TIMEOUT_MESSAGE: &str = "timeout";

/// Reason shown for NXDOMAIN and empty answers, as platform resolvers word it.
pub const NO_SUCH_HOST: &str = "no such host";

/// Reason shown when `-ptr` is given something that is not an IP address.
pub const UNRECOGNIZED_ADDRESS: &str = "unrecognized address";

/// Reason shown when `-p` names a protocol SRV records are not published for.
pub const UNSUPPORTED_PROTOCOL: &str = "unsupported protocol";

/// Exit code for lookup failures under `-fail-on error`, and for bad arguments.
pub const EXIT_LOOKUP_FAILED: i32 = 2;

