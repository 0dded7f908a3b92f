//! Diagnostic reporting for malformed input
//!
//! Conversion never fails. Anomalies worth an operator's attention are reported
//! through a [`DiagnosticSink`] supplied by the caller.

use std::fmt;

#[cfg(test)]
use mockall::automock;
use tracing::error;

/// Which probe slot of a container a diagnostic refers to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Liveness,
    Readiness,
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeKind::Liveness => write!(f, "liveness"),
            ProbeKind::Readiness => write!(f, "readiness"),
        }
    }
}

/// Receiver for non-fatal conversion problems
#[cfg_attr(test, automock)]
pub trait DiagnosticSink: Send + Sync {
    /// A probe declared none of the exec, HTTP GET or TCP socket actions
    fn unsupported_probe_action(&self, container: &str, kind: ProbeKind);
}

/// Sink that emits each diagnostic as a `tracing` error event
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unsupported_probe_action(&self, container: &str, kind: ProbeKind) {
        error!(
            container = %container,
            probe = %kind,
            "unsupported probe handler: expected exec, httpGet or tcpSocket"
        );
    }
}

/// Sink that discards diagnostics
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn unsupported_probe_action(&self, _container: &str, _kind: ProbeKind) {}
}
