//! Probe conversion
//!
//! Upstream probes carry their action as several optional fields. The console
//! wants exactly one tagged action, picked by priority: exec, then HTTP GET,
//! then TCP socket. A probe with none of them is reported to the sink and
//! rendered without a handler.

use k8s_openapi::api::core::v1::Probe;

use crate::console::{ConsoleProbe, HttpGetMethod, ProbeAction, ProbeBundle, Threshold};
use crate::diagnostics::{DiagnosticSink, ProbeKind};

/// Convert a container's liveness and readiness probes.
///
/// The bundle is always returned; each slot is filled only if the matching
/// probe was declared.
pub fn convert_probes(
    container: &str,
    liveness: Option<&Probe>,
    readiness: Option<&Probe>,
    sink: &dyn DiagnosticSink,
) -> ProbeBundle {
    ProbeBundle {
        liveness: liveness.map(|p| convert_probe(container, ProbeKind::Liveness, p, sink)),
        readiness: readiness.map(|p| convert_probe(container, ProbeKind::Readiness, p, sink)),
    }
}

/// Convert a single probe. Timing and threshold fields are copied as-is.
pub fn convert_probe(
    container: &str,
    kind: ProbeKind,
    probe: &Probe,
    sink: &dyn DiagnosticSink,
) -> ConsoleProbe {
    let handler = convert_action(probe);
    if handler.is_none() {
        sink.unsupported_probe_action(container, kind);
    }

    ConsoleProbe {
        handler,
        initial_delay_seconds: probe.initial_delay_seconds,
        timeout_seconds: probe.timeout_seconds,
        period_seconds: probe.period_seconds,
        threshold: Threshold {
            success_threshold: probe.success_threshold,
            failure_threshold: probe.failure_threshold,
        },
    }
}

/// Pick the probe's action by priority, `None` if it has no supported action
pub fn convert_action(probe: &Probe) -> Option<ProbeAction> {
    if let Some(exec) = &probe.exec {
        return Some(ProbeAction::Exec(exec.clone()));
    }

    if let Some(http) = &probe.http_get {
        return Some(ProbeAction::HttpGet(HttpGetMethod {
            path: http.path.clone(),
            port: http.port.clone(),
            host: http.host.clone(),
            scheme: http.scheme.clone(),
            headers: http.http_headers.clone().unwrap_or_default(),
        }));
    }

    probe
        .tcp_socket
        .as_ref()
        .map(|tcp| ProbeAction::TcpSocket(tcp.clone()))
}
