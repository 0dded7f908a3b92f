//! Console representation of workload containers
//!
//! Field names follow the console frontend's payload. Upstream fields keep
//! their camelCase names; derived UI hints carry a double-underscore prefix and
//! are always emitted, even when false.

use k8s_openapi::api::core::v1::{
    ContainerPort, EnvVar, ExecAction, HTTPHeader, Lifecycle, ResourceRequirements,
    SecurityContext, TCPSocketAction,
};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Zero is omitted the same as an unset value
fn is_unset(value: &Option<i32>) -> bool {
    value.map_or(true, |v| v == 0)
}

// =============================================================================
// Container
// =============================================================================

/// Flattened container as rendered by the console
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleContainer {
    pub name: String,
    pub image: String,
    pub image_pull_policy: String,
    pub tty: bool,
    pub command: Vec<String>,
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_context: Option<SecurityContext>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ContainerPort>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env_from: Vec<EnvSourceRef>,
    pub resources: ResourceRequirements,
    /// Mounts whose volume exists in the unit
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mounts: Vec<ConsoleMount>,
    pub probe: ProbeBundle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle: Option<Lifecycle>,
    #[serde(flatten)]
    pub hints: UiHints,
}

/// Display hints derived from the container's shape
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiHints {
    /// Container declares its own env vars
    #[serde(rename = "__isEnvCustom")]
    pub is_env_custom: bool,
    /// Container imports env from ConfigMaps/Secrets
    #[serde(rename = "__isEnvFrom")]
    pub is_env_from: bool,
    /// Container overrides the image entrypoint
    #[serde(rename = "__isCommand")]
    pub is_command: bool,
    /// At least one resolved mount has a display kind
    #[serde(rename = "__isMountFile")]
    pub is_mount_file: bool,
    /// Owning unit requests log file collection
    #[serde(rename = "__isLog")]
    pub is_log: bool,
    #[serde(rename = "__liveness")]
    pub liveness: bool,
    #[serde(rename = "__readiness")]
    pub readiness: bool,
}

/// Converted containers of a whole workload unit
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleWorkload {
    pub containers: Vec<ConsoleContainer>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub init_containers: Vec<ConsoleContainer>,
}

// =============================================================================
// Mounts and env sources
// =============================================================================

/// Volume mount joined with its volume's display kind
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ConsoleMount {
    pub name: String,
    #[serde(rename = "readonly", default, skip_serializing_if = "is_false")]
    pub read_only: bool,
    #[serde(rename = "path")]
    pub mount_path: String,
    #[serde(rename = "subpath", default, skip_serializing_if = "Option::is_none")]
    pub sub_path: Option<String>,
    #[serde(rename = "__kind", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

/// Kind of object an env source points at
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EnvSourceKind {
    Config,
    Secret,
}

/// Flattened `envFrom` entry
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvSourceRef {
    #[serde(rename = "type")]
    pub kind: EnvSourceKind,
    pub name: String,
}

// =============================================================================
// Probes
// =============================================================================

/// Liveness and readiness probes, each present only if declared
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ProbeBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liveness: Option<ConsoleProbe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness: Option<ConsoleProbe>,
}

/// Normalized probe
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ConsoleProbe {
    /// `None` when the upstream probe had no exec, HTTP or TCP action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<ProbeAction>,
    #[serde(rename = "delay", default, skip_serializing_if = "is_unset")]
    pub initial_delay_seconds: Option<i32>,
    #[serde(rename = "timeout", default, skip_serializing_if = "is_unset")]
    pub timeout_seconds: Option<i32>,
    #[serde(rename = "period", default, skip_serializing_if = "is_unset")]
    pub period_seconds: Option<i32>,
    pub threshold: Threshold,
}

/// Success/failure thresholds, grouped for the console form
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Threshold {
    #[serde(rename = "success", default, skip_serializing_if = "is_unset")]
    pub success_threshold: Option<i32>,
    #[serde(rename = "failure", default, skip_serializing_if = "is_unset")]
    pub failure_threshold: Option<i32>,
}

/// Probe action, tagged by type with its payload under `method`
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "method")]
pub enum ProbeAction {
    #[serde(rename = "EXEC")]
    Exec(ExecAction),
    #[serde(rename = "HTTP")]
    HttpGet(HttpGetMethod),
    #[serde(rename = "TCP")]
    TcpSocket(TCPSocketAction),
}

impl ProbeAction {
    /// Wire tag of this action
    pub fn type_name(&self) -> &'static str {
        match self {
            ProbeAction::Exec(_) => "EXEC",
            ProbeAction::HttpGet(_) => "HTTP",
            ProbeAction::TcpSocket(_) => "TCP",
        }
    }
}

/// HTTP GET payload of a console probe
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HttpGetMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub port: IntOrString,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<HTTPHeader>,
}
