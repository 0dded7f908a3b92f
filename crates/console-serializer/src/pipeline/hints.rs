//! UI hint derivation
//!
//! Hints describe the shape of the raw container (plus its resolved mounts and
//! owning unit) so the console can pick which form sections to expand.

use k8s_openapi::api::core::v1::Container;

use crate::console::{ConsoleMount, UiHints};
use crate::pod::{WorkloadUnit, LOG_FILES_ANNOTATION};

/// Derive all hints for one container.
///
/// `is_log` comes from the owning unit and is the same for every container in
/// it, see [`is_log`].
pub fn derive_hints(container: &Container, mounts: &[ConsoleMount], is_log: bool) -> UiHints {
    UiHints {
        is_env_custom: is_env_custom(container),
        is_env_from: is_env_from(container),
        is_command: is_command(container),
        is_mount_file: is_mount_file(mounts),
        is_log,
        liveness: has_liveness(Some(container)),
        readiness: has_readiness(Some(container)),
    }
}

pub fn is_env_custom(container: &Container) -> bool {
    container.env.as_ref().is_some_and(|env| !env.is_empty())
}

pub fn is_env_from(container: &Container) -> bool {
    container
        .env_from
        .as_ref()
        .is_some_and(|sources| !sources.is_empty())
}

pub fn is_command(container: &Container) -> bool {
    container
        .command
        .as_ref()
        .is_some_and(|command| !command.is_empty())
}

/// True if any resolved mount carries a display kind
pub fn is_mount_file(mounts: &[ConsoleMount]) -> bool {
    mounts.iter().any(|m| !m.kind.is_empty())
}

/// True if the unit asks for log file collection
pub fn is_log(unit: &WorkloadUnit) -> bool {
    unit.has_annotation(LOG_FILES_ANNOTATION)
}

pub fn has_liveness(container: Option<&Container>) -> bool {
    container.is_some_and(|c| c.liveness_probe.is_some())
}

pub fn has_readiness(container: Option<&Container>) -> bool {
    container.is_some_and(|c| c.readiness_probe.is_some())
}
