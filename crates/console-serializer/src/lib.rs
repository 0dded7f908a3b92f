//! Console serializer for workload containers
//!
//! Converts the containers of a workload unit (probes, volume mounts and
//! environment sources included) from the upstream Kubernetes schema into the
//! flattened shape the console frontend renders.
//!
//! Conversion never fails. Mounts of unknown volumes and env sources without a
//! reference are dropped; probes without a supported action are reported to a
//! [`DiagnosticSink`] and rendered without a handler.
//!
//! # Usage
//!
//! ```rust,ignore
//! let rendered = ContainerConverter::new(&pod, &volumes).convert_unit();
//! let json = serde_json::to_string(&rendered)?;
//! ```

pub mod console;
mod converter;
pub mod diagnostics;
#[cfg(test)]
mod fixtures;
pub mod pipeline;
pub mod pod;

pub use k8s_openapi;

pub use console::{
    ConsoleContainer, ConsoleMount, ConsoleProbe, ConsoleWorkload, EnvSourceKind, EnvSourceRef,
    ProbeAction, ProbeBundle, UiHints,
};
pub use converter::{convert_containers, ContainerConverter};
pub use diagnostics::{DiagnosticSink, NoopSink, ProbeKind, TracingSink};
pub use pod::{Annotation, VolumeDescriptor, WorkloadUnit, LOG_FILES_ANNOTATION};
