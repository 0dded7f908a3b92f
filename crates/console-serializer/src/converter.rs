//! ContainerConverter: assembles console containers for a workload unit
//!
//! Runs every pipeline stage for each container, in declaration order. The
//! volume index and the unit-wide log hint are computed once per converter.

use k8s_openapi::api::core::v1::Container;
use tracing::debug;

use crate::console::{ConsoleContainer, ConsoleWorkload};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::pipeline::volumes::{resolve_mounts, VolumeIndex};
use crate::pipeline::{env, hints, probes};
use crate::pod::{VolumeDescriptor, WorkloadUnit};

static DEFAULT_SINK: TracingSink = TracingSink;

/// Converts raw containers of one workload unit into console containers.
///
/// ```rust,ignore
/// let rendered = ContainerConverter::new(&pod, &volumes)
///     .with_sink(&sink)
///     .convert_unit();
/// ```
pub struct ContainerConverter<'a> {
    unit: &'a WorkloadUnit,
    index: VolumeIndex<'a>,
    is_log: bool,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> ContainerConverter<'a> {
    /// Create a converter for `unit` whose mounts resolve against `volumes`.
    pub fn new(unit: &'a WorkloadUnit, volumes: &'a [VolumeDescriptor]) -> Self {
        Self {
            unit,
            index: VolumeIndex::new(volumes),
            is_log: hints::is_log(unit),
            sink: &DEFAULT_SINK,
        }
    }

    /// Report malformed probes to `sink` instead of the tracing log.
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    /// Convert the unit's containers and init containers.
    pub fn convert_unit(&self) -> ConsoleWorkload {
        ConsoleWorkload {
            containers: self.convert(&self.unit.containers),
            init_containers: self.convert(&self.unit.init_containers),
        }
    }

    /// Convert an arbitrary container list belonging to this unit.
    pub fn convert(&self, containers: &[Container]) -> Vec<ConsoleContainer> {
        let converted: Vec<ConsoleContainer> = containers
            .iter()
            .map(|c| self.convert_container(c))
            .collect();

        let dropped_mounts = containers
            .iter()
            .map(|c| c.volume_mounts.as_ref().map_or(0, Vec::len))
            .sum::<usize>()
            - converted.iter().map(|c| c.mounts.len()).sum::<usize>();

        debug!(
            unit = %self.unit.name,
            namespace = %self.unit.namespace,
            containers = converted.len(),
            volumes = self.index.len(),
            dropped_mounts,
            "converted containers for console"
        );

        converted
    }

    /// Convert a single container.
    pub fn convert_container(&self, container: &Container) -> ConsoleContainer {
        let mounts = resolve_mounts(
            container.volume_mounts.as_deref().unwrap_or_default(),
            &self.index,
        );
        let hints = hints::derive_hints(container, &mounts, self.is_log);

        ConsoleContainer {
            name: container.name.clone(),
            image: container.image.clone().unwrap_or_default(),
            image_pull_policy: container.image_pull_policy.clone().unwrap_or_default(),
            tty: container.tty.unwrap_or(false),
            command: container.command.clone().unwrap_or_default(),
            args: container.args.clone().unwrap_or_default(),
            working_dir: container.working_dir.clone(),
            security_context: container.security_context.clone(),
            ports: container.ports.clone().unwrap_or_default(),
            env: container.env.clone().unwrap_or_default(),
            env_from: env::map_env_sources(container.env_from.as_deref().unwrap_or_default()),
            resources: container.resources.clone().unwrap_or_default(),
            mounts,
            probe: probes::convert_probes(
                &container.name,
                container.liveness_probe.as_ref(),
                container.readiness_probe.as_ref(),
                self.sink,
            ),
            lifecycle: container.lifecycle.clone(),
            hints,
        }
    }
}

/// One-shot conversion of `containers` belonging to `unit`.
pub fn convert_containers(
    unit: &WorkloadUnit,
    containers: &[Container],
    volumes: &[VolumeDescriptor],
    sink: &dyn DiagnosticSink,
) -> Vec<ConsoleContainer> {
    ContainerConverter::new(unit, volumes)
        .with_sink(sink)
        .convert(containers)
}
