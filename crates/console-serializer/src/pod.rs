//! Workload unit and volume inputs
//!
//! The resource reader hands the converter a workload unit (a pod, as seen by
//! the console) and the list of volumes already resolved for that unit.

use k8s_openapi::api::core::v1::Container;
use serde::{Deserialize, Serialize};

/// Annotation requesting log file collection for a workload
pub const LOG_FILES_ANNOTATION: &str = "logging.caicloud.io/required-logfiles";

/// Single annotation entry, kept in declaration order
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Annotation {
    pub key: String,
    pub value: String,
}

impl Annotation {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Smallest schedulable unit containing one or more containers
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadUnit {
    /// Unit name
    pub name: String,
    /// Namespace the unit lives in
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    /// Annotations in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// Application containers
    #[serde(default)]
    pub containers: Vec<Container>,
    /// Init containers, run to completion before `containers` start
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub init_containers: Vec<Container>,
}

impl WorkloadUnit {
    /// Create an empty unit
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            ..Default::default()
        }
    }

    /// Append an annotation
    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.push(Annotation::new(key, value));
        self
    }

    /// Append a container
    pub fn with_container(mut self, container: Container) -> Self {
        self.containers.push(container);
        self
    }

    /// Append an init container
    pub fn with_init_container(mut self, container: Container) -> Self {
        self.init_containers.push(container);
        self
    }

    /// Whether an annotation with exactly this key exists. Values are ignored.
    pub fn has_annotation(&self, key: &str) -> bool {
        self.annotations.iter().any(|a| a.key == key)
    }
}

/// Named volume attachable to containers, with its console display kind
/// (`PVC`, `Config`, `Secret`, ...)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeDescriptor {
    pub name: String,
    #[serde(rename = "__kind", default)]
    pub kind: String,
}

impl VolumeDescriptor {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}
