//! Volume mount resolution
//!
//! Joins a container's mounts against the unit's volumes. Mounts that name a
//! volume the unit does not have are dropped: stale or cross-unit references
//! must not show up in the console.

use std::collections::HashMap;

use k8s_openapi::api::core::v1::VolumeMount;

use crate::console::ConsoleMount;
use crate::pod::VolumeDescriptor;

/// Lookup from volume name to descriptor, built once per conversion
#[derive(Debug, Default)]
pub struct VolumeIndex<'a> {
    by_name: HashMap<&'a str, &'a VolumeDescriptor>,
}

impl<'a> VolumeIndex<'a> {
    /// Index `volumes` by name. A repeated name keeps the last descriptor.
    pub fn new(volumes: &'a [VolumeDescriptor]) -> Self {
        let by_name = volumes.iter().map(|v| (v.name.as_str(), v)).collect();
        Self { by_name }
    }

    pub fn get(&self, name: &str) -> Option<&'a VolumeDescriptor> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Resolve mounts in declaration order, skipping unknown volumes
pub fn resolve_mounts(mounts: &[VolumeMount], index: &VolumeIndex<'_>) -> Vec<ConsoleMount> {
    mounts
        .iter()
        .filter_map(|mount| {
            index.get(&mount.name).map(|volume| ConsoleMount {
                name: mount.name.clone(),
                read_only: mount.read_only.unwrap_or(false),
                mount_path: mount.mount_path.clone(),
                sub_path: mount.sub_path.clone(),
                kind: volume.kind.clone(),
            })
        })
        .collect()
}
