//! `envFrom` flattening

use k8s_openapi::api::core::v1::EnvFromSource;

use crate::console::{EnvSourceKind, EnvSourceRef};

/// Flatten env sources into `(kind, name)` pairs.
///
/// A ConfigMap reference wins over a Secret reference on the same entry.
/// Entries with neither are skipped.
pub fn map_env_sources(sources: &[EnvFromSource]) -> Vec<EnvSourceRef> {
    sources
        .iter()
        .filter_map(|source| {
            if let Some(cm) = &source.config_map_ref {
                Some(EnvSourceRef {
                    kind: EnvSourceKind::Config,
                    name: cm.name.clone(),
                })
            } else {
                source.secret_ref.as_ref().map(|secret| EnvSourceRef {
                    kind: EnvSourceKind::Secret,
                    name: secret.name.clone(),
                })
            }
        })
        .collect()
}
