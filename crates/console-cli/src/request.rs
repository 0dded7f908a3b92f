//! Render request documents
//!
//! A request bundles the workload unit with the volumes resolved for it:
//!
//! ```yaml
//! pod:
//!   name: api-7d9f
//!   annotations:
//!     - key: logging.caicloud.io/required-logfiles
//!       value: /var/log/api.log
//!   containers:
//!     - name: api
//!       image: registry.local/api:1.4.2
//! volumes:
//!   - name: data
//!     __kind: PVC
//! ```

use std::path::Path;

use clap::ValueEnum;
use console_serializer::{VolumeDescriptor, WorkloadUnit};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Encoding of a render request
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Guess the format from a file extension, `None` if it is not recognized
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(InputFormat::Json),
            Some("yaml") | Some("yml") => Some(InputFormat::Yaml),
            _ => None,
        }
    }
}

/// Workload unit plus the volumes its mounts resolve against
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RenderRequest {
    pub pod: WorkloadUnit,
    #[serde(default)]
    pub volumes: Vec<VolumeDescriptor>,
}

impl RenderRequest {
    /// Parse a request document
    pub fn parse(input: &str, format: InputFormat) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(Error::invalid_input("empty input"));
        }

        let request: RenderRequest = match format {
            InputFormat::Json => serde_json::from_str(input)?,
            InputFormat::Yaml => serde_yaml::from_str(input)?,
        };

        if request.pod.name.is_empty() {
            return Err(Error::invalid_input("pod.name must not be empty"));
        }

        Ok(request)
    }
}
