//! End-to-end conversion scenarios through the public API

use std::sync::Mutex;

use console_serializer::k8s_openapi::api::core::v1::{Container, Probe, VolumeMount};
use console_serializer::{
    ContainerConverter, DiagnosticSink, ProbeAction, ProbeKind, VolumeDescriptor, WorkloadUnit,
    LOG_FILES_ANNOTATION,
};
use serde_json::{json, Value};

#[derive(Default)]
struct RecordingSink {
    events: Mutex<Vec<(String, ProbeKind)>>,
}

impl RecordingSink {
    fn events(&self) -> Vec<(String, ProbeKind)> {
        self.events.lock().expect("sink lock").clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn unsupported_probe_action(&self, container: &str, kind: ProbeKind) {
        self.events
            .lock()
            .expect("sink lock")
            .push((container.to_string(), kind));
    }
}

fn upstream(value: Value) -> Container {
    serde_json::from_value(value).expect("upstream container should deserialize")
}

fn healthz_container() -> Container {
    upstream(json!({
        "name": "api",
        "image": "registry.local/api:1.4.2",
        "env": [{"name": "A", "value": "1"}],
        "volumeMounts": [{"name": "data", "mountPath": "/var/lib/api"}],
        "livenessProbe": {"httpGet": {"path": "/healthz", "port": 8080}}
    }))
}

#[test]
fn story_single_container_with_pvc_and_http_liveness() {
    let unit = WorkloadUnit::new("api-7d9f", "prod").with_container(healthz_container());
    let volumes = vec![VolumeDescriptor::new("data", "PVC")];
    let sink = RecordingSink::default();

    let rendered = ContainerConverter::new(&unit, &volumes)
        .with_sink(&sink)
        .convert_unit();

    assert_eq!(rendered.containers.len(), 1);
    let c = &rendered.containers[0];
    assert!(c.hints.is_env_custom);
    assert!(!c.hints.is_env_from);
    assert!(!c.hints.is_command);
    assert!(c.hints.is_mount_file);
    assert!(c.hints.liveness);
    assert!(!c.hints.readiness);
    assert_eq!(c.mounts.len(), 1);
    assert_eq!(c.mounts[0].kind, "PVC");

    let liveness = c.probe.liveness.as_ref().expect("liveness probe");
    match &liveness.handler {
        Some(ProbeAction::HttpGet(method)) => assert_eq!(method.path.as_deref(), Some("/healthz")),
        other => panic!("expected HTTP handler, got {:?}", other),
    }
    assert!(sink.events().is_empty());
}

#[test]
fn story_mount_of_missing_volume_is_dropped_silently() {
    let mut container = healthz_container();
    container
        .volume_mounts
        .get_or_insert_with(Vec::new)
        .push(VolumeMount {
            name: "ghost".to_string(),
            mount_path: "/ghost".to_string(),
            ..Default::default()
        });
    let unit = WorkloadUnit::new("api-7d9f", "prod").with_container(container);
    let volumes = vec![VolumeDescriptor::new("data", "PVC")];

    let rendered = ContainerConverter::new(&unit, &volumes).convert_unit();

    let raw_mounts = unit.containers[0].volume_mounts.as_ref().map_or(0, Vec::len);
    assert_eq!(rendered.containers[0].mounts.len(), raw_mounts - 1);
    assert!(rendered.containers[0]
        .mounts
        .iter()
        .all(|m| m.name != "ghost"));
}

#[test]
fn story_probe_without_action_is_logged_and_rendering_continues() {
    let mut broken = upstream(json!({"name": "worker", "image": "registry.local/worker:2.0"}));
    broken.liveness_probe = Some(Probe {
        period_seconds: Some(10),
        ..Default::default()
    });
    let unit = WorkloadUnit::new("worker-0", "jobs")
        .with_container(broken)
        .with_container(healthz_container());
    let sink = RecordingSink::default();

    let rendered = ContainerConverter::new(&unit, &[])
        .with_sink(&sink)
        .convert_unit();

    assert_eq!(rendered.containers.len(), 2);
    let probe = rendered.containers[0]
        .probe
        .liveness
        .as_ref()
        .expect("probe kept");
    assert!(probe.handler.is_none());
    assert_eq!(probe.period_seconds, Some(10));
    assert_eq!(
        sink.events(),
        vec![("worker".to_string(), ProbeKind::Liveness)]
    );
}

#[test]
fn wire_shape_matches_console_payload() {
    let unit = WorkloadUnit::new("api-7d9f", "prod")
        .with_annotation(LOG_FILES_ANNOTATION, "/var/log/api.log")
        .with_container(healthz_container());
    let volumes = vec![VolumeDescriptor::new("data", "PVC")];

    let rendered = ContainerConverter::new(&unit, &volumes).convert_unit();
    let value = serde_json::to_value(&rendered.containers[0]).expect("serialize");

    assert_eq!(
        value,
        json!({
            "name": "api",
            "image": "registry.local/api:1.4.2",
            "imagePullPolicy": "",
            "tty": false,
            "command": [],
            "args": [],
            "env": [{"name": "A", "value": "1"}],
            "resources": {},
            "mounts": [{"name": "data", "path": "/var/lib/api", "__kind": "PVC"}],
            "probe": {
                "liveness": {
                    "handler": {"type": "HTTP", "method": {"path": "/healthz", "port": 8080}},
                    "threshold": {}
                }
            },
            "__isEnvCustom": true,
            "__isEnvFrom": false,
            "__isCommand": false,
            "__isMountFile": true,
            "__isLog": true,
            "__liveness": true,
            "__readiness": false
        })
    );
}

#[test]
fn conversion_is_idempotent() {
    let sidecar = upstream(json!({
        "name": "sidecar",
        "image": "envoy",
        "readinessProbe": {"tcpSocket": {"port": 15021}}
    }));
    let unit = WorkloadUnit::new("api-7d9f", "prod")
        .with_container(healthz_container())
        .with_container(sidecar);
    let volumes = vec![
        VolumeDescriptor::new("data", "PVC"),
        VolumeDescriptor::new("envoy-config", "Config"),
    ];

    let first = serde_json::to_vec(&ContainerConverter::new(&unit, &volumes).convert_unit())
        .expect("serialize");
    let second = serde_json::to_vec(&ContainerConverter::new(&unit, &volumes).convert_unit())
        .expect("serialize");

    assert_eq!(first, second);
}

#[test]
fn upstream_fields_pass_through_unchanged() {
    let raw = json!({
        "name": "api",
        "image": "registry.local/api:1.4.2",
        "env": [
            {"name": "MODE", "value": "prod"},
            {
                "name": "CPU_LIMIT",
                "valueFrom": {
                    "resourceFieldRef": {
                        "containerName": "api",
                        "resource": "limits.cpu",
                        "divisor": "1m"
                    }
                }
            }
        ],
        "securityContext": {
            "runAsUser": 1000,
            "readOnlyRootFilesystem": true,
            "seccompProfile": {"type": "RuntimeDefault"}
        },
        "ports": [
            {"name": "http", "containerPort": 8080, "hostIP": "127.0.0.1", "protocol": "TCP"}
        ],
        "lifecycle": {"preStop": {"sleep": {"seconds": 5}}},
        "resources": {
            "limits": {"cpu": "500m", "memory": "128Mi"},
            "requests": {"memory": "64Mi"}
        }
    });
    let unit = WorkloadUnit::new("api-7d9f", "prod").with_container(upstream(raw.clone()));

    let rendered = ContainerConverter::new(&unit, &[]).convert_unit();
    let value = serde_json::to_value(&rendered.containers[0]).expect("serialize");

    for field in ["env", "securityContext", "ports", "lifecycle", "resources"] {
        assert_eq!(value[field], raw[field], "{field} changed in conversion");
    }
}

#[test]
fn zero_probe_timings_are_left_out_of_the_payload() {
    let container = upstream(json!({
        "name": "api",
        "image": "api",
        "readinessProbe": {
            "exec": {"command": ["true"]},
            "initialDelaySeconds": 0,
            "periodSeconds": 5,
            "successThreshold": 0,
            "failureThreshold": 3
        }
    }));
    let unit = WorkloadUnit::new("api-7d9f", "prod").with_container(container);

    let rendered = ContainerConverter::new(&unit, &[]).convert_unit();
    let value = serde_json::to_value(&rendered.containers[0]).expect("serialize");

    assert_eq!(
        value["probe"]["readiness"],
        json!({
            "handler": {"type": "EXEC", "method": {"command": ["true"]}},
            "period": 5,
            "threshold": {"failure": 3}
        })
    );
}
