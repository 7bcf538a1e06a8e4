// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod manifest parsing

use crate::error::{InjectorError, Result};
use k8s_openapi::api::core::v1::Pod;
use std::path::Path;
use tracing::{debug, instrument};

/// Parse a pod from a YAML or JSON document
pub fn parse_manifest(manifest: &str) -> Result<Pod> {
    let value: serde_yaml::Value = serde_yaml::from_str(manifest)
        .map_err(|e| InjectorError::ManifestError(format!("Invalid manifest: {}", e)))?;

    if value.is_null() {
        return Err(InjectorError::ManifestError("empty manifest".to_string()));
    }
    if !value.is_mapping() {
        return Err(InjectorError::ManifestError(
            "manifest is not a mapping".to_string(),
        ));
    }

    if let Some(kind) = value.get("kind").and_then(|k| k.as_str()) {
        if kind != "Pod" {
            return Err(InjectorError::ManifestError(format!(
                "Expected kind Pod, found {}",
                kind
            )));
        }
    }

    serde_yaml::from_value(value)
        .map_err(|e| InjectorError::ManifestError(format!("Invalid pod: {}", e)))
}

/// Read and parse a pod manifest from disk
#[instrument]
pub async fn load_pod_from_file(path: &Path) -> Result<Pod> {
    let manifest = tokio::fs::read_to_string(path).await.map_err(|e| {
        InjectorError::ManifestError(format!("Failed to read {}: {}", path.display(), e))
    })?;
    debug!("Read {} bytes from {}", manifest.len(), path.display());

    parse_manifest(&manifest)
}
