// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Loading pods to mutate and rendering the result.

pub mod cluster;
pub mod manifest;
pub mod render;

pub use cluster::fetch_pod;
pub use manifest::{load_pod_from_file, parse_manifest};
pub use render::{render_pod, OutputFormat};

use crate::error::Result;
use k8s_openapi::api::core::v1::Pod;
use kube::Client;
use std::path::PathBuf;

/// Where the pod to mutate comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PodSource {
    /// A manifest file on disk, YAML or JSON
    Manifest(PathBuf),
    /// A live pod in the cluster reachable through the default kubeconfig
    Cluster { namespace: String, name: String },
}

/// Load the pod described by `source`
pub async fn load_pod(source: &PodSource) -> Result<Pod> {
    match source {
        PodSource::Manifest(path) => load_pod_from_file(path).await,
        PodSource::Cluster { namespace, name } => {
            let client = Client::try_default().await?;
            fetch_pod(&client, namespace, name).await
        }
    }
}
