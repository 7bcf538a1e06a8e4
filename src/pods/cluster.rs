// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fetching pods from the Kubernetes API

use crate::error::Result;
use k8s_openapi::api::core::v1::Pod;
use kube::{Api, Client};
use tracing::{info, instrument};

/// Get a pod by namespace and name
#[instrument(skip(client))]
pub async fn fetch_pod(client: &Client, namespace: &str, name: &str) -> Result<Pod> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);

    info!("Fetching pod {}/{}", namespace, name);
    let pod = pods.get(name).await?;

    Ok(pod)
}
