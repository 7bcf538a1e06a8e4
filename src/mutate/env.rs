// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Environment variable injection into pod containers.

use k8s_openapi::api::core::v1::{EnvVar, Pod};
use tracing::{debug, instrument};

/// Check if `envs` holds a variable named exactly `name`
pub fn contains(envs: &[EnvVar], name: &str) -> bool {
    envs.iter().any(|e| e.name == name)
}

/// Append `env` to every container of the pod that does not define a variable with the same name.
///
/// Containers are handled independently: a container that already has the variable is left
/// untouched while its siblings still receive it. Calling this twice with the same variable has
/// the same effect as calling it once. Nothing happens when there is no pod or no containers.
#[instrument(skip_all, fields(env = %env.name))]
pub fn inject_env(pod: Option<&mut Pod>, env: &EnvVar) {
    let Some(spec) = pod.and_then(|p| p.spec.as_mut()) else {
        return;
    };

    for container in spec.containers.iter_mut() {
        let envs = container.env.get_or_insert_with(Vec::new);
        if contains(envs, &env.name) {
            debug!("Container {} already defines {}, skipping", container.name, env.name);
            continue;
        }
        envs.push(env.clone());
        debug!("Injected {} into container {}", env.name, container.name);
    }
}
