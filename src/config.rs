// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{vars, DEFAULT_NAMESPACE};
use crate::pods::{OutputFormat, PodSource};
use anyhow::{bail, Context, Result};
use k8s_openapi::api::core::v1::EnvVar;
use std::env;
use std::path::PathBuf;

/// Injector configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Variable injected into every container lacking one of the same name
    pub env: EnvVar,
    pub source: PodSource,
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let name = lookup(vars::INJECT_ENV_NAME).context(format!(
            "{} environment variable not set",
            vars::INJECT_ENV_NAME
        ))?;
        if name.is_empty() {
            bail!("{} must not be empty", vars::INJECT_ENV_NAME);
        }
        let value = lookup(vars::INJECT_ENV_VALUE).unwrap_or_default();

        let source = match (lookup(vars::POD_MANIFEST), lookup(vars::POD_NAME)) {
            (Some(path), _) => PodSource::Manifest(PathBuf::from(path)),
            (None, Some(name)) => PodSource::Cluster {
                namespace: lookup(vars::POD_NAMESPACE)
                    .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
                name,
            },
            (None, None) => bail!(
                "either {} or {} environment variable must be set",
                vars::POD_MANIFEST,
                vars::POD_NAME
            ),
        };

        let output = lookup(vars::OUTPUT_FORMAT)
            .map(|f| f.parse::<OutputFormat>())
            .transpose()
            .context(format!("Invalid {}", vars::OUTPUT_FORMAT))?
            .unwrap_or_default();

        Ok(Config {
            env: EnvVar {
                name,
                value: Some(value),
                ..Default::default()
            },
            source,
            output,
        })
    }
}
