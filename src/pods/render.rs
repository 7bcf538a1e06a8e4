// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod rendering

use crate::error::{InjectorError, Result};
use k8s_openapi::api::core::v1::Pod;
use std::str::FromStr;

/// Format the mutated pod is written in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = InjectorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            _ => Err(InjectorError::InvalidOutputFormat(s.to_string())),
        }
    }
}

/// Serialize a pod in the requested format
pub fn render_pod(pod: &Pod, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(pod).map_err(|e| InjectorError::RenderError(e.to_string()))
        }
        OutputFormat::Json => serde_json::to_string_pretty(pod)
            .map_err(|e| InjectorError::RenderError(e.to_string())),
    }
}
