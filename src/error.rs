// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InjectorError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load pod manifest: {0}")]
    ManifestError(String),

    #[error("Unsupported output format: {0}")]
    InvalidOutputFormat(String),

    #[error("Failed to render pod: {0}")]
    RenderError(String),
}

pub type Result<T> = std::result::Result<T, InjectorError>;
