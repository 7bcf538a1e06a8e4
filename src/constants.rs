// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read by the injector configuration
pub mod vars {
    /// Name of the variable to inject into every container
    pub const INJECT_ENV_NAME: &str = "INJECT_ENV_NAME";
    /// Value of the injected variable (optional, defaults to empty)
    pub const INJECT_ENV_VALUE: &str = "INJECT_ENV_VALUE";
    /// Path to a pod manifest, takes precedence over POD_NAME
    pub const POD_MANIFEST: &str = "POD_MANIFEST";
    /// Pod to fetch from the cluster
    pub const POD_NAME: &str = "POD_NAME";
    pub const POD_NAMESPACE: &str = "POD_NAMESPACE";
    /// Either "yaml" or "json"
    pub const OUTPUT_FORMAT: &str = "OUTPUT_FORMAT";
}

/// Namespace used when POD_NAMESPACE is not set
pub const DEFAULT_NAMESPACE: &str = "default";
