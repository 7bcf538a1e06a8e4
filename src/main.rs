// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use kube::ResourceExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use env_injector::config::Config;
use env_injector::mutate::inject_env;
use env_injector::pods::{load_pod, render_pod};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing on stderr, stdout carries the rendered pod
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: env={}, source={:?}",
        config.env.name, config.source
    );

    let mut pod = load_pod(&config.source)
        .await
        .context("Failed to load pod")?;
    info!("Loaded pod {}", pod.name_any());

    inject_env(Some(&mut pod), &config.env);

    let rendered = render_pod(&pod, config.output)?;
    print!("{}", rendered);

    Ok(())
}
