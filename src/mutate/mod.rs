// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod mutations applied before a pod is admitted.

pub mod env;

pub use env::{contains, inject_env};
