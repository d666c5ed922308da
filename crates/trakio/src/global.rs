// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide registry.
//!
//! Initialize once at startup, before spawning concurrent work, then use the
//! free functions to track through the default client.

use std::sync::LazyLock;

use serde_json::Value;

use crate::client::Client;
use crate::error::Result;
use crate::options::ClientOptions;
use crate::params::Params;
use crate::registry::Registry;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// The process-wide registry.
pub fn global() -> &'static Registry {
	&GLOBAL
}

/// Creates and installs the process-wide default client.
pub fn init(api_token: impl Into<String>, options: ClientOptions) -> Result<Client> {
	GLOBAL.init(api_token, options)
}

pub fn default_client() -> Result<Client> {
	GLOBAL.default_client()
}

pub fn set_default(client: Client) {
	GLOBAL.set_default(client)
}

/// Removes the process-wide default client.
pub fn reset() {
	GLOBAL.reset()
}

pub async fn track(params: Params) -> Result<Value> {
	GLOBAL.track(params).await
}

pub async fn identify(params: Params) -> Result<Value> {
	GLOBAL.identify(params).await
}

pub async fn alias(params: Params) -> Result<Value> {
	GLOBAL.alias(params).await
}

pub async fn annotate(params: Params) -> Result<Value> {
	GLOBAL.annotate(params).await
}
