// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client configuration.

use serde::Deserialize;

/// Host used when no `host` option is supplied.
pub const DEFAULT_HOST: &str = "api.trak.io/v1";
/// Whether requests use HTTPS when no `https` option is supplied.
pub const DEFAULT_HTTPS: bool = true;

/// Options applied when constructing a [`Client`](crate::Client).
///
/// Each field that is `Some` overrides the corresponding client default.
/// Deserializing ignores unknown keys, so this can be embedded in a host
/// application's own configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
	pub https: Option<bool>,
	pub host: Option<String>,
	pub channel: Option<String>,
	pub distinct_id: Option<String>,
}

impl ClientOptions {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn https(mut self, https: bool) -> Self {
		self.https = Some(https);
		self
	}

	/// Sets the host, including any path prefix, e.g. `api.trak.io/v1`.
	pub fn host(mut self, host: impl Into<String>) -> Self {
		self.host = Some(host.into());
		self
	}

	pub fn channel(mut self, channel: impl Into<String>) -> Self {
		self.channel = Some(channel.into());
		self
	}

	pub fn distinct_id(mut self, distinct_id: impl Into<String>) -> Self {
		self.distinct_id = Some(distinct_id.into());
		self
	}
}
