// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-call request parameters.

use serde::Deserialize;
use serde_json::Value;

use crate::properties::Properties;

/// Named parameters for a tracking call.
///
/// Each operation reads the subset it needs and falls back to the client's
/// defaults for `distinct_id` and `channel`. Unknown keys are ignored when
/// deserializing from JSON.
///
/// ```
/// use trakio::{Params, Properties};
///
/// let params = Params::new()
///     .distinct_id("u1")
///     .event("signed_up")
///     .properties(Properties::new().insert("plan", "pro"));
/// assert_eq!(params.event.as_deref(), Some("signed_up"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Params {
	pub distinct_id: Option<String>,
	pub event: Option<String>,
	pub channel: Option<String>,
	pub properties: Option<Properties>,
	/// Left untyped so that values of the wrong shape can be reported.
	pub alias: Option<Value>,
}

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn distinct_id(mut self, distinct_id: impl Into<String>) -> Self {
		self.distinct_id = Some(distinct_id.into());
		self
	}

	pub fn event(mut self, event: impl Into<String>) -> Self {
		self.event = Some(event.into());
		self
	}

	pub fn channel(mut self, channel: impl Into<String>) -> Self {
		self.channel = Some(channel.into());
		self
	}

	pub fn properties(mut self, properties: impl Into<Properties>) -> Self {
		self.properties = Some(properties.into());
		self
	}

	/// Sets the alias: a string, or a list of strings.
	pub fn alias(mut self, alias: impl Into<Value>) -> Self {
		self.alias = Some(alias.into());
		self
	}
}
