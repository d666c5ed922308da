// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request bodies for the tracking endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::alias::Alias;

/// The full request body: account token plus operation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
	pub token: String,
	pub data: Value,
}

impl Envelope {
	pub fn new(token: impl Into<String>, data: Value) -> Self {
		Self {
			token: token.into(),
			data,
		}
	}
}

/// Data for the `track` endpoint: an event that occurred for a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackData {
	pub distinct_id: String,
	pub event: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub channel: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub properties: Option<Map<String, Value>>,
}

/// Data for the `identify` endpoint: descriptive properties for a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifyData {
	pub distinct_id: String,
	pub properties: Map<String, Value>,
}

/// Data for the `alias` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasData {
	pub distinct_id: String,
	pub alias: Alias,
}

/// Data for the `annotate` endpoint: a channel or event level marker.
///
/// `properties` is always present on the wire, possibly as `{}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotateData {
	pub event: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub channel: Option<String>,
	#[serde(default)]
	pub properties: Map<String, Value>,
}
