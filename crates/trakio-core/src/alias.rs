// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Alias values: one or more identifiers declared equivalent to a subject.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single alias or a list of aliases.
///
/// Serializes untagged, so the wire form is either `"u2"` or `["u2", "u3"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Alias {
	One(String),
	Many(Vec<String>),
}

impl Alias {
	/// Interprets an arbitrary JSON value as an alias.
	///
	/// Returns `None` unless the value is a string or an array made up only
	/// of strings.
	pub fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::String(s) => Some(Alias::One(s.clone())),
			Value::Array(items) => items
				.iter()
				.map(|item| item.as_str().map(str::to_string))
				.collect::<Option<Vec<_>>>()
				.map(Alias::Many),
			_ => None,
		}
	}
}

impl From<String> for Alias {
	fn from(value: String) -> Self {
		Alias::One(value)
	}
}

impl From<&str> for Alias {
	fn from(value: &str) -> Self {
		Alias::One(value.to_string())
	}
}

impl From<Vec<String>> for Alias {
	fn from(value: Vec<String>) -> Self {
		Alias::Many(value)
	}
}
