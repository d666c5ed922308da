// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

/// Named request fields that an operation may require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
	DistinctId,
	Event,
	Alias,
	Properties,
}

impl Field {
	/// The field's key in the request data object.
	pub fn as_str(&self) -> &'static str {
		match self {
			Field::DistinctId => "distinct_id",
			Field::Event => "event",
			Field::Alias => "alias",
			Field::Properties => "properties",
		}
	}

	/// Message reported when an operation is missing this field.
	pub fn missing_message(&self) -> String {
		match self {
			Field::Properties => "properties must be specified".to_string(),
			other => format!("no {} specified", other.as_str()),
		}
	}
}

impl std::fmt::Display for Field {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
