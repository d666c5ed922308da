// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

/// The API endpoints accepted by the tracking service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
	Track,
	Identify,
	Alias,
	Annotate,
}

impl Endpoint {
	pub const ALL: [Endpoint; 4] = [
		Endpoint::Track,
		Endpoint::Identify,
		Endpoint::Alias,
		Endpoint::Annotate,
	];

	/// Path segment appended to the client's host.
	pub fn as_str(&self) -> &'static str {
		match self {
			Endpoint::Track => "track",
			Endpoint::Identify => "identify",
			Endpoint::Alias => "alias",
			Endpoint::Annotate => "annotate",
		}
	}
}

impl std::fmt::Display for Endpoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
