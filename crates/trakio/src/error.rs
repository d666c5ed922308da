// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the trak.io SDK.

use thiserror::Error;
use trakio_core::Field;

/// trak.io SDK errors.
#[derive(Debug, Error)]
pub enum TrakioError {
	/// API token is missing or empty.
	#[error("missing API token")]
	InvalidToken,

	/// The default client was requested before one was installed.
	#[error("default client has not been initialized")]
	Uninitialized,

	/// A distinct_id was bound to, or read from, the shared default client.
	#[error("the default client cannot carry a distinct_id")]
	NoDistinctIdForDefault,

	/// A field required by the operation was not supplied.
	#[error("{}", .0.missing_message())]
	MissingField(Field),

	/// A field was supplied with an unsupported type.
	#[error("{field} must be {expected}")]
	InvalidFieldType {
		field: Field,
		expected: &'static str,
	},

	/// Request data could not be encoded as JSON.
	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	/// The HTTP request failed, including non-success statuses.
	#[error(transparent)]
	Transport(#[from] reqwest::Error),
}

/// Result type alias for trak.io operations.
pub type Result<T> = std::result::Result<T, TrakioError>;
