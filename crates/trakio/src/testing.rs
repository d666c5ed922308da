// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};
use trakio_core::Envelope;

use crate::error::Result;
use crate::transport::Transport;

/// Records every request and answers with a fixed response.
pub(crate) struct RecordingTransport {
	requests: Mutex<Vec<(String, Value)>>,
	response: Value,
}

impl RecordingTransport {
	pub(crate) fn new() -> Self {
		Self::with_response(json!({"status": "success"}))
	}

	pub(crate) fn with_response(response: Value) -> Self {
		Self {
			requests: Mutex::new(Vec::new()),
			response,
		}
	}

	/// Requests sent so far as `(url, body)` pairs.
	pub(crate) fn requests(&self) -> Vec<(String, Value)> {
		self.requests.lock().clone()
	}
}

#[async_trait]
impl Transport for RecordingTransport {
	async fn post_json(&self, url: &str, body: &Envelope) -> Result<Value> {
		let body = serde_json::to_value(body)?;
		self.requests.lock().push((url.to_string(), body));
		Ok(self.response.clone())
	}
}
