// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Delivery of request envelopes to the tracking service.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use trakio_core::Envelope;

use crate::error::Result;

/// Sends one JSON request and returns the decoded JSON response.
#[async_trait]
pub trait Transport: Send + Sync {
	async fn post_json(&self, url: &str, body: &Envelope) -> Result<Value>;
}

/// [`Transport`] backed by a shared `reqwest` client.
///
/// A non-success status surfaces as [`TrakioError::Transport`](crate::TrakioError::Transport).
/// There are no retries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	http_client: reqwest::Client,
}

impl HttpTransport {
	/// Creates a transport using the SDK's standard HTTP client.
	pub fn new() -> Result<Self> {
		Ok(Self {
			http_client: trakio_common_http::new_client()?,
		})
	}

	/// Wraps an existing `reqwest` client.
	pub fn with_client(http_client: reqwest::Client) -> Self {
		Self { http_client }
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn post_json(&self, url: &str, body: &Envelope) -> Result<Value> {
		let response = self
			.http_client
			.post(url)
			.header(ACCEPT, "application/json")
			.json(body)
			.send()
			.await?
			.error_for_status()?;

		Ok(response.json::<Value>().await?)
	}
}
