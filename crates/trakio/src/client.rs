// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! trak.io client for tracking events and identifying subjects.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use trakio_core::{
	Alias, AliasData, AnnotateData, Endpoint, Envelope, Field, IdentifyData, TrackData,
};

use crate::error::{Result, TrakioError};
use crate::options::{ClientOptions, DEFAULT_HOST, DEFAULT_HTTPS};
use crate::params::Params;
use crate::transport::{HttpTransport, Transport};

/// Mutable per-client settings.
struct Settings {
	api_token: String,
	https: bool,
	host: String,
	channel: Option<String>,
	distinct_id: Option<String>,
}

impl Settings {
	fn url(&self, endpoint: Endpoint) -> String {
		let scheme = if self.https { "https" } else { "http" };
		format!("{}://{}/{}", scheme, self.host, endpoint)
	}
}

struct ClientInner {
	settings: RwLock<Settings>,
	transport: Arc<dyn Transport>,
}

/// Client for one trak.io account and endpoint.
///
/// `Client` is a handle: clones share the same settings and transport, so a
/// setter called through any clone is seen by all of them.
///
/// # Example
///
/// ```ignore
/// use trakio::{Client, ClientOptions, Params, Properties};
///
/// let client = Client::new("my_api_token", ClientOptions::new().channel("web"))?;
///
/// client.track(Params::new()
///     .distinct_id("user_123")
///     .event("signed_up")
///     .properties(Properties::new().insert("plan", "pro"))
/// ).await?;
///
/// client.identify(Params::new()
///     .distinct_id("user_123")
///     .properties(Properties::new().insert("name", "Ada"))
/// ).await?;
/// ```
#[derive(Clone)]
pub struct Client {
	inner: Arc<ClientInner>,
}

impl Client {
	/// Creates a client that sends requests over HTTP(S).
	///
	/// Fails with [`TrakioError::InvalidToken`] when `api_token` is empty.
	pub fn new(api_token: impl Into<String>, options: ClientOptions) -> Result<Self> {
		let api_token = api_token.into();
		if api_token.is_empty() {
			return Err(TrakioError::InvalidToken);
		}
		let transport = Arc::new(HttpTransport::new()?);
		Self::with_transport(api_token, options, transport)
	}

	/// Creates a client that sends requests through `transport`.
	pub fn with_transport(
		api_token: impl Into<String>,
		options: ClientOptions,
		transport: Arc<dyn Transport>,
	) -> Result<Self> {
		let api_token = api_token.into();
		if api_token.is_empty() {
			return Err(TrakioError::InvalidToken);
		}

		let settings = Settings {
			api_token,
			https: options.https.unwrap_or(DEFAULT_HTTPS),
			host: options.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
			channel: options.channel,
			distinct_id: options.distinct_id,
		};

		Ok(Self {
			inner: Arc::new(ClientInner {
				settings: RwLock::new(settings),
				transport,
			}),
		})
	}

	pub fn api_token(&self) -> String {
		self.inner.settings.read().api_token.clone()
	}

	pub fn set_api_token(&self, api_token: impl Into<String>) {
		self.inner.settings.write().api_token = api_token.into();
	}

	pub fn https(&self) -> bool {
		self.inner.settings.read().https
	}

	pub fn set_https(&self, https: bool) {
		self.inner.settings.write().https = https;
	}

	pub fn host(&self) -> String {
		self.inner.settings.read().host.clone()
	}

	pub fn set_host(&self, host: impl Into<String>) {
		self.inner.settings.write().host = host.into();
	}

	/// Channel applied to calls that do not name one.
	pub fn channel(&self) -> Option<String> {
		self.inner.settings.read().channel.clone()
	}

	pub fn set_channel(&self, channel: Option<String>) {
		self.inner.settings.write().channel = channel;
	}

	/// Subject applied to calls that do not name one.
	pub fn distinct_id(&self) -> Option<String> {
		self.inner.settings.read().distinct_id.clone()
	}

	pub fn set_distinct_id(&self, distinct_id: Option<String>) {
		self.inner.settings.write().distinct_id = distinct_id;
	}

	pub(crate) fn transport(&self) -> Arc<dyn Transport> {
		Arc::clone(&self.inner.transport)
	}

	/// Full URL for `endpoint`: `{scheme}://{host}/{endpoint}`.
	pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
		self.inner.settings.read().url(endpoint)
	}

	/// Records that `event` occurred for a subject.
	///
	/// Requires `event` and a distinct_id (from `params` or the client).
	pub async fn track(&self, params: Params) -> Result<Value> {
		let data = self.track_payload(params)?;
		self.send_payload(Endpoint::Track, &data).await
	}

	/// Attaches properties to a subject. `properties` must be non-empty.
	pub async fn identify(&self, params: Params) -> Result<Value> {
		let data = self.identify_payload(params)?;
		self.send_payload(Endpoint::Identify, &data).await
	}

	/// Declares that `alias` (one id or a list) refers to the same subject.
	pub async fn alias(&self, params: Params) -> Result<Value> {
		let data = self.alias_payload(params)?;
		self.send_payload(Endpoint::Alias, &data).await
	}

	/// Records an event-level marker that is not tied to any subject.
	pub async fn annotate(&self, params: Params) -> Result<Value> {
		let data = self.annotate_payload(params)?;
		self.send_payload(Endpoint::Annotate, &data).await
	}

	/// Builds the `track` data without sending it.
	pub fn track_payload(&self, params: Params) -> Result<TrackData> {
		let distinct_id = self.resolve_distinct_id(params.distinct_id)?;
		let event = params.event.ok_or(TrakioError::MissingField(Field::Event))?;

		Ok(TrackData {
			distinct_id,
			event,
			channel: self.resolve_channel(params.channel),
			properties: params.properties.map(|p| p.into_map()),
		})
	}

	/// Builds the `identify` data without sending it.
	pub fn identify_payload(&self, params: Params) -> Result<IdentifyData> {
		let distinct_id = self.resolve_distinct_id(params.distinct_id)?;
		let properties = params
			.properties
			.filter(|p| !p.is_empty())
			.ok_or(TrakioError::MissingField(Field::Properties))?;

		Ok(IdentifyData {
			distinct_id,
			properties: properties.into_map(),
		})
	}

	/// Builds the `alias` data without sending it.
	pub fn alias_payload(&self, params: Params) -> Result<AliasData> {
		let distinct_id = self.resolve_distinct_id(params.distinct_id)?;
		let value = params.alias.ok_or(TrakioError::MissingField(Field::Alias))?;
		let alias = Alias::from_value(&value).ok_or(TrakioError::InvalidFieldType {
			field: Field::Alias,
			expected: "string or array",
		})?;

		Ok(AliasData { distinct_id, alias })
	}

	/// Builds the `annotate` data without sending it.
	pub fn annotate_payload(&self, params: Params) -> Result<AnnotateData> {
		let event = params.event.ok_or(TrakioError::MissingField(Field::Event))?;

		Ok(AnnotateData {
			event,
			channel: self.resolve_channel(params.channel),
			properties: params.properties.unwrap_or_default().into_map(),
		})
	}

	/// Sends `data` to `endpoint` wrapped with this client's token.
	///
	/// Performs exactly one request and returns the decoded JSON response.
	pub async fn send_request(&self, endpoint: Endpoint, data: Value) -> Result<Value> {
		let (url, envelope) = {
			let settings = self.inner.settings.read();
			(
				settings.url(endpoint),
				Envelope::new(settings.api_token.clone(), data),
			)
		};

		debug!(endpoint = %endpoint, url = %url, "Sending trak.io request");

		let response = self.inner.transport.post_json(&url, &envelope).await?;

		debug!(endpoint = %endpoint, "trak.io request completed");

		Ok(response)
	}

	async fn send_payload<T: Serialize>(&self, endpoint: Endpoint, data: &T) -> Result<Value> {
		let data = serde_json::to_value(data)?;
		self.send_request(endpoint, data).await
	}

	fn resolve_distinct_id(&self, distinct_id: Option<String>) -> Result<String> {
		distinct_id
			.or_else(|| self.distinct_id())
			.ok_or(TrakioError::MissingField(Field::DistinctId))
	}

	fn resolve_channel(&self, channel: Option<String>) -> Option<String> {
		channel.or_else(|| self.channel())
	}
}

impl std::fmt::Debug for Client {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let settings = self.inner.settings.read();
		f.debug_struct("Client")
			.field("https", &settings.https)
			.field("host", &settings.host)
			.field("channel", &settings.channel)
			.field("distinct_id", &settings.distinct_id)
			.finish_non_exhaustive()
	}
}
