// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Holder for the shared default client.
//!
//! The default client is meant to be shared across many subjects, so it may
//! never carry a fixed distinct_id. Calls made through the registry are
//! forwarded to the default client as-is.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::info;

use crate::client::Client;
use crate::error::{Result, TrakioError};
use crate::options::ClientOptions;
use crate::params::Params;
use crate::transport::{HttpTransport, Transport};

/// Stores the default [`Client`] and routes unqualified calls to it.
#[derive(Default)]
pub struct Registry {
	default: RwLock<Option<Client>>,
}

impl Registry {
	/// Creates a registry with no default client.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates and installs the default client, replacing any existing one.
	///
	/// Fails with [`TrakioError::InvalidToken`] for an empty token and with
	/// [`TrakioError::NoDistinctIdForDefault`] when `options` names a
	/// distinct_id.
	pub fn init(&self, api_token: impl Into<String>, options: ClientOptions) -> Result<Client> {
		let api_token = api_token.into();
		Self::check_default_options(&api_token, &options)?;
		let transport = Arc::new(HttpTransport::new()?);
		self.install(api_token, options, transport)
	}

	/// As [`Registry::init`], sending requests through `transport`.
	pub fn init_with_transport(
		&self,
		api_token: impl Into<String>,
		options: ClientOptions,
		transport: Arc<dyn Transport>,
	) -> Result<Client> {
		let api_token = api_token.into();
		Self::check_default_options(&api_token, &options)?;
		self.install(api_token, options, transport)
	}

	fn check_default_options(api_token: &str, options: &ClientOptions) -> Result<()> {
		if api_token.is_empty() {
			return Err(TrakioError::InvalidToken);
		}
		if options.distinct_id.is_some() {
			return Err(TrakioError::NoDistinctIdForDefault);
		}
		Ok(())
	}

	fn install(
		&self,
		api_token: String,
		options: ClientOptions,
		transport: Arc<dyn Transport>,
	) -> Result<Client> {
		let client = Client::with_transport(api_token, options, transport)?;
		self.set_default(client.clone());
		Ok(client)
	}

	/// Returns a handle to the default client.
	pub fn default_client(&self) -> Result<Client> {
		self.default.read().clone().ok_or(TrakioError::Uninitialized)
	}

	/// Installs `client` as the default without further checks.
	pub fn set_default(&self, client: Client) {
		info!(
			host = %client.host(),
			https = client.https(),
			"trak.io default client installed"
		);
		*self.default.write() = Some(client);
	}

	/// Removes the default client.
	pub fn reset(&self) {
		self.default.write().take();
	}

	pub fn is_initialized(&self) -> bool {
		self.default.read().is_some()
	}

	/// Creates an additional client.
	///
	/// Without `api_token` the token, and the transport, are inherited from
	/// the default client; with no default either, this fails with
	/// [`TrakioError::InvalidToken`].
	pub fn new_client(&self, api_token: Option<String>, options: ClientOptions) -> Result<Client> {
		match api_token {
			Some(api_token) => Client::new(api_token, options),
			None => {
				let default = self
					.default
					.read()
					.clone()
					.ok_or(TrakioError::InvalidToken)?;
				Client::with_transport(default.api_token(), options, default.transport())
			}
		}
	}

	pub async fn track(&self, params: Params) -> Result<Value> {
		self.default_client()?.track(params).await
	}

	pub async fn identify(&self, params: Params) -> Result<Value> {
		self.default_client()?.identify(params).await
	}

	pub async fn alias(&self, params: Params) -> Result<Value> {
		self.default_client()?.alias(params).await
	}

	pub async fn annotate(&self, params: Params) -> Result<Value> {
		self.default_client()?.annotate(params).await
	}

	pub fn api_token(&self) -> Result<String> {
		Ok(self.default_client()?.api_token())
	}

	pub fn host(&self) -> Result<String> {
		Ok(self.default_client()?.host())
	}

	pub fn https(&self) -> Result<bool> {
		Ok(self.default_client()?.https())
	}

	pub fn channel(&self) -> Result<Option<String>> {
		Ok(self.default_client()?.channel())
	}

	pub fn set_channel(&self, channel: Option<String>) -> Result<()> {
		self.default_client()?.set_channel(channel);
		Ok(())
	}

	/// Always fails: the registry carries no subject identity.
	pub fn distinct_id(&self) -> Result<String> {
		Err(TrakioError::NoDistinctIdForDefault)
	}

	/// Always fails: the registry carries no subject identity.
	pub fn set_distinct_id(&self, _distinct_id: impl Into<String>) -> Result<()> {
		Err(TrakioError::NoDistinctIdForDefault)
	}
}

impl std::fmt::Debug for Registry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Registry")
			.field("default", &*self.default.read())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::properties::Properties;
	use crate::testing::RecordingTransport;
	use proptest::prelude::*;
	use serde_json::json;

	fn initialized(options: ClientOptions) -> (Registry, Arc<RecordingTransport>) {
		let registry = Registry::new();
		let transport = Arc::new(RecordingTransport::new());
		registry
			.init_with_transport("tok", options, transport.clone())
			.unwrap();
		(registry, transport)
	}

	#[test]
	fn test_default_client_uninitialized() {
		let registry = Registry::new();
		assert!(!registry.is_initialized());
		assert!(matches!(
			registry.default_client(),
			Err(TrakioError::Uninitialized)
		));
		assert!(matches!(registry.channel(), Err(TrakioError::Uninitialized)));
	}

	#[test]
	fn test_init_rejects_empty_token() {
		let registry = Registry::new();
		let result = registry.init("", ClientOptions::default());
		assert!(matches!(result, Err(TrakioError::InvalidToken)));
		assert!(!registry.is_initialized());
	}

	#[test]
	fn test_init_rejects_distinct_id() {
		let registry = Registry::new();
		let result = registry.init("tok", ClientOptions::new().distinct_id("u1"));
		assert!(matches!(result, Err(TrakioError::NoDistinctIdForDefault)));
		assert!(!registry.is_initialized());
	}

	#[test]
	fn test_init_installs_default() {
		let (registry, _) = initialized(ClientOptions::new().channel("web"));
		let client = registry.default_client().unwrap();
		assert_eq!(client.api_token(), "tok");
		assert_eq!(registry.channel().unwrap().as_deref(), Some("web"));
		assert_eq!(registry.host().unwrap(), "api.trak.io/v1");
		assert!(registry.https().unwrap());
		assert_eq!(registry.api_token().unwrap(), "tok");
	}

	#[test]
	fn test_init_replaces_existing_default() {
		let (registry, transport) = initialized(ClientOptions::default());
		registry
			.init_with_transport("second", ClientOptions::default(), transport)
			.unwrap();
		assert_eq!(registry.api_token().unwrap(), "second");
	}

	#[test]
	fn test_distinct_id_always_fails() {
		let registry = Registry::new();
		assert!(matches!(
			registry.distinct_id(),
			Err(TrakioError::NoDistinctIdForDefault)
		));

		let (registry, _) = initialized(ClientOptions::default());
		assert!(matches!(
			registry.distinct_id(),
			Err(TrakioError::NoDistinctIdForDefault)
		));
		assert!(matches!(
			registry.set_distinct_id("u1"),
			Err(TrakioError::NoDistinctIdForDefault)
		));
		assert_eq!(registry.default_client().unwrap().distinct_id(), None);
	}

	#[test]
	fn test_set_channel_updates_default() {
		let (registry, _) = initialized(ClientOptions::default());
		registry.set_channel(Some("mobile".to_string())).unwrap();
		assert_eq!(
			registry.default_client().unwrap().channel().as_deref(),
			Some("mobile")
		);
	}

	#[test]
	fn test_set_default_accepts_any_client() {
		let registry = Registry::new();
		let client = Client::with_transport(
			"tok",
			ClientOptions::new().distinct_id("u1"),
			Arc::new(RecordingTransport::new()),
		)
		.unwrap();
		registry.set_default(client);
		assert_eq!(
			registry.default_client().unwrap().distinct_id().as_deref(),
			Some("u1")
		);
	}

	#[test]
	fn test_reset_clears_default() {
		let (registry, _) = initialized(ClientOptions::default());
		registry.reset();
		assert!(matches!(
			registry.default_client(),
			Err(TrakioError::Uninitialized)
		));
	}

	#[test]
	fn test_new_client_without_token_or_default() {
		let registry = Registry::new();
		let result = registry.new_client(None, ClientOptions::default());
		assert!(matches!(result, Err(TrakioError::InvalidToken)));
	}

	#[test]
	fn test_new_client_with_explicit_token() {
		let registry = Registry::new();
		let client = registry
			.new_client(Some("explicit".to_string()), ClientOptions::default())
			.unwrap();
		assert_eq!(client.api_token(), "explicit");
	}

	#[tokio::test]
	async fn test_new_client_inherits_token_and_transport() {
		let (registry, transport) = initialized(ClientOptions::default());
		let client = registry
			.new_client(None, ClientOptions::new().distinct_id("u1"))
			.unwrap();
		assert_eq!(client.api_token(), "tok");
		assert_eq!(client.distinct_id().as_deref(), Some("u1"));

		client.track(Params::new().event("e")).await.unwrap();
		assert_eq!(
			transport.requests()[0].1,
			json!({"token": "tok", "data": {"distinct_id": "u1", "event": "e"}})
		);
	}

	#[tokio::test]
	async fn test_operations_require_default() {
		let registry = Registry::new();
		let result = registry.track(Params::new().event("e").distinct_id("u1")).await;
		assert!(matches!(result, Err(TrakioError::Uninitialized)));
		let result = registry.annotate(Params::new().event("deploy")).await;
		assert!(matches!(result, Err(TrakioError::Uninitialized)));
	}

	#[tokio::test]
	async fn test_operations_forward_to_default() {
		let (registry, transport) = initialized(ClientOptions::new().channel("web"));

		registry
			.track(Params::new().event("e").distinct_id("u1"))
			.await
			.unwrap();
		registry
			.identify(
				Params::new()
					.distinct_id("u1")
					.properties(Properties::new().insert("plan", "pro")),
			)
			.await
			.unwrap();
		registry
			.alias(Params::new().distinct_id("u1").alias(vec!["u2", "u3"]))
			.await
			.unwrap();
		registry
			.annotate(Params::new().event("deploy"))
			.await
			.unwrap();

		let bodies: Vec<Value> = transport.requests().into_iter().map(|(_, b)| b).collect();
		assert_eq!(
			bodies,
			vec![
				json!({"token": "tok", "data": {"distinct_id": "u1", "event": "e", "channel": "web"}}),
				json!({"token": "tok", "data": {"distinct_id": "u1", "properties": {"plan": "pro"}}}),
				json!({"token": "tok", "data": {"distinct_id": "u1", "alias": ["u2", "u3"]}}),
				json!({"token": "tok", "data": {"event": "deploy", "channel": "web", "properties": {}}}),
			]
		);
	}

	#[tokio::test]
	async fn test_forwarded_errors_surface_unchanged() {
		let (registry, transport) = initialized(ClientOptions::default());
		let result = registry.track(Params::new().event("e")).await;
		assert!(matches!(
			result,
			Err(TrakioError::MissingField(trakio_core::Field::DistinctId))
		));
		assert!(transport.requests().is_empty());
	}

	proptest! {
		#[test]
		fn init_with_any_distinct_id_fails(
			distinct_id in ".*",
			channel in proptest::option::of("[a-z]{1,10}"),
			https in proptest::option::of(any::<bool>()),
		) {
			let registry = Registry::new();
			let options = ClientOptions {
				https,
				host: None,
				channel,
				distinct_id: Some(distinct_id),
			};
			let result = registry.init_with_transport("tok", options, Arc::new(RecordingTransport::new()));
			prop_assert!(matches!(result, Err(TrakioError::NoDistinctIdForDefault)));
			prop_assert!(!registry.is_initialized());
		}
	}
}
