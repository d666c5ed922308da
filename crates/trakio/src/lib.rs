// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rust SDK for the trak.io behavioral analytics API.
//!
//! This crate sends `track`, `identify`, `alias` and `annotate` calls to
//! trak.io. Each call is validated, merged with the client's defaults and
//! sent immediately as a single JSON `POST`; there is no queue and no retry.
//!
//! # Quick Start
//!
//! ```ignore
//! use trakio::{ClientOptions, Params, Properties};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Install the process-wide default client
//!     trakio::init("my_api_token", ClientOptions::new().channel("web"))?;
//!
//!     // Track an event
//!     trakio::track(Params::new()
//!         .distinct_id("user_123")
//!         .event("signed_up")
//!     ).await?;
//!
//!     // Describe the subject
//!     trakio::identify(Params::new()
//!         .distinct_id("user_123")
//!         .properties(Properties::new().insert("plan", "pro"))
//!     ).await?;
//!
//!     // Link identifiers
//!     trakio::alias(Params::new()
//!         .distinct_id("user_123")
//!         .alias(vec!["user@example.com", "anon_abc"])
//!     ).await?;
//!
//!     // Mark a deploy
//!     trakio::annotate(Params::new().event("deployed_v2")).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Clients per subject
//!
//! The default client is shared and may not carry a `distinct_id`. Create
//! additional clients for a fixed subject; without a token they inherit the
//! default's:
//!
//! ```ignore
//! let user = trakio::global().new_client(None, ClientOptions::new().distinct_id("user_123"))?;
//! user.track(Params::new().event("opened_app")).await?;
//! ```
//!
//! # Error Handling
//!
//! ```ignore
//! use trakio::TrakioError;
//!
//! match trakio::track(Params::new().event("signed_up")).await {
//!     Ok(response) => println!("tracked: {response}"),
//!     Err(TrakioError::MissingField(field)) => eprintln!("missing {field}"),
//!     Err(TrakioError::Uninitialized) => eprintln!("call trakio::init first"),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```

pub mod client;
pub mod error;
pub mod global;
pub mod options;
pub mod params;
pub mod properties;
pub mod registry;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::Client;
pub use error::{Result, TrakioError};
pub use global::{alias, annotate, default_client, global, identify, init, reset, set_default, track};
pub use options::{ClientOptions, DEFAULT_HOST, DEFAULT_HTTPS};
pub use params::Params;
pub use properties::Properties;
pub use registry::Registry;
pub use transport::{HttpTransport, Transport};

// Re-export wire types callers may need
pub use trakio_core::{Alias, AliasData, AnnotateData, Endpoint, Envelope, Field, IdentifyData, TrackData};

/// SDK version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
