// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the trak.io v1 tracking API.
//!
//! Every request is a JSON `POST` to `/{endpoint}` whose body is an
//! [`Envelope`]: the account token plus an operation-specific data object.
//! Optional keys are left out of the serialized data entirely.

pub mod alias;
pub mod endpoint;
pub mod field;
pub mod payload;

pub use alias::Alias;
pub use endpoint::Endpoint;
pub use field::Field;
pub use payload::{AliasData, AnnotateData, Envelope, IdentifyData, TrackData};
