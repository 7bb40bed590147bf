//! Asynchronous OAuth 2.0 SPI adapter for the DNA authorization backend—typed grant requests, a
//! testable wire builder, and transport-aware error classification over reqwest.
//!
//! The adapter owns no state beyond its immutable [`adapter::AdapterConfig`]; every operation is
//! a single outbound HTTP call whose future completes exactly once. Token persistence, refresh
//! scheduling, retries, and credential validation all belong to the embedding application.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod adapter;
pub mod error;
pub mod grant;
pub mod http;
pub mod obs;
pub mod request;
pub mod response;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature, which the crate's own dev-dependency on itself switches on so the
	//! scaffolding never reaches release builds.

	pub use crate::_prelude::*;

	// self
	use crate::{
		adapter::{AdapterConfig, OAuthAdapter},
		http::ReqwestHttpClient,
	};

	/// Adapter type alias used by reqwest-backed integration tests.
	pub type ReqwestTestAdapter = OAuthAdapter<ReqwestHttpClient>;

	/// Builds a reqwest transport that accepts the self-signed certificates produced by
	/// `httpmock` during tests. Redirect following stays disabled so the redirect-generation
	/// operations can observe the raw 302.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.redirect(reqwest::redirect::Policy::none())
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs an [`OAuthAdapter`] pointed at `uri`, backed by the insecure test transport.
	pub fn build_reqwest_test_adapter(uri: &str, key: &str) -> ReqwestTestAdapter {
		let config = AdapterConfig::new(uri, key).expect("Adapter config should be valid in tests.");

		OAuthAdapter::with_http_client(config, test_reqwest_http_client())
	}
}

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::Duration;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))]
use {color_eyre as _, dna_oauth2_adapter as _, httpmock as _, tokio as _};
