//! Transport primitives for backend calls.
//!
//! The module exposes [`AdapterHttpClient`], the adapter's only dependency on an HTTP stack.
//! Implementations execute one [`WireRequest`], buffer the full response, and hand back a
//! [`RawResponse`]; they never retry and never follow redirects, because the
//! redirect-generation operations read the `Location` header straight off the 302.

// std
use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::{header::LOCATION, redirect::Policy};
// self
use crate::{
	_prelude::*,
	error::TransportError,
	request::{Verb, WireRequest},
};
#[cfg(feature = "reqwest")] use crate::error::ConfigError;

/// Default upper bound on buffered response bodies.
///
/// Bodies are accumulated fully in memory before the call completes, so the cap bounds the
/// damage a misbehaving backend can do; exceeding it fails the call with
/// [`TransportError::ResponseTooLarge`].
pub const MAX_RESPONSE_BYTES: usize = 2 * 1024 * 1024;

/// Buffered backend response handed back through the transport seam.
#[derive(Clone, Debug)]
pub struct RawResponse {
	/// HTTP status code.
	pub status: u16,
	/// `Location` header value, when the backend sent one.
	pub location: Option<String>,
	/// Fully buffered response body.
	pub body: Vec<u8>,
}

/// Future type returned by [`AdapterHttpClient::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<RawResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing backend calls.
///
/// Implementations must be `Send + Sync + 'static` so one transport can serve any number of
/// concurrent in-flight operations behind an `Arc`; each call owns its request and buffered
/// response exclusively, so no further synchronization is required of implementors.
pub trait AdapterHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes `request` and buffers the complete response.
	///
	/// # Contract
	///
	/// - Never follow redirects; return the 302 and its `Location` header untouched.
	/// - Buffer the entire body before resolving, failing with
	///   [`TransportError::ResponseTooLarge`] once the implementation's cap is exceeded.
	/// - Surface connection-level failures verbatim as [`TransportError`]; classification
	///   beyond transport-versus-response is the adapter's job.
	fn execute(&self, request: WireRequest) -> TransportFuture<'_>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The default construction path disables redirect following and applies the
/// [`MAX_RESPONSE_BYTES`] buffering cap. A custom [`ReqwestClient`] supplied through
/// [`ReqwestHttpClient::with_client`] must also have redirects disabled.
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct ReqwestHttpClient {
	client: ReqwestClient,
	max_response_bytes: usize,
}
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a transport with redirect following disabled.
	pub fn new() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder()
			.redirect(Policy::none())
			.build()
			.map_err(ConfigError::http_client_build)?;

		Ok(Self::with_client(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self { client, max_response_bytes: MAX_RESPONSE_BYTES }
	}

	/// Overrides the response buffering cap.
	pub fn with_max_response_bytes(mut self, limit: usize) -> Self {
		self.max_response_bytes = limit;

		self
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.client
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.client
	}
}
#[cfg(feature = "reqwest")]
impl AdapterHttpClient for ReqwestHttpClient {
	fn execute(&self, request: WireRequest) -> TransportFuture<'_> {
		let client = self.client.clone();
		let limit = self.max_response_bytes;

		Box::pin(async move {
			let mut builder = match request.verb {
				Verb::Get => client.get(request.url),
				Verb::Post => client.post(request.url),
			};

			for (name, value) in &request.headers {
				builder = builder.header(*name, value.as_str());
			}
			if let Some(body) = request.body {
				builder = builder.body(body);
			}

			let mut response = builder.send().await.map_err(TransportError::from)?;
			let status = response.status().as_u16();
			let location = response
				.headers()
				.get(LOCATION)
				.and_then(|value| value.to_str().ok())
				.map(str::to_owned);
			let mut body = Vec::new();

			while let Some(chunk) = response.chunk().await.map_err(TransportError::from)? {
				if body.len() + chunk.len() > limit {
					return Err(TransportError::ResponseTooLarge { limit });
				}

				body.extend_from_slice(&chunk);
			}

			Ok(RawResponse { status, location, body })
		})
	}
}
