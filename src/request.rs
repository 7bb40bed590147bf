//! Wire-level request construction shared by every adapter operation.
//!
//! [`ApiRequest`] centralizes the verb, fixed backend path, headers, and form parameters of a
//! call so the shaping rules are testable without any network I/O. [`ApiRequest::into_wire`]
//! resolves the builder against the configured base URI into a [`WireRequest`] that the
//! transport seam executes as-is: POST operations carry the parameters as a form-url-encoded
//! body, GET operations carry them in the query string.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use url::form_urlencoded;
// self
use crate::{_prelude::*, error::ConfigError};

/// Header carrying the adapter's own API key on every outbound call.
pub const API_KEY_HEADER: &str = "x-DNA-Api-Key";
/// Header carrying the optional requested token lifetime in whole milliseconds; POST only.
pub const TOKEN_LIFETIME_HEADER: &str = "x-DNA-Token-Lifetime";
/// Client credential header used by the token-issuing POST operations.
///
/// The backend expects the raw base64 of `clientId:clientSecret` without the `Basic ` scheme
/// prefix. This is a compatibility behavior of the wire contract, not standard HTTP Basic.
pub const AUTHORIZATION_HEADER: &str = "Authorization";
/// Content type attached to every POST body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP verbs used by the backend wire contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
	/// Redirect-generation operations.
	Get,
	/// Token-issuing and invalidation operations.
	Post,
}

/// Declarative request under construction.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	verb: Verb,
	path: &'static str,
	headers: Vec<(&'static str, String)>,
	params: Vec<(&'static str, String)>,
}
impl ApiRequest {
	/// Starts a GET request against the given backend sub-path.
	pub fn get(path: &'static str) -> Self {
		Self { verb: Verb::Get, path, headers: Vec::new(), params: Vec::new() }
	}

	/// Starts a POST request against the given backend sub-path.
	pub fn post(path: &'static str) -> Self {
		Self { verb: Verb::Post, path, headers: Vec::new(), params: Vec::new() }
	}

	/// Returns the verb this request will be issued with.
	pub fn verb(&self) -> Verb {
		self.verb
	}

	/// Returns the fixed backend sub-path.
	pub fn path(&self) -> &'static str {
		self.path
	}

	/// Appends a form parameter.
	pub fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
		self.params.push((key, value.into()));

		self
	}

	/// Appends a form parameter when a value is present; absent values leave no trace on the
	/// wire.
	pub fn opt_param(self, key: &'static str, value: Option<String>) -> Self {
		match value {
			Some(value) => self.param(key, value),
			None => self,
		}
	}

	/// Attaches the adapter's API key header.
	pub fn api_key(mut self, key: &str) -> Self {
		self.headers.push((API_KEY_HEADER, key.to_owned()));

		self
	}

	/// Attaches the raw-base64 client credential header used by POST operations.
	pub fn client_credentials(mut self, client_id: &str, client_secret: &str) -> Self {
		let credential = STANDARD.encode(format!("{client_id}:{client_secret}"));

		self.headers.push((AUTHORIZATION_HEADER, credential));

		self
	}

	/// Attaches the token lifetime header when a lifetime was requested.
	pub fn token_lifetime(mut self, lifetime: Option<Duration>) -> Self {
		if let Some(lifetime) = lifetime {
			self.headers.push((TOKEN_LIFETIME_HEADER, lifetime.whole_milliseconds().to_string()));
		}

		self
	}

	/// Returns the headers accumulated so far.
	pub fn headers(&self) -> &[(&'static str, String)] {
		&self.headers
	}

	/// Form-url-encodes the accumulated parameters, in insertion order.
	pub fn encoded_params(&self) -> String {
		let mut serializer = form_urlencoded::Serializer::new(String::new());

		for (key, value) in &self.params {
			serializer.append_pair(key, value);
		}

		serializer.finish()
	}

	/// Resolves the builder against `base` into a transport-ready [`WireRequest`].
	///
	/// The backend sub-path is appended to any path already present on the base URI, so a base
	/// of `https://host/dna` targets `https://host/dna/tokentypes/...`. For GET requests the
	/// encoded parameters become the query string; for POST they become the body and the form
	/// content type is attached.
	pub fn into_wire(self, base: &Url) -> Result<WireRequest, ConfigError> {
		let mut url = base.clone();

		url.set_path(&format!("{}{}", base.path().trim_end_matches('/'), self.path));

		let encoded = self.encoded_params();
		let mut headers = self.headers;
		let body = match self.verb {
			Verb::Get => {
				if encoded.is_empty() {
					url.set_query(None);
				} else {
					url.set_query(Some(&encoded));
				}

				None
			},
			Verb::Post => {
				headers.push(("Content-Type", FORM_CONTENT_TYPE.to_owned()));

				Some(encoded)
			},
		};

		Ok(WireRequest { verb: self.verb, url, headers, body })
	}
}

/// Fully resolved request handed to the transport seam.
#[derive(Clone, Debug)]
pub struct WireRequest {
	/// HTTP verb to issue.
	pub verb: Verb,
	/// Absolute target URL; the query string is already attached for GET operations.
	pub url: Url,
	/// Outbound headers, content type included for POST bodies.
	pub headers: Vec<(&'static str, String)>,
	/// Form-url-encoded body; present exactly for POST operations.
	pub body: Option<String>,
}
