//! Adapter-level error types shared across request building, transport, and response handling.

// self
use crate::_prelude::*;

/// Adapter-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical adapter error exposed by public APIs.
///
/// Callers distinguish transport from backend failures through [`Error::status`]: a backend
/// failure carries the HTTP status it was rejected with, a transport or configuration failure
/// never saw a status line. That split is the whole retry/backoff contract this crate offers;
/// no retries happen internally.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem, raised synchronously before any I/O.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, interrupted stream).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Backend answered outside the success contract for the operation.
	#[error(transparent)]
	Backend(#[from] BackendError),
}
impl Error {
	/// HTTP status carried by the failure, when a response was actually received.
	pub fn status(&self) -> Option<u16> {
		match self {
			Error::Backend(inner) => Some(inner.status),
			Error::Config(_) | Error::Transport(_) => None,
		}
	}
}

/// Configuration and validation failures raised by the adapter.
///
/// All variants surface synchronously from constructors or request building, never from the
/// network path.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Construction was attempted without a base URI.
	#[error("Base URI must not be empty.")]
	MissingBaseUri,
	/// Construction was attempted without an API key.
	#[error("API key must not be empty.")]
	MissingApiKey,
	/// Base URI is not an absolute URL.
	#[error("Base URI could not be parsed.")]
	InvalidBaseUri {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URI scheme is neither `http` nor `https`.
	#[error("Unsupported base URI scheme `{scheme}`; only http and https are accepted.")]
	UnsupportedProtocol {
		/// The rejected scheme.
		scheme: String,
	},
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, buffering limits).
///
/// These carry no HTTP status; the request never completed against the backend.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the backend.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the backend.")]
	Io(#[from] std::io::Error),
	/// Response body exceeded the transport's buffering cap.
	#[error("Backend response exceeded the {limit}-byte buffering cap.")]
	ResponseTooLarge {
		/// Cap in effect when the body was abandoned.
		limit: usize,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// HTTP response received outside the success contract for the operation.
///
/// For token-issuing POSTs that means any status of 300 or above; for the redirect-generation
/// GETs it means anything other than 302, a well-formed 200 included. The raw body travels
/// through verbatim so callers can diagnose the backend's complaint themselves.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Backend returned HTTP {status}: {body}")]
pub struct BackendError {
	/// HTTP status code delivered by the backend.
	pub status: u16,
	/// Raw response body, passed through untouched.
	pub body: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn status_present_only_for_backend_failures() {
		let backend = Error::from(BackendError { status: 400, body: "bad_request".into() });
		let config = Error::from(ConfigError::MissingApiKey);
		let transport = Error::from(TransportError::ResponseTooLarge { limit: 16 });

		assert_eq!(backend.status(), Some(400));
		assert_eq!(config.status(), None);
		assert_eq!(transport.status(), None);
	}

	#[test]
	fn backend_error_displays_status_and_body() {
		let err = BackendError { status: 503, body: "try later".into() };

		assert_eq!(err.to_string(), "Backend returned HTTP 503: try later");
	}
}
