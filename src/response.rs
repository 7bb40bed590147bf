//! Backend response classification and token payload mapping.
//!
//! Two response contracts exist. Token-issuing POSTs succeed below status 300 and are parsed
//! leniently: a body that is not valid JSON is an empty success, not an error, because some
//! operations legitimately return nothing. Redirect-generation GETs succeed on exactly 302 and
//! yield the `Location` header; any other status—a well-formed 200 included—violates the
//! "redirect or failure" contract and is a [`BackendError`].

// self
use crate::{_prelude::*, error::BackendError, grant::GrantType, http::RawResponse};

/// Normalized token payload produced by a successful token-issuing POST.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResult {
	/// Issued access token, when the backend returned one.
	pub access_token: Option<String>,
	/// Issued refresh token, when the backend returned one.
	pub refresh_token: Option<String>,
	/// Grant type requested for this call, echoed locally because the backend is not
	/// guaranteed to return one.
	pub token_type: String,
	/// Granted scope, when the backend returned one.
	pub scope: Option<String>,
	/// Token lifetime in seconds; the backend may send it as a number or a numeric string.
	pub expires_in: Option<u64>,
}

/// Outcome of a token-issuing POST.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenOutcome {
	/// The backend returned a parseable JSON token payload.
	Issued(TokenResult),
	/// The backend answered with a success status but no parseable JSON body.
	///
	/// This is a deliberate leniency of the wire contract, kept as its own variant so callers
	/// and tests can assert on it directly instead of inferring it from an absent error.
	NoContent,
}
impl TokenOutcome {
	/// Consumes the outcome, returning the issued payload when one exists.
	pub fn issued(self) -> Option<TokenResult> {
		match self {
			TokenOutcome::Issued(result) => Some(result),
			TokenOutcome::NoContent => None,
		}
	}

	/// Returns true for the empty-success variant.
	pub fn is_no_content(&self) -> bool {
		matches!(self, TokenOutcome::NoContent)
	}
}

#[derive(Debug, Deserialize)]
struct TokenPayload {
	access_token: Option<String>,
	refresh_token: Option<String>,
	scope: Option<String>,
	expires_in: Option<ExpiresIn>,
}

/// `expires_in` arrives either as a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ExpiresIn {
	Seconds(u64),
	Text(String),
}
impl ExpiresIn {
	fn into_seconds(self) -> Option<u64> {
		match self {
			ExpiresIn::Seconds(seconds) => Some(seconds),
			// A non-numeric string degrades to no expiry, consistent with the overall
			// lenient posture toward this endpoint's payloads.
			ExpiresIn::Text(text) => text.trim().parse().ok(),
		}
	}
}

/// Classifies a token-issuing POST response.
pub(crate) fn parse_token_response(
	grant: GrantType,
	response: &RawResponse,
) -> Result<TokenOutcome, BackendError> {
	if response.status >= 300 {
		return Err(backend_error(response));
	}

	let mut deserializer = serde_json::Deserializer::from_slice(&response.body);

	match serde_path_to_error::deserialize::<_, TokenPayload>(&mut deserializer) {
		Ok(payload) if deserializer.end().is_ok() => Ok(TokenOutcome::Issued(TokenResult {
			access_token: payload.access_token,
			refresh_token: payload.refresh_token,
			token_type: grant.as_str().to_owned(),
			scope: payload.scope,
			expires_in: payload.expires_in.and_then(ExpiresIn::into_seconds),
		})),
		Ok(_) => Ok(TokenOutcome::NoContent),
		Err(source) => {
			#[cfg(feature = "tracing")]
			tracing::debug!(
				error = %source,
				status = response.status,
				"Token endpoint body is not JSON; treating it as an empty success."
			);
			#[cfg(not(feature = "tracing"))]
			let _ = source;

			Ok(TokenOutcome::NoContent)
		},
	}
}

/// Classifies a POST response whose success carries no payload (token invalidation).
pub(crate) fn parse_empty_response(response: &RawResponse) -> Result<(), BackendError> {
	if response.status >= 300 {
		return Err(backend_error(response));
	}

	Ok(())
}

/// Classifies a redirect-generation GET response.
pub(crate) fn parse_redirect_response(response: &RawResponse) -> Result<String, BackendError> {
	if response.status != 302 {
		return Err(backend_error(response));
	}

	// A 302 that names no target is outside the redirect contract too.
	response.location.clone().ok_or_else(|| BackendError {
		status: response.status,
		body: "Backend returned 302 without a Location header.".into(),
	})
}

fn backend_error(response: &RawResponse) -> BackendError {
	BackendError {
		status: response.status,
		body: String::from_utf8_lossy(&response.body).into_owned(),
	}
}
