//! Grant identifiers and the typed per-operation request parameters of the SPI.
//!
//! Required parameters are constructor arguments so a request cannot exist without them;
//! optional parameters are attached through `with_*` builders. The adapter performs no
//! validation of credential content—usernames, passwords, and secrets travel to the backend
//! exactly as supplied, and vetting them is the caller's responsibility.

// self
use crate::_prelude::*;

/// OAuth 2.0 grant types issued by the token-issuing POST operations.
///
/// The value is written into the `grant_type` form field and echoed back into
/// [`TokenResult::token_type`](crate::response::TokenResult::token_type), because the backend is
/// not guaranteed to return one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Client Credentials grant for app-only tokens.
	ClientCredentials,
	/// Resource Owner Password Credentials grant.
	Password,
	/// Authorization Code exchange.
	AuthorizationCode,
	/// Refresh Token grant.
	RefreshToken,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::ClientCredentials => "client_credentials",
			GrantType::Password => "password",
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::RefreshToken => "refresh_token",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Parameters for the client-credentials token operation.
#[derive(Clone, Debug)]
pub struct ClientCredentialsTokenRequest {
	/// OAuth client identifier presented to the backend.
	pub client_id: String,
	/// OAuth client secret paired with the identifier.
	pub client_secret: String,
	/// Requested scope, passed through untouched.
	pub scope: Option<String>,
	/// Requested token lifetime; rendered on the wire in whole milliseconds.
	pub token_lifetime: Option<Duration>,
}
impl ClientCredentialsTokenRequest {
	/// Creates a request for the provided client credentials.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			scope: None,
			token_lifetime: None,
		}
	}

	/// Attaches a requested scope.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Attaches a requested token lifetime.
	pub fn with_token_lifetime(mut self, lifetime: Duration) -> Self {
		self.token_lifetime = Some(lifetime);

		self
	}
}

/// Parameters for the password-credentials token operation.
///
/// The username and password are forwarded without any content checks; validating them upstream
/// is a deliberate scope boundary of the adapter, not an oversight.
#[derive(Clone, Debug)]
pub struct PasswordTokenRequest {
	/// OAuth client identifier presented to the backend.
	pub client_id: String,
	/// OAuth client secret paired with the identifier.
	pub client_secret: String,
	/// Resource owner username, forwarded verbatim.
	pub username: String,
	/// Resource owner password, forwarded verbatim.
	pub password: String,
	/// Requested scope, passed through untouched.
	pub scope: Option<String>,
	/// Requested token lifetime; rendered on the wire in whole milliseconds.
	pub token_lifetime: Option<Duration>,
}
impl PasswordTokenRequest {
	/// Creates a request for the provided client and resource-owner credentials.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			username: username.into(),
			password: password.into(),
			scope: None,
			token_lifetime: None,
		}
	}

	/// Attaches a requested scope.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Attaches a requested token lifetime.
	pub fn with_token_lifetime(mut self, lifetime: Duration) -> Self {
		self.token_lifetime = Some(lifetime);

		self
	}
}

/// Parameters for exchanging an authorization code for a token.
#[derive(Clone, Debug)]
pub struct AuthorizationCodeTokenRequest {
	/// OAuth client identifier presented to the backend.
	pub client_id: String,
	/// OAuth client secret paired with the identifier.
	pub client_secret: String,
	/// Authorization code obtained from a prior redirect.
	pub code: String,
	/// Redirect URI the code was issued against.
	pub redirect_uri: Option<Url>,
	/// Requested token lifetime; rendered on the wire in whole milliseconds.
	pub token_lifetime: Option<Duration>,
}
impl AuthorizationCodeTokenRequest {
	/// Creates a request for the provided credentials and authorization code.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		code: impl Into<String>,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			code: code.into(),
			redirect_uri: None,
			token_lifetime: None,
		}
	}

	/// Attaches the redirect URI the code was issued against.
	pub fn with_redirect_uri(mut self, redirect_uri: Url) -> Self {
		self.redirect_uri = Some(redirect_uri);

		self
	}

	/// Attaches a requested token lifetime.
	pub fn with_token_lifetime(mut self, lifetime: Duration) -> Self {
		self.token_lifetime = Some(lifetime);

		self
	}
}

/// Parameters for generating an authorization code via redirect.
///
/// Redirect-generation operations carry no client secret on the wire; only the adapter's API
/// key authenticates the call.
#[derive(Clone, Debug)]
pub struct AuthorizationCodeRequest {
	/// OAuth client identifier presented to the backend.
	pub client_id: String,
	/// Redirect URI the code should be delivered to.
	pub redirect_uri: Option<Url>,
	/// Requested scope, passed through untouched.
	pub scope: Option<String>,
	/// Opaque state echoed back through the redirect.
	pub state: Option<String>,
}
impl AuthorizationCodeRequest {
	/// Creates a request for the provided client identifier.
	pub fn new(client_id: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), redirect_uri: None, scope: None, state: None }
	}

	/// Attaches the redirect URI the code should be delivered to.
	pub fn with_redirect_uri(mut self, redirect_uri: Url) -> Self {
		self.redirect_uri = Some(redirect_uri);

		self
	}

	/// Attaches a requested scope.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Attaches an opaque state value.
	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());

		self
	}
}

/// Parameters for the implicit grant redirect operation.
///
/// Shares the shape of [`AuthorizationCodeRequest`]; the backend delivers the token inside the
/// redirect target instead of a code.
#[derive(Clone, Debug)]
pub struct ImplicitGrantRequest {
	/// OAuth client identifier presented to the backend.
	pub client_id: String,
	/// Redirect URI the token should be delivered to.
	pub redirect_uri: Option<Url>,
	/// Requested scope, passed through untouched.
	pub scope: Option<String>,
	/// Opaque state echoed back through the redirect.
	pub state: Option<String>,
}
impl ImplicitGrantRequest {
	/// Creates a request for the provided client identifier.
	pub fn new(client_id: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), redirect_uri: None, scope: None, state: None }
	}

	/// Attaches the redirect URI the token should be delivered to.
	pub fn with_redirect_uri(mut self, redirect_uri: Url) -> Self {
		self.redirect_uri = Some(redirect_uri);

		self
	}

	/// Attaches a requested scope.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}

	/// Attaches an opaque state value.
	pub fn with_state(mut self, state: impl Into<String>) -> Self {
		self.state = Some(state.into());

		self
	}
}

/// Parameters for refreshing a token.
#[derive(Clone, Debug)]
pub struct RefreshTokenRequest {
	/// OAuth client identifier presented to the backend.
	pub client_id: String,
	/// OAuth client secret paired with the identifier.
	pub client_secret: String,
	/// Refresh token to redeem.
	pub refresh_token: String,
	/// Requested scope, passed through untouched.
	pub scope: Option<String>,
}
impl RefreshTokenRequest {
	/// Creates a request for the provided credentials and refresh token.
	pub fn new(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		refresh_token: impl Into<String>,
	) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			refresh_token: refresh_token.into(),
			scope: None,
		}
	}

	/// Attaches a requested scope.
	pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = Some(scope.into());

		self
	}
}

/// Parameters for invalidating a token.
///
/// Exactly one of the two token kinds should be supplied. When both are present the refresh
/// token wins and the access token is silently ignored—a compatibility behavior inherited from
/// the backend's original consumers, preserved here rather than tightened into an error.
#[derive(Clone, Debug)]
pub struct InvalidateTokenRequest {
	/// OAuth client identifier presented to the backend.
	pub client_id: String,
	/// OAuth client secret paired with the identifier.
	pub client_secret: String,
	/// Refresh token to invalidate; takes precedence over the access token.
	pub refresh_token: Option<String>,
	/// Access token to invalidate; ignored when a refresh token is also set.
	pub access_token: Option<String>,
}
impl InvalidateTokenRequest {
	/// Creates a request for the provided client credentials.
	pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			client_secret: client_secret.into(),
			refresh_token: None,
			access_token: None,
		}
	}

	/// Targets a refresh token for invalidation.
	pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
		self.refresh_token = Some(refresh_token.into());

		self
	}

	/// Targets an access token for invalidation.
	pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
		self.access_token = Some(access_token.into());

		self
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn grant_type_labels_match_rfc_identifiers() {
		assert_eq!(GrantType::ClientCredentials.as_str(), "client_credentials");
		assert_eq!(GrantType::Password.as_str(), "password");
		assert_eq!(GrantType::AuthorizationCode.as_str(), "authorization_code");
		assert_eq!(GrantType::RefreshToken.as_str(), "refresh_token");
	}

	#[test]
	fn builders_leave_optionals_unset_by_default() {
		let request = ClientCredentialsTokenRequest::new("id", "secret");

		assert!(request.scope.is_none());
		assert!(request.token_lifetime.is_none());

		let request = request.with_scope("read").with_token_lifetime(Duration::minutes(5));

		assert_eq!(request.scope.as_deref(), Some("read"));
		assert_eq!(request.token_lifetime, Some(Duration::minutes(5)));
	}
}
