//! The adapter facade: immutable configuration plus the seven SPI operations.
//!
//! Every operation is one outbound HTTP call against a fixed sub-path of the configured base
//! URI. The adapter holds no mutable state, so any number of calls may be in flight against a
//! single instance concurrently; each owns its request and buffered response exclusively and
//! its future completes exactly once. Timeouts and retries are deliberately absent—callers
//! wanting either wrap the returned futures with their own deadline or backoff machinery.

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	grant::{
		AuthorizationCodeRequest, AuthorizationCodeTokenRequest, ClientCredentialsTokenRequest,
		GrantType, ImplicitGrantRequest, InvalidateTokenRequest, PasswordTokenRequest,
		RefreshTokenRequest,
	},
	http::AdapterHttpClient,
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
	request::ApiRequest,
	response::{self, TokenOutcome},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

const CLIENT_TOKENS_PATH: &str = "/tokentypes/client/tokens";
const PASSWORD_TOKENS_PATH: &str = "/tokentypes/password/tokens";
const AUTHCODE_TOKENS_PATH: &str = "/tokentypes/authcode/tokens";
const AUTHCODES_PATH: &str = "/tokentypes/authcode/authcodes";
const IMPLICIT_TOKENS_PATH: &str = "/tokentypes/implicit/tokens";
const REFRESH_PATH: &str = "/tokentypes/all/refresh";
const INVALIDATE_PATH: &str = "/tokentypes/all/invalidate";

#[cfg(feature = "reqwest")]
/// Adapter specialized for the crate's default reqwest transport.
pub type ReqwestAdapter = OAuthAdapter<ReqwestHttpClient>;

/// Immutable backend coordinates shared by every operation.
#[derive(Clone, Debug)]
pub struct AdapterConfig {
	/// Absolute base URL of the authorization backend.
	pub base_uri: Url,
	/// Static API key identifying this adapter to the backend.
	pub api_key: String,
}
impl AdapterConfig {
	/// Validates and captures the backend coordinates.
	///
	/// Fails synchronously, before any network activity, when either argument is empty, when
	/// the URI does not parse as an absolute URL, or when its scheme is neither `http` nor
	/// `https`.
	pub fn new(uri: &str, key: &str) -> Result<Self, ConfigError> {
		if uri.is_empty() {
			return Err(ConfigError::MissingBaseUri);
		}
		if key.is_empty() {
			return Err(ConfigError::MissingApiKey);
		}

		let base_uri = Url::parse(uri).map_err(|source| ConfigError::InvalidBaseUri { source })?;

		match base_uri.scheme() {
			"http" | "https" => {},
			scheme => return Err(ConfigError::UnsupportedProtocol { scheme: scheme.to_owned() }),
		}

		Ok(Self { base_uri, api_key: key.to_owned() })
	}
}

/// Forwards each OAuth SPI operation to the backend over an injectable transport.
///
/// Token-issuing operations POST form-encoded bodies authenticated with the raw-base64 client
/// credential header plus the adapter's API key; redirect-generation operations GET with the
/// API key alone. Response classification lives in [`crate::response`], transport mechanics
/// behind [`AdapterHttpClient`], so this type is purely the mapping between typed SPI requests
/// and wire calls.
#[derive(Clone)]
pub struct OAuthAdapter<C>
where
	C: ?Sized + AdapterHttpClient,
{
	/// Immutable backend coordinates.
	pub config: AdapterConfig,
	/// Transport used for every outbound call.
	pub http_client: Arc<C>,
}
impl<C> OAuthAdapter<C>
where
	C: ?Sized + AdapterHttpClient,
{
	/// Creates an adapter that reuses a caller-provided transport.
	pub fn with_http_client(config: AdapterConfig, http_client: impl Into<Arc<C>>) -> Self {
		Self { config, http_client: http_client.into() }
	}

	/// Performs the `client_credentials` grant.
	pub async fn client_credentials_token(
		&self,
		request: ClientCredentialsTokenRequest,
	) -> Result<TokenOutcome> {
		self.observed(OperationKind::ClientCredentials, "client_credentials_token", async move {
			let grant = GrantType::ClientCredentials;
			let wire = ApiRequest::post(CLIENT_TOKENS_PATH)
				.param("grant_type", grant.as_str())
				.opt_param("scope", request.scope)
				.client_credentials(&request.client_id, &request.client_secret)
				.api_key(&self.config.api_key)
				.token_lifetime(request.token_lifetime)
				.into_wire(&self.config.base_uri)?;
			let raw = self.http_client.execute(wire).await?;
			let outcome = response::parse_token_response(grant, &raw)?;

			Ok(outcome)
		})
		.await
	}

	/// Performs the `password` grant.
	///
	/// The username/password pair is forwarded without content checks; validating the
	/// resource-owner credentials is the caller's responsibility.
	pub async fn password_token(&self, request: PasswordTokenRequest) -> Result<TokenOutcome> {
		self.observed(OperationKind::Password, "password_token", async move {
			let grant = GrantType::Password;
			let wire = ApiRequest::post(PASSWORD_TOKENS_PATH)
				.param("grant_type", grant.as_str())
				.param("username", request.username)
				.param("password", request.password)
				.opt_param("scope", request.scope)
				.client_credentials(&request.client_id, &request.client_secret)
				.api_key(&self.config.api_key)
				.token_lifetime(request.token_lifetime)
				.into_wire(&self.config.base_uri)?;
			let raw = self.http_client.execute(wire).await?;
			let outcome = response::parse_token_response(grant, &raw)?;

			Ok(outcome)
		})
		.await
	}

	/// Exchanges an authorization code for a token.
	pub async fn exchange_authorization_code(
		&self,
		request: AuthorizationCodeTokenRequest,
	) -> Result<TokenOutcome> {
		self.observed(
			OperationKind::AuthorizationCodeExchange,
			"exchange_authorization_code",
			async move {
				let grant = GrantType::AuthorizationCode;
				let wire = ApiRequest::post(AUTHCODE_TOKENS_PATH)
					.param("grant_type", grant.as_str())
					.param("code", request.code)
					.opt_param("redirect_uri", request.redirect_uri.map(|uri| uri.to_string()))
					.client_credentials(&request.client_id, &request.client_secret)
					.api_key(&self.config.api_key)
					.token_lifetime(request.token_lifetime)
					.into_wire(&self.config.base_uri)?;
				let raw = self.http_client.execute(wire).await?;
				let outcome = response::parse_token_response(grant, &raw)?;

				Ok(outcome)
			},
		)
		.await
	}

	/// Generates an authorization code, returning the redirect target the backend answered
	/// with.
	///
	/// Success is strictly HTTP 302; the result is the `Location` header value. No client
	/// secret travels on this call—redirect generation is authenticated by the API key alone.
	pub async fn generate_authorization_code(
		&self,
		request: AuthorizationCodeRequest,
	) -> Result<String> {
		self.observed(OperationKind::AuthorizationCode, "generate_authorization_code", async move {
			let wire = ApiRequest::get(AUTHCODES_PATH)
				.param("client_id", request.client_id)
				.opt_param("redirect_uri", request.redirect_uri.map(|uri| uri.to_string()))
				.opt_param("scope", request.scope)
				.opt_param("state", request.state)
				.api_key(&self.config.api_key)
				.into_wire(&self.config.base_uri)?;
			let raw = self.http_client.execute(wire).await?;
			let target = response::parse_redirect_response(&raw)?;

			Ok(target)
		})
		.await
	}

	/// Performs the implicit grant, returning the redirect target the backend answered with.
	///
	/// Same contract as [`OAuthAdapter::generate_authorization_code`]: strictly 302, result is
	/// the `Location` header, API-key authentication only.
	pub async fn implicit_grant(&self, request: ImplicitGrantRequest) -> Result<String> {
		self.observed(OperationKind::Implicit, "implicit_grant", async move {
			let wire = ApiRequest::get(IMPLICIT_TOKENS_PATH)
				.param("client_id", request.client_id)
				.opt_param("redirect_uri", request.redirect_uri.map(|uri| uri.to_string()))
				.opt_param("scope", request.scope)
				.opt_param("state", request.state)
				.api_key(&self.config.api_key)
				.into_wire(&self.config.base_uri)?;
			let raw = self.http_client.execute(wire).await?;
			let target = response::parse_redirect_response(&raw)?;

			Ok(target)
		})
		.await
	}

	/// Performs the `refresh_token` grant.
	pub async fn refresh_token(&self, request: RefreshTokenRequest) -> Result<TokenOutcome> {
		self.observed(OperationKind::Refresh, "refresh_token", async move {
			let grant = GrantType::RefreshToken;
			let wire = ApiRequest::post(REFRESH_PATH)
				.param("grant_type", grant.as_str())
				.param("refresh_token", request.refresh_token)
				.opt_param("scope", request.scope)
				.client_credentials(&request.client_id, &request.client_secret)
				.api_key(&self.config.api_key)
				.into_wire(&self.config.base_uri)?;
			let raw = self.http_client.execute(wire).await?;
			let outcome = response::parse_token_response(grant, &raw)?;

			Ok(outcome)
		})
		.await
	}

	/// Invalidates a refresh or access token.
	///
	/// When both token kinds are supplied, only the refresh token is encoded and the access
	/// token is silently dropped; see [`InvalidateTokenRequest`] for why this precedence is
	/// preserved as-is. Success carries no payload.
	pub async fn invalidate_token(&self, request: InvalidateTokenRequest) -> Result<()> {
		self.observed(OperationKind::Invalidate, "invalidate_token", async move {
			// Refresh token wins when both are present.
			let builder = if let Some(refresh_token) = request.refresh_token {
				ApiRequest::post(INVALIDATE_PATH).param("refresh_token", refresh_token)
			} else {
				ApiRequest::post(INVALIDATE_PATH).opt_param("access_token", request.access_token)
			};
			let wire = builder
				.client_credentials(&request.client_id, &request.client_secret)
				.api_key(&self.config.api_key)
				.into_wire(&self.config.base_uri)?;
			let raw = self.http_client.execute(wire).await?;

			response::parse_empty_response(&raw)?;

			Ok(())
		})
		.await
	}

	async fn observed<T>(
		&self,
		kind: OperationKind,
		stage: &'static str,
		fut: impl Future<Output = Result<T>>,
	) -> Result<T> {
		let span = OperationSpan::new(kind, stage);

		obs::record_operation_outcome(kind, OperationOutcome::Attempt);

		let result = span.instrument(fut).await;

		match &result {
			Ok(_) => obs::record_operation_outcome(kind, OperationOutcome::Success),
			Err(_) => obs::record_operation_outcome(kind, OperationOutcome::Failure),
		}

		result
	}
}
#[cfg(feature = "reqwest")]
impl OAuthAdapter<ReqwestHttpClient> {
	/// Creates an adapter with the crate's default reqwest transport.
	///
	/// Fails synchronously when the URI or key is rejected by [`AdapterConfig::new`] or the
	/// HTTP client cannot be built; no asynchronous construction path exists.
	pub fn new(uri: &str, key: &str) -> Result<Self, ConfigError> {
		let config = AdapterConfig::new(uri, key)?;

		Ok(Self::with_http_client(config, ReqwestHttpClient::new()?))
	}
}
impl<C> Debug for OAuthAdapter<C>
where
	C: ?Sized + AdapterHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuthAdapter").field("config", &self.config).finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn config_rejects_empty_uri() {
		assert!(matches!(AdapterConfig::new("", "key"), Err(ConfigError::MissingBaseUri)));
	}

	#[test]
	fn config_rejects_empty_key() {
		assert!(matches!(
			AdapterConfig::new("https://backend.example", ""),
			Err(ConfigError::MissingApiKey),
		));
	}

	#[test]
	fn config_rejects_relative_uri() {
		assert!(matches!(
			AdapterConfig::new("backend.example/path", "key"),
			Err(ConfigError::InvalidBaseUri { .. }),
		));
	}

	#[test]
	fn config_rejects_unsupported_scheme() {
		let err = AdapterConfig::new("ftp://backend.example", "key")
			.expect_err("Non-HTTP scheme should be rejected.");

		assert!(matches!(err, ConfigError::UnsupportedProtocol { scheme } if scheme == "ftp"));
	}

	#[test]
	fn config_accepts_http_and_https() {
		assert!(AdapterConfig::new("http://backend.example", "key").is_ok());
		assert!(AdapterConfig::new("https://backend.example", "key").is_ok());
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn adapter_construction_is_synchronous() {
		// No runtime exists here, so any network activity inside `new` would panic.
		let adapter = OAuthAdapter::new("https://backend.example", "key")
			.expect("Adapter should construct without I/O.");

		assert_eq!(adapter.config.api_key, "key");
	}
}
