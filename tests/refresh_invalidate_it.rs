// crates.io
use httpmock::prelude::*;
// self
use dna_oauth2_adapter::{
	_preludet::*,
	grant::{InvalidateTokenRequest, RefreshTokenRequest},
};

const API_KEY: &str = "adapter-api-key";
const CLIENT_ID: &str = "client-id";
const CLIENT_SECRET: &str = "client-secret";
// base64("client-id:client-secret"), raw, no `Basic ` prefix.
const CREDENTIAL: &str = "Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=";

fn build_adapter(server: &MockServer) -> ReqwestTestAdapter {
	build_reqwest_test_adapter(&server.base_url(), API_KEY)
}

#[tokio::test]
async fn refresh_rotates_the_token() {
	let server = MockServer::start_async().await;
	let adapter = build_adapter(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/tokentypes/all/refresh")
				.header("Authorization", CREDENTIAL)
				.header("x-DNA-Api-Key", API_KEY)
				.body("grant_type=refresh_token&refresh_token=R1&scope=urn%3Ascope");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"A2\",\"refresh_token\":\"R2\",\"expires_in\":3600}",
			);
		})
		.await;
	let outcome = adapter
		.refresh_token(
			RefreshTokenRequest::new(CLIENT_ID, CLIENT_SECRET, "R1").with_scope("urn:scope"),
		)
		.await
		.expect("Refresh call should succeed.");
	let result = outcome.issued().expect("Payload should be issued.");

	assert_eq!(result.access_token.as_deref(), Some("A2"));
	assert_eq!(result.refresh_token.as_deref(), Some("R2"));
	assert_eq!(result.token_type, "refresh_token");

	mock.assert_async().await;
}

#[tokio::test]
async fn invalidate_sends_the_refresh_token() {
	let server = MockServer::start_async().await;
	let adapter = build_adapter(&server);
	// Exact body match proves nothing else leaks into the request.
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/tokentypes/all/invalidate")
				.header("Authorization", CREDENTIAL)
				.body("refresh_token=R1");
			then.status(200);
		})
		.await;

	adapter
		.invalidate_token(InvalidateTokenRequest::new(CLIENT_ID, CLIENT_SECRET).with_refresh_token("R1"))
		.await
		.expect("Invalidation should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn invalidate_sends_the_access_token_when_no_refresh_token_is_given() {
	let server = MockServer::start_async().await;
	let adapter = build_adapter(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/tokentypes/all/invalidate").body("access_token=A1");
			then.status(200);
		})
		.await;

	adapter
		.invalidate_token(InvalidateTokenRequest::new(CLIENT_ID, CLIENT_SECRET).with_access_token("A1"))
		.await
		.expect("Invalidation should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn invalidate_prefers_the_refresh_token_when_both_are_supplied() {
	let server = MockServer::start_async().await;
	let adapter = build_adapter(&server);
	// The exact body match fails the test if the access token sneaks into the request.
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/tokentypes/all/invalidate").body("refresh_token=R1");
			then.status(200);
		})
		.await;

	adapter
		.invalidate_token(
			InvalidateTokenRequest::new(CLIENT_ID, CLIENT_SECRET)
				.with_refresh_token("R1")
				.with_access_token("A1"),
		)
		.await
		.expect("Invalidation should succeed.");

	mock.assert_async().await;
}

#[tokio::test]
async fn invalidate_success_ignores_a_non_json_body() {
	let server = MockServer::start_async().await;
	let adapter = build_adapter(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/tokentypes/all/invalidate");
			then.status(200).header("content-type", "text/plain").body("token gone");
		})
		.await;

	adapter
		.invalidate_token(InvalidateTokenRequest::new(CLIENT_ID, CLIENT_SECRET).with_access_token("A1"))
		.await
		.expect("Invalidation should tolerate any success body.");

	mock.assert_async().await;
}

#[tokio::test]
async fn invalidate_failure_surfaces_the_backend_status() {
	let server = MockServer::start_async().await;
	let adapter = build_adapter(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/tokentypes/all/invalidate");
			then.status(404).body("unknown token");
		})
		.await;
	let err = adapter
		.invalidate_token(InvalidateTokenRequest::new(CLIENT_ID, CLIENT_SECRET).with_refresh_token("R1"))
		.await
		.expect_err("Status 404 should fail.");

	assert_eq!(err.status(), Some(404));
	assert!(matches!(&err, Error::Backend(inner) if inner.body == "unknown token"));

	mock.assert_async().await;
}
