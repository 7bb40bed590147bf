//! Optional observability helpers for adapter operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `dna_oauth2_adapter.operation` with the
//!   `operation` and `stage` fields.
//! - Enable `metrics` to increment the `dna_oauth2_adapter_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// SPI operations observed by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// Client-credentials token issuance.
	ClientCredentials,
	/// Password-credentials token issuance.
	Password,
	/// Authorization-code-for-token exchange.
	AuthorizationCodeExchange,
	/// Authorization-code generation redirect.
	AuthorizationCode,
	/// Implicit grant redirect.
	Implicit,
	/// Token refresh.
	Refresh,
	/// Token invalidation.
	Invalidate,
}
impl OperationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::ClientCredentials => "client_credentials",
			OperationKind::Password => "password",
			OperationKind::AuthorizationCodeExchange => "authcode_exchange",
			OperationKind::AuthorizationCode => "authcode",
			OperationKind::Implicit => "implicit",
			OperationKind::Refresh => "refresh",
			OperationKind::Invalidate => "invalidate",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to an adapter operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
