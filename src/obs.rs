//! Optional observability helpers for profile fetches and verify calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to wrap each call in a `myjohndeere_oauth1.strategy` span carrying the
//!   `stage` field. No events are emitted; errors are returned to the caller, never logged.
//! - Enable `metrics` to increment the `myjohndeere_oauth1_stage_total` counter, labeled by
//!   `stage` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, verify::VerifyOutcome};

/// Strategy stages observed by the helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
	/// Signed profile request plus normalization.
	UserProfile,
	/// Full post-handshake authentication: profile then verify callback.
	Authenticate,
}
impl Stage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Stage::UserProfile => "user_profile",
			Stage::Authenticate => "authenticate",
		}
	}
}
impl Display for Stage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded per stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// Entry to a strategy call.
	Attempt,
	/// Call completed and produced a profile or an accepted user.
	Success,
	/// Verify callback declined the user.
	Rejected,
	/// Provider reported a structured API error.
	ApiError,
	/// Request failed without a structured provider error.
	InternalError,
	/// Provider answered with an unreadable profile body.
	ParseError,
	/// Collaborator construction failed.
	ConfigError,
	/// Verify callback failed.
	VerifyError,
}
impl Outcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Attempt => "attempt",
			Outcome::Success => "success",
			Outcome::Rejected => "rejected",
			Outcome::ApiError => "api_error",
			Outcome::InternalError => "internal_error",
			Outcome::ParseError => "parse_error",
			Outcome::ConfigError => "config_error",
			Outcome::VerifyError => "verify_error",
		}
	}

	/// Classifies a failed call.
	pub fn of_error(err: &Error) -> Self {
		match err {
			Error::Api(_) => Outcome::ApiError,
			Error::Internal { .. } => Outcome::InternalError,
			Error::ProfileParse => Outcome::ParseError,
			Error::Config(_) => Outcome::ConfigError,
			Error::Verify { .. } => Outcome::VerifyError,
		}
	}

	/// Classifies a finished profile fetch.
	pub fn of_profile<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => Outcome::Success,
			Err(err) => Self::of_error(err),
		}
	}

	/// Classifies a finished authentication.
	pub fn of_authentication<U>(result: &Result<VerifyOutcome<U>>) -> Self {
		match result {
			Ok(VerifyOutcome::Success(_)) => Outcome::Success,
			Ok(VerifyOutcome::Rejected) => Outcome::Rejected,
			Err(err) => Self::of_error(err),
		}
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
