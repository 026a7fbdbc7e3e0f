//! Strategy-level error types shared by the configurator, the profile normalizer, and the
//! verify pass-through.

// self
use crate::{_prelude::*, oauth::OAuth1Failure};

/// Strategy-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical strategy error exposed by public APIs.
///
/// [`Error::Api`] and [`Error::Internal`] mean the provider could not be reached or refused the
/// request; [`Error::ProfileParse`] means it answered successfully with an unreadable body.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Provider returned a structured `errors` payload.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Profile request failed without a recognizable provider error body.
	#[error("Failed to fetch user profile")]
	Internal {
		/// Failure reported by the OAuth 1.0a collaborator.
		#[source]
		source: OAuth1Failure,
	},
	/// Profile request succeeded but the body was not valid JSON.
	#[error("Failed to parse user profile")]
	ProfileParse,
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Application verify callback reported a failure.
	#[error("Verify callback failed.")]
	Verify {
		/// Error returned by the application.
		#[source]
		source: BoxError,
	},
}
impl Error {
	/// Wraps a collaborator failure as the generic profile fetch error.
	pub fn internal(source: OAuth1Failure) -> Self {
		Self::Internal { source }
	}

	/// Wraps an application verify failure.
	pub fn verify(src: impl Into<BoxError>) -> Self {
		Self::Verify { source: src.into() }
	}
}

/// Error reported by the MyJohnDeere API inside an `errors` array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
#[error("{message}")]
pub struct ApiError {
	/// Human-readable message supplied by the provider.
	pub message: String,
	/// Provider-specific error code, when supplied.
	pub code: Option<String>,
}
impl ApiError {
	/// Creates a new provider error.
	pub fn new(message: impl Into<String>, code: Option<String>) -> Self {
		Self { message: message.into(), code }
	}
}

/// Configuration failures raised while building the OAuth 1.0a collaborator.
#[derive(Debug, ThisError)]
pub enum ConfigError {
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

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn fixed_messages_are_distinguishable() {
		let internal = Error::internal(OAuth1Failure::new(None, None));

		assert_eq!(internal.to_string(), "Failed to fetch user profile");
		assert_eq!(Error::ProfileParse.to_string(), "Failed to parse user profile");
		assert!(internal.source().is_some());
		assert!(Error::ProfileParse.source().is_none());
	}

	#[test]
	fn api_error_displays_provider_message() {
		let err = Error::from(ApiError::new("Invalid access token", Some("ERR401".into())));

		assert_eq!(err.to_string(), "Invalid access token");
	}

	#[test]
	fn config_and_verify_errors_keep_their_cause() {
		let config = Error::from(ConfigError::http_client_build(std::fmt::Error));
		let verify = Error::verify("user lookup failed");

		assert!(matches!(config, Error::Config(ConfigError::HttpClientBuild { .. })));
		assert_eq!(config.to_string(), "HTTP client could not be constructed.");
		assert_eq!(verify.to_string(), "Verify callback failed.");
		assert_eq!(
			verify.source().map(ToString::to_string).as_deref(),
			Some("user lookup failed")
		);
	}
}
