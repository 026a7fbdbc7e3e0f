//! Reqwest transport shared by the default OAuth 1.0a collaborator.

// std
use std::ops::Deref;
// self
use crate::{_prelude::*, error::ConfigError};

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The wrapped client follows reqwest's default redirect policy, matching the behavior
/// MyJohnDeere expects for profile lookups. Supply a custom [`ReqwestClient`] through
/// [`ReqwestHttpClient::with_client`] to change timeouts, proxies, or TLS roots.
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client from reqwest's default builder, surfacing TLS backend failures.
	pub fn try_default() -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().build()?;

		Ok(Self(client))
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
