//! Access token pair produced by a completed handshake.

// self
use crate::{_prelude::*, auth::Secret};

/// Token and token secret issued for a single authentication attempt.
///
/// The pair is opaque to the strategy and never persisted; it only signs the profile request
/// and flows through to the verify callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenPair {
	/// OAuth 1.0a access token.
	pub token: String,
	/// Secret paired with [`TokenPair::token`].
	pub token_secret: Secret,
}
impl TokenPair {
	/// Creates a new token pair.
	pub fn new(token: impl Into<String>, token_secret: impl Into<Secret>) -> Self {
		Self { token: token.into(), token_secret: token_secret.into() }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn debug_output_hides_token_secret() {
		let pair = TokenPair::new("access-token", "access-secret");
		let rendered = format!("{pair:?}");

		assert!(rendered.contains("access-token"));
		assert!(!rendered.contains("access-secret"));
	}
}
