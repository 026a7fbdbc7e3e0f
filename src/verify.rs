//! Application verify callback invoked once a profile has been normalized.
//!
//! The strategy does not interpret the callback's result. It forwards the token pair and the
//! profile, then reports whatever the application decided.

// self
use crate::{_prelude::*, auth::TokenPair, error::BoxError, profile::Profile};

/// Boxed future returned by [`Verify::verify`].
pub type VerifyFuture<'a, U> =
	Pin<Box<dyn Future<Output = Result<Option<U>, BoxError>> + 'a + Send>>;

/// Resolves an application user from a completed MyJohnDeere authentication.
///
/// Return `Ok(None)` when the credentials are valid but no user should be signed in, and
/// `Err(_)` when the lookup itself failed. Closures of the shape
/// `Fn(TokenPair, Profile) -> impl Future<Output = Result<Option<U>, E>>` implement the trait.
pub trait Verify<U>: Send + Sync {
	/// Looks up or creates the application user for `profile`.
	fn verify(&self, credentials: TokenPair, profile: Profile) -> VerifyFuture<'_, U>;
}
impl<U, E, F, Fut> Verify<U> for F
where
	U: 'static + Send,
	E: Into<BoxError>,
	F: Fn(TokenPair, Profile) -> Fut + Send + Sync,
	Fut: 'static + Send + Future<Output = Result<Option<U>, E>>,
{
	fn verify(&self, credentials: TokenPair, profile: Profile) -> VerifyFuture<'_, U> {
		let fut = self(credentials, profile);

		Box::pin(async move { fut.await.map_err(Into::into) })
	}
}

/// Result of [`MyJohnDeereStrategy::authenticate`](crate::provider::MyJohnDeereStrategy::authenticate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerifyOutcome<U> {
	/// The application accepted the user.
	Success(U),
	/// The application declined to sign the user in.
	Rejected,
}
impl<U> VerifyOutcome<U> {
	/// Returns the accepted user, if any.
	pub fn into_user(self) -> Option<U> {
		match self {
			Self::Success(user) => Some(user),
			Self::Rejected => None,
		}
	}
}
impl<U> From<Option<U>> for VerifyOutcome<U> {
	fn from(value: Option<U>) -> Self {
		match value {
			Some(user) => Self::Success(user),
			None => Self::Rejected,
		}
	}
}
