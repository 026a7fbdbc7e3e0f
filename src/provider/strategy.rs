//! MyJohnDeere strategy: endpoint configuration plus profile normalization.
//!
//! [`MyJohnDeereStrategy`] owns the resolved [`StrategyConfig`], an injected [`OAuth1Client`]
//! that performs the handshake and request signing, and the application's verify callback. It
//! runs once per completed handshake: one signed `GET` for the profile, one verify call.

// self
use crate::{
	_prelude::*,
	auth::TokenPair,
	obs::{self, Outcome, Stage, StageSpan},
	oauth::OAuth1Client,
	profile::{self, Profile},
	provider::{PROVIDER_NAME, StrategyConfig, StrategyOptions},
	verify::{Verify, VerifyOutcome},
};

/// Extra parameters returned alongside the access token during the handshake.
pub type HandshakeParams = BTreeMap<String, String>;

/// Boxed future returned by [`ProviderStrategy::user_profile`].
pub type ProfileFuture<'a> = Pin<Box<dyn Future<Output = Result<Profile>> + 'a + Send>>;

/// Capability a host authentication framework needs from a provider strategy.
///
/// Implementors expose their registration name and resolved configuration, and normalize the
/// provider profile for a completed handshake. Handshake mechanics stay with the OAuth 1.0a
/// client the implementor composes.
pub trait ProviderStrategy: Send + Sync {
	/// Registration name used by the host framework.
	fn name(&self) -> &str;

	/// Fully resolved configuration.
	fn config(&self) -> &StrategyConfig;

	/// Fetches and normalizes the profile of the user owning `credentials`.
	///
	/// `params` carries extra handshake parameters and is accepted for host compatibility.
	fn user_profile<'a>(
		&'a self,
		credentials: &'a TokenPair,
		params: &'a HandshakeParams,
	) -> ProfileFuture<'a>;
}

/// OAuth 1.0a strategy for MyJohnDeere.
///
/// The configuration is resolved once at construction and never changes afterwards, so a
/// single instance can serve any number of interleaved authentication attempts.
pub struct MyJohnDeereStrategy<C, V>
where
	C: OAuth1Client,
{
	/// Resolved endpoints, session key, and custom headers.
	pub config: StrategyConfig,
	/// OAuth 1.0a collaborator performing the handshake and signing.
	pub client: Arc<C>,
	/// Application callback resolving users from profiles.
	pub verify: V,
	name: &'static str,
}
impl<C, V> MyJohnDeereStrategy<C, V>
where
	C: OAuth1Client,
{
	/// Resolves `options` and builds the OAuth 1.0a collaborator from the result.
	pub fn new(options: StrategyOptions, verify: V) -> Result<Self> {
		let config = options.resolve();
		let client = C::from_config(&config)?;

		Ok(Self::from_parts(config, verify, Arc::new(client)))
	}

	/// Resolves `options` and reuses a caller-provided collaborator.
	///
	/// The collaborator is expected to have been built from the same options; the strategy only
	/// uses it for signed requests against the endpoints resolved here.
	pub fn with_client(options: StrategyOptions, verify: V, client: impl Into<Arc<C>>) -> Self {
		Self::from_parts(options.resolve(), verify, client.into())
	}

	fn from_parts(config: StrategyConfig, verify: V, client: Arc<C>) -> Self {
		Self { config, client, verify, name: PROVIDER_NAME }
	}

	/// Endpoint queried for the authenticated user's profile.
	pub fn user_profile_url(&self) -> &str {
		&self.config.user_profile_url
	}

	/// Fetches and normalizes the MyJohnDeere profile for `credentials`.
	///
	/// The call is never retried. Provider `errors` payloads become [`Error::Api`], other
	/// request failures [`Error::Internal`], and unreadable success bodies
	/// [`Error::ProfileParse`].
	pub async fn fetch_profile(
		&self,
		credentials: &TokenPair,
		_params: &HandshakeParams,
	) -> Result<Profile> {
		const STAGE: Stage = Stage::UserProfile;

		let span = StageSpan::new(STAGE, self.user_profile_url());

		obs::record_outcome(STAGE, Outcome::Attempt);

		let result: Result<Profile> = span
			.instrument(async move {
				let body = self
					.client
					.get(self.user_profile_url(), credentials)
					.await
					.map_err(profile::map_fetch_failure)?;

				Profile::parse(body)
			})
			.await;

		obs::record_outcome(STAGE, Outcome::of_profile(&result));

		result
	}

	/// Runs the post-handshake half of authentication: profile fetch, then the verify callback.
	pub async fn authenticate<U>(
		&self,
		credentials: TokenPair,
		params: &HandshakeParams,
	) -> Result<VerifyOutcome<U>>
	where
		V: Verify<U>,
	{
		const STAGE: Stage = Stage::Authenticate;

		let span = StageSpan::new(STAGE, self.user_profile_url());

		obs::record_outcome(STAGE, Outcome::Attempt);

		let result: Result<VerifyOutcome<U>> = span
			.instrument(async move {
				let profile = self.fetch_profile(&credentials, params).await?;
				let user =
					self.verify.verify(credentials, profile).await.map_err(Error::verify)?;

				Ok(VerifyOutcome::from(user))
			})
			.await;

		obs::record_outcome(STAGE, Outcome::of_authentication(&result));

		result
	}
}
impl<C, V> ProviderStrategy for MyJohnDeereStrategy<C, V>
where
	C: OAuth1Client,
	V: Send + Sync,
{
	fn name(&self) -> &str {
		self.name
	}

	fn config(&self) -> &StrategyConfig {
		&self.config
	}

	fn user_profile<'a>(
		&'a self,
		credentials: &'a TokenPair,
		params: &'a HandshakeParams,
	) -> ProfileFuture<'a> {
		Box::pin(self.fetch_profile(credentials, params))
	}
}
impl<C, V> Debug for MyJohnDeereStrategy<C, V>
where
	C: OAuth1Client,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("MyJohnDeereStrategy")
			.field("name", &self.name)
			.field("config", &self.config)
			.finish()
	}
}
