//! OAuth 1.0a collaborator contract and the default reqwest-backed client.
//!
//! The strategy never signs requests or talks to the network itself. It resolves a
//! [`StrategyConfig`], hands it to an [`OAuth1Client`], and later asks that client for a single
//! signed `GET`. Failures travel back as [`OAuth1Failure`], which keeps the raw error body so the
//! profile normalizer can look for a provider `errors` payload.

// self
use crate::{_prelude::*, auth::TokenPair, error::BoxError, provider::StrategyConfig};
#[cfg(feature = "reqwest")]
use crate::{auth::Secret, http::ReqwestHttpClient};

/// Boxed future returned by [`OAuth1Client::get`].
pub type OAuth1Future<'a> =
	Pin<Box<dyn Future<Output = Result<String, OAuth1Failure>> + 'a + Send>>;

/// Generic OAuth 1.0a client the strategy delegates the handshake and request signing to.
///
/// Implementations own the consumer credentials and the provider's custom headers taken from
/// the resolved [`StrategyConfig`]. Futures returned by [`OAuth1Client::get`] must be `Send` so
/// callers can drive them on any executor.
pub trait OAuth1Client
where
	Self: 'static + Send + Sync,
{
	/// Builds the client from a fully resolved strategy configuration.
	fn from_config(config: &StrategyConfig) -> Result<Self>
	where
		Self: Sized;

	/// Issues a `GET` to `url`, signed with the consumer credentials and `credentials`.
	///
	/// Resolves to the response body on success. Any transport failure or non-success HTTP
	/// status resolves to an [`OAuth1Failure`] carrying the raw body when one was received.
	fn get<'a>(&'a self, url: &'a str, credentials: &'a TokenPair) -> OAuth1Future<'a>;
}

/// Failure reported by an [`OAuth1Client`] request.
pub struct OAuth1Failure {
	/// HTTP status code, when a response was received.
	pub status: Option<u16>,
	/// Raw response body attached to the failure, when one was received.
	pub data: Option<String>,
	source: Option<BoxError>,
}
impl OAuth1Failure {
	/// Creates a failure from an HTTP status and body.
	pub fn new(status: Option<u16>, data: Option<String>) -> Self {
		Self { status, data, source: None }
	}

	/// Creates a failure for a request that never produced a response.
	pub fn transport(src: impl Into<BoxError>) -> Self {
		Self { status: None, data: None, source: Some(src.into()) }
	}

	/// Attaches the underlying cause.
	pub fn with_source(mut self, src: impl Into<BoxError>) -> Self {
		self.source = Some(src.into());

		self
	}

	/// Attaches the HTTP status code.
	pub fn with_status(mut self, status: u16) -> Self {
		self.status = Some(status);

		self
	}
}
impl Debug for OAuth1Failure {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuth1Failure")
			.field("status", &self.status)
			.field("data", &self.data)
			.field("source", &self.source)
			.finish()
	}
}
impl Display for OAuth1Failure {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match (self.status, &self.source) {
			(Some(status), _) => write!(f, "OAuth 1.0a request failed with HTTP status {status}."),
			(None, Some(source)) => write!(f, "OAuth 1.0a request failed: {source}."),
			(None, None) => f.write_str("OAuth 1.0a request failed."),
		}
	}
}
impl StdError for OAuth1Failure {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		self.source.as_deref().map(|err| err as &(dyn StdError + 'static))
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for OAuth1Failure {
	fn from(e: ReqwestError) -> Self {
		let status = e.status().map(|code| code.as_u16());

		Self { status, data: None, source: Some(Box::new(e)) }
	}
}

/// Default collaborator: HMAC-SHA1 signing via `oauth1-request`, transport via reqwest.
#[cfg(feature = "reqwest")]
#[derive(Clone)]
pub struct ReqwestOAuth1Client {
	http_client: ReqwestHttpClient,
	consumer_key: String,
	consumer_secret: Secret,
	custom_headers: BTreeMap<String, String>,
}
#[cfg(feature = "reqwest")]
impl ReqwestOAuth1Client {
	/// Creates a client for `config` that reuses the caller-provided transport.
	pub fn with_http_client(config: &StrategyConfig, http_client: ReqwestHttpClient) -> Self {
		Self {
			http_client,
			consumer_key: config.consumer_key.clone(),
			consumer_secret: config.consumer_secret.clone(),
			custom_headers: config.custom_headers.clone(),
		}
	}

	/// Builds the `Authorization` header value for a signed `GET`.
	fn authorization(&self, url: &Url, credentials: &TokenPair) -> String {
		let token = oauth1_request::Token::from_parts(
			self.consumer_key.as_str(),
			self.consumer_secret.expose(),
			credentials.token.as_str(),
			credentials.token_secret.expose(),
		);

		oauth1_request::get(url.as_str(), &(), &token, oauth1_request::HMAC_SHA1)
	}
}
#[cfg(feature = "reqwest")]
impl Debug for ReqwestOAuth1Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ReqwestOAuth1Client")
			.field("consumer_key", &self.consumer_key)
			.field("consumer_secret", &self.consumer_secret)
			.field("custom_headers", &self.custom_headers)
			.finish()
	}
}
#[cfg(feature = "reqwest")]
impl OAuth1Client for ReqwestOAuth1Client {
	fn from_config(config: &StrategyConfig) -> Result<Self> {
		let http_client = ReqwestHttpClient::try_default()?;

		Ok(Self::with_http_client(config, http_client))
	}

	fn get<'a>(&'a self, url: &'a str, credentials: &'a TokenPair) -> OAuth1Future<'a> {
		Box::pin(async move {
			let url = Url::parse(url).map_err(OAuth1Failure::transport)?;
			let authorization = self.authorization(&url, credentials);
			let mut request = self
				.http_client
				.get(url)
				.header(reqwest::header::AUTHORIZATION, authorization);

			for (name, value) in &self.custom_headers {
				request = request.header(name.as_str(), value.as_str());
			}

			let response = request.send().await?;
			let status = response.status();
			let body = response
				.text()
				.await
				.map_err(|e| OAuth1Failure::transport(e).with_status(status.as_u16()))?;

			if status.is_success() {
				Ok(body)
			} else {
				Err(OAuth1Failure::new(Some(status.as_u16()), Some(body)))
			}
		})
	}
}
