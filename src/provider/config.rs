//! Fixed MyJohnDeere endpoints and the resolved strategy configuration.

// self
use crate::{_prelude::*, auth::Secret};

/// Provider identifier used for registration and on every normalized profile.
pub const PROVIDER_NAME: &str = "myjohndeere";
/// Sandbox API platform used when no platform URL is configured.
pub const DEFAULT_PLATFORM_URL: &str = "https://sandboxapi.deere.com/platform";
/// Consent page users are redirected to. It lives outside the API platform host.
pub const DEFAULT_USER_AUTHORIZATION_URL: &str = "https://my.deere.com/consentToUseOfData";
/// Session key under which in-flight handshake state is stored.
pub const DEFAULT_SESSION_KEY: &str = "oauth:myjohndeere";
/// Suffix appended to the platform URL for the request-token endpoint.
pub const REQUEST_TOKEN_PATH: &str = "/oauth/request_token";
/// Suffix appended to the platform URL for the access-token endpoint.
pub const ACCESS_TOKEN_PATH: &str = "/oauth/access_token";
/// Suffix appended to the platform URL for the current-user profile endpoint.
pub const USER_PROFILE_PATH: &str = "/users/@currentUser";
/// Header name of the single provider-mandated custom header.
pub const ACCEPT_HEADER: &str = "Accept";
/// Media type MyJohnDeere requires on every API call.
pub const ACCEPT_HEADER_VALUE: &str = "application/vnd.deere.axiom.v3+json";

/// Immutable configuration produced by [`StrategyOptions::resolve`](crate::provider::StrategyOptions::resolve).
///
/// Every endpoint is a plain string: derived endpoints are the platform URL concatenated with
/// a fixed suffix, and overrides are kept verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyConfig {
	/// Registered application identifier.
	pub consumer_key: String,
	/// Registered application shared secret.
	#[serde(skip_serializing)]
	pub consumer_secret: Secret,
	/// Base URL of the MyJohnDeere API platform.
	#[serde(rename = "platformURL")]
	pub platform_url: String,
	/// Endpoint issuing temporary request tokens.
	#[serde(rename = "requestTokenURL")]
	pub request_token_url: String,
	/// Endpoint exchanging authorized request tokens for access tokens.
	#[serde(rename = "accessTokenURL")]
	pub access_token_url: String,
	/// Consent page the user is redirected to.
	#[serde(rename = "userAuthorizationURL")]
	pub user_authorization_url: String,
	/// Endpoint returning the authenticated user's profile.
	#[serde(rename = "userProfileURL")]
	pub user_profile_url: String,
	/// URL MyJohnDeere redirects back to after consent.
	#[serde(rename = "callbackURL")]
	pub callback_url: Option<String>,
	/// Session key for in-flight handshake state.
	pub session_key: String,
	/// Headers sent with every provider request; always [`fixed_custom_headers`].
	pub custom_headers: BTreeMap<String, String>,
}

/// Returns the provider-mandated header set.
pub fn fixed_custom_headers() -> BTreeMap<String, String> {
	BTreeMap::from([(ACCEPT_HEADER.to_owned(), ACCEPT_HEADER_VALUE.to_owned())])
}

pub(crate) fn derive_endpoint(platform_url: &str, path: &str) -> String {
	format!("{platform_url}{path}")
}
