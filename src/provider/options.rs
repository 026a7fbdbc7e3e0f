//! Caller-facing strategy options and their resolution into [`StrategyConfig`].

// self
use crate::{
	_prelude::*,
	auth::Secret,
	provider::config::{
		self, ACCESS_TOKEN_PATH, DEFAULT_PLATFORM_URL, DEFAULT_SESSION_KEY,
		DEFAULT_USER_AUTHORIZATION_URL, REQUEST_TOKEN_PATH, StrategyConfig, USER_PROFILE_PATH,
	},
};

/// Caller-facing strategy options.
///
/// Every field except the consumer credentials is optional and falls back to a MyJohnDeere
/// default when resolved. The struct deserializes from the same keys the provider documents
/// (`consumerKey`, `platformURL`, `callbackURL`, ...), so hosts can load it from JSON or TOML.
/// Credentials are not validated here; the OAuth 1.0a client rejects them if they are wrong.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrategyOptions {
	/// Registered application identifier.
	#[serde(alias = "consumer_key")]
	pub consumer_key: String,
	/// Registered application shared secret.
	#[serde(alias = "consumer_secret", skip_serializing)]
	pub consumer_secret: Secret,
	/// Base URL of the MyJohnDeere API platform.
	#[serde(rename = "platformURL", alias = "platformUrl", alias = "platform_url")]
	pub platform_url: Option<String>,
	/// Request-token endpoint override.
	#[serde(rename = "requestTokenURL", alias = "requestTokenUrl", alias = "request_token_url")]
	pub request_token_url: Option<String>,
	/// Access-token endpoint override.
	#[serde(rename = "accessTokenURL", alias = "accessTokenUrl", alias = "access_token_url")]
	pub access_token_url: Option<String>,
	/// Consent page override.
	#[serde(
		rename = "userAuthorizationURL",
		alias = "userAuthorizationUrl",
		alias = "user_authorization_url"
	)]
	pub user_authorization_url: Option<String>,
	/// Profile endpoint override.
	#[serde(rename = "userProfileURL", alias = "userProfileUrl", alias = "user_profile_url")]
	pub user_profile_url: Option<String>,
	/// URL MyJohnDeere redirects back to after consent.
	#[serde(rename = "callbackURL", alias = "callbackUrl", alias = "callback_url")]
	pub callback_url: Option<String>,
	/// Session key override.
	#[serde(alias = "session_key")]
	pub session_key: Option<String>,
	/// Caller-supplied headers. Accepted for compatibility and always replaced by the
	/// provider-mandated set during resolution.
	#[serde(alias = "custom_headers")]
	pub custom_headers: BTreeMap<String, String>,
}
impl StrategyOptions {
	/// Creates options seeded with the consumer credentials.
	pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<Secret>) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			consumer_secret: consumer_secret.into(),
			..Default::default()
		}
	}

	/// Sets the API platform base URL.
	pub fn platform_url(mut self, url: impl Into<String>) -> Self {
		self.platform_url = Some(url.into());

		self
	}

	/// Overrides the request-token endpoint.
	pub fn request_token_url(mut self, url: impl Into<String>) -> Self {
		self.request_token_url = Some(url.into());

		self
	}

	/// Overrides the access-token endpoint.
	pub fn access_token_url(mut self, url: impl Into<String>) -> Self {
		self.access_token_url = Some(url.into());

		self
	}

	/// Overrides the consent page.
	pub fn user_authorization_url(mut self, url: impl Into<String>) -> Self {
		self.user_authorization_url = Some(url.into());

		self
	}

	/// Overrides the profile endpoint.
	pub fn user_profile_url(mut self, url: impl Into<String>) -> Self {
		self.user_profile_url = Some(url.into());

		self
	}

	/// Sets the callback URL.
	pub fn callback_url(mut self, url: impl Into<String>) -> Self {
		self.callback_url = Some(url.into());

		self
	}

	/// Overrides the session key.
	pub fn session_key(mut self, key: impl Into<String>) -> Self {
		self.session_key = Some(key.into());

		self
	}

	/// Records a caller-supplied header. It will not survive [`StrategyOptions::resolve`].
	pub fn custom_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.custom_headers.insert(name.into(), value.into());

		self
	}

	/// Applies MyJohnDeere defaults and derives every endpoint.
	///
	/// `custom_headers` is overwritten with [`config::fixed_custom_headers`] rather than merged.
	pub fn resolve(&self) -> StrategyConfig {
		let platform_url =
			self.platform_url.clone().unwrap_or_else(|| DEFAULT_PLATFORM_URL.to_owned());
		let request_token_url = self
			.request_token_url
			.clone()
			.unwrap_or_else(|| config::derive_endpoint(&platform_url, REQUEST_TOKEN_PATH));
		let access_token_url = self
			.access_token_url
			.clone()
			.unwrap_or_else(|| config::derive_endpoint(&platform_url, ACCESS_TOKEN_PATH));
		let user_authorization_url = self
			.user_authorization_url
			.clone()
			.unwrap_or_else(|| DEFAULT_USER_AUTHORIZATION_URL.to_owned());
		let session_key =
			self.session_key.clone().unwrap_or_else(|| DEFAULT_SESSION_KEY.to_owned());
		let user_profile_url = self
			.user_profile_url
			.clone()
			.unwrap_or_else(|| config::derive_endpoint(&platform_url, USER_PROFILE_PATH));

		StrategyConfig {
			consumer_key: self.consumer_key.clone(),
			consumer_secret: self.consumer_secret.clone(),
			platform_url,
			request_token_url,
			access_token_url,
			user_authorization_url,
			user_profile_url,
			callback_url: self.callback_url.clone(),
			session_key,
			custom_headers: config::fixed_custom_headers(),
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::provider::{ACCEPT_HEADER, ACCEPT_HEADER_VALUE};

	#[test]
	fn empty_options_resolve_to_sandbox_defaults() {
		let config = StrategyOptions::default().resolve();

		assert_eq!(config.platform_url, "https://sandboxapi.deere.com/platform");
		assert_eq!(
			config.request_token_url,
			"https://sandboxapi.deere.com/platform/oauth/request_token"
		);
		assert_eq!(config.access_token_url, "https://sandboxapi.deere.com/platform/oauth/access_token");
		assert_eq!(config.user_authorization_url, "https://my.deere.com/consentToUseOfData");
		assert_eq!(config.user_profile_url, "https://sandboxapi.deere.com/platform/users/@currentUser");
		assert_eq!(config.session_key, "oauth:myjohndeere");
		assert_eq!(config.callback_url, None);
		assert!(config.consumer_key.is_empty());
	}

	#[test]
	fn custom_headers_are_replaced_not_merged() {
		let config = StrategyOptions::new("key", "secret")
			.custom_header(ACCEPT_HEADER, "application/json")
			.custom_header("X-Extra", "1")
			.resolve();

		assert_eq!(config.custom_headers.len(), 1);
		assert_eq!(
			config.custom_headers.get(ACCEPT_HEADER).map(String::as_str),
			Some(ACCEPT_HEADER_VALUE)
		);
	}

	#[test]
	fn deserializes_provider_style_keys() {
		let options: StrategyOptions = serde_json::from_str(
			r#"{
				"consumerKey": "123-456-789",
				"consumerSecret": "shhh-its-a-secret",
				"platformURL": "https://api.deere.com/platform",
				"callbackURL": "https://www.example.net/oauth/callback",
				"customHeaders": { "Accept": "text/plain" }
			}"#,
		)
		.expect("Provider-style options should deserialize.");
		let config = options.resolve();

		assert_eq!(config.consumer_key, "123-456-789");
		assert_eq!(config.consumer_secret.expose(), "shhh-its-a-secret");
		assert_eq!(config.request_token_url, "https://api.deere.com/platform/oauth/request_token");
		assert_eq!(config.callback_url.as_deref(), Some("https://www.example.net/oauth/callback"));
		assert_eq!(config.custom_headers.get(ACCEPT_HEADER).map(String::as_str), Some(ACCEPT_HEADER_VALUE));
	}

	#[test]
	fn serialized_forms_omit_consumer_secret() {
		let options = StrategyOptions::new("key", "very-secret-value");
		let options_json =
			serde_json::to_string(&options).expect("Options should serialize to JSON.");
		let config_json =
			serde_json::to_string(&options.resolve()).expect("Config should serialize to JSON.");

		assert!(!options_json.contains("very-secret-value"));
		assert!(!config_json.contains("very-secret-value"));
		assert!(config_json.contains("\"platformURL\""));
	}
}
