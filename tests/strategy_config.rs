// self
use myjohndeere_oauth1::{
	_preludet::*,
	provider::{
		ACCEPT_HEADER, ACCEPT_HEADER_VALUE, MyJohnDeereStrategy, ProviderStrategy,
		StrategyOptions, fixed_custom_headers,
	},
};
#[cfg(feature = "reqwest")] use myjohndeere_oauth1::oauth::ReqwestOAuth1Client;

#[test]
fn derived_endpoints_follow_platform_url() {
	let config = test_options("https://api.deere.com/platform").resolve();

	assert_eq!(config.platform_url, "https://api.deere.com/platform");
	assert_eq!(config.request_token_url, "https://api.deere.com/platform/oauth/request_token");
	assert_eq!(config.access_token_url, "https://api.deere.com/platform/oauth/access_token");
	assert_eq!(config.user_profile_url, "https://api.deere.com/platform/users/@currentUser");
	// The consent page lives on a different host and is never derived.
	assert_eq!(config.user_authorization_url, "https://my.deere.com/consentToUseOfData");
	assert_eq!(config.session_key, "oauth:myjohndeere");
	assert_eq!(
		config.callback_url.as_deref(),
		Some("https://app.example.com/auth/myjohndeere/callback")
	);
}

#[test]
fn explicit_overrides_are_kept_verbatim() {
	let config = StrategyOptions::new("key", "secret")
		.platform_url("https://api.deere.com/platform")
		.request_token_url("https://proxy.example.com/rt?x=1")
		.access_token_url("http://localhost:8080/at/")
		.user_authorization_url("https://consent.example.com")
		.user_profile_url("https://profiles.example.com/me")
		.session_key("oauth:deere-prod")
		.resolve();

	assert_eq!(config.request_token_url, "https://proxy.example.com/rt?x=1");
	assert_eq!(config.access_token_url, "http://localhost:8080/at/");
	assert_eq!(config.user_authorization_url, "https://consent.example.com");
	assert_eq!(config.user_profile_url, "https://profiles.example.com/me");
	assert_eq!(config.session_key, "oauth:deere-prod");
}

#[test]
fn overrides_are_independent_of_each_other() {
	let config = StrategyOptions::default().access_token_url("https://at.example.com").resolve();

	assert_eq!(config.access_token_url, "https://at.example.com");
	assert_eq!(
		config.request_token_url,
		"https://sandboxapi.deere.com/platform/oauth/request_token"
	);
	assert_eq!(config.user_profile_url, "https://sandboxapi.deere.com/platform/users/@currentUser");
}

#[test]
fn caller_headers_never_reach_the_config() {
	for options in [
		StrategyOptions::default(),
		StrategyOptions::default().custom_header(ACCEPT_HEADER, "application/json"),
		StrategyOptions::default().custom_header("X-Trace", "1").custom_header("accept", "*/*"),
	] {
		let config = options.resolve();

		assert_eq!(config.custom_headers, fixed_custom_headers());
		assert_eq!(
			config.custom_headers.get(ACCEPT_HEADER).map(String::as_str),
			Some(ACCEPT_HEADER_VALUE)
		);
	}
}

#[cfg(feature = "reqwest")]
#[test]
fn strategy_records_name_and_profile_url() {
	let strategy = build_reqwest_test_strategy("https://api.deere.com/platform", ());

	assert_eq!(strategy.name(), "myjohndeere");
	assert_eq!(strategy.user_profile_url(), "https://api.deere.com/platform/users/@currentUser");
	assert_eq!(strategy.config().consumer_key, TEST_CONSUMER_KEY);
	assert_eq!(strategy.config().consumer_secret.expose(), TEST_CONSUMER_SECRET);
}

#[cfg(feature = "reqwest")]
#[test]
fn new_builds_default_collaborator() {
	let strategy = <MyJohnDeereStrategy<ReqwestOAuth1Client, ()>>::new(
		StrategyOptions::new("123-456-789", "shhh-its-a-secret"),
		(),
	)
	.expect("Default collaborator should build.");
	let rendered = format!("{strategy:?}");

	assert!(rendered.contains("123-456-789"));
	assert!(!rendered.contains("shhh-its-a-secret"));
	assert_eq!(strategy.user_profile_url(), "https://sandboxapi.deere.com/platform/users/@currentUser");
}
