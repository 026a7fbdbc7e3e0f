//! MyJohnDeere OAuth 1.0a strategy: resolve Deere platform endpoints, fetch the signed user
//! profile, and normalize it into a provider-agnostic identity record.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
#[cfg(feature = "reqwest")] pub mod http;
pub mod oauth;
pub mod obs;
pub mod profile;
pub mod provider;
pub mod verify;
#[doc(hidden)]
pub mod _preludet {
	//! Convenience re-exports and helpers shared by integration tests and demos.

	pub use crate::_prelude::*;

	// self
	use crate::provider::StrategyOptions;
	#[cfg(feature = "reqwest")]
	use crate::{http::ReqwestHttpClient, oauth::ReqwestOAuth1Client, provider::MyJohnDeereStrategy};

	/// Strategy type alias used by reqwest-backed integration tests.
	#[cfg(feature = "reqwest")]
	pub type ReqwestTestStrategy<V> = MyJohnDeereStrategy<ReqwestOAuth1Client, V>;

	/// Consumer key shared by the test fixtures.
	pub const TEST_CONSUMER_KEY: &str = "test-consumer-key";
	/// Consumer secret shared by the test fixtures.
	pub const TEST_CONSUMER_SECRET: &str = "test-consumer-secret";

	/// Options pointing every derived endpoint at `platform_url`.
	pub fn test_options(platform_url: impl Into<String>) -> StrategyOptions {
		StrategyOptions::new(TEST_CONSUMER_KEY, TEST_CONSUMER_SECRET)
			.platform_url(platform_url)
			.callback_url("https://app.example.com/auth/myjohndeere/callback")
	}

	/// Constructs a [`MyJohnDeereStrategy`] backed by the reqwest collaborator used across
	/// integration tests.
	#[cfg(feature = "reqwest")]
	pub fn build_reqwest_test_strategy<V>(platform_url: &str, verify: V) -> ReqwestTestStrategy<V> {
		let options = test_options(platform_url);
		let config = options.resolve();
		let client = ReqwestOAuth1Client::with_http_client(&config, ReqwestHttpClient::default());

		MyJohnDeereStrategy::with_client(options, verify, client)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value as JsonValue;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
