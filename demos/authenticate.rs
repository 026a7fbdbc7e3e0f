//! Resolves a MyJohnDeere strategy from provider-style JSON options and runs the post-handshake
//! half of authentication with a token pair taken from the environment.
//!
//! ```sh
//! MYJOHNDEERE_TOKEN=... MYJOHNDEERE_TOKEN_SECRET=... cargo run --example authenticate
//! ```

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use myjohndeere_oauth1::{
	auth::TokenPair,
	oauth::ReqwestOAuth1Client,
	profile::Profile,
	provider::{HandshakeParams, MyJohnDeereStrategy, ProviderStrategy, StrategyOptions},
	verify::VerifyOutcome,
};

#[derive(Debug)]
struct User {
	account_name: String,
	display_name: String,
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let options: StrategyOptions = serde_json::from_str(
		r#"{
			"consumerKey": "123-456-789",
			"consumerSecret": "shhh-its-a-secret",
			"platformURL": "https://sandboxapi.deere.com/platform",
			"callbackURL": "https://www.example.net/oauth/callback"
		}"#,
	)?;
	let verify = |_: TokenPair, profile: Profile| async move {
		let user = profile.account_name.map(|account_name| User {
			display_name: format!(
				"{} {}",
				profile.given_name.unwrap_or_default(),
				profile.family_name.unwrap_or_default()
			),
			account_name,
		});

		Ok::<_, std::io::Error>(user)
	};
	let strategy = <MyJohnDeereStrategy<ReqwestOAuth1Client, _>>::new(options, verify)?;
	let config = strategy.config();

	println!("Registered strategy `{}`.", strategy.name());
	println!("Request tokens from {}.", config.request_token_url);
	println!("Send users to {}.", config.user_authorization_url);
	println!("Exchange access tokens at {}.", config.access_token_url);

	let (Ok(token), Ok(token_secret)) =
		(env::var("MYJOHNDEERE_TOKEN"), env::var("MYJOHNDEERE_TOKEN_SECRET"))
	else {
		return Err(eyre!("Set MYJOHNDEERE_TOKEN and MYJOHNDEERE_TOKEN_SECRET to fetch a profile."));
	};

	match strategy.authenticate(TokenPair::new(token, token_secret), &HandshakeParams::new()).await? {
		VerifyOutcome::Success(user) =>
			println!("Signed in {} ({}).", user.display_name, user.account_name),
		VerifyOutcome::Rejected => println!("Profile had no account name; sign-in rejected."),
	}

	Ok(())
}
