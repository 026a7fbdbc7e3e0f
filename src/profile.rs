//! Normalized MyJohnDeere identity and the response mapping that produces it.
//!
//! MyJohnDeere does not return profile information with the access token, so the strategy
//! fetches `/users/@currentUser` separately and maps it here. Failures are mapped too: a
//! provider `errors` payload becomes [`Error::Api`], anything else falls back to
//! [`Error::Internal`] without surfacing secondary parse problems.

// self
use crate::{_prelude::*, error::ApiError, oauth::OAuth1Failure, provider::PROVIDER_NAME};

/// Provider-agnostic identity built from a MyJohnDeere profile response.
///
/// `id` and `account_name` always carry the same value. Fields missing from the provider
/// response stay `None` and are left out of the serialized form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
	/// Strategy identifier, always `myjohndeere`.
	pub provider: String,
	/// Account identifier, equal to [`Profile::account_name`].
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	/// MyJohnDeere account name.
	#[serde(rename = "accountName", skip_serializing_if = "Option::is_none")]
	pub account_name: Option<String>,
	/// User's given name.
	#[serde(rename = "givenName", skip_serializing_if = "Option::is_none")]
	pub given_name: Option<String>,
	/// User's family name.
	#[serde(rename = "familyName", skip_serializing_if = "Option::is_none")]
	pub family_name: Option<String>,
	/// Response body exactly as received.
	#[serde(rename = "_raw")]
	pub raw: String,
	/// Parsed response body.
	#[serde(rename = "_json")]
	pub json: JsonValue,
}
impl Profile {
	/// Parses a successful profile response body.
	///
	/// Bodies that are not JSON, or are JSON `null`, yield [`Error::ProfileParse`]. Any other
	/// JSON value produces a profile; fields it does not carry as strings stay `None`.
	pub fn parse(body: impl Into<String>) -> Result<Self> {
		let raw = body.into();
		let json = serde_json::from_str::<JsonValue>(&raw).map_err(|_| Error::ProfileParse)?;

		if json.is_null() {
			return Err(Error::ProfileParse);
		}

		let account_name = string_field(&json, "accountName");

		Ok(Self {
			provider: PROVIDER_NAME.to_owned(),
			id: account_name.clone(),
			account_name,
			given_name: string_field(&json, "givenName"),
			family_name: string_field(&json, "familyName"),
			raw,
			json,
		})
	}
}

/// Extracts the first entry of a MyJohnDeere `errors` payload.
///
/// Returns `None` when `data` is not JSON, has no non-empty `errors` array, or the first entry
/// is not an object.
pub fn extract_api_error(data: &str) -> Option<ApiError> {
	let json = serde_json::from_str::<JsonValue>(data).ok()?;
	let first = json.get("errors")?.as_array()?.first()?;

	if !first.is_object() {
		return None;
	}

	let message = first.get("message").and_then(scalar_to_string).unwrap_or_default();
	let code = first.get("code").and_then(scalar_to_string);

	Some(ApiError::new(message, code))
}

/// Maps a failed profile request into the strategy error taxonomy.
pub fn map_fetch_failure(failure: OAuth1Failure) -> Error {
	match failure.data.as_deref().and_then(extract_api_error) {
		Some(api) => Error::Api(api),
		None => Error::internal(failure),
	}
}

fn string_field(json: &JsonValue, key: &str) -> Option<String> {
	json.get(key).and_then(JsonValue::as_str).map(ToOwned::to_owned)
}

fn scalar_to_string(value: &JsonValue) -> Option<String> {
	match value {
		JsonValue::String(s) => Some(s.clone()),
		JsonValue::Number(n) => Some(n.to_string()),
		JsonValue::Bool(b) => Some(b.to_string()),
		_ => None,
	}
}
