//! Consumer and per-attempt OAuth 1.0a credentials.

pub mod secret;
pub mod token;

pub use secret::*;
pub use token::*;
