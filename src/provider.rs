//! Provider-facing configuration (data) and strategy (behavior).
//!
//! `options` exposes the caller-facing [`StrategyOptions`] with its fluent builder and serde
//! support. `config` holds the fixed MyJohnDeere constants and the immutable
//! [`StrategyConfig`] every option set resolves into. `strategy` defines [`ProviderStrategy`]
//! and its MyJohnDeere implementation, which composes an injected OAuth 1.0a client instead of
//! extending one.

pub mod config;
pub mod options;
pub mod strategy;

pub use config::*;
pub use options::*;
pub use strategy::*;
