//! HTTP implementation of the Vega key-resolution contract.
//!
//! [`HttpKeyResolver`] fetches a team's credential bundle from the remote
//! key-resolution endpoint and plugs into
//! [`CredentialConfig::setup_by_team`](vega_config::CredentialConfig::setup_by_team)
//! through the [`KeyResolver`](vega_config::KeyResolver) trait.

mod http;

pub use http::HttpKeyResolver;
