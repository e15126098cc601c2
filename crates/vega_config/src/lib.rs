//! Credential configuration core for the Vega SDK.
//!
//! A [`CredentialConfig`] is an explicitly constructed handle to the set of
//! provider API keys used by Vega feature modules. It is populated exactly
//! once, through one of two mutually exclusive setup paths:
//!
//! - [`CredentialConfig::setup_direct`] - synchronous, from locally supplied
//!   key values.
//! - [`CredentialConfig::setup_by_team`] - asynchronous, by resolving a team
//!   identifier against a remote key-resolution endpoint through a
//!   [`KeyResolver`] implementation.
//!
//! Once populated, the credential set is immutable for the lifetime of the
//! handle. Feature modules read individual keys through the per-provider
//! accessors, which return [`ConfigError::MissingCredential`] rather than a
//! placeholder when a key is unavailable.
//!
//! ```
//! use vega_config::{CredentialBundle, CredentialConfig};
//!
//! let config = CredentialConfig::new();
//! config.setup_direct(CredentialBundle::new(
//!     Some("sk-test".to_string()),
//!     Some("stb-test".to_string()),
//!     None,
//! ))?;
//!
//! assert_eq!(config.open_ai_key()?, "sk-test");
//! assert!(config.hume_ai_key().is_err());
//! # Ok::<(), vega_config::ConfigError>(())
//! ```

mod bundle;
mod config;
mod error;
mod resolver;
mod state;

pub use bundle::{CredentialBundle, Provider};
pub use config::{CredentialConfig, SetupHandle};
pub use error::{ConfigError, ResolveError};
pub use resolver::KeyResolver;
