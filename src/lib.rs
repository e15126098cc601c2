//! Credential configuration for the Vega multi-provider AI SDK.
//!
//! Vega feature modules talk to three third-party services: OpenAI (language
//! models), StabilityAI (image generation), and HumeAI (voice and emotion
//! analysis). This crate establishes the API credentials those modules read,
//! once per [`CredentialConfig`](vega_config::CredentialConfig) lifetime,
//! either from values supplied directly or by resolving them remotely from a
//! team identifier.
//!
//! ```
//! use vega::prelude::*;
//!
//! let config = CredentialConfig::new();
//! config.setup_direct(CredentialBundle::new(
//!     Some("sk-test".to_string()),
//!     None,
//!     None,
//! ))?;
//!
//! assert_eq!(config.open_ai_key()?, "sk-test");
//! assert!(config.stability_ai_key().is_err());
//! # Ok::<(), ConfigError>(())
//! ```

/// Credential store, setup paths, and per-provider accessors.
pub use vega_config;

/// HTTP implementation of the remote key-resolution endpoint.
pub use vega_resolver;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use vega_config::{
        ConfigError, CredentialBundle, CredentialConfig, KeyResolver, Provider, ResolveError,
        SetupHandle,
    };
    pub use vega_resolver::HttpKeyResolver;
}
