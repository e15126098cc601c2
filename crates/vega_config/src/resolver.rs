//! The [`KeyResolver`] trait for remote credential resolution.

use crate::bundle::CredentialBundle;
use crate::error::ResolveError;
use async_trait::async_trait;

/// Trait implemented by remote key-resolution backends.
///
/// [`CredentialConfig::setup_by_team`](crate::CredentialConfig::setup_by_team)
/// calls the resolver from a background task; implementations must be safe to
/// share across threads. The HTTP implementation lives in the `vega_resolver`
/// crate.
#[async_trait]
pub trait KeyResolver: Send + Sync + 'static {
    /// Resolves the credential bundle for `team_id`.
    ///
    /// # Arguments
    ///
    /// * `team_id` - The team identifier registered with the key-resolution
    ///   service
    async fn resolve(&self, team_id: &str) -> Result<CredentialBundle, ResolveError>;
}
