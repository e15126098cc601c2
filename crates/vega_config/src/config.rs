//! The [`CredentialConfig`] handle: setup paths and key accessors.

use crate::bundle::{CredentialBundle, Provider};
use crate::error::{ConfigError, ResolveError};
use crate::resolver::KeyResolver;
use crate::state::ConfigStore;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle to the credential set used by Vega feature modules.
///
/// Construct one early in application startup, run exactly one setup
/// operation on it, and pass clones into every component that issues
/// provider requests. Clones are cheap and share the same underlying store,
/// so a key resolved through one clone is visible through all of them.
///
/// Setup runs at most once per handle lifetime: the second setup call,
/// whichever path and whatever its arguments, fails with
/// [`ConfigError::AlreadyInitialized`] and leaves the established
/// credentials untouched.
///
/// ```
/// use vega_config::{CredentialBundle, CredentialConfig};
///
/// let config = CredentialConfig::new();
/// config.setup_direct(CredentialBundle::new(Some("sk-test".to_string()), None, None))?;
///
/// let for_chat_module = config.clone();
/// assert_eq!(for_chat_module.open_ai_key()?, "sk-test");
/// # Ok::<(), vega_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CredentialConfig {
    store: Arc<ConfigStore>,
}

impl CredentialConfig {
    /// Creates an unconfigured handle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a setup operation has started on this handle.
    ///
    /// For the team path this turns `true` as soon as
    /// [`setup_by_team`](Self::setup_by_team) returns, before the remote
    /// fetch completes; key accessors keep failing with
    /// [`ConfigError::MissingCredential`] until it does.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.store.is_initialized()
    }

    /// Clone of the resolved bundle, or `None` before resolution completes.
    #[must_use]
    pub fn bundle(&self) -> Option<CredentialBundle> {
        self.store.bundle()
    }

    /// Installs directly supplied credentials.
    ///
    /// Fully synchronous: by the time this returns, the handle is
    /// initialized and `bundle` is readable through the accessors. Any
    /// subset of the three keys may be present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlreadyInitialized`] if a setup operation
    /// already ran on this handle.
    pub fn setup_direct(&self, bundle: CredentialBundle) -> Result<(), ConfigError> {
        self.store.install_direct(bundle)?;
        tracing::info!("credential configuration initialized from direct values");
        Ok(())
    }

    /// Resolves credentials for `team_id` through `resolver` in the
    /// background.
    ///
    /// The handle is marked initialized before this returns; the fetch runs
    /// on a spawned task and the calling context does not wait for it. Key
    /// accessors fail with [`ConfigError::MissingCredential`] until the
    /// fetch completes. The returned [`SetupHandle`] can be awaited to
    /// observe the outcome; dropping it detaches the fetch instead of
    /// cancelling it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AlreadyInitialized`] if a setup operation
    /// already ran on this handle, including a team fetch still in flight.
    /// A failed fetch surfaces as [`ConfigError::ConfigurationFailed`]
    /// through the returned handle and is never retried at this layer.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn setup_by_team<R: KeyResolver>(
        &self,
        resolver: R,
        team_id: impl Into<String>,
    ) -> Result<SetupHandle, ConfigError> {
        self.store.begin_resolving()?;

        let team_id = team_id.into();
        let store = Arc::clone(&self.store);
        let task = tokio::spawn(async move {
            match resolver.resolve(&team_id).await {
                Ok(bundle) => {
                    store.complete(bundle);
                    tracing::info!(%team_id, "team credentials resolved");
                    Ok(())
                }
                Err(err) => {
                    store.fail();
                    tracing::error!(%team_id, error = %err, "team credential resolution failed");
                    Err(ConfigError::ConfigurationFailed(err))
                }
            }
        });

        Ok(SetupHandle { task })
    }

    /// Returns the key for `provider`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotInitialized`] before any setup call, and
    /// [`ConfigError::MissingCredential`] when the key was not supplied,
    /// the team fetch has not completed, or the fetch failed.
    pub fn key(&self, provider: Provider) -> Result<String, ConfigError> {
        self.store.key(provider)
    }

    /// Returns the OpenAI key. See [`key`](Self::key) for the failure
    /// contract.
    ///
    /// # Errors
    ///
    /// Same contract as [`key`](Self::key).
    pub fn open_ai_key(&self) -> Result<String, ConfigError> {
        self.key(Provider::OpenAi)
    }

    /// Returns the StabilityAI key. See [`key`](Self::key) for the failure
    /// contract.
    ///
    /// # Errors
    ///
    /// Same contract as [`key`](Self::key).
    pub fn stability_ai_key(&self) -> Result<String, ConfigError> {
        self.key(Provider::StabilityAi)
    }

    /// Returns the HumeAI key. See [`key`](Self::key) for the failure
    /// contract.
    ///
    /// # Errors
    ///
    /// Same contract as [`key`](Self::key).
    pub fn hume_ai_key(&self) -> Result<String, ConfigError> {
        self.key(Provider::HumeAi)
    }
}

/// Observer for a background team-credential fetch.
///
/// Returned by [`CredentialConfig::setup_by_team`]. Awaiting it is
/// optional: the store is updated by the background task either way, and
/// dropping the handle leaves the fetch running.
#[derive(Debug)]
pub struct SetupHandle {
    task: JoinHandle<Result<(), ConfigError>>,
}

impl SetupHandle {
    /// Waits for the fetch to complete and returns its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigurationFailed`] if the fetch or the
    /// decode failed, or if the background task was aborted.
    pub async fn wait(self) -> Result<(), ConfigError> {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(err) => Err(ConfigError::ConfigurationFailed(
                ResolveError::Interrupted(err.to_string()),
            )),
        }
    }
}
