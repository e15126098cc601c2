//! The configuration store and its state machine.

use crate::bundle::{CredentialBundle, Provider};
use crate::error::ConfigError;
use parking_lot::RwLock;

/// Lifecycle states of a credential store.
///
/// The initialization flag and the resolved bundle live in one enum:
/// "initialized" is every state but [`Unconfigured`], and a bundle exists
/// only in [`Ready`]. A single lock guards the whole state, so the pair can
/// never be observed mid-update.
///
/// [`Unconfigured`]: ConfigState::Unconfigured
/// [`Ready`]: ConfigState::Ready
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum ConfigState {
    /// No setup operation has run.
    #[default]
    Unconfigured,
    /// Team setup ran; the remote fetch has not completed yet.
    Resolving,
    /// A bundle is installed and immutable from here on.
    Ready(CredentialBundle),
    /// The remote fetch failed; no bundle will ever be installed.
    Failed,
}

/// Holds the [`ConfigState`] and enforces its legal transitions.
#[derive(Debug, Default)]
pub(crate) struct ConfigStore {
    state: RwLock<ConfigState>,
}

impl ConfigStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Whether any setup operation has started.
    pub(crate) fn is_initialized(&self) -> bool {
        !matches!(*self.state.read(), ConfigState::Unconfigured)
    }

    /// Clone of the installed bundle, if resolution has completed.
    pub(crate) fn bundle(&self) -> Option<CredentialBundle> {
        match &*self.state.read() {
            ConfigState::Ready(bundle) => Some(bundle.clone()),
            _ => None,
        }
    }

    /// Looks up the key for `provider` under a single read of the state.
    pub(crate) fn key(&self, provider: Provider) -> Result<String, ConfigError> {
        match &*self.state.read() {
            ConfigState::Unconfigured => Err(ConfigError::NotInitialized),
            ConfigState::Resolving | ConfigState::Failed => {
                Err(ConfigError::MissingCredential(provider))
            }
            ConfigState::Ready(bundle) => bundle
                .get(provider)
                .map(str::to_owned)
                .ok_or(ConfigError::MissingCredential(provider)),
        }
    }

    /// `Unconfigured -> Resolving`: team setup started, fetch in flight.
    pub(crate) fn begin_resolving(&self) -> Result<(), ConfigError> {
        let mut state = self.state.write();
        match *state {
            ConfigState::Unconfigured => {
                *state = ConfigState::Resolving;
                Ok(())
            }
            _ => Err(ConfigError::AlreadyInitialized),
        }
    }

    /// `Unconfigured -> Ready`: direct setup, flag and bundle in one step.
    pub(crate) fn install_direct(&self, bundle: CredentialBundle) -> Result<(), ConfigError> {
        let mut state = self.state.write();
        match *state {
            ConfigState::Unconfigured => {
                *state = ConfigState::Ready(bundle);
                Ok(())
            }
            _ => Err(ConfigError::AlreadyInitialized),
        }
    }

    /// `Resolving -> Ready`: the background fetch decoded a bundle.
    ///
    /// The fetch callback re-acquires the write path independently, so a
    /// transition from any other state is a logic bug; it is dropped with a
    /// warning rather than disturbing the established state.
    pub(crate) fn complete(&self, bundle: CredentialBundle) {
        let mut state = self.state.write();
        if *state == ConfigState::Resolving {
            *state = ConfigState::Ready(bundle);
        } else {
            tracing::warn!(state = ?*state, "ignoring credential bundle: no resolution in flight");
        }
    }

    /// `Resolving -> Failed`: the background fetch failed.
    pub(crate) fn fail(&self) {
        let mut state = self.state.write();
        if *state == ConfigState::Resolving {
            *state = ConfigState::Failed;
        } else {
            tracing::warn!(state = ?*state, "ignoring resolution failure: no resolution in flight");
        }
    }
}
