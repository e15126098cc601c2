//! Integration tests for the setup paths and accessor contracts.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Notify;
use vega_config::{
    ConfigError, CredentialBundle, CredentialConfig, KeyResolver, Provider, ResolveError,
};

/// Resolver that returns a fixed bundle as soon as it is polled.
struct StaticResolver {
    bundle: CredentialBundle,
}

#[async_trait]
impl KeyResolver for StaticResolver {
    async fn resolve(&self, _team_id: &str) -> Result<CredentialBundle, ResolveError> {
        Ok(self.bundle.clone())
    }
}

/// Resolver that holds its response until the test releases the gate.
struct GatedResolver {
    bundle: CredentialBundle,
    gate: Arc<Notify>,
}

#[async_trait]
impl KeyResolver for GatedResolver {
    async fn resolve(&self, _team_id: &str) -> Result<CredentialBundle, ResolveError> {
        self.gate.notified().await;
        Ok(self.bundle.clone())
    }
}

/// Resolver with an internal bug: it panics instead of returning.
struct PanickingResolver;

#[async_trait]
impl KeyResolver for PanickingResolver {
    async fn resolve(&self, _team_id: &str) -> Result<CredentialBundle, ResolveError> {
        panic!("resolver bug");
    }
}

/// Resolver that always fails with a transport error.
struct FailingResolver;

#[async_trait]
impl KeyResolver for FailingResolver {
    async fn resolve(&self, _team_id: &str) -> Result<CredentialBundle, ResolveError> {
        Err(ResolveError::Http("connection refused".to_string()))
    }
}

fn full_bundle() -> CredentialBundle {
    CredentialBundle::new(
        Some("oa-key".to_string()),
        Some("sa-key".to_string()),
        Some("ha-key".to_string()),
    )
}

#[test]
fn accessors_before_setup_fail_not_initialized() {
    let config = CredentialConfig::new();
    assert!(!config.is_initialized());
    for provider in [Provider::OpenAi, Provider::StabilityAi, Provider::HumeAi] {
        assert!(matches!(
            config.key(provider),
            Err(ConfigError::NotInitialized)
        ));
    }
}

#[test]
fn direct_setup_exposes_each_supplied_key() {
    let config = CredentialConfig::new();
    config.setup_direct(full_bundle()).unwrap();

    assert!(config.is_initialized());
    assert_eq!(config.open_ai_key().unwrap(), "oa-key");
    assert_eq!(config.stability_ai_key().unwrap(), "sa-key");
    assert_eq!(config.hume_ai_key().unwrap(), "ha-key");
}

#[test]
fn direct_setup_reports_absent_keys_per_provider() {
    // Every subset of supplied keys produces the matching accessor outcomes.
    for mask in 0u8..8 {
        let keys = [
            (mask & 1 != 0).then(|| "oa-key".to_string()),
            (mask & 2 != 0).then(|| "sa-key".to_string()),
            (mask & 4 != 0).then(|| "ha-key".to_string()),
        ];
        let config = CredentialConfig::new();
        config
            .setup_direct(CredentialBundle::new(
                keys[0].clone(),
                keys[1].clone(),
                keys[2].clone(),
            ))
            .unwrap();

        let providers = [Provider::OpenAi, Provider::StabilityAi, Provider::HumeAi];
        for (provider, supplied) in providers.into_iter().zip(&keys) {
            match supplied {
                Some(key) => assert_eq!(config.key(provider).unwrap(), *key),
                None => assert!(matches!(
                    config.key(provider),
                    Err(ConfigError::MissingCredential(p)) if p == provider
                )),
            }
        }
    }
}

#[test]
fn second_direct_setup_fails_and_keeps_first_bundle() {
    let config = CredentialConfig::new();
    config.setup_direct(full_bundle()).unwrap();

    let second = config.setup_direct(CredentialBundle::new(
        Some("other".to_string()),
        None,
        None,
    ));
    assert!(matches!(second, Err(ConfigError::AlreadyInitialized)));
    assert_eq!(config.open_ai_key().unwrap(), "oa-key");
}

#[tokio::test]
async fn team_setup_after_direct_setup_fails() {
    let config = CredentialConfig::new();
    config.setup_direct(full_bundle()).unwrap();

    let second = config.setup_by_team(FailingResolver, "team-1");
    assert!(matches!(second, Err(ConfigError::AlreadyInitialized)));
    assert_eq!(config.open_ai_key().unwrap(), "oa-key");
}

#[tokio::test]
async fn team_setup_resolves_partial_bundle() {
    let config = CredentialConfig::new();
    let resolver = StaticResolver {
        bundle: CredentialBundle::new(Some("k1".to_string()), None, Some("k3".to_string())),
    };

    let handle = config.setup_by_team(resolver, "team-1").unwrap();
    handle.wait().await.unwrap();

    assert_eq!(config.open_ai_key().unwrap(), "k1");
    assert!(matches!(
        config.stability_ai_key(),
        Err(ConfigError::MissingCredential(Provider::StabilityAi))
    ));
    assert_eq!(config.hume_ai_key().unwrap(), "k3");
}

#[tokio::test]
async fn team_setup_failure_never_stores_a_bundle() {
    let config = CredentialConfig::new();

    let handle = config.setup_by_team(FailingResolver, "team-1").unwrap();
    let outcome = handle.wait().await;
    assert!(matches!(
        outcome,
        Err(ConfigError::ConfigurationFailed(ResolveError::Http(_)))
    ));

    assert!(config.is_initialized());
    assert!(config.bundle().is_none());
    assert!(matches!(
        config.open_ai_key(),
        Err(ConfigError::MissingCredential(Provider::OpenAi))
    ));
}

#[tokio::test]
async fn crashed_resolution_task_is_not_reported_as_transport_failure() {
    let config = CredentialConfig::new();
    let handle = config.setup_by_team(PanickingResolver, "team-1").unwrap();

    match handle.wait().await {
        Err(err @ ConfigError::ConfigurationFailed(ResolveError::Interrupted(_))) => {
            assert!(!err.to_string().contains("http error"));
        }
        other => panic!("expected interrupted resolution, got {other:?}"),
    }
}

#[tokio::test]
async fn accessors_fail_during_fetch_and_succeed_after() {
    let gate = Arc::new(Notify::new());
    let config = CredentialConfig::new();
    let resolver = GatedResolver {
        bundle: CredentialBundle::new(Some("k1".to_string()), None, None),
        gate: Arc::clone(&gate),
    };

    let handle = config.setup_by_team(resolver, "team-1").unwrap();

    // Fetch is in flight: initialized, but no keys yet.
    assert!(config.is_initialized());
    assert!(matches!(
        config.open_ai_key(),
        Err(ConfigError::MissingCredential(Provider::OpenAi))
    ));

    gate.notify_one();
    handle.wait().await.unwrap();
    assert_eq!(config.open_ai_key().unwrap(), "k1");
}

#[tokio::test]
async fn second_setup_during_inflight_fetch_fails() {
    let gate = Arc::new(Notify::new());
    let config = CredentialConfig::new();
    let resolver = GatedResolver {
        bundle: CredentialBundle::new(Some("k1".to_string()), None, None),
        gate: Arc::clone(&gate),
    };

    let handle = config.setup_by_team(resolver, "team-1").unwrap();

    assert!(matches!(
        config.setup_direct(full_bundle()),
        Err(ConfigError::AlreadyInitialized)
    ));
    assert!(matches!(
        config.setup_by_team(FailingResolver, "team-2"),
        Err(ConfigError::AlreadyInitialized)
    ));

    // The rejected calls must not have disturbed the in-flight resolution.
    gate.notify_one();
    handle.wait().await.unwrap();
    assert_eq!(config.open_ai_key().unwrap(), "k1");
}

#[test]
fn direct_setup_is_deterministic() {
    let outcomes = |config: &CredentialConfig| {
        [
            config.open_ai_key().ok(),
            config.stability_ai_key().ok(),
            config.hume_ai_key().ok(),
        ]
    };

    let first = CredentialConfig::new();
    let second = CredentialConfig::new();
    first.setup_direct(full_bundle()).unwrap();
    second.setup_direct(full_bundle()).unwrap();
    assert_eq!(outcomes(&first), outcomes(&second));
}
