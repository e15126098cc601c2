//! The credential bundle and provider identifiers.

use serde::Deserialize;

/// A provider whose API key may be carried by a [`CredentialBundle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// OpenAI, used by language-model features.
    OpenAi,
    /// StabilityAI, used by image-generation features.
    StabilityAi,
    /// HumeAI, used by voice and emotion-analysis features.
    HumeAi,
}

impl Provider {
    /// The field name used for this provider in the key-resolution wire
    /// format.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Provider::OpenAi => "openAI",
            Provider::StabilityAi => "stabilityAI",
            Provider::HumeAi => "humeAI",
        }
    }
}

impl core::fmt::Display for Provider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// The resolved set of provider API keys for a configuration lifetime.
///
/// Any subset of the three keys may be present; features backed by a
/// provider whose key is absent fail at access time with
/// [`ConfigError::MissingCredential`](crate::ConfigError::MissingCredential).
///
/// Deserializes from the key-resolution wire format, a JSON object with
/// optional string fields `openAI`, `stabilityAI`, and `humeAI` where any
/// field may be `null` or missing.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CredentialBundle {
    #[serde(default, rename = "openAI")]
    open_ai: Option<String>,
    #[serde(default, rename = "stabilityAI")]
    stability_ai: Option<String>,
    #[serde(default, rename = "humeAI")]
    hume_ai: Option<String>,
}

impl CredentialBundle {
    /// Creates a bundle from directly supplied key values.
    #[must_use]
    pub fn new(
        open_ai: Option<String>,
        stability_ai: Option<String>,
        hume_ai: Option<String>,
    ) -> Self {
        Self {
            open_ai,
            stability_ai,
            hume_ai,
        }
    }

    /// Returns the key for `provider`, if present.
    #[must_use]
    pub fn get(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::OpenAi => self.open_ai.as_deref(),
            Provider::StabilityAi => self.stability_ai.as_deref(),
            Provider::HumeAi => self.hume_ai.as_deref(),
        }
    }

    /// Returns the OpenAI key, if present.
    #[must_use]
    pub fn open_ai(&self) -> Option<&str> {
        self.open_ai.as_deref()
    }

    /// Returns the StabilityAI key, if present.
    #[must_use]
    pub fn stability_ai(&self) -> Option<&str> {
        self.stability_ai.as_deref()
    }

    /// Returns the HumeAI key, if present.
    #[must_use]
    pub fn hume_ai(&self) -> Option<&str> {
        self.hume_ai.as_deref()
    }
}

impl core::fmt::Debug for CredentialBundle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("CredentialBundle")
            .field("open_ai", &redact(&self.open_ai))
            .field("stability_ai", &redact(&self.stability_ai))
            .field("hume_ai", &redact(&self.hume_ai))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_matches_per_provider_accessors() {
        let bundle = CredentialBundle::new(Some("a".to_string()), None, Some("c".to_string()));
        assert_eq!(bundle.get(Provider::OpenAi), bundle.open_ai());
        assert_eq!(bundle.get(Provider::StabilityAi), bundle.stability_ai());
        assert_eq!(bundle.get(Provider::HumeAi), bundle.hume_ai());
    }

    #[test]
    fn deserializes_wire_field_names() {
        let bundle: CredentialBundle =
            serde_json::from_str(r#"{"openAI":"k1","stabilityAI":null,"humeAI":"k3"}"#).unwrap();
        assert_eq!(bundle.open_ai(), Some("k1"));
        assert_eq!(bundle.stability_ai(), None);
        assert_eq!(bundle.hume_ai(), Some("k3"));
    }

    #[test]
    fn deserializes_absent_fields_as_none() {
        let bundle: CredentialBundle = serde_json::from_str("{}").unwrap();
        assert_eq!(bundle, CredentialBundle::default());
    }

    #[test]
    fn debug_redacts_key_material() {
        let bundle = CredentialBundle::new(Some("sk-secret".to_string()), None, None);
        let rendered = format!("{bundle:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
