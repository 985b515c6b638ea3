use std::collections::HashMap;

use thiserror::Error;

use crate::config::ConfigPatch;
use crate::example::ExampleSet;
use crate::showcase::Showcase;

/// Tag used when a registration does not name its own.
pub const DEFAULT_TAG: &str = "showcase";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("tag name already registered: {0}")]
    DuplicateTag(String),
    #[error("unknown tag name: {0}")]
    UnknownTag(String),
}

/// A tag-named widget variant with its own configuration defaults.
#[derive(Clone, Default)]
pub struct Registration {
    pub tag_name: Option<String>,
    pub defaults: ConfigPatch,
}

impl Registration {
    pub fn new(defaults: ConfigPatch) -> Self {
        Self {
            tag_name: None,
            defaults,
        }
    }

    pub fn with_tag(tag_name: impl Into<String>, defaults: ConfigPatch) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
            defaults,
        }
    }
}

/// Application-owned registry of showcase variants, keyed by tag name.
///
/// Registration is insert-only: variants are never removed, and registering
/// one tag never mutates another. Owning the registry explicitly (rather
/// than a process-global) keeps independent hosts from leaking defaults
/// into each other.
#[derive(Clone, Default)]
pub struct Registry {
    definitions: HashMap<String, ConfigPatch>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, registration: Registration) -> Result<(), RegistryError> {
        let tag = registration
            .tag_name
            .unwrap_or_else(|| DEFAULT_TAG.to_string());
        if self.definitions.contains_key(&tag) {
            return Err(RegistryError::DuplicateTag(tag));
        }
        self.definitions.insert(tag, registration.defaults);
        Ok(())
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.definitions.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn defaults(&self, tag: &str) -> Option<&ConfigPatch> {
        self.definitions.get(tag)
    }

    /// Builds a showcase whose registration layer is the tagged defaults.
    pub fn instantiate(&self, tag: &str, markdown: &str) -> Result<Showcase, RegistryError> {
        let defaults = self
            .definitions
            .get(tag)
            .ok_or_else(|| RegistryError::UnknownTag(tag.to_string()))?;
        Ok(Showcase::new(ExampleSet::parse(markdown), defaults.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ComponentPatch;
    use crate::config::RtlButtonPatch;

    const SAMPLE: &str = "```html\n<p>hi</p>\n```\n";

    fn hide_rtl() -> ConfigPatch {
        ConfigPatch {
            component: ComponentPatch {
                rtl_button: RtlButtonPatch::hidden(true),
                ..ComponentPatch::default()
            },
            ..ConfigPatch::default()
        }
    }

    #[test]
    fn registers_under_the_default_tag_when_unnamed() {
        let mut registry = Registry::new();
        registry.register(Registration::default()).unwrap();
        assert!(registry.is_registered(DEFAULT_TAG));
        assert!(registry.instantiate(DEFAULT_TAG, SAMPLE).is_ok());
    }

    #[test]
    fn duplicate_tags_are_rejected() {
        let mut registry = Registry::new();
        registry
            .register(Registration::with_tag("test-showcase", ConfigPatch::default()))
            .unwrap();
        let err = registry
            .register(Registration::with_tag("test-showcase", hide_rtl()))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateTag("test-showcase".to_string())
        );
    }

    #[test]
    fn second_registration_does_not_mutate_the_first() {
        let mut registry = Registry::new();
        registry.register(Registration::default()).unwrap();
        registry
            .register(Registration::with_tag("docs-showcase", hide_rtl()))
            .unwrap();

        let plain = registry.instantiate(DEFAULT_TAG, SAMPLE).unwrap();
        assert!(!plain.config().rtl_button.hide);

        let docs = registry.instantiate("docs-showcase", SAMPLE).unwrap();
        assert!(docs.config().rtl_button.hide);
    }

    #[test]
    fn unknown_tags_fail_to_instantiate() {
        let registry = Registry::new();
        let err = registry.instantiate("nope", SAMPLE).unwrap_err();
        assert_eq!(err, RegistryError::UnknownTag("nope".to_string()));
    }
}
