//! Layered configuration for the showcase widget.
//!
//! Configuration is plain data: a fully-populated [`ShowcaseConfig`] and
//! [`ConfigPatch`] layers in which every field is optional. Layers compose
//! by field-wise merge with instance overrides winning over registration
//! defaults winning over built-in defaults. [`resolve`] is a pure function
//! over a fresh defaults value, so re-running it after any override can
//! never leak values from a previous resolution.

use std::fmt;
use std::sync::Arc;

use crate::hooks::Hooks;

/// Label for a framework tab: fixed text, or text derived from the tag.
#[derive(Clone)]
pub enum FrameworkLabel {
    Text(String),
    Derive(Arc<dyn Fn(&str) -> String + Send + Sync>),
}

impl FrameworkLabel {
    pub fn text(label: impl Into<String>) -> Self {
        Self::Text(label.into())
    }

    pub fn derive(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Derive(Arc::new(f))
    }

    pub fn for_framework(&self, framework: &str) -> String {
        match self {
            Self::Text(label) => label.clone(),
            Self::Derive(f) => f(framework),
        }
    }
}

impl Default for FrameworkLabel {
    fn default() -> Self {
        Self::Derive(Arc::new(str::to_string))
    }
}

impl fmt::Debug for FrameworkLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(label) => f.debug_tuple("Text").field(label).finish(),
            Self::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowCodeButton {
    pub hide: bool,
    pub opened_label: String,
    pub closed_label: String,
}

impl Default for ShowCodeButton {
    fn default() -> Self {
        Self {
            hide: false,
            opened_label: "Hide Code".to_string(),
            closed_label: "Show Code".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyButton {
    pub hide: bool,
    pub label: String,
    pub copied_label: String,
}

impl Default for CopyButton {
    fn default() -> Self {
        Self {
            hide: false,
            label: "Copy".to_string(),
            copied_label: "Copied".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RtlButton {
    pub hide: bool,
    pub label: String,
}

impl Default for RtlButton {
    fn default() -> Self {
        Self {
            hide: false,
            label: "RTL".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SandboxButton {
    pub hide: bool,
    pub label: String,
}

impl Default for SandboxButton {
    fn default() -> Self {
        Self {
            hide: false,
            label: "Sandbox".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameworkButtons {
    pub hide: bool,
    pub label: FrameworkLabel,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preview {
    pub hide: bool,
}

/// The effective configuration snapshot a showcase instance reads.
#[derive(Clone, Default)]
pub struct ShowcaseConfig {
    pub show_code_button: ShowCodeButton,
    pub copy_button: CopyButton,
    pub rtl_button: RtlButton,
    pub sandbox_button: SandboxButton,
    pub framework_buttons: FrameworkButtons,
    pub preview: Preview,
    pub default_example: Option<String>,
    pub hooks: Hooks,
}

#[derive(Clone, Debug, Default)]
pub struct ShowCodeButtonPatch {
    pub hide: Option<bool>,
    pub opened_label: Option<String>,
    pub closed_label: Option<String>,
}

impl ShowCodeButtonPatch {
    pub fn hidden(hide: bool) -> Self {
        Self {
            hide: Some(hide),
            ..Self::default()
        }
    }

    fn apply_to(&self, into: &mut ShowCodeButton) {
        if let Some(hide) = self.hide {
            into.hide = hide;
        }
        if let Some(label) = &self.opened_label {
            into.opened_label = label.clone();
        }
        if let Some(label) = &self.closed_label {
            into.closed_label = label.clone();
        }
    }

    fn merge(self, over: Self) -> Self {
        Self {
            hide: over.hide.or(self.hide),
            opened_label: over.opened_label.or(self.opened_label),
            closed_label: over.closed_label.or(self.closed_label),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct CopyButtonPatch {
    pub hide: Option<bool>,
    pub label: Option<String>,
    pub copied_label: Option<String>,
}

impl CopyButtonPatch {
    pub fn hidden(hide: bool) -> Self {
        Self {
            hide: Some(hide),
            ..Self::default()
        }
    }

    fn apply_to(&self, into: &mut CopyButton) {
        if let Some(hide) = self.hide {
            into.hide = hide;
        }
        if let Some(label) = &self.label {
            into.label = label.clone();
        }
        if let Some(label) = &self.copied_label {
            into.copied_label = label.clone();
        }
    }

    fn merge(self, over: Self) -> Self {
        Self {
            hide: over.hide.or(self.hide),
            label: over.label.or(self.label),
            copied_label: over.copied_label.or(self.copied_label),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RtlButtonPatch {
    pub hide: Option<bool>,
    pub label: Option<String>,
}

impl RtlButtonPatch {
    pub fn hidden(hide: bool) -> Self {
        Self {
            hide: Some(hide),
            ..Self::default()
        }
    }

    fn apply_to(&self, into: &mut RtlButton) {
        if let Some(hide) = self.hide {
            into.hide = hide;
        }
        if let Some(label) = &self.label {
            into.label = label.clone();
        }
    }

    fn merge(self, over: Self) -> Self {
        Self {
            hide: over.hide.or(self.hide),
            label: over.label.or(self.label),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SandboxButtonPatch {
    pub hide: Option<bool>,
    pub label: Option<String>,
}

impl SandboxButtonPatch {
    pub fn hidden(hide: bool) -> Self {
        Self {
            hide: Some(hide),
            ..Self::default()
        }
    }

    fn apply_to(&self, into: &mut SandboxButton) {
        if let Some(hide) = self.hide {
            into.hide = hide;
        }
        if let Some(label) = &self.label {
            into.label = label.clone();
        }
    }

    fn merge(self, over: Self) -> Self {
        Self {
            hide: over.hide.or(self.hide),
            label: over.label.or(self.label),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameworkButtonsPatch {
    pub hide: Option<bool>,
    pub label: Option<FrameworkLabel>,
}

impl FrameworkButtonsPatch {
    pub fn hidden(hide: bool) -> Self {
        Self {
            hide: Some(hide),
            ..Self::default()
        }
    }

    fn apply_to(&self, into: &mut FrameworkButtons) {
        if let Some(hide) = self.hide {
            into.hide = hide;
        }
        if let Some(label) = &self.label {
            into.label = label.clone();
        }
    }

    fn merge(self, over: Self) -> Self {
        Self {
            hide: over.hide.or(self.hide),
            label: over.label.or(self.label),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PreviewPatch {
    pub hide: Option<bool>,
}

impl PreviewPatch {
    pub fn hidden(hide: bool) -> Self {
        Self { hide: Some(hide) }
    }

    fn apply_to(&self, into: &mut Preview) {
        if let Some(hide) = self.hide {
            into.hide = hide;
        }
    }

    fn merge(self, over: Self) -> Self {
        Self {
            hide: over.hide.or(self.hide),
        }
    }
}

/// Feature overrides, mirroring the fields of [`ShowcaseConfig`].
#[derive(Clone, Debug, Default)]
pub struct ComponentPatch {
    pub show_code_button: ShowCodeButtonPatch,
    pub copy_button: CopyButtonPatch,
    pub rtl_button: RtlButtonPatch,
    pub sandbox_button: SandboxButtonPatch,
    pub framework_buttons: FrameworkButtonsPatch,
    pub preview: PreviewPatch,
    pub default_example: Option<String>,
}

impl ComponentPatch {
    fn apply_to(&self, into: &mut ShowcaseConfig) {
        self.show_code_button.apply_to(&mut into.show_code_button);
        self.copy_button.apply_to(&mut into.copy_button);
        self.rtl_button.apply_to(&mut into.rtl_button);
        self.sandbox_button.apply_to(&mut into.sandbox_button);
        self.framework_buttons.apply_to(&mut into.framework_buttons);
        self.preview.apply_to(&mut into.preview);
        if let Some(tag) = &self.default_example {
            into.default_example = Some(tag.clone());
        }
    }

    fn merge(self, over: Self) -> Self {
        Self {
            show_code_button: self.show_code_button.merge(over.show_code_button),
            copy_button: self.copy_button.merge(over.copy_button),
            rtl_button: self.rtl_button.merge(over.rtl_button),
            sandbox_button: self.sandbox_button.merge(over.sandbox_button),
            framework_buttons: self.framework_buttons.merge(over.framework_buttons),
            preview: self.preview.merge(over.preview),
            default_example: over.default_example.or(self.default_example),
        }
    }
}

/// One configuration layer. Missing fields fall through to the next layer.
#[derive(Clone, Default)]
pub struct ConfigPatch {
    pub component: ComponentPatch,
    pub hooks: Hooks,
}

impl ConfigPatch {
    pub fn apply_to(&self, into: &mut ShowcaseConfig) {
        self.component.apply_to(into);
        self.hooks.apply_to(&mut into.hooks);
    }

    /// Field-wise composition of two layers; `over` wins where it is set.
    pub fn merge(self, over: ConfigPatch) -> ConfigPatch {
        ConfigPatch {
            component: self.component.merge(over.component),
            hooks: self.hooks.merge(over.hooks),
        }
    }
}

/// Merges the three configuration layers into one effective snapshot.
pub fn resolve(
    defaults: ShowcaseConfig,
    registration: Option<&ConfigPatch>,
    instance: Option<&ConfigPatch>,
) -> ShowcaseConfig {
    let mut config = defaults;
    if let Some(patch) = registration {
        patch.apply_to(&mut config);
    }
    if let Some(patch) = instance {
        patch.apply_to(&mut config);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hide_show_code(hide: bool) -> ConfigPatch {
        ConfigPatch {
            component: ComponentPatch {
                show_code_button: ShowCodeButtonPatch::hidden(hide),
                ..ComponentPatch::default()
            },
            ..ConfigPatch::default()
        }
    }

    #[test]
    fn defaults_show_every_control() {
        let config = resolve(ShowcaseConfig::default(), None, None);
        assert!(!config.show_code_button.hide);
        assert!(!config.copy_button.hide);
        assert!(!config.rtl_button.hide);
        assert!(!config.sandbox_button.hide);
        assert!(!config.framework_buttons.hide);
        assert!(!config.preview.hide);
        assert_eq!(config.show_code_button.closed_label, "Show Code");
        assert_eq!(config.copy_button.copied_label, "Copied");
        assert_eq!(config.framework_buttons.label.for_framework("jsx"), "jsx");
        assert!(config.default_example.is_none());
    }

    #[test]
    fn instance_layer_wins_over_registration() {
        let registration = ConfigPatch {
            component: ComponentPatch {
                rtl_button: RtlButtonPatch {
                    hide: Some(true),
                    label: Some("Direction".to_string()),
                },
                ..ComponentPatch::default()
            },
            ..ConfigPatch::default()
        };
        let instance = ConfigPatch {
            component: ComponentPatch {
                rtl_button: RtlButtonPatch {
                    hide: Some(false),
                    label: None,
                },
                ..ComponentPatch::default()
            },
            ..ConfigPatch::default()
        };

        let config = resolve(
            ShowcaseConfig::default(),
            Some(&registration),
            Some(&instance),
        );
        assert!(!config.rtl_button.hide);
        // The label from the lower layer survives a partial override.
        assert_eq!(config.rtl_button.label, "Direction");
    }

    #[test]
    fn overriding_hide_keeps_sibling_labels_from_lower_layers() {
        let registration = ConfigPatch {
            component: ComponentPatch {
                show_code_button: ShowCodeButtonPatch {
                    opened_label: Some("Collapse".to_string()),
                    ..ShowCodeButtonPatch::default()
                },
                ..ComponentPatch::default()
            },
            ..ConfigPatch::default()
        };

        let config = resolve(
            ShowcaseConfig::default(),
            Some(&registration),
            Some(&hide_show_code(true)),
        );
        assert!(config.show_code_button.hide);
        assert_eq!(config.show_code_button.opened_label, "Collapse");
        assert_eq!(config.show_code_button.closed_label, "Show Code");
    }

    #[test]
    fn cumulative_merge_keeps_both_complementary_patches() {
        let first = ConfigPatch {
            component: ComponentPatch {
                copy_button: CopyButtonPatch {
                    label: Some("Yank".to_string()),
                    ..CopyButtonPatch::default()
                },
                ..ComponentPatch::default()
            },
            ..ConfigPatch::default()
        };
        let second = ConfigPatch {
            component: ComponentPatch {
                copy_button: CopyButtonPatch {
                    copied_label: Some("Yanked".to_string()),
                    ..CopyButtonPatch::default()
                },
                ..ComponentPatch::default()
            },
            ..ConfigPatch::default()
        };

        let merged = first.merge(second);
        let config = resolve(ShowcaseConfig::default(), None, Some(&merged));
        assert_eq!(config.copy_button.label, "Yank");
        assert_eq!(config.copy_button.copied_label, "Yanked");
    }

    #[test]
    fn repeated_identical_patches_are_idempotent() {
        let merged = hide_show_code(true)
            .merge(hide_show_code(true))
            .merge(hide_show_code(true));
        let config = resolve(ShowcaseConfig::default(), None, Some(&merged));
        assert!(config.show_code_button.hide);

        let restored = merged.merge(hide_show_code(false));
        let config = resolve(ShowcaseConfig::default(), None, Some(&restored));
        assert!(!config.show_code_button.hide);
    }

    #[test]
    fn re_resolving_does_not_retain_stale_values() {
        let instance = hide_show_code(true);
        let hidden = resolve(ShowcaseConfig::default(), None, Some(&instance));
        assert!(hidden.show_code_button.hide);

        // A second resolution without the instance layer starts from fresh
        // defaults rather than the previous merged snapshot.
        let plain = resolve(ShowcaseConfig::default(), None, None);
        assert!(!plain.show_code_button.hide);
    }

    #[test]
    fn derived_framework_labels_compute_from_the_tag() {
        let instance = ConfigPatch {
            component: ComponentPatch {
                framework_buttons: FrameworkButtonsPatch {
                    label: Some(FrameworkLabel::derive(|f| format!("Test Label {f}"))),
                    ..FrameworkButtonsPatch::default()
                },
                ..ComponentPatch::default()
            },
            ..ConfigPatch::default()
        };
        let config = resolve(ShowcaseConfig::default(), None, Some(&instance));
        assert_eq!(
            config.framework_buttons.label.for_framework("html"),
            "Test Label html"
        );
    }
}
