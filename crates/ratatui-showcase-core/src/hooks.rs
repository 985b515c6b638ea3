use std::sync::Arc;

pub type ShowCodeHook = Arc<dyn Fn(bool) + Send + Sync>;
pub type CopyHook = Arc<dyn Fn() + Send + Sync>;
pub type RtlHook = Arc<dyn Fn(bool) + Send + Sync>;
pub type SandboxOpenHook = Arc<dyn Fn() + Send + Sync>;
pub type LanguageChangeHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Optional callbacks fired after each user-visible state change.
///
/// The hook set is closed, so this is a record of typed slots rather than a
/// generic event emitter. Every slot doubles as its own configuration patch:
/// merging keeps the later non-empty slot. Dispatch is synchronous and
/// happens after the state mutation it reports, so a hook always observes
/// the post-transition value it is passed.
#[derive(Clone, Default)]
pub struct Hooks {
    pub on_show_code: Option<ShowCodeHook>,
    pub on_copy: Option<CopyHook>,
    pub on_rtl: Option<RtlHook>,
    pub on_sandbox_open: Option<SandboxOpenHook>,
    pub on_language_change: Option<LanguageChangeHook>,
}

impl Hooks {
    pub fn merge(self, over: Hooks) -> Hooks {
        Hooks {
            on_show_code: over.on_show_code.or(self.on_show_code),
            on_copy: over.on_copy.or(self.on_copy),
            on_rtl: over.on_rtl.or(self.on_rtl),
            on_sandbox_open: over.on_sandbox_open.or(self.on_sandbox_open),
            on_language_change: over.on_language_change.or(self.on_language_change),
        }
    }

    pub(crate) fn apply_to(&self, into: &mut Hooks) {
        if let Some(h) = &self.on_show_code {
            into.on_show_code = Some(h.clone());
        }
        if let Some(h) = &self.on_copy {
            into.on_copy = Some(h.clone());
        }
        if let Some(h) = &self.on_rtl {
            into.on_rtl = Some(h.clone());
        }
        if let Some(h) = &self.on_sandbox_open {
            into.on_sandbox_open = Some(h.clone());
        }
        if let Some(h) = &self.on_language_change {
            into.on_language_change = Some(h.clone());
        }
    }

    pub(crate) fn fire_show_code(&self, is_open: bool) {
        if let Some(h) = &self.on_show_code {
            h(is_open);
        }
    }

    pub(crate) fn fire_copy(&self) {
        if let Some(h) = &self.on_copy {
            h();
        }
    }

    pub(crate) fn fire_rtl(&self, rtl: bool) {
        if let Some(h) = &self.on_rtl {
            h(rtl);
        }
    }

    pub(crate) fn fire_sandbox_open(&self) {
        if let Some(h) = &self.on_sandbox_open {
            h();
        }
    }

    pub(crate) fn fire_language_change(&self, language: &str) {
        if let Some(h) = &self.on_language_change {
            h(language);
        }
    }
}
