use crate::clipboard::Clipboard;
use crate::config::ConfigPatch;
use crate::config::ShowcaseConfig;
use crate::config::resolve;
use crate::example::Example;
use crate::example::ExampleSet;
use crate::sandbox::Sandbox;

/// Columns added or removed per resize keypress.
pub const RESIZE_STEP: u16 = 10;
/// Lower clamp for the preview width; the step arithmetic is otherwise
/// unclamped.
pub const MIN_PREVIEW_WIDTH: u16 = 20;
/// Preview width before the first resize.
pub const DEFAULT_PREVIEW_WIDTH: u16 = 80;

/// Live interaction state, mutated only by [`Showcase`] transitions.
///
/// `selected` is `None` exactly when the example set is empty; otherwise it
/// always names a language present in the set. Configuration changes never
/// touch this state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowcaseState {
    pub is_open: bool,
    pub selected: Option<String>,
    pub rtl: bool,
    pub max_width: u16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeDirection {
    Narrower,
    Wider,
}

/// The interaction controller: owns the examples, the resolved
/// configuration, and the live state, and applies the transition rules.
#[derive(Default)]
pub struct Showcase {
    examples: ExampleSet,
    registration: ConfigPatch,
    overrides: ConfigPatch,
    resolved: ShowcaseConfig,
    state: ShowcaseState,
    copied: bool,
    clipboard: Option<Box<dyn Clipboard>>,
    sandbox: Option<Box<dyn Sandbox>>,
}

impl std::fmt::Debug for Showcase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Showcase")
            .field("state", &self.state)
            .field("copied", &self.copied)
            .finish_non_exhaustive()
    }
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            is_open: false,
            selected: None,
            rtl: false,
            max_width: DEFAULT_PREVIEW_WIDTH,
        }
    }
}

impl Showcase {
    /// Builds a showcase from raw markdown with stock defaults.
    pub fn parse(markdown: &str) -> Self {
        Self::new(ExampleSet::parse(markdown), ConfigPatch::default())
    }

    /// Builds a showcase from a parsed example set and a registration-level
    /// configuration layer.
    pub fn new(examples: ExampleSet, registration: ConfigPatch) -> Self {
        let resolved = resolve(ShowcaseConfig::default(), Some(&registration), None);
        let selected = initial_selection(&examples, resolved.default_example.as_deref());
        Self {
            state: ShowcaseState {
                selected,
                ..ShowcaseState::default()
            },
            examples,
            registration,
            overrides: ConfigPatch::default(),
            resolved,
            copied: false,
            clipboard: None,
            sandbox: None,
        }
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.set_clipboard(clipboard);
        self
    }

    pub fn with_sandbox(mut self, sandbox: impl Sandbox + 'static) -> Self {
        self.set_sandbox(sandbox);
        self
    }

    pub fn set_clipboard(&mut self, clipboard: impl Clipboard + 'static) {
        self.clipboard = Some(Box::new(clipboard));
    }

    pub fn set_sandbox(&mut self, sandbox: impl Sandbox + 'static) {
        self.sandbox = Some(Box::new(sandbox));
    }

    pub fn examples(&self) -> &ExampleSet {
        &self.examples
    }

    /// The effective configuration, re-resolved on every override.
    pub fn config(&self) -> &ShowcaseConfig {
        &self.resolved
    }

    pub fn state(&self) -> &ShowcaseState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn selected_framework(&self) -> Option<&str> {
        self.state.selected.as_deref()
    }

    pub fn is_rtl(&self) -> bool {
        self.state.rtl
    }

    pub fn max_width(&self) -> u16 {
        self.state.max_width
    }

    pub fn current_example(&self) -> Option<&Example> {
        self.examples.get(self.state.selected.as_deref()?)
    }

    /// Whether the last transition was a successful copy; the control
    /// surface shows the copied label while this holds.
    pub fn just_copied(&self) -> bool {
        self.copied
    }

    /// Clears the copied marker, returning whether it was set.
    pub fn clear_copied(&mut self) -> bool {
        std::mem::take(&mut self.copied)
    }

    /// Merges `patch` into the cumulative instance layer and re-resolves.
    ///
    /// Live interaction state is untouched: a `default_example` change here
    /// applies to future constructions, not to the current selection.
    pub fn update_config(&mut self, patch: ConfigPatch) {
        self.overrides = std::mem::take(&mut self.overrides).merge(patch);
        self.resolved = resolve(
            ShowcaseConfig::default(),
            Some(&self.registration),
            Some(&self.overrides),
        );
    }

    /// Framework-selection controls render only for genuinely multi-variant
    /// sets; a single-language set suppresses them regardless of
    /// configuration.
    pub fn framework_tabs_visible(&self) -> bool {
        self.examples.has_multiple_frameworks() && !self.resolved.framework_buttons.hide
    }

    pub fn toggle_code(&mut self) {
        self.state.is_open = !self.state.is_open;
        self.resolved.hooks.fire_show_code(self.state.is_open);
    }

    /// Public entry point for the select-framework transition. Unknown tags
    /// and re-selection of the current tag are silent no-ops.
    pub fn set_language(&mut self, tag: &str) {
        if self.state.selected.as_deref() == Some(tag) {
            return;
        }
        if self.examples.get(tag).is_none() {
            return;
        }
        self.state.selected = Some(tag.to_string());
        self.resolved.hooks.fire_language_change(tag);
    }

    /// Copies the current source through the clipboard collaborator.
    /// `on_copy` fires only on success; failure is silent.
    pub fn copy_code(&mut self) -> bool {
        let Some(source) = self.current_example().map(|e| e.source.clone()) else {
            return false;
        };
        let Some(clipboard) = self.clipboard.as_mut() else {
            return false;
        };
        if clipboard.copy_text(&source).is_err() {
            return false;
        }
        self.copied = true;
        self.resolved.hooks.fire_copy();
        true
    }

    pub fn toggle_rtl(&mut self) {
        self.state.rtl = !self.state.rtl;
        self.resolved.hooks.fire_rtl(self.state.rtl);
    }

    /// Hands the current example to the sandbox collaborator.
    /// `on_sandbox_open` reports the request being sent, not a completed
    /// open, so it fires on invocation.
    pub fn open_sandbox(&mut self) {
        let Some(example) = self.current_example().cloned() else {
            return;
        };
        if let Some(sandbox) = self.sandbox.as_mut() {
            sandbox.open(&example);
        }
        self.resolved.hooks.fire_sandbox_open();
    }

    pub fn resize(&mut self, direction: ResizeDirection) {
        self.state.max_width = match direction {
            ResizeDirection::Wider => self.state.max_width.saturating_add(RESIZE_STEP),
            ResizeDirection::Narrower => self
                .state
                .max_width
                .saturating_sub(RESIZE_STEP)
                .max(MIN_PREVIEW_WIDTH),
        };
    }

    pub fn set_max_width(&mut self, width: u16) {
        self.state.max_width = width.max(MIN_PREVIEW_WIDTH);
    }
}

fn initial_selection(examples: &ExampleSet, default_example: Option<&str>) -> Option<String> {
    if let Some(tag) = default_example
        && examples.get(tag).is_some()
    {
        return Some(tag.to_string());
    }
    examples.first().map(|e| e.language.clone())
}
