//! `ratatui-showcase` renders interactive, multi-variant code example panels
//! for terminal UIs built on ratatui.
//!
//! A showcase panel presents one sample in several labeled framework
//! variants and gives the viewer a preview pane, a reveal-source toggle,
//! copy, an RTL preview flip, an open-in-sandbox action, and a keyboard
//! resizable preview width. The interaction model and the layered
//! configuration live in `ratatui-showcase-core` (re-exported here); this
//! crate adds the control surface.
//!
//! Useful entry points:
//! - [`view::ShowcaseView`]: the renderable control surface.
//! - [`showcase::Showcase`]: the interaction controller behind it.
//! - [`registry::Registry`]: tag-named variants with their own defaults.
//!
//! Clipboard, sandbox, previewing, and syntax highlighting are collaborator
//! traits the host implements; the widget only decides when to invoke them
//! and what to pass.
pub use ratatui_showcase_core::clipboard;
pub use ratatui_showcase_core::config;
pub use ratatui_showcase_core::example;
pub use ratatui_showcase_core::hooks;
pub use ratatui_showcase_core::input;
pub use ratatui_showcase_core::keymap;
pub use ratatui_showcase_core::registry;
pub use ratatui_showcase_core::sandbox;
pub use ratatui_showcase_core::showcase;

#[cfg(feature = "crossterm")]
pub use ratatui_showcase_core::crossterm_input;

pub mod highlight;
pub mod preview;
pub mod theme;
pub mod view;
