//! `ratatui-showcase-core` is the model layer of the showcase widget: everything
//! that has state and rules, and nothing that draws.
//!
//! A showcase presents one code sample in several labeled framework variants
//! (say, plain markup next to a component-framework rendition) and lets the
//! viewer reveal the source, switch variants, copy, flip the preview to RTL,
//! hand the sample to an external sandbox, and resize the preview pane.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - No async runtime: every transition runs to completion on the caller's
//!   thread before the next input is processed.
//! - External effects are app-controlled: clipboard and sandbox access go
//!   through the narrow traits in [`clipboard`] and [`sandbox`], and the
//!   widget only decides when to invoke them and what to pass.
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `ratatui-showcase`, which adds
//! the rendering surface. Use this crate directly if you only need the
//! interaction model.
//!
//! Useful entry points:
//! - [`showcase::Showcase`]: the interaction controller owning the live state.
//! - [`example::ExampleSet`]: fenced-code-block parsing into labeled examples.
//! - [`config::ConfigPatch`]: partial configuration layers and their merge.
//! - [`registry::Registry`]: tag-named widget variants with their own defaults.
pub mod clipboard;
pub mod config;
pub mod example;
pub mod hooks;
pub mod input;
pub mod keymap;
pub mod registry;
pub mod sandbox;
pub mod showcase;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;
