// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # `r3bl_list_prompt`
//!
//! An interactive single-select list prompt for CLI apps. You hand it a list of
//! choices, some of which may be disabled or act as separators, and it lets the user
//! move a pointer with the arrow keys (or click with the mouse) and returns the value of
//! the chosen entry.
//!
//! ```text
//! ? Pick a fruit  (Use arrow keys)
//!  ❯ Apple
//!    Banana
//!    - Cherry (out of season)
//!
//! Page 1 of 2
//! ```
//!
//! There are two layers:
//!
//! 1. The [`Catalog`] normalizer turns heterogeneous [`Choice`] descriptors (plain
//!    labels, `name`/`value`/`disabled` records, separators) into a uniform list of
//!    [`Entry`] rows and finds the first selectable one.
//! 2. The [`SelectionEngine`] owns the highlight and the current page. It is driven
//!    by one [`PromptEvent`] at a time and renders the current page into a list of
//!    [`Fragment`]s (text spans tagged with a [`FragmentRole`]).
//!
//! Everything else (painting fragments with `crossterm`, reading raw input, raw mode)
//! is a thin collaborator around the engine: see [`SelectComponent`],
//! [`enter_event_loop_sync`], and the one-call [`select_from_list`] API.
//!
//! ## Use it as a library
//!
//! ```no_run
//! use r3bl_list_prompt::{select_from_list, Choice, ChoiceItem, PromptConfig};
//!
//! fn main() -> miette::Result<()> {
//!     let choices = vec![
//!         Choice::from("Apple"),
//!         Choice::separator(),
//!         ChoiceItem::new("Banana").with_value("banana-42").into(),
//!         ChoiceItem::new("Cherry").with_disabled("out of season").into(),
//!     ];
//!     let config = PromptConfig {
//!         message: "Pick a fruit".into(),
//!         page_size: 2,
//!         ..Default::default()
//!     };
//!     let value = select_from_list(config, Some(choices))?;
//!     println!("{value}");
//!     Ok(())
//! }
//! ```
//!
//! ## Use it as a binary
//!
//! The `lp` binary reads one choice per line from `stdin` (or a JSON array of choices
//! with `--json`) and prints the chosen value to `stdout`.
//!
//! ```shell
//! ls -1 | lp --message "Open which file?" --page-size 10
//! echo '["a", {"separator": "--"}, {"name": "b", "disabled": "nope"}, "c"]' | lp -j
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod catalog;
pub mod choice;
pub mod config;
pub mod constants;
pub mod decl_macros;
pub mod engine;
pub mod error;
pub mod event;
pub mod fragment;
pub mod function_component;
pub mod header;
pub mod pagination;
pub mod public_api;
pub mod render;
pub mod session;
pub mod style;
pub mod term;
pub mod test_utils;
pub mod tracing_setup;

// Re-export.
pub use catalog::*;
pub use choice::*;
pub use config::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use fragment::*;
pub use function_component::*;
pub use header::*;
pub use pagination::*;
pub use public_api::*;
pub use render::*;
pub use session::*;
pub use style::*;
pub use term::*;
pub use test_utils::*;
pub use tracing_setup::*;

/// Flip this on to get verbose navigation and render traces in the log file.
pub const DEVELOPMENT_MODE: bool = false;
