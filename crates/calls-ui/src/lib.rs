#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Calls UI icon components.
//! This crate holds the Yew icon atoms used by the calls widget plus the inline style model they accept.

pub mod components;
pub mod style;

pub use components::icons::{UnraisedHandIcon, UnraisedHandIconProps};
pub use style::{InlineStyle, StyleError, StyleValue};

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
