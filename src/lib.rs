// Defensive programming lints - prevent panics and unsafe patterns
#![deny(clippy::indexing_slicing)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::fallible_impl_from)]
#![warn(clippy::wildcard_enum_match_arm)]
#![warn(clippy::fn_params_excessive_bools)]
// Idiomatic Rust lints
#![warn(clippy::needless_return)]
#![warn(clippy::let_and_return)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::explicit_iter_loop)]

//! A small selectable list menu for character-grid displays.
//!
//! The widget keeps a stack of labeled elements, moves a wraparound
//! selection over them and fires the selected element's activation.
//! Drawing goes through the [`display::Surface`] trait.

pub mod config;
pub mod display;
pub mod logging;
pub mod menu;

pub use display::{Canvas, Surface, paste_onto};
pub use menu::element::{
    Callback, CallbackElement, ElementFactory, ElementKind, ElementOptions, InvalidElementType,
    Kwargs, MenuElement, Number, NumericElement, Value,
};
pub use menu::{ListMenu, MenuBase, MenuSettings, Navigable, UsageWarning};
