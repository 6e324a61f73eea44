//! # Screen Renderers
//!
//! One module per top-level screen. Each exposes a `render` function that
//! draws from a state snapshot and forwards actions to the [`crate::app::App`]
//! handlers.

pub mod feed;
pub mod login;
pub mod register;
