//! # User Action Handlers
//!
//! Handlers for UI interactions, organized by domain. Each handler runs on
//! the main thread, validates input under a short state lock, and spawns
//! any network work onto the Tokio runtime so the frame never blocks.

pub mod auth;
pub mod feed;
pub mod navigation;
