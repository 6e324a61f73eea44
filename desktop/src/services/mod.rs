//! # External Service Integrations
//!
//! This module contains all external service integrations for the client.
//!
//! - **[`api`]**: Backend HTTP client (authentication, feed, tweet mutations)

pub mod api;
