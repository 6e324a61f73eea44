//! # MiniTweet Desktop - Library Root
//!
//! A **native desktop client** for the MiniTweet micro-blogging service.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Session Persistence**: Sign in once, resume on the next launch
//! - **Tweet Feed**: Cached feed with background refresh
//! - **Composing**: Post, edit, and delete tweets with live length feedback
//! - **Reactions**: Like and retweet with instant cache updates
//! - **Native GUI Window**: egui immediate-mode rendering
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              desktop (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  egui          - Immediate-mode GUI framework          │
//! │  eframe        - Native window framework               │
//! │  egui-notify   - Toast notifications                   │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (bearer token)
//!          ▼
//! ┌─────────────────┐
//! │  MiniTweet API  │
//! │  (REST backend) │
//! └─────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Application state and screen management
//!   - Core orchestrator of the GUI
//!   - Event-driven architecture with async tasks
//!   - Cached resources with stale-while-revalidate refresh
//!
//! - **session**: Persistent sign-in state
//!   - Bearer token plus cached user identity
//!   - Saved to a JSON file after every change
//!
//! - **services**: External integrations
//!   - `api`: Backend HTTP client (authentication, tweets, reactions)
//!
//! - **ui**: Rendering framework
//!   - `screens`: Screen-specific rendering (login, register, feed)
//!   - `widgets`: Custom UI components
//!   - `theme`: Color palette and styling
//!
//! - **core**: Error taxonomy and the `ApiService` trait
//! - **config**: Environment-based configuration
//! - **logging**: `tracing` setup with file rotation
//! - **utils**: Tokio runtime holder and input validation
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (state, events, handlers, tasks)
//!   │   ├── services::api (HTTP requests)
//!   │   └── session (token persistence)
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (login, register, feed)
//!       ├── widgets::* (tweet cards, forms, nav bar, toasts)
//!       └── theme (colors, styles)
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! The application uses **async channels** for communication:
//! - Main thread: Handles input and rendering (single-threaded)
//! - Async tasks: Network requests (multi-threaded)
//!
//! Events flow from async tasks back to the main thread via the `AppEvent`
//! enum and are applied in arrival order, so the newest server response
//! always wins.
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`:
//! - **Thread-safe**: Multiple readers, exclusive writers
//! - **Shared**: Accessible from async tasks
//! - **Locked briefly**: Minimize contention, drop locks immediately
//!
//! ### Screen System
//!
//! Three screens with a route gate in front:
//! 1. **Login**: Sign-in form
//! 2. **Register**: Account creation form
//! 3. **Feed**: Compose box and tweet timeline (authenticated only)
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin minitweet
//! ```
//!
//! ## Testing
//!
//! Run all tests:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Run specific module tests:
//! ```bash
//! cargo test --lib app::cache::tests
//! cargo test --lib session::tests
//! ```

// Re-export main modules for testing and integration
pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod services;
pub mod session;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use core::{ApiError, ApiService, Result};
pub use session::SessionStore;
