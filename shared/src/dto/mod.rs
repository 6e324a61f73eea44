//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the desktop client and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, and identity DTOs
//! - [`tweets`] - Tweet, compose/edit, and like/retweet toggle DTOs
//! - [`response`] - The optional `{success, issue, message, data}` envelope
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior), except the
//!   toggle payloads whose wire keys are camelCase
//! - **Optional fields**: Omitted when `None` using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ### Request/Response Pair
//!
//! ```text
//! POST /api/login
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": {
//!     "id": 1,
//!     "name": "Alice",
//!     "email": "alice@example.com"
//!   },
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
//! }
//! ```

pub mod auth;
pub mod response;
pub mod tweets;

pub use auth::*;
pub use response::*;
pub use tweets::*;
