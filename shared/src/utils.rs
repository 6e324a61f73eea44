//! # Shared Utility Functions
//!
//! Display helpers used by the desktop client (and any future web client).
//!
//! ## Identity Display
//!
//! - [`author_initial`] - First letter of a display name, for avatar badges
//!
//! ## Timestamp Formatting
//!
//! - [`format_timestamp`] - Human-readable tweet timestamp
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::author_initial;
//!
//! assert_eq!(author_initial("alice"), "A");
//! ```

use chrono::{DateTime, Utc};

/// First letter of a display name, uppercased, for avatar badges.
///
/// Falls back to `"?"` for an empty or whitespace-only name.
///
/// # Examples
///
/// ```rust
/// use shared::utils::author_initial;
///
/// assert_eq!(author_initial("alice"), "A");
/// assert_eq!(author_initial("Bob Smith"), "B");
/// assert_eq!(author_initial(""), "?");
/// ```
pub fn author_initial(name: &str) -> String {
    match name.trim().chars().next() {
        Some(first) => first.to_uppercase().collect(),
        None => "?".to_string(),
    }
}

/// Format a tweet timestamp for display, e.g. `"Jan 1, 2024, 14:30"`.
///
/// # Examples
///
/// ```rust
/// use chrono::{DateTime, Utc};
/// use shared::utils::format_timestamp;
///
/// let ts = DateTime::parse_from_rfc3339("2024-01-01T14:30:00Z")
///     .unwrap()
///     .with_timezone(&Utc);
/// assert_eq!(format_timestamp(&ts), "Jan 1, 2024, 14:30");
/// ```
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%b %-d, %Y, %H:%M").to_string()
}
