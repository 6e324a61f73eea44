//! # Remote Resource Cache
//!
//! Stale-while-revalidate bookkeeping for data fetched from the backend.
//!
//! Each logical resource (the feed list, the current-user probe) is tracked
//! by a [`Resource`]: last-known data, the latest fetch error, whether a
//! fetch is in flight, and whether the data is stale. The type encodes the
//! rules the rest of the app relies on:
//!
//! - A new resource is born stale, so its first observation fetches.
//! - Fetches are claimed through [`Resource::begin_fetch`]. While one is
//!   outstanding the claim fails, so back-to-back observers share a single
//!   request instead of firing duplicates.
//! - Claiming clears the stale flag. An [`Resource::invalidate`] that lands
//!   *while* a fetch is in flight re-raises it, so the invalidation survives
//!   that fetch's resolution and schedules another pass.
//! - A failed fetch keeps last-known data visible next to the error rather
//!   than blanking the view, and does not auto-retry; the resource stays
//!   settled until invalidated again.
//! - [`Resource::patch`] transforms cached data in place, synchronously,
//!   with no round trip. Used by the like/retweet toggles.
//!
//! All mutation happens inside the frame tick on the UI thread (under the
//! state lock), so cache writes never interleave mid-update.

use std::collections::HashSet;

use shared::dto::tweets::Tweet;

/// Cached state of one remotely fetched resource.
#[derive(Debug, Clone)]
pub struct Resource<T> {
    data: Option<T>,
    error: Option<String>,
    fetching: bool,
    stale: bool,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            fetching: false,
            stale: true,
        }
    }
}

impl<T> Resource<T> {
    /// Last-known data, also exposed during background refreshes.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Message from the most recent failed fetch, cleared by a success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// First load only: a fetch is running and there is nothing to show yet.
    /// A refetch with data present is a background refresh and renders the
    /// existing data instead of a loading state.
    pub fn is_loading(&self) -> bool {
        self.fetching && self.data.is_none()
    }

    /// True when an observer should schedule a fetch this frame.
    pub fn needs_fetch(&self) -> bool {
        self.stale && !self.fetching
    }

    /// Claim the in-flight slot. Fails while a fetch is already running
    /// (concurrent observers share that one) or when the data is current.
    #[must_use]
    pub fn begin_fetch(&mut self) -> bool {
        if !self.needs_fetch() {
            return false;
        }

        self.fetching = true;
        self.stale = false;
        true
    }

    /// Install the outcome of the claimed fetch.
    ///
    /// An error keeps the previous data. The stale flag is deliberately left
    /// alone: it is false unless someone invalidated mid-flight.
    pub fn resolve(&mut self, result: Result<T, String>) {
        self.fetching = false;
        match result {
            Ok(value) => {
                self.data = Some(value);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    /// Mark the data stale; the next observation refetches.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Transform cached data in place. No-op when nothing is cached.
    pub fn patch(&mut self, update: impl FnOnce(&mut T)) {
        if let Some(data) = self.data.as_mut() {
            update(data);
        }
    }

    /// Drop the resource entirely (data, error, and claims). Used on logout.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Drop duplicate tweet ids, keeping the first occurrence in server order.
/// The feed is a list, not a set, but ids must stay unique across installs.
pub(crate) fn dedup_by_id(tweets: Vec<Tweet>) -> Vec<Tweet> {
    let mut seen = HashSet::new();
    tweets.into_iter().filter(|t| seen.insert(t.id)).collect()
}
