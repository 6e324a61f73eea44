//! Route gating between the auth screens and the feed.
//!
//! Every screen change (and every frame, once the session is resolved)
//! funnels through [`resolve`], so there is exactly one place that decides
//! what an unauthenticated or authenticated viewer may see.

use crate::app::state::Screen;

/// Map a requested screen to the one the viewer is allowed to see.
///
/// Unauthenticated viewers asking for a protected screen land on Login.
/// Authenticated viewers asking for an auth screen land on Feed. Everything
/// else passes through unchanged.
pub fn resolve(requested: Screen, authenticated: bool) -> Screen {
    if requested.requires_auth() && !authenticated {
        return Screen::Login;
    }
    if requested.auth_only() && authenticated {
        return Screen::Feed;
    }
    requested
}

/// Screen to show once the startup session probe has settled.
pub fn entry_screen(authenticated: bool) -> Screen {
    if authenticated {
        Screen::Feed
    } else {
        Screen::Login
    }
}
