//! Application configuration.
//!
//! Centralized configuration for the AutoCaption frontend.
//! Workflow limits (file size, media types, defaults) live in
//! [`autocaption::config`].

/// Caption server base URL.
///
/// Empty: the frontend is served by the caption server itself, so every
/// request is same-origin and carries the session cookie.
pub const BACKEND_URL: &str = "";

/// Application name shown in the header and page title.
pub const APP_NAME: &str = "AutoCaption";

/// Pause on the finished progress bar before showing results (ms).
pub const RESULTS_REVEAL_DELAY_MS: u32 = 500;

/// Pause on the auth success alert before navigating (ms).
pub const AUTH_REDIRECT_DELAY_MS: u32 = 1000;

/// Auth error alerts disappear after this long (ms).
pub const ALERT_DISMISS_MS: u32 = 5000;

/// Server-side logout route (not handled by the client router).
pub const LOGOUT_URL: &str = "/auth/logout";
