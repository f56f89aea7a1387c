//! App Configuration
//!
//! Compile-time settings: storage keys, simulated delays, branding.

use std::time::Duration;

pub const BRAND_NAME: &str = "WhatsApp Business";

// ========================
// Storage Keys
// ========================

/// Session storage key holding the auth flag
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Value written on simulated login
pub const AUTH_TOKEN_VALUE: &str = "dummy-token";

/// Local storage keys for the developer settings
pub const API_KEY_KEY: &str = "apiKey";
pub const WEBHOOK_URL_KEY: &str = "webhookUrl";
pub const WEBHOOK_SECRET_KEY: &str = "webhookSecret";

// ========================
// Simulated Delays
// ========================

pub const LOGIN_DELAY: Duration = Duration::from_millis(1000);
pub const LOGOUT_DELAY: Duration = Duration::from_millis(1000);
/// "Go to Dashboard" / "Back to Website" transitions
pub const REDIRECT_DELAY: Duration = Duration::from_millis(500);
/// How long the "Copied!" feedback stays visible
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Log level passed to console_log at startup
pub const LOG_LEVEL: log::Level = log::Level::Debug;
