// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Service**: Photo service endpoint and request timeout
//! - **Downloads**: Pacing between sequential downloads

// ==========================================================================
// Service Defaults
// ==========================================================================

/// Default base URL of the photo service.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// Timeout for a single HTTP request (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// ==========================================================================
// Download Defaults
// ==========================================================================

/// Default pause between two sequential photo downloads (milliseconds).
///
/// Applied between items, never after the last one, so a run over n photos
/// sleeps n - 1 times regardless of per-item outcomes.
pub const DEFAULT_PACING_MS: u64 = 300;

/// Minimum allowed pacing (no pause).
pub const MIN_PACING_MS: u64 = 0;

/// Maximum allowed pacing.
pub const MAX_PACING_MS: u64 = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS > 0);

    // Pacing validation
    assert!(MAX_PACING_MS >= MIN_PACING_MS);
    assert!(DEFAULT_PACING_MS >= MIN_PACING_MS);
    assert!(DEFAULT_PACING_MS <= MAX_PACING_MS);
};
