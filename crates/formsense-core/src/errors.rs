// ABOUTME: Unified error handling for the FormSense engine
// ABOUTME: Domain-specific capture/provider/session errors plus the EngineError umbrella
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! # Unified Error Handling System
//!
//! Domain-specific error types for the three fallible seams of the engine:
//!
//! - [`CaptureError`] - the video capture device could not be opened
//! - [`ProviderError`] - the landmark provider failed to initialize or run
//! - [`SessionError`] - lifecycle failures of the acquisition loop
//!
//! All initialization failures are fatal to the current session and are
//! surfaced to the caller; per-frame "no pose detected" results are normal
//! `None` values and never travel through these types.

use thiserror::Error;

/// Convenience alias for engine-level results
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors opening or operating the video capture device.
#[derive(Debug, Clone, Error)]
pub enum CaptureError {
    /// The user or platform denied camera access
    #[error("camera permission denied")]
    PermissionDenied,

    /// No usable capture device was found or the device is busy
    #[error("capture device unavailable: {details}")]
    DeviceUnavailable {
        /// Platform-specific failure details
        details: String,
    },

    /// The device was opened but stopped delivering frames
    #[error("capture stream ended unexpectedly")]
    StreamEnded,
}

impl CaptureError {
    /// Create a `DeviceUnavailable` error
    #[must_use]
    pub fn device_unavailable(details: impl Into<String>) -> Self {
        Self::DeviceUnavailable {
            details: details.into(),
        }
    }
}

/// Errors from the pose-estimation landmark provider.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Model assets could not be loaded or the runtime failed to initialize
    #[error("landmark model failed to load: {details}")]
    ModelLoad {
        /// Provider-specific failure details
        details: String,
    },

    /// A detect call failed in a way that is not "no body found"
    #[error("landmark inference failed: {details}")]
    Inference {
        /// Provider-specific failure details
        details: String,
    },

    /// A detect call exceeded the configured per-frame timeout
    #[error("landmark inference timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },
}

impl ProviderError {
    /// Create a `ModelLoad` error
    #[must_use]
    pub fn model_load(details: impl Into<String>) -> Self {
        Self::ModelLoad {
            details: details.into(),
        }
    }

    /// Create an `Inference` error
    #[must_use]
    pub fn inference(details: impl Into<String>) -> Self {
        Self::Inference {
            details: details.into(),
        }
    }
}

/// Lifecycle errors of the acquisition and loop controller.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Capture device failed during session start
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// Landmark provider failed during session start
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Start was requested while the session was initializing or running
    #[error("session already started")]
    AlreadyStarted,

    /// The analysis consumer hung up before the session stopped
    #[error("analysis channel closed by consumer")]
    ConsumerGone,
}

/// Umbrella error for callers that do not care which seam failed.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Capture device error
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// Landmark provider error
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Session lifecycle error
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_errors_render_details() {
        let err = CaptureError::device_unavailable("no camera at index 0");
        assert_eq!(
            err.to_string(),
            "capture device unavailable: no camera at index 0"
        );
        assert_eq!(
            CaptureError::PermissionDenied.to_string(),
            "camera permission denied"
        );
    }

    #[test]
    fn session_error_wraps_provider_transparently() {
        let err = SessionError::from(ProviderError::model_load("asset fetch failed"));
        assert_eq!(
            err.to_string(),
            "landmark model failed to load: asset fetch failed"
        );
    }

    #[test]
    fn timeout_reports_configured_budget() {
        let err = ProviderError::Timeout { timeout_ms: 250 };
        assert_eq!(err.to_string(), "landmark inference timed out after 250ms");
    }
}
