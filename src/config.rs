// ABOUTME: Session-level configuration: capture constraints, channel sizing, timeouts
// ABOUTME: Serde-backed with conservative defaults tuned for interactive coaching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

use std::time::Duration;

use serde::{Deserialize, Serialize};

use formsense_intelligence::AnalysisConfig;
use formsense_providers::CaptureConstraints;

/// Default bound on the analysis channel between the session and the UI
pub const DEFAULT_CHANNEL_CAPACITY: usize = 8;

/// Configuration for one analysis session.
///
/// Defaults open the front camera at VGA, run the analyzer unfiltered, and
/// impose no per-frame detection timeout, matching the reference behavior
/// where a hung provider stalls the loop rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Capture geometry and camera selection passed to the capture source
    #[serde(default)]
    pub constraints: CaptureConstraints,

    /// Bound of the analysis channel to the consumer. When the consumer
    /// falls behind, new analyses are dropped until it catches up.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,

    /// Optional per-frame budget for one landmark detection call. `None`
    /// lets a slow provider stall the loop instead of timing out.
    #[serde(default)]
    pub provider_timeout: Option<Duration>,

    /// Analyzer configuration forwarded to the analysis pipeline
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

const fn default_channel_capacity() -> usize {
    DEFAULT_CHANNEL_CAPACITY
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            constraints: CaptureConstraints::default(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            provider_timeout: None,
            analysis: AnalysisConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_impose_no_timeout() {
        let config = SessionConfig::default();
        assert_eq!(config.provider_timeout, None);
        assert_eq!(config.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
        assert_eq!(config.analysis.min_confidence, None);
    }

    #[test]
    fn empty_json_deserializes_to_defaults() {
        let config: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
    }
}
