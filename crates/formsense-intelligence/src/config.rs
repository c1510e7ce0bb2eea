// ABOUTME: Tunable knobs for the frame analyzer
// ABOUTME: Serde-backed so host applications can persist and ship presets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

use serde::{Deserialize, Serialize};

/// Analyzer configuration.
///
/// The defaults run the full cascade unfiltered, which is the right behavior
/// for interactive sessions; hosts that only care about confident
/// classifications can set a floor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Classifications below this confidence are demoted to `Unknown` and
    /// receive the generic positioning prompt. `None` disables the floor.
    #[serde(default)]
    pub min_confidence: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_confidence_floor() {
        assert_eq!(AnalysisConfig::default().min_confidence, None);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: AnalysisConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }
}
