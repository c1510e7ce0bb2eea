// ABOUTME: Per-frame analysis pipeline: classify, evaluate form rules, bundle the result
// ABOUTME: Total over untrusted provider output; incomplete skeletons degrade, never fail
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Frame analyzer.
//!
//! Glues the classifier cascade and the form-rule strategies into a single
//! per-frame entry point. [`PoseAnalyzer::analyze_frame`] never fails: a
//! skeleton that is not a complete 33-point set produces a degraded
//! `Unknown` analysis with zero confidence instead of an error, so one bad
//! provider frame can never take down a session.

use formsense_core::models::{ExerciseLabel, Landmark, LandmarkSet, PoseAnalysis};
use tracing::{debug, warn};

use crate::classifier;
use crate::config::AnalysisConfig;
use crate::rules::{self, GenericRules};

/// Stateless per-frame analysis pipeline
#[derive(Debug, Clone, Default)]
pub struct PoseAnalyzer {
    config: AnalysisConfig,
}

impl PoseAnalyzer {
    /// Analyzer with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyzer with an explicit configuration
    #[must_use]
    pub const fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Analyze one frame's landmarks into a complete [`PoseAnalysis`].
    ///
    /// `timestamp_us` is the capture timestamp the analysis is stamped with;
    /// the analyzer itself keeps no clock and no history.
    #[must_use]
    pub fn analyze_frame(&self, timestamp_us: u64, points: Vec<Landmark>) -> PoseAnalysis {
        match LandmarkSet::from_points(points.clone()) {
            Ok(set) => self.analyze_complete(timestamp_us, points, &set),
            Err(err) => {
                warn!(
                    landmark_count = err.actual,
                    "incomplete landmark set, emitting degraded analysis"
                );
                PoseAnalysis {
                    timestamp_us,
                    landmarks: points,
                    feedback: vec![GenericRules::positioning_prompt()],
                    detected_exercise: ExerciseLabel::Unknown,
                    confidence: 0.0,
                }
            }
        }
    }

    fn analyze_complete(
        &self,
        timestamp_us: u64,
        points: Vec<Landmark>,
        set: &LandmarkSet,
    ) -> PoseAnalysis {
        let mut classification = classifier::classify(set);
        if let Some(floor) = self.config.min_confidence {
            if classification.confidence < floor {
                debug!(
                    label = classification.label.display_name(),
                    confidence = classification.confidence,
                    floor,
                    "classification below confidence floor, demoting to unknown"
                );
                classification.label = ExerciseLabel::Unknown;
            }
        }
        let feedback = rules::rule_set_for(classification.label).evaluate(set);
        PoseAnalysis {
            timestamp_us,
            landmarks: points,
            feedback,
            detected_exercise: classification.label,
            confidence: classification.confidence,
        }
    }
}
