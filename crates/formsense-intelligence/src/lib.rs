// ABOUTME: Pose analysis algorithms for the FormSense engine
// ABOUTME: Geometric primitives, the exercise classifier cascade, and per-exercise form rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

#![deny(unsafe_code)]

//! # FormSense Intelligence
//!
//! The analysis layer of the FormSense engine: stateless geometric
//! primitives, the first-match-wins exercise classifier cascade, per-exercise
//! form-rule strategies, and the [`PoseAnalyzer`] pipeline that ties them
//! together per frame.
//!
//! Everything here is pure and synchronous. Frame acquisition, pacing, and
//! delivery live in the session layer; this crate only turns one skeleton
//! into one [`formsense_core::PoseAnalysis`].

/// Frame analysis pipeline combining classification and form rules
pub mod analyzer;

/// Exercise classifier cascade
pub mod classifier;

/// Analyzer configuration
pub mod config;

/// Stateless geometric primitives over landmarks
pub mod geometry;

/// Per-exercise form-rule strategies
pub mod rules;

pub use analyzer::PoseAnalyzer;
pub use classifier::{classify, classify_points, Classification};
pub use config::AnalysisConfig;
pub use rules::{rule_set_for, FormRuleSet};
