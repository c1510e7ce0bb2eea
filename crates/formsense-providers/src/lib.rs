// ABOUTME: Capture-source and landmark-provider seams for the FormSense engine
// ABOUTME: Core async traits plus the conditionally compiled synthetic implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

#![deny(unsafe_code)]

//! # FormSense Providers
//!
//! The engine's boundary to the outside world: [`CaptureSource`] yields
//! video frames, [`LandmarkProvider`] turns frames into skeleton points.
//! Platform backends (native camera, browser media pipeline) implement these
//! traits in host crates; this crate ships the trait definitions and a
//! deterministic synthetic implementation for development and CI.

// Re-export formsense-core error types so providers share one error surface
pub use formsense_core::errors;
pub use formsense_core::models;

/// Core capture and detection traits
pub mod core;

/// Deterministic synthetic capture source and landmark provider
#[cfg(feature = "provider-synthetic")]
pub mod synthetic_provider;

pub use self::core::{
    CaptureConstraints, CaptureSource, FacingMode, FrameStream, LandmarkProvider, VideoFrame,
};
#[cfg(feature = "provider-synthetic")]
pub use synthetic_provider::{SyntheticCamera, SyntheticPoseProvider, DEFAULT_FRAME_RATE};
