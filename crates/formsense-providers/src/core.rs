// ABOUTME: Core provider seams: video capture sources and landmark detection backends
// ABOUTME: Both traits are async and object-safe so hosts can swap implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Capture and detection seams.
//!
//! The engine never talks to a camera or a pose model directly; it consumes
//! a [`CaptureSource`] for frames and a [`LandmarkProvider`] for skeletons.
//! Both traits are `Send + Sync` and object-safe, so the session layer holds
//! them behind `Arc<dyn _>` and implementations can be swapped per platform
//! (native camera, browser media stream, the synthetic demo provider).

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;
use serde::{Deserialize, Serialize};

use formsense_core::errors::{CaptureError, ProviderError};
use formsense_core::models::Landmark;

/// Which camera a capture source should prefer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacingMode {
    /// Front-facing camera, the default for form coaching
    #[default]
    User,
    /// Rear-facing camera
    Environment,
}

/// Requested capture geometry and camera selection.
///
/// These are requests, not guarantees; a source may deliver the closest
/// mode its hardware supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConstraints {
    /// Requested frame width in pixels
    pub width: u32,
    /// Requested frame height in pixels
    pub height: u32,
    /// Preferred camera
    #[serde(default)]
    pub facing_mode: FacingMode,
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            facing_mode: FacingMode::User,
        }
    }
}

/// One captured frame handed to the landmark provider.
///
/// The pixel buffer is opaque to the engine and may be empty for sources
/// that do not materialize pixels (the synthetic provider ignores it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrame {
    /// Monotonic capture timestamp in microseconds
    pub timestamp_us: u64,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Raw pixel data in the source's native layout
    pub pixels: Vec<u8>,
}

/// Stream of captured frames; ends when the underlying source closes
pub type FrameStream = Pin<Box<dyn Stream<Item = Result<VideoFrame, CaptureError>> + Send>>;

/// A source of video frames (camera, file, synthetic generator)
#[async_trait]
pub trait CaptureSource: Send + Sync {
    /// Source name for logging (e.g. "camera", "synthetic")
    fn name(&self) -> &'static str;

    /// Open the source and start streaming frames.
    ///
    /// # Errors
    /// Returns [`CaptureError::PermissionDenied`] when the user refuses
    /// camera access and [`CaptureError::DeviceUnavailable`] when no device
    /// satisfies the constraints.
    async fn open(&self, constraints: &CaptureConstraints) -> Result<FrameStream, CaptureError>;

    /// Stop the device and release capture resources.
    ///
    /// Safe to call when the source was never opened. The default does
    /// nothing; sources whose device outlives the frame stream override it.
    async fn close(&self) {}
}

/// A pose-estimation backend that turns frames into landmark points
#[async_trait]
pub trait LandmarkProvider: Send + Sync {
    /// Provider name for logging (e.g. "mediapipe", "synthetic")
    fn name(&self) -> &'static str;

    /// Load models and warm up; called once before the first `detect`.
    ///
    /// # Errors
    /// Returns [`ProviderError::ModelLoad`] when the model cannot be loaded.
    async fn initialize(&self) -> Result<(), ProviderError>;

    /// Detect body landmarks in one frame.
    ///
    /// `Ok(None)` means no person was visible; the frame is skipped without
    /// producing an analysis. A complete detection is 33 points in standard
    /// pose-landmark order, but the engine treats the length as untrusted.
    ///
    /// # Errors
    /// Returns [`ProviderError::Inference`] when the model fails on this
    /// frame.
    async fn detect(&self, frame: &VideoFrame) -> Result<Option<Vec<Landmark>>, ProviderError>;

    /// Release model resources.
    ///
    /// Safe to call even if [`initialize`](Self::initialize) never ran or
    /// failed. The default does nothing; backends holding GPU buffers or
    /// model handles override it.
    async fn dispose(&self) {}
}
