// ABOUTME: Synthetic capture source and landmark provider for development and testing
// ABOUTME: Deterministic, seedable pose playback without cameras or ML models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! # Synthetic Provider
//!
//! A self-contained capture source and landmark provider for development,
//! CI, and demonstrations. Unlike real backends, the synthetic pair:
//!
//! - Requires no camera permission and loads no model
//! - Replays canonical reference poses deterministically
//! - Can inject seeded coordinate jitter and periodic detection dropouts
//!
//! Determinism matters here: two providers built with the same seed produce
//! byte-identical landmark sequences, which keeps session tests and demos
//! reproducible.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use formsense_core::errors::{CaptureError, ProviderError};
use formsense_core::models::{Landmark, LandmarkSet};
use formsense_core::reference_poses;

use crate::core::{CaptureConstraints, CaptureSource, FrameStream, LandmarkProvider, VideoFrame};

/// Default playback rate for the synthetic camera
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// Synthetic capture source emitting empty-pixel frames on a fixed cadence.
///
/// Timestamps are synthesized from the frame index, so they are strictly
/// monotonic regardless of scheduling jitter.
pub struct SyntheticCamera {
    frame_interval: Duration,
    interval_us: u64,
    frame_limit: Option<usize>,
}

impl SyntheticCamera {
    /// Camera ticking at the given frame rate (frames per second)
    #[must_use]
    pub fn new(frame_rate: u32) -> Self {
        let interval_us = 1_000_000 / u64::from(frame_rate.max(1));
        Self {
            frame_interval: Duration::from_micros(interval_us),
            interval_us,
            frame_limit: None,
        }
    }

    /// End the stream after the given number of frames; unlimited otherwise
    #[must_use]
    pub const fn with_frame_limit(mut self, frames: usize) -> Self {
        self.frame_limit = Some(frames);
        self
    }
}

impl Default for SyntheticCamera {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_RATE)
    }
}

#[async_trait]
impl CaptureSource for SyntheticCamera {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn open(&self, constraints: &CaptureConstraints) -> Result<FrameStream, CaptureError> {
        let interval = self.frame_interval;
        let interval_us = self.interval_us;
        let frame_limit = self
            .frame_limit
            .map(|limit| u64::try_from(limit).unwrap_or(u64::MAX));
        let (width, height) = (constraints.width, constraints.height);
        info!(width, height, "opening synthetic capture source");
        let stream = async_stream::stream! {
            let mut ticker = tokio::time::interval(interval);
            let mut index: u64 = 0;
            loop {
                if let Some(limit) = frame_limit {
                    if index >= limit {
                        break;
                    }
                }
                ticker.tick().await;
                yield Ok(VideoFrame {
                    timestamp_us: index * interval_us,
                    width,
                    height,
                    pixels: Vec::new(),
                });
                index += 1;
            }
        };
        Ok(Box::pin(stream))
    }
}

struct PlaybackState {
    cursor: usize,
    frames_seen: usize,
    rng: ChaCha8Rng,
}

/// Synthetic landmark provider replaying canonical reference poses.
///
/// Each `detect` call returns the next pose in the playback list, wrapping
/// around at the end. Optional seeded jitter perturbs every coordinate and
/// optional dropout returns `None` on a fixed cadence to exercise the
/// session's skip path.
pub struct SyntheticPoseProvider {
    poses: Vec<LandmarkSet>,
    jitter: f64,
    dropout_every: Option<usize>,
    state: Mutex<PlaybackState>,
}

impl SyntheticPoseProvider {
    /// Provider cycling through the given poses with the given seed
    #[must_use]
    pub fn cycling(poses: Vec<LandmarkSet>, seed: u64) -> Self {
        Self {
            poses,
            jitter: 0.0,
            dropout_every: None,
            state: Mutex::new(PlaybackState {
                cursor: 0,
                frames_seen: 0,
                rng: ChaCha8Rng::seed_from_u64(seed),
            }),
        }
    }

    /// Demo provider cycling through every textbook reference pose
    #[must_use]
    pub fn demo(seed: u64) -> Self {
        Self::cycling(
            vec![
                reference_poses::upright_standing(),
                reference_poses::deep_squat(),
                reference_poses::textbook_push_up(),
                reference_poses::forearm_plank(),
                reference_poses::forward_lunge(),
                reference_poses::jumping_jack_extended(),
                reference_poses::climber_stride(),
                reference_poses::high_knee_march(),
            ],
            seed,
        )
    }

    /// Perturb every coordinate by up to `magnitude` in each direction
    #[must_use]
    pub fn with_jitter(mut self, magnitude: f64) -> Self {
        self.jitter = magnitude;
        self
    }

    /// Report no person visible on every nth frame
    #[must_use]
    pub fn with_dropout_every(mut self, frames: usize) -> Self {
        self.dropout_every = Some(frames.max(1));
        self
    }

    fn next_points(&self) -> Result<Option<Vec<Landmark>>, ProviderError> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| ProviderError::inference("synthetic playback state poisoned"))?;
        state.frames_seen += 1;
        if let Some(every) = self.dropout_every {
            if state.frames_seen % every == 0 {
                return Ok(None);
            }
        }
        let Some(pose) = self.poses.get(state.cursor) else {
            return Ok(None);
        };
        state.cursor = (state.cursor + 1) % self.poses.len();
        let jitter = self.jitter;
        let points = pose
            .points()
            .iter()
            .map(|point| {
                if jitter > 0.0 {
                    Landmark::new(
                        point.x + state.rng.gen_range(-jitter..=jitter),
                        point.y + state.rng.gen_range(-jitter..=jitter),
                        point.z + state.rng.gen_range(-jitter..=jitter),
                    )
                } else {
                    *point
                }
            })
            .collect();
        Ok(Some(points))
    }
}

#[async_trait]
impl LandmarkProvider for SyntheticPoseProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn initialize(&self) -> Result<(), ProviderError> {
        info!(poses = self.poses.len(), "synthetic landmark provider ready");
        Ok(())
    }

    async fn detect(&self, _frame: &VideoFrame) -> Result<Option<Vec<Landmark>>, ProviderError> {
        self.next_points()
    }
}
