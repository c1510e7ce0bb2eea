// ABOUTME: Integration tests for the analysis session lifecycle
// ABOUTME: Lifecycle idempotency, failure propagation, timeouts, and the end-to-end frame scenario
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use formsense::{
    AnalysisSession, CaptureConstraints, CaptureError, CaptureSource, ExerciseLabel,
    FeedbackSeverity, FrameStream, Landmark, LandmarkProvider, ProviderError, SessionConfig,
    SessionError, SessionState, VideoFrame,
};
use formsense_core::reference_poses;
use formsense_providers::SyntheticPoseProvider;

/// Capture source that counts opens and emits a fixed number of frames
struct CountingCamera {
    opens: Arc<AtomicUsize>,
    frames: usize,
}

impl CountingCamera {
    fn new(frames: usize) -> (Self, Arc<AtomicUsize>) {
        let opens = Arc::new(AtomicUsize::new(0));
        (
            Self {
                opens: Arc::clone(&opens),
                frames,
            },
            opens,
        )
    }
}

#[async_trait]
impl CaptureSource for CountingCamera {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn open(&self, _constraints: &CaptureConstraints) -> Result<FrameStream, CaptureError> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        let frames = self.frames;
        let stream = async_stream::stream! {
            for index in 0..frames {
                tokio::time::sleep(Duration::from_millis(1)).await;
                yield Ok(VideoFrame {
                    timestamp_us: (index as u64) * 33_333,
                    width: 640,
                    height: 480,
                    pixels: Vec::new(),
                });
            }
        };
        Ok(Box::pin(stream))
    }
}

/// Provider replaying a fixed per-frame script, then reporting no person
struct ScriptedProvider {
    script: Mutex<VecDeque<Option<Vec<Landmark>>>>,
}

impl ScriptedProvider {
    fn new(script: Vec<Option<Vec<Landmark>>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

#[async_trait]
impl LandmarkProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn initialize(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn detect(&self, _frame: &VideoFrame) -> Result<Option<Vec<Landmark>>, ProviderError> {
        Ok(self.script.lock().unwrap().pop_front().flatten())
    }
}

/// Provider whose initialization always fails
struct BrokenModelProvider;

#[async_trait]
impl LandmarkProvider for BrokenModelProvider {
    fn name(&self) -> &'static str {
        "broken"
    }

    async fn initialize(&self) -> Result<(), ProviderError> {
        Err(ProviderError::model_load("asset fetch failed"))
    }

    async fn detect(&self, _frame: &VideoFrame) -> Result<Option<Vec<Landmark>>, ProviderError> {
        Ok(None)
    }
}

/// Capture source that parks inside `open` until released, so a test can
/// interleave other calls with a start that is still initializing
struct GatedCamera {
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

#[async_trait]
impl CaptureSource for GatedCamera {
    fn name(&self) -> &'static str {
        "gated"
    }

    async fn open(&self, _constraints: &CaptureConstraints) -> Result<FrameStream, CaptureError> {
        self.entered.notify_one();
        self.release.notified().await;
        let stream = async_stream::stream! {
            loop {
                tokio::time::sleep(Duration::from_millis(1)).await;
                yield Ok(VideoFrame {
                    timestamp_us: 0,
                    width: 640,
                    height: 480,
                    pixels: Vec::new(),
                });
            }
        };
        Ok(Box::pin(stream))
    }
}

/// Capture source that records explicit close calls
struct ClosingCamera {
    closes: Arc<AtomicUsize>,
    frames: usize,
}

#[async_trait]
impl CaptureSource for ClosingCamera {
    fn name(&self) -> &'static str {
        "closing"
    }

    async fn open(&self, _constraints: &CaptureConstraints) -> Result<FrameStream, CaptureError> {
        let frames = self.frames;
        let stream = async_stream::stream! {
            for index in 0..frames {
                tokio::time::sleep(Duration::from_millis(1)).await;
                yield Ok(VideoFrame {
                    timestamp_us: (index as u64) * 33_333,
                    width: 640,
                    height: 480,
                    pixels: Vec::new(),
                });
            }
        };
        Ok(Box::pin(stream))
    }

    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Provider that records dispose calls
struct ReleaseTrackingProvider {
    disposals: Arc<AtomicUsize>,
}

#[async_trait]
impl LandmarkProvider for ReleaseTrackingProvider {
    fn name(&self) -> &'static str {
        "release-tracking"
    }

    async fn initialize(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn detect(&self, _frame: &VideoFrame) -> Result<Option<Vec<Landmark>>, ProviderError> {
        Ok(Some(reference_poses::upright_standing().points().to_vec()))
    }

    async fn dispose(&self) {
        self.disposals.fetch_add(1, Ordering::SeqCst);
    }
}

/// Provider that never answers a detect call
struct HangingProvider;

#[async_trait]
impl LandmarkProvider for HangingProvider {
    fn name(&self) -> &'static str {
        "hanging"
    }

    async fn initialize(&self) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn detect(&self, _frame: &VideoFrame) -> Result<Option<Vec<Landmark>>, ProviderError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(None)
    }
}

async fn wait_for_state(session: &AnalysisSession, expected: SessionState) {
    for _ in 0..500 {
        if session.state() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    panic!("session never reached {expected:?}");
}

#[tokio::test]
async fn three_frame_scenario_produces_expected_analyses() {
    // Frame 1: nobody visible. Frame 2: bottom of a push-up.
    // Frame 3: a malformed 20-point detection.
    let push_up = reference_poses::textbook_push_up().points().to_vec();
    let partial = push_up[..20].to_vec();
    let (camera, _) = CountingCamera::new(3);
    let session = AnalysisSession::new(
        Arc::new(camera),
        Arc::new(ScriptedProvider::new(vec![
            None,
            Some(push_up),
            Some(partial),
        ])),
        SessionConfig::default(),
    );

    let mut analyses = session.start().await.unwrap();
    let mut received = Vec::new();
    while let Some(analysis) = analyses.recv().await {
        received.push(analysis);
    }

    // The skipped frame yields nothing; the other two arrive in order
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].detected_exercise, ExerciseLabel::PushUp);
    assert!((received[0].confidence - 0.9).abs() < f64::EPSILON);
    assert!(!received[0].feedback.is_empty());
    assert_eq!(received[1].detected_exercise, ExerciseLabel::Unknown);
    assert!(received[1].confidence.abs() < f64::EPSILON);
    assert_eq!(received[1].feedback.len(), 1);
    assert_eq!(received[1].feedback[0].title, "Get in Position");
    assert_eq!(received[1].feedback[0].severity, FeedbackSeverity::Warning);

    wait_for_state(&session, SessionState::Stopped).await;
}

#[tokio::test]
async fn start_while_running_is_rejected_without_reopening_capture() {
    let (camera, opens) = CountingCamera::new(1_000_000);
    let session = AnalysisSession::new(
        Arc::new(camera),
        Arc::new(SyntheticPoseProvider::demo(7)),
        SessionConfig::default(),
    );

    let _analyses = session.start().await.unwrap();
    assert_eq!(session.state(), SessionState::Running);

    let second = session.start().await;
    assert!(matches!(second, Err(SessionError::AlreadyStarted)));
    assert_eq!(opens.load(Ordering::SeqCst), 1);

    session.stop();
    wait_for_state(&session, SessionState::Stopped).await;
}

#[tokio::test]
async fn stop_is_idempotent_from_any_state() {
    let (camera, _) = CountingCamera::new(1_000_000);
    let session = AnalysisSession::new(
        Arc::new(camera),
        Arc::new(SyntheticPoseProvider::demo(7)),
        SessionConfig::default(),
    );

    // Stopping before ever starting must not panic
    session.stop();
    session.stop();

    let mut analyses = session.start().await.unwrap();
    session.stop();
    session.stop();
    wait_for_state(&session, SessionState::Stopped).await;
    // Loop exit drops the sender, closing the channel
    while analyses.recv().await.is_some() {}
}

#[tokio::test]
async fn stop_during_initialization_prevents_the_loop_from_starting() {
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let session = Arc::new(AnalysisSession::new(
        Arc::new(GatedCamera {
            entered: Arc::clone(&entered),
            release: Arc::clone(&release),
        }),
        Arc::new(SyntheticPoseProvider::demo(7)),
        SessionConfig::default(),
    ));

    let starter = tokio::spawn({
        let session = Arc::clone(&session);
        async move { session.start().await }
    });
    // Stop while start is parked inside the capture open call
    entered.notified().await;
    session.stop();
    release.notify_one();

    let mut analyses = starter.await.unwrap().unwrap();
    assert_eq!(session.state(), SessionState::Stopped);
    // No loop was spawned, so the channel is already closed
    assert_eq!(analyses.recv().await, None);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(session.state(), SessionState::Stopped);
}

#[tokio::test]
async fn loop_teardown_closes_capture_and_disposes_provider() {
    let closes = Arc::new(AtomicUsize::new(0));
    let disposals = Arc::new(AtomicUsize::new(0));
    let session = AnalysisSession::new(
        Arc::new(ClosingCamera {
            closes: Arc::clone(&closes),
            frames: 2,
        }),
        Arc::new(ReleaseTrackingProvider {
            disposals: Arc::clone(&disposals),
        }),
        SessionConfig::default(),
    );

    let mut analyses = session.start().await.unwrap();
    while analyses.recv().await.is_some() {}
    wait_for_state(&session, SessionState::Stopped).await;
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert_eq!(disposals.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn session_restarts_after_stop() {
    let (camera, opens) = CountingCamera::new(2);
    let session = AnalysisSession::new(
        Arc::new(camera),
        Arc::new(SyntheticPoseProvider::demo(7)),
        SessionConfig::default(),
    );

    let mut first = session.start().await.unwrap();
    while first.recv().await.is_some() {}
    wait_for_state(&session, SessionState::Stopped).await;

    let mut second = session.start().await.unwrap();
    while second.recv().await.is_some() {}
    assert_eq!(opens.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn failed_model_load_aborts_start_and_returns_to_idle() {
    let (camera, opens) = CountingCamera::new(3);
    let session = AnalysisSession::new(
        Arc::new(camera),
        Arc::new(BrokenModelProvider),
        SessionConfig::default(),
    );

    let result = session.start().await;
    assert!(matches!(
        result,
        Err(SessionError::Provider(ProviderError::ModelLoad { .. }))
    ));
    assert_eq!(session.state(), SessionState::Idle);
    // The capture device is never opened when the model fails to load
    assert_eq!(opens.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn detection_timeout_skips_frames_instead_of_stalling() {
    let (camera, _) = CountingCamera::new(2);
    let session = AnalysisSession::new(
        Arc::new(camera),
        Arc::new(HangingProvider),
        SessionConfig {
            provider_timeout: Some(Duration::from_millis(20)),
            ..SessionConfig::default()
        },
    );

    let mut analyses = session.start().await.unwrap();
    // Every detection times out, so the stream drains with no analyses
    let outcome = tokio::time::timeout(Duration::from_secs(5), analyses.recv()).await;
    assert_eq!(outcome.unwrap(), None);
    wait_for_state(&session, SessionState::Stopped).await;
}
