// ABOUTME: Acquisition and loop controller: owns capture, drives detect-classify-evaluate
// ABOUTME: Explicit atomic state machine with liveness checks at every await boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Analysis session lifecycle.
//!
//! [`AnalysisSession`] is the only stateful, side-effecting component of the
//! engine. It owns the capture stream and the landmark provider, drives the
//! per-frame detect → classify → evaluate cycle, and pushes each
//! [`PoseAnalysis`] to the consumer over a bounded channel.
//!
//! The lifecycle is an explicit state machine held in one atomic:
//! `Idle → Initializing → Running → Stopped`, with `Stopped` restartable.
//! Cancellation is cooperative: the loop samples the state at the top of
//! each iteration and again after every await, so a stop request takes
//! effect before the next frame is processed and no dangling iteration can
//! run after teardown. The transition into `Running` is a compare-exchange
//! from `Initializing`, so a stop that lands mid-start is never overwritten.
//! Teardown always closes the capture source and disposes the provider.
//! Backpressure is structural - at most one detection
//! call is in flight, because the loop awaits each round-trip before
//! touching the next frame.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, info, warn};
use uuid::Uuid;

use formsense_core::errors::{ProviderError, SessionError};
use formsense_core::models::PoseAnalysis;
use formsense_intelligence::PoseAnalyzer;
use formsense_providers::{CaptureSource, FrameStream, LandmarkProvider};

use crate::config::SessionConfig;

/// Lifecycle states of an analysis session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session activity; ready to start
    Idle,
    /// Start requested; acquiring the capture stream and loading the model
    Initializing,
    /// Per-frame loop is live
    Running,
    /// Loop has exited and the capture device is released; restartable
    Stopped,
}

impl SessionState {
    /// Convert from atomic u8 representation
    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Initializing,
            2 => Self::Running,
            3 => Self::Stopped,
            _ => Self::Idle,
        }
    }

    /// Convert to atomic u8 representation
    const fn to_u8(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Initializing => 1,
            Self::Running => 2,
            Self::Stopped => 3,
        }
    }
}

/// The acquisition and loop controller.
///
/// Holds the capture source and landmark provider behind trait objects so
/// platform backends and the synthetic pair are interchangeable. One
/// session drives at most one loop at a time; [`AnalysisSession::start`]
/// rejects reentry while initializing or running, and
/// [`AnalysisSession::stop`] is idempotent from any state.
pub struct AnalysisSession {
    session_id: Uuid,
    capture: Arc<dyn CaptureSource>,
    provider: Arc<dyn LandmarkProvider>,
    config: SessionConfig,
    state: Arc<AtomicU8>,
}

impl AnalysisSession {
    /// Create a session over the given capture source and landmark provider
    #[must_use]
    pub fn new(
        capture: Arc<dyn CaptureSource>,
        provider: Arc<dyn LandmarkProvider>,
        config: SessionConfig,
    ) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            capture,
            provider,
            config,
            state: Arc::new(AtomicU8::new(SessionState::Idle.to_u8())),
        }
    }

    /// Unique identifier of this session, for log correlation
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.session_id
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> SessionState {
        SessionState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Start the session and return the analysis channel.
    ///
    /// Initializes the landmark provider, opens the capture source, then
    /// spawns the per-frame loop. Each produced [`PoseAnalysis`] is pushed
    /// to the returned receiver; when the consumer falls behind the channel
    /// bound, new analyses are dropped until it catches up.
    ///
    /// A [`stop`](Self::stop) that lands while initialization is still in
    /// flight wins: the opened resources are released, no loop is spawned,
    /// and the returned channel is already closed.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::AlreadyStarted`] while initializing or
    /// running. Provider and capture failures abort the start sequence,
    /// leave the session in `Idle`, and are returned to the caller.
    pub async fn start(&self) -> Result<mpsc::Receiver<PoseAnalysis>, SessionError> {
        self.begin_initializing()?;
        info!(
            session_id = %self.session_id,
            provider = self.provider.name(),
            capture = self.capture.name(),
            "starting analysis session"
        );

        if let Err(err) = self.provider.initialize().await {
            self.provider.dispose().await;
            self.state
                .store(SessionState::Idle.to_u8(), Ordering::Release);
            warn!(session_id = %self.session_id, error = %err, "provider initialization failed");
            return Err(err.into());
        }
        let frames = match self.capture.open(&self.config.constraints).await {
            Ok(frames) => frames,
            Err(err) => {
                self.provider.dispose().await;
                self.state
                    .store(SessionState::Idle.to_u8(), Ordering::Release);
                warn!(session_id = %self.session_id, error = %err, "capture open failed");
                return Err(err.into());
            }
        };

        let (tx, rx) = mpsc::channel(self.config.channel_capacity.max(1));
        // Only `stop` can move the state away from Initializing here; when
        // it has, honor the stop instead of going live.
        if self
            .state
            .compare_exchange(
                SessionState::Initializing.to_u8(),
                SessionState::Running.to_u8(),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_err()
        {
            drop(frames);
            self.capture.close().await;
            self.provider.dispose().await;
            info!(session_id = %self.session_id, "stopped during initialization, loop not spawned");
            return Ok(rx);
        }
        tokio::spawn(run_loop(LoopContext {
            session_id: self.session_id,
            state: Arc::clone(&self.state),
            capture: Arc::clone(&self.capture),
            provider: Arc::clone(&self.provider),
            analyzer: PoseAnalyzer::with_config(self.config.analysis.clone()),
            provider_timeout: self.config.provider_timeout,
            frames,
            tx,
        }));
        Ok(rx)
    }

    /// Request the loop to stop.
    ///
    /// Takes effect at the next iteration boundary; the loop then closes
    /// the capture source and disposes the provider. A stop during
    /// initialization prevents the loop from ever starting. Safe to call
    /// repeatedly and from teardown paths regardless of the current state.
    pub fn stop(&self) {
        let previous = self
            .state
            .swap(SessionState::Stopped.to_u8(), Ordering::AcqRel);
        if SessionState::from_u8(previous) == SessionState::Running {
            info!(session_id = %self.session_id, "stop requested");
        }
    }

    /// Move `Idle` or `Stopped` into `Initializing`, rejecting reentry
    fn begin_initializing(&self) -> Result<(), SessionError> {
        for from in [SessionState::Idle, SessionState::Stopped] {
            if self
                .state
                .compare_exchange(
                    from.to_u8(),
                    SessionState::Initializing.to_u8(),
                    Ordering::AcqRel,
                    Ordering::Acquire,
                )
                .is_ok()
            {
                return Ok(());
            }
        }
        Err(SessionError::AlreadyStarted)
    }
}

struct LoopContext {
    session_id: Uuid,
    state: Arc<AtomicU8>,
    capture: Arc<dyn CaptureSource>,
    provider: Arc<dyn LandmarkProvider>,
    analyzer: PoseAnalyzer,
    provider_timeout: Option<Duration>,
    frames: FrameStream,
    tx: mpsc::Sender<PoseAnalysis>,
}

fn is_running(state: &AtomicU8) -> bool {
    SessionState::from_u8(state.load(Ordering::Acquire)) == SessionState::Running
}

/// The per-frame loop: one in-flight detection at a time, liveness checked
/// at the top of each iteration and after every await.
async fn run_loop(mut ctx: LoopContext) {
    while is_running(&ctx.state) {
        let Some(next) = ctx.frames.next().await else {
            info!(session_id = %ctx.session_id, "capture stream ended");
            break;
        };
        let frame = match next {
            Ok(frame) => frame,
            Err(err) => {
                warn!(session_id = %ctx.session_id, error = %err, "capture stream failed");
                break;
            }
        };
        if !is_running(&ctx.state) {
            break;
        }

        let detection = if let Some(budget) = ctx.provider_timeout {
            match tokio::time::timeout(budget, ctx.provider.detect(&frame)).await {
                Ok(result) => result,
                Err(_) => Err(ProviderError::Timeout {
                    timeout_ms: u64::try_from(budget.as_millis()).unwrap_or(u64::MAX),
                }),
            }
        } else {
            ctx.provider.detect(&frame).await
        };
        if !is_running(&ctx.state) {
            break;
        }

        match detection {
            Ok(Some(points)) => {
                let analysis = ctx.analyzer.analyze_frame(frame.timestamp_us, points);
                match ctx.tx.try_send(analysis) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        debug!(session_id = %ctx.session_id, "consumer behind, dropping analysis");
                    }
                    Err(TrySendError::Closed(_)) => {
                        info!(session_id = %ctx.session_id, "consumer gone, stopping session");
                        break;
                    }
                }
            }
            Ok(None) => {
                debug!(session_id = %ctx.session_id, "no pose detected, skipping frame");
            }
            Err(err) => {
                warn!(
                    session_id = %ctx.session_id,
                    error = %err,
                    "detection failed, skipping frame"
                );
            }
        }
    }
    drop(ctx.frames);
    ctx.capture.close().await;
    ctx.provider.dispose().await;
    ctx.state
        .store(SessionState::Stopped.to_u8(), Ordering::Release);
    info!(session_id = %ctx.session_id, "session loop exited");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trips_through_u8() {
        for state in [
            SessionState::Idle,
            SessionState::Initializing,
            SessionState::Running,
            SessionState::Stopped,
        ] {
            assert_eq!(SessionState::from_u8(state.to_u8()), state);
        }
    }

    #[test]
    fn unknown_discriminants_read_as_idle() {
        assert_eq!(SessionState::from_u8(250), SessionState::Idle);
    }
}
