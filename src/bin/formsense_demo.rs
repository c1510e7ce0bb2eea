// ABOUTME: Demo binary running an analysis session over the synthetic provider pair
// ABOUTME: Prints per-frame classifications and feedback until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Runs the full engine against the synthetic camera and pose provider and
//! prints each analysis as it arrives. Useful for eyeballing the pipeline
//! without a camera or model.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use formsense::{AnalysisSession, FeedbackSeverity, SessionConfig};
use formsense_providers::{SyntheticCamera, SyntheticPoseProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let session = AnalysisSession::new(
        Arc::new(SyntheticCamera::new(2)),
        Arc::new(SyntheticPoseProvider::demo(42).with_jitter(0.005)),
        SessionConfig::default(),
    );
    let mut analyses = session.start().await?;

    loop {
        tokio::select! {
            maybe = analyses.recv() => {
                let Some(analysis) = maybe else { break };
                println!(
                    "[{:>10}us] {} (confidence {:.2})",
                    analysis.timestamp_us,
                    analysis.detected_exercise.display_name(),
                    analysis.confidence,
                );
                for item in &analysis.feedback {
                    let tag = match item.severity {
                        FeedbackSeverity::Good => "ok",
                        FeedbackSeverity::Warning => "warn",
                        FeedbackSeverity::Error => "ERROR",
                    };
                    println!("    [{tag:>5}] {}: {}", item.title, item.message);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                session.stop();
                break;
            }
        }
    }
    Ok(())
}
