// ABOUTME: Common benchmark utilities and pose fixtures for performance testing
// ABOUTME: Deterministic skeleton generators for reproducible Criterion measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Common benchmark utilities and pose fixtures.

pub mod fixtures;
