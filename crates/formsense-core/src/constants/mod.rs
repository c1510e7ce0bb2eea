// ABOUTME: Application constants for the FormSense engine organized by domain
// ABOUTME: Re-exports biomechanical threshold modules used by classification and rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Application-wide constants organized by domain.

/// Biomechanical thresholds for classification predicates and form rules
pub mod biomechanics;
