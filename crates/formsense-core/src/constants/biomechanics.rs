// ABOUTME: Biomechanical threshold constants for exercise classification and form rules
// ABOUTME: Hand-tuned reference values; angles in degrees, distances in normalized coordinates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense

//! Biomechanical threshold constants.
//!
//! Angles are interior joint angles in degrees (`[0, 180]`). Distances are
//! deltas in normalized frame coordinates, so `0.05` reads as "5% of the
//! frame". The classifier cascade and every form rule pull their reference
//! values from here; nothing in the analysis path hard-codes a number.

/// Thresholds for the exercise classifier cascade predicates
pub mod classification {
    /// Torso verticality below this means the body is near-horizontal (prone)
    pub const HORIZONTAL_TORSO_MAX: f64 = 0.15;

    /// Torso verticality above this means the body is upright
    pub const VERTICAL_TORSO_MIN: f64 = 0.25;

    /// Push-up: wrists count as "near shoulder height" within this vertical delta
    pub const WRIST_SHOULDER_ALIGNMENT_MAX: f64 = 0.15;

    /// Plank: hips and shoulders count as co-planar within this vertical delta
    pub const HIP_SHOULDER_COPLANAR_MAX: f64 = 0.12;

    /// Plank: elbow must be bent tighter than this (forearm plank)
    pub const PLANK_ELBOW_ANGLE_MAX: f64 = 100.0;

    /// Squat and lunge: hip-knee-ankle angle flexed below this
    pub const FLEXED_KNEE_ANGLE_MAX: f64 = 130.0;

    /// Lunge: vertical knee-height asymmetry above this (split stance)
    pub const LUNGE_KNEE_ASYMMETRY_MIN: f64 = 0.1;

    /// Jumping jack: wrists must clear the shoulder line by this margin
    pub const JACK_WRIST_RAISE_MARGIN: f64 = 0.05;

    /// Jumping jack: horizontal ankle spread above this (legs apart)
    pub const JACK_ANKLE_SPREAD_MIN: f64 = 0.25;

    /// Mountain climber: knee asymmetry while horizontal, looser than the lunge
    pub const CLIMBER_KNEE_ASYMMETRY_MIN: f64 = 0.15;

    /// High knee: a knee must clear the hip line by this margin
    pub const HIGH_KNEE_RAISE_MARGIN: f64 = 0.05;

    /// Standing: hip-knee-ankle angle extended beyond this
    pub const STANDING_LEG_ANGLE_MIN: f64 = 160.0;
}

/// Heuristic confidence priors per cascade branch.
///
/// These are hand-tuned priors, not calibrated probabilities; their only job
/// is to rank how discriminative each predicate is.
pub mod confidence {
    /// Push-up branch prior
    pub const PUSH_UP_PRIOR: f64 = 0.9;
    /// Plank branch prior
    pub const PLANK_PRIOR: f64 = 0.85;
    /// Squat branch prior
    pub const SQUAT_PRIOR: f64 = 0.9;
    /// Lunge branch prior
    pub const LUNGE_PRIOR: f64 = 0.85;
    /// Jumping-jack branch prior
    pub const JUMPING_JACK_PRIOR: f64 = 0.8;
    /// Mountain-climber branch prior
    pub const MOUNTAIN_CLIMBER_PRIOR: f64 = 0.75;
    /// High-knee branch prior
    pub const HIGH_KNEE_PRIOR: f64 = 0.8;
    /// Standing branch prior
    pub const STANDING_PRIOR: f64 = 0.7;
    /// Fallback prior when no predicate matches
    pub const UNKNOWN_PRIOR: f64 = 0.5;
}

/// Squat form-rule thresholds
pub mod squat {
    /// Back angle (shoulder-hip-knee) good range lower bound
    pub const BACK_ANGLE_GOOD_MIN: f64 = 75.0;
    /// Back angle good range upper bound
    pub const BACK_ANGLE_GOOD_MAX: f64 = 105.0;
    /// Back angle warning band lower bound; below is an error
    pub const BACK_ANGLE_WARN_MIN: f64 = 60.0;
    /// Back angle warning band upper bound; above is an error
    pub const BACK_ANGLE_WARN_MAX: f64 = 120.0;

    /// Knee-over-toe horizontal delta good upper bound
    pub const KNEE_OVER_TOE_GOOD_MAX: f64 = 0.05;
    /// Knee-over-toe horizontal delta beyond this is an error
    pub const KNEE_OVER_TOE_ERROR_MIN: f64 = 0.1;

    /// Knee-below-hip depth for full depth
    pub const DEPTH_GOOD_MIN: f64 = 0.08;
    /// Knee-below-hip depth for moderate depth
    pub const DEPTH_MODERATE_MIN: f64 = 0.03;

    /// Left/right knee-angle difference considered symmetric (degrees)
    pub const SYMMETRY_GOOD_MAX: f64 = 10.0;
    /// Left/right knee-angle difference beyond this is an error (degrees)
    pub const SYMMETRY_ERROR_MIN: f64 = 20.0;
}

/// Push-up form-rule thresholds
pub mod push_up {
    /// Shoulder-hip-ankle body line angle for a straight plank line
    pub const BODY_LINE_GOOD_MIN: f64 = 160.0;
    /// Body line angle warning bound; below is an error (sagging or piking)
    pub const BODY_LINE_WARN_MIN: f64 = 145.0;

    /// Elbow angle at or below this is full depth
    pub const ELBOW_DEPTH_GOOD_MAX: f64 = 90.0;
    /// Elbow angle at or below this is moderate depth
    pub const ELBOW_DEPTH_MODERATE_MAX: f64 = 120.0;

    /// Horizontal wrist-shoulder offset for hands stacked under shoulders
    pub const HAND_SHOULDER_OFFSET_GOOD_MAX: f64 = 0.08;
    /// Horizontal wrist-shoulder offset beyond this is an error
    pub const HAND_SHOULDER_OFFSET_ERROR_MIN: f64 = 0.15;
}

/// Plank form-rule thresholds
pub mod plank {
    /// Shoulder-hip-ankle angle for a straight body line
    pub const BODY_LINE_GOOD_MIN: f64 = 165.0;
    /// Body line warning bound; below is an error
    pub const BODY_LINE_WARN_MIN: f64 = 150.0;

    /// Horizontal shoulder-elbow offset for shoulders stacked over the base
    pub const SHOULDER_STACK_OFFSET_GOOD_MAX: f64 = 0.08;
    /// Shoulder-elbow offset beyond this is an error
    pub const SHOULDER_STACK_OFFSET_ERROR_MIN: f64 = 0.15;
}

/// Lunge form-rule thresholds
pub mod lunge {
    /// Front-knee angle good range lower bound
    pub const FRONT_KNEE_GOOD_MIN: f64 = 80.0;
    /// Front-knee angle good range upper bound
    pub const FRONT_KNEE_GOOD_MAX: f64 = 100.0;
    /// Front-knee warning band lower bound; below is an error
    pub const FRONT_KNEE_WARN_MIN: f64 = 70.0;
    /// Front-knee warning band upper bound; above is a warning (too shallow)
    pub const FRONT_KNEE_WARN_MAX: f64 = 110.0;

    /// Front knee-over-toe horizontal delta good upper bound
    pub const KNEE_OVER_TOE_GOOD_MAX: f64 = 0.05;
    /// Front knee-over-toe delta beyond this is an error
    pub const KNEE_OVER_TOE_ERROR_MIN: f64 = 0.1;

    /// Torso lean from vertical considered upright (degrees)
    pub const TORSO_LEAN_GOOD_MAX: f64 = 15.0;
    /// Torso lean beyond this is an error (degrees)
    pub const TORSO_LEAN_ERROR_MIN: f64 = 30.0;
}

/// Jumping-jack form-rule thresholds
pub mod jumping_jack {
    /// Wrist-above-shoulder margin for full overhead extension
    pub const ARM_RAISE_GOOD_MARGIN: f64 = 0.1;
    /// Wrist-above-shoulder margin for partial extension
    pub const ARM_RAISE_PARTIAL_MARGIN: f64 = 0.0;

    /// Ankle spread for a full straddle
    pub const LEG_SPREAD_GOOD_MIN: f64 = 0.3;
    /// Ankle spread for a moderate straddle
    pub const LEG_SPREAD_MODERATE_MIN: f64 = 0.2;
}

/// Mountain-climber form-rule thresholds
pub mod mountain_climber {
    /// Hip sag (shoulder/hip vertical delta) kept within this is a stable base
    pub const HIP_SAG_GOOD_MAX: f64 = 0.06;
    /// Hip sag at or beyond this is an error; stays below the horizontal-body
    /// classification bound so the tier is reachable for classified climbers
    pub const HIP_SAG_ERROR_MIN: f64 = 0.12;

    /// Knee-height asymmetry for a full knee drive
    pub const KNEE_DRIVE_GOOD_MIN: f64 = 0.2;
    /// Knee-height asymmetry for a moderate knee drive
    pub const KNEE_DRIVE_MODERATE_MIN: f64 = 0.12;
}

/// High-knee form-rule thresholds
pub mod high_knee {
    /// Knee-above-hip margin for a full lift
    pub const KNEE_LIFT_GOOD_MIN: f64 = 0.1;
    /// Knee-above-hip margin for a moderate lift
    pub const KNEE_LIFT_MODERATE_MIN: f64 = 0.03;

    /// Torso lean from vertical considered upright (degrees)
    pub const POSTURE_LEAN_GOOD_MAX: f64 = 10.0;
    /// Torso lean beyond this is an error (degrees)
    pub const POSTURE_LEAN_ERROR_MIN: f64 = 25.0;
}
