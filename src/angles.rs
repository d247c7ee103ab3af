//! Angle derivation from raw gravity samples.
//!
//! A [`GravitySample`] deterministically yields three angles in degrees:
//! rotation about the screen normal (the angle the transition tables consume),
//! forward/backward tilt (the flat-zone gate input), and left/right pan. All
//! three are recomputed from scratch every sample; nothing is carried over.

use crate::types::GravitySample;

/// Angles derived from a single gravity sample, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedAngles {
    /// Rotation about the axis perpendicular to the screen, `(-180, 180]`.
    pub rotation_z: f32,

    /// Tilt towards/away from the user, `[-90, 90]`. Reported as `90` for a
    /// degenerate (zero-magnitude) sample so the flat gate suppresses it.
    pub tilt_forward_backward: f32,

    /// Pan about the long screen axis, `(-180, 180]`.
    pub pan_left_right: f32,
}

impl ComputedAngles {
    /// Derive all three angles from a gravity sample.
    pub fn from_sample(sample: &GravitySample) -> Self {
        let r = sample.magnitude();

        let rotation_z = sample.y.atan2(sample.x).to_degrees();
        let pan_left_right = sample.z.atan2(sample.x).to_degrees();

        // r == 0 means free-fall or a sensor dropout; rotation_z is
        // meaningless there, so report the flat pole and let the dead-zone
        // gate hold the previous orientation.
        let tilt_forward_backward = if r == 0.0 {
            90.0
        } else {
            (sample.z / r).clamp(-1.0, 1.0).acos().to_degrees() - 90.0
        };

        Self {
            rotation_z,
            tilt_forward_backward,
            pan_left_right,
        }
    }

    /// Flat-zone predicate: true when the device lies roughly face up or
    /// face down and rotation about z is numerically unstable.
    pub fn is_flat(&self, flat_dead_zone_deg: f32) -> bool {
        self.tilt_forward_backward.abs() > flat_dead_zone_deg
    }
}
