//! Core data types for orientation classification

use serde::{Deserialize, Serialize};

/// A single gravity-vector sample in the device's local frame.
///
/// Components are in units of standard gravity, so the magnitude is roughly
/// 1.0 for a device at rest. Samples are transient: each one is consumed by
/// the classifier and never retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravitySample {
    /// X component (across the screen, device local frame)
    pub x: f32,
    /// Y component (along the screen, device local frame)
    pub y: f32,
    /// Z component (out of the screen, device local frame)
    pub z: f32,
}

impl GravitySample {
    /// Create a new gravity sample
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Get the vector magnitude
    pub fn magnitude(&self) -> f32 {
        (self.x.powi(2) + self.y.powi(2) + self.z.powi(2)).sqrt()
    }
}

/// Mobile platform that produces the gravity stream.
///
/// The two platforms report the rotation axis with opposite polarity, so each
/// selects its own transition table. Fixed per classifier instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// iOS gravity convention
    Ios,
    /// Android gravity convention (rotation axis mirrored relative to iOS)
    Android,
}

impl Platform {
    /// Convert to string for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }
}

/// Discrete device orientation.
///
/// Persistent classifier state; starts at `Top` and is only mutated by the
/// transition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Upright portrait (home indicator at the bottom)
    #[default]
    Top,

    /// Upside-down portrait
    Down,

    /// Landscape, top of the device pointing left
    Left,

    /// Landscape, top of the device pointing right
    Right,
}

impl Orientation {
    /// Convert to string for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Top => "top",
            Orientation::Down => "down",
            Orientation::Left => "left",
            Orientation::Right => "right",
        }
    }

    /// Fixed counter-rotation a consumer applies to keep its surface upright.
    ///
    /// Returns degrees: `Top` 0, `Left` 90, `Down` 180, `Right` -90.
    pub fn counter_rotation_degrees(&self) -> f32 {
        match self {
            Orientation::Top => 0.0,
            Orientation::Left => 90.0,
            Orientation::Down => 180.0,
            Orientation::Right => -90.0,
        }
    }
}
