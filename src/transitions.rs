//! Per-platform orientation transition tables.
//!
//! Each `(platform, orientation)` pair maps to a fixed, ordered list of
//! guards over the rotation-about-z angle. The first guard whose condition
//! holds names the next orientation; when none match the state is kept.
//!
//! Thresholds sit a hysteresis offset beyond the nominal boundary angles
//! (45 and 135 degrees and their negatives), so a device resting exactly on
//! a boundary has to rotate past it before the classification changes.
//!
//! The two platforms report the rotation axis with opposite polarity, so the
//! Android table is the iOS table with states relabeled under the mirror
//! `Top<->Down`, `Left<->Right`. The guard thresholds themselves are shared.

use crate::types::{Orientation, Platform};

/// Sign gate applied before the threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SignGate {
    /// Only negative rotation angles can match
    Negative,
    /// Only positive rotation angles can match
    Positive,
    /// No sign constraint
    Any,
}

/// Threshold comparison direction.
///
/// The hysteresis offset always widens the boundary in the direction that
/// makes the guard harder to satisfy: `Above` tests `angle > base + trigger`
/// and `Below` tests `angle < base - trigger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Above,
    Below,
}

/// A single transition guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guard {
    sign: SignGate,
    edge: Edge,
    base_deg: f32,
    next: Orientation,
}

impl Guard {
    const fn new(sign: SignGate, edge: Edge, base_deg: f32, next: Orientation) -> Self {
        Self {
            sign,
            edge,
            base_deg,
            next,
        }
    }

    /// Orientation entered when this guard matches.
    pub fn next(&self) -> Orientation {
        self.next
    }

    /// Evaluate against a rotation angle with the given hysteresis offset.
    pub fn matches(&self, rotation_z: f32, trigger_deg: f32) -> bool {
        let sign_ok = match self.sign {
            SignGate::Negative => rotation_z < 0.0,
            SignGate::Positive => rotation_z > 0.0,
            SignGate::Any => true,
        };
        if !sign_ok {
            return false;
        }
        match self.edge {
            Edge::Above => rotation_z > self.base_deg + trigger_deg,
            Edge::Below => rotation_z < self.base_deg - trigger_deg,
        }
    }
}

use Edge::{Above, Below};
use Orientation::{Down, Left, Right, Top};
use SignGate::{Any, Negative, Positive};

static IOS_TOP: [Guard; 2] = [
    Guard::new(Negative, Above, -45.0, Right),
    Guard::new(Negative, Below, -135.0, Left),
];
static IOS_DOWN: [Guard; 2] = [
    Guard::new(Positive, Above, 135.0, Left),
    Guard::new(Positive, Below, 45.0, Right),
];
static IOS_LEFT: [Guard; 2] = [
    Guard::new(Positive, Below, 135.0, Down),
    Guard::new(Negative, Above, -135.0, Top),
];
static IOS_RIGHT: [Guard; 2] = [
    Guard::new(Any, Above, 45.0, Down),
    Guard::new(Any, Below, -45.0, Top),
];

static ANDROID_TOP: [Guard; 2] = [
    Guard::new(Positive, Above, 135.0, Right),
    Guard::new(Positive, Below, 45.0, Left),
];
static ANDROID_DOWN: [Guard; 2] = [
    Guard::new(Negative, Above, -45.0, Left),
    Guard::new(Negative, Below, -135.0, Right),
];
static ANDROID_LEFT: [Guard; 2] = [
    Guard::new(Any, Above, 45.0, Top),
    Guard::new(Any, Below, -45.0, Down),
];
static ANDROID_RIGHT: [Guard; 2] = [
    Guard::new(Positive, Below, 135.0, Top),
    Guard::new(Negative, Above, -135.0, Down),
];

/// Get the ordered guard list for a `(platform, orientation)` pair.
pub fn guards(platform: Platform, current: Orientation) -> &'static [Guard] {
    match (platform, current) {
        (Platform::Ios, Top) => &IOS_TOP,
        (Platform::Ios, Down) => &IOS_DOWN,
        (Platform::Ios, Left) => &IOS_LEFT,
        (Platform::Ios, Right) => &IOS_RIGHT,
        (Platform::Android, Top) => &ANDROID_TOP,
        (Platform::Android, Down) => &ANDROID_DOWN,
        (Platform::Android, Left) => &ANDROID_LEFT,
        (Platform::Android, Right) => &ANDROID_RIGHT,
    }
}

/// Apply the transition table for one sample.
///
/// First matching guard wins; no match keeps the current orientation.
pub fn next_orientation(
    platform: Platform,
    current: Orientation,
    rotation_z: f32,
    trigger_deg: f32,
) -> Orientation {
    guards(platform, current)
        .iter()
        .find(|guard| guard.matches(rotation_z, trigger_deg))
        .map(|guard| guard.next)
        .unwrap_or(current)
}
