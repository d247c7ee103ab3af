//! DishaOrient - device orientation classification from gravity samples
//!
//! Classifies a continuous stream of 3-axis gravity-vector samples into one
//! of four discrete device orientations (top/down/left/right) plus a
//! continuous rotation angle, so a dependent UI surface (e.g. a video view)
//! can counter-rotate itself without relying on the OS orientation lock.
//!
//! Per-sample pipeline: angle derivation -> flat-zone gate -> hysteretic
//! per-platform transition table -> single-sample debounce -> subscriber
//! callbacks. Processing is synchronous and O(1); the classifier holds no
//! locks and spawns no threads.
//!
//! ## Example
//!
//! ```
//! use disha_orient::{GravitySample, OrientationClassifier, Platform};
//!
//! let mut classifier = OrientationClassifier::new(Platform::Ios);
//! let subscription = classifier.subscribe(|orientation, rotation_z| {
//!     println!("{} at {:.1} degrees", orientation.as_str(), rotation_z);
//! });
//!
//! // Device held in landscape-right: gravity at -20 degrees in the screen plane.
//! classifier.process(GravitySample::new(0.94, -0.34, 0.0));
//! classifier.process(GravitySample::new(0.94, -0.34, 0.0));
//!
//! classifier.unsubscribe(&subscription);
//! ```

pub mod angles;
pub mod classifier;
pub mod config;
pub mod debounce;
pub mod error;
pub mod transitions;
pub mod types;

// Re-export commonly used types
pub use classifier::{OrientationClassifier, Subscription};
pub use config::ClassifierConfig;
pub use error::{Error, Result};
pub use types::{GravitySample, Orientation, Platform};
