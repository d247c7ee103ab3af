//! Orientation classifier pipeline.
//!
//! [`OrientationClassifier`] owns the persistent orientation state and the
//! debounce window, and drives the per-sample flow: angle derivation ->
//! flat-zone gate -> transition table -> debounce -> subscriber dispatch.
//!
//! The classifier holds no locks and spawns no threads; processing a sample
//! takes `&mut self`, so exclusive access is enforced at the type level. A
//! host whose sensor facility delivers samples from multiple threads must
//! serialize delivery itself (one dispatch queue or an external mutex).

use crate::angles::ComputedAngles;
use crate::config::ClassifierConfig;
use crate::debounce::DebounceFilter;
use crate::error::Result;
use crate::transitions;
use crate::types::{GravitySample, Orientation, Platform};

/// Callback invoked with each confirmed `(orientation, rotation_z)` pair.
///
/// Fires on every confirmed sample, not only on change; consumers that want
/// edge-triggered behavior diff the orientation themselves.
pub type OrientationCallback = Box<dyn FnMut(Orientation, f32) + Send>;

/// Handle for a registered callback.
///
/// Cancellation is by identity via [`OrientationClassifier::unsubscribe`];
/// cancelling the same handle twice is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
}

struct Subscriber {
    id: u64,
    callback: OrientationCallback,
}

/// Gravity-stream orientation classifier.
pub struct OrientationClassifier {
    config: ClassifierConfig,
    orientation: Orientation,
    debounce: DebounceFilter,
    subscribers: Vec<Subscriber>,
    next_subscription_id: u64,
}

impl OrientationClassifier {
    /// Create a classifier with default tunables for a platform
    pub fn new(platform: Platform) -> Self {
        Self {
            config: ClassifierConfig::new(platform),
            orientation: Orientation::Top,
            debounce: DebounceFilter::new(),
            subscribers: Vec::new(),
            next_subscription_id: 0,
        }
    }

    /// Create a classifier from a full configuration.
    ///
    /// Fails with [`crate::Error::InvalidParameter`] when a tunable is out of
    /// range; the per-sample path never fails.
    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        log::info!(
            "orientation classifier configured: platform={} trigger={:.1} dead_zone={:.1}",
            config.platform.as_str(),
            config.rotation_trigger_angle,
            config.flat_dead_zone_angle
        );
        Ok(Self {
            config,
            orientation: Orientation::Top,
            debounce: DebounceFilter::new(),
            subscribers: Vec::new(),
            next_subscription_id: 0,
        })
    }

    /// Get the platform this classifier was built for
    pub fn platform(&self) -> Platform {
        self.config.platform
    }

    /// Current (raw, pre-debounce) orientation state
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Register a callback for confirmed classifications.
    ///
    /// The callback runs synchronously inside [`process`](Self::process).
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(Orientation, f32) + Send + 'static,
    ) -> Subscription {
        let id = self.next_subscription_id;
        self.next_subscription_id += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        log::debug!("subscription {} registered", id);
        Subscription { id }
    }

    /// Cancel a subscription.
    ///
    /// Idempotent: unknown or already-cancelled handles are ignored. Once
    /// this returns, no later sample invokes the callback.
    pub fn unsubscribe(&mut self, subscription: &Subscription) {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != subscription.id);
        if self.subscribers.len() < before {
            log::debug!("subscription {} cancelled", subscription.id);
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Process one gravity sample to completion.
    ///
    /// Returns `Some((orientation, rotation_z))` when the debounce window
    /// confirmed the classification (the same pair handed to subscribers),
    /// `None` when the sample was absorbed. Never fails: degenerate input
    /// (zero-magnitude vector) is treated as flat and suppressed.
    pub fn process(&mut self, sample: GravitySample) -> Option<(Orientation, f32)> {
        let angles = ComputedAngles::from_sample(&sample);

        if angles.is_flat(self.config.flat_dead_zone_angle) {
            // Rotation about z is unstable near the flat pole; hold the
            // previous orientation.
            log::trace!(
                "flat sample suppressed (tilt={:.1})",
                angles.tilt_forward_backward
            );
        } else {
            let next = transitions::next_orientation(
                self.config.platform,
                self.orientation,
                angles.rotation_z,
                self.config.rotation_trigger_angle,
            );
            if next != self.orientation {
                log::debug!(
                    "orientation {} -> {} (rotation_z={:.1})",
                    self.orientation.as_str(),
                    next.as_str(),
                    angles.rotation_z
                );
                self.orientation = next;
            }
        }

        if !self.debounce.push(self.orientation) {
            return None;
        }

        for subscriber in &mut self.subscribers {
            (subscriber.callback)(self.orientation, angles.rotation_z);
        }
        Some((self.orientation, angles.rotation_z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Gravity sample whose rotation-about-z angle is `deg`, in the screen
    /// plane (tilt 0, never flat).
    fn sample_at(deg: f32) -> GravitySample {
        let rad = deg.to_radians();
        GravitySample::new(rad.cos(), rad.sin(), 0.0)
    }

    #[test]
    fn test_initial_state_is_top() {
        let classifier = OrientationClassifier::new(Platform::Ios);
        assert_eq!(classifier.orientation(), Orientation::Top);
    }

    #[test]
    fn test_steady_state_emits_every_sample() {
        let mut classifier = OrientationClassifier::new(Platform::Ios);
        for _ in 0..5 {
            let emitted = classifier.process(sample_at(-90.0));
            assert_eq!(emitted.map(|(o, _)| o), Some(Orientation::Top));
        }
    }

    #[test]
    fn test_transition_confirmed_one_sample_later() {
        let mut classifier = OrientationClassifier::new(Platform::Ios);

        // Rotate to landscape right: raw state flips immediately, but the
        // debounce window withholds confirmation for one sample.
        let first = classifier.process(sample_at(-20.0));
        assert_eq!(classifier.orientation(), Orientation::Right);
        assert!(first.is_none());

        let second = classifier.process(sample_at(-20.0));
        assert_eq!(second.map(|(o, _)| o), Some(Orientation::Right));
    }

    #[test]
    fn test_flat_sample_retains_orientation() {
        let mut classifier = OrientationClassifier::new(Platform::Ios);
        classifier.process(sample_at(-20.0));
        classifier.process(sample_at(-20.0));
        assert_eq!(classifier.orientation(), Orientation::Right);

        // Face up: rotation_z would read 0 (inside the Top band on Android,
        // nonsense on iOS) but the flat gate holds Right.
        let emitted = classifier.process(GravitySample::new(0.0, 0.0, 1.0));
        assert_eq!(classifier.orientation(), Orientation::Right);
        assert_eq!(emitted.map(|(o, _)| o), Some(Orientation::Right));
    }

    #[test]
    fn test_degenerate_sample_treated_as_flat() {
        let mut classifier = OrientationClassifier::new(Platform::Ios);
        let emitted = classifier.process(GravitySample::new(0.0, 0.0, 0.0));
        assert_eq!(classifier.orientation(), Orientation::Top);
        assert!(emitted.is_some());
    }

    #[test]
    fn test_callback_receives_confirmed_pairs() {
        let mut classifier = OrientationClassifier::new(Platform::Ios);
        let seen: Arc<Mutex<Vec<(Orientation, f32)>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        classifier.subscribe(move |orientation, rotation_z| {
            sink.lock().unwrap().push((orientation, rotation_z));
        });

        classifier.process(sample_at(-20.0)); // raw Right, unconfirmed
        classifier.process(sample_at(-20.0)); // confirmed

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, Orientation::Right);
        assert!((seen[0].1 - -20.0).abs() < 1e-3);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut classifier = OrientationClassifier::new(Platform::Ios);
        let count = Arc::new(Mutex::new(0usize));

        let sink = Arc::clone(&count);
        let subscription = classifier.subscribe(move |_, _| {
            *sink.lock().unwrap() += 1;
        });

        classifier.process(sample_at(-90.0));
        assert_eq!(*count.lock().unwrap(), 1);

        classifier.unsubscribe(&subscription);
        classifier.process(sample_at(-90.0));
        classifier.process(sample_at(-90.0));
        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn test_double_unsubscribe_is_noop() {
        let mut classifier = OrientationClassifier::new(Platform::Ios);
        let subscription = classifier.subscribe(|_, _| {});
        assert_eq!(classifier.subscriber_count(), 1);

        classifier.unsubscribe(&subscription);
        classifier.unsubscribe(&subscription);
        assert_eq!(classifier.subscriber_count(), 0);
    }

    #[test]
    fn test_multiple_subscribers_all_notified() {
        let mut classifier = OrientationClassifier::new(Platform::Android);
        let a = Arc::new(Mutex::new(0usize));
        let b = Arc::new(Mutex::new(0usize));

        let sink_a = Arc::clone(&a);
        classifier.subscribe(move |_, _| *sink_a.lock().unwrap() += 1);
        let sink_b = Arc::clone(&b);
        classifier.subscribe(move |_, _| *sink_b.lock().unwrap() += 1);

        classifier.process(sample_at(90.0));
        assert_eq!(*a.lock().unwrap(), 1);
        assert_eq!(*b.lock().unwrap(), 1);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = ClassifierConfig::new(Platform::Ios);
        config.flat_dead_zone_angle = 120.0;
        assert!(OrientationClassifier::with_config(config).is_err());
    }
}
