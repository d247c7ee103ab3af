//! Single-sample debounce of raw classifications.

use crate::types::Orientation;

/// Depth-2 FIFO over the raw classification stream.
///
/// A classification is confirmed only when it equals the previous one: a
/// one-sample glitch is never reported, and a real change is confirmed one
/// sample after it happens. The window always holds exactly two entries and
/// starts as `[Top, Top]`.
#[derive(Debug, Clone)]
pub struct DebounceFilter {
    window: [Orientation; 2],
}

impl DebounceFilter {
    /// Create a filter primed with the initial orientation
    pub fn new() -> Self {
        Self {
            window: [Orientation::Top; 2],
        }
    }

    /// Push the newest raw classification, dropping the oldest entry.
    ///
    /// Returns `true` when both entries agree (classification confirmed).
    pub fn push(&mut self, orientation: Orientation) -> bool {
        self.window[0] = self.window[1];
        self.window[1] = orientation;
        self.window[0] == self.window[1]
    }

    /// Current window contents, oldest first
    pub fn window(&self) -> [Orientation; 2] {
        self.window
    }
}

impl Default for DebounceFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation::{Right, Top};

    #[test]
    fn test_initial_window_agrees() {
        let filter = DebounceFilter::new();
        assert_eq!(filter.window(), [Top, Top]);
    }

    #[test]
    fn test_steady_state_keeps_firing() {
        let mut filter = DebounceFilter::new();
        assert!(filter.push(Top));
        assert!(filter.push(Top));
    }

    #[test]
    fn test_single_glitch_suppressed() {
        let mut filter = DebounceFilter::new();
        assert!(!filter.push(Right));
        assert!(!filter.push(Top));
        assert!(filter.push(Top));
    }

    #[test]
    fn test_confirmation_on_second_sample() {
        // The sequence from the classifier contract: [Right, Top, Right,
        // Right] fires only on the fourth push.
        let mut filter = DebounceFilter::new();
        assert!(!filter.push(Right));
        assert!(!filter.push(Top));
        assert!(!filter.push(Right));
        assert!(filter.push(Right));
        assert_eq!(filter.window(), [Right, Right]);
    }
}
