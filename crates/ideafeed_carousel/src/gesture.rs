//! Touch gesture recognition.

/// Swipe distance, in pixels, a touch must travel to count as navigation.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

/// Navigation requested by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum SwipeIntent {
    /// Finger moved left: show the next slide
    Advance,
    /// Finger moved right: show the previous slide
    Retreat,
}

/// Touch tracking state.
///
/// Only `Swiping` carries enough data to classify a gesture; ending a touch
/// from any other state is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No touch in progress
    #[default]
    Idle,
    /// Touch started, no movement yet
    Tracking {
        /// Horizontal position at touch start
        start_x: f64,
    },
    /// Touch started and moved
    Swiping {
        /// Horizontal position at touch start
        start_x: f64,
        /// Latest horizontal position
        current_x: f64,
    },
}

/// Turns touch samples into swipe intents.
///
/// # Examples
///
/// ```
/// use ideafeed_carousel::{GestureDetector, SwipeIntent};
///
/// let mut gesture = GestureDetector::new();
/// gesture.touch_start(300.0);
/// gesture.touch_move(240.0);
/// assert_eq!(gesture.touch_end(), Some(SwipeIntent::Advance));
///
/// // A tap without movement does nothing.
/// gesture.touch_start(300.0);
/// assert_eq!(gesture.touch_end(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GestureDetector {
    state: GestureState,
    threshold: f64,
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureDetector {
    /// Detector with the default 50px threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_SWIPE_THRESHOLD)
    }

    /// Detector with a custom threshold.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            state: GestureState::Idle,
            threshold: threshold.abs(),
        }
    }

    /// Current tracking state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Distance a swipe must exceed.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Record where a touch began. A new touch replaces any unfinished one.
    pub fn touch_start(&mut self, x: f64) {
        self.state = GestureState::Tracking { start_x: x };
    }

    /// Record the latest touch position. Ignored when no touch is in progress.
    pub fn touch_move(&mut self, x: f64) {
        self.state = match self.state {
            GestureState::Idle => GestureState::Idle,
            GestureState::Tracking { start_x } | GestureState::Swiping { start_x, .. } => {
                GestureState::Swiping {
                    start_x,
                    current_x: x,
                }
            }
        };
    }

    /// Finish the touch and classify it. Always returns to `Idle`.
    pub fn touch_end(&mut self) -> Option<SwipeIntent> {
        match std::mem::take(&mut self.state) {
            GestureState::Swiping { start_x, current_x } => {
                classify(start_x - current_x, self.threshold)
            }
            GestureState::Idle | GestureState::Tracking { .. } => None,
        }
    }

    /// Abandon the touch without emitting anything.
    pub fn touch_cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}

/// Strictly beyond the threshold in either direction; NaN never navigates.
fn classify(distance: f64, threshold: f64) -> Option<SwipeIntent> {
    if distance > threshold {
        Some(SwipeIntent::Advance)
    } else if distance < -threshold {
        Some(SwipeIntent::Retreat)
    } else {
        None
    }
}
