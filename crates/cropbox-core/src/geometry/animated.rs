//! Animatable scalar cells.
//!
//! Every geometry quantity that the host renders is an [`AnimatedValue`]: a
//! current value plus an optional tween towards a target. The engine only
//! ever sets targets; the host's frame loop drives [`AnimatedValue::tick`].

/// Smootherstep easing.
///
/// Returns values from 0.0 to 1.0 with zero velocity and acceleration at
/// both ends.
///
/// Formula: `6t^5 - 15t^4 + 10t^3`
#[inline]
pub fn smootherstep(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// A scalar that can either be written immediately or eased towards a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedValue {
    current: f64,
    from: f64,
    target: f64,
    elapsed: f64,
    duration: f64,
}

impl AnimatedValue {
    /// Create a value at rest.
    pub fn new(value: f64) -> Self {
        Self {
            current: value,
            from: value,
            target: value,
            elapsed: 0.0,
            duration: 0.0,
        }
    }

    /// The value as currently displayed (possibly mid-tween).
    #[inline]
    pub fn value(&self) -> f64 {
        self.current
    }

    /// The value the cell is heading towards.
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether a tween is in progress.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.elapsed < self.duration
    }

    /// Write a value immediately, cancelling any running tween.
    #[inline]
    pub fn set(&mut self, value: f64) {
        *self = Self::new(value);
    }

    /// Start easing from the current value to `target` over `duration_ms`.
    ///
    /// A non-positive duration behaves like [`AnimatedValue::set`].
    pub fn animate_to(&mut self, target: f64, duration_ms: f64) {
        if duration_ms <= 0.0 || !duration_ms.is_finite() {
            self.set(target);
            return;
        }
        self.from = self.current;
        self.target = target;
        self.elapsed = 0.0;
        self.duration = duration_ms;
    }

    /// Advance the tween by `dt_ms`. Returns `true` while still moving.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        if !self.is_animating() {
            return false;
        }
        self.elapsed = (self.elapsed + dt_ms.max(0.0)).min(self.duration);
        if self.is_animating() {
            let t = smootherstep(self.elapsed / self.duration);
            self.current = self.from + (self.target - self.from) * t;
            true
        } else {
            self.finish();
            false
        }
    }

    /// Jump to the target and stop animating.
    pub fn finish(&mut self) {
        self.set(self.target);
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
