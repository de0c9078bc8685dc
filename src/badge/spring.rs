// Spring constants matching the reference appearance animation
// (under-damped: quick settle with slight overshoot).
const TENSION: f64 = 50.0;
const FRICTION: f64 = 6.0;
const REST_DISPLACEMENT: f64 = 0.001;
const REST_SPEED: f64 = 0.001;

/// Lifecycle of the presence scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AnimationPhase {
    /// No value present; scale is 0.
    Hidden,
    /// Springing toward full scale.
    Entering,
    /// Settled at full scale.
    Shown,
}

/// Owned scale state for one badge, persisted across renders.
///
/// Appearance springs in; disappearance snaps to zero instantly. The host
/// scheduler drives the in-flight transition through [`BadgeScale::tick`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BadgeScale {
    value: f64,
    velocity: f64,
    target: f64,
    animating: bool,
}

impl BadgeScale {
    /// State for a badge mounting with (`present = true`) or without a value.
    pub fn new(present: bool) -> Self {
        let value = if present { 1.0 } else { 0.0 };
        Self {
            value,
            velocity: 0.0,
            target: value,
            animating: false,
        }
    }

    /// Current scale. Stays in `[0, 1]` at rest; overshoots slightly above 1
    /// while entering.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current phase.
    pub fn phase(&self) -> AnimationPhase {
        if self.animating {
            AnimationPhase::Entering
        } else if self.value >= 1.0 {
            AnimationPhase::Shown
        } else {
            AnimationPhase::Hidden
        }
    }

    /// Drive the target from the presence gate.
    ///
    /// Absent to present springs to 1 when `animate` (instant otherwise);
    /// present to absent always snaps to 0 immediately, no spring.
    pub fn set_present(&mut self, present: bool, animate: bool) {
        if present {
            self.target = 1.0;
            if !animate {
                self.value = 1.0;
                self.velocity = 0.0;
                self.animating = false;
            } else if self.value != 1.0 || self.velocity != 0.0 {
                self.animating = true;
            }
        } else {
            self.target = 0.0;
            self.value = 0.0;
            self.velocity = 0.0;
            self.animating = false;
        }
    }

    /// Advance the in-flight spring by `dt` seconds and return the new scale.
    ///
    /// Semi-implicit Euler over `a = tension·(target − x) − friction·v`.
    /// Once displacement and speed both drop under the rest thresholds the
    /// value lands exactly on the target.
    pub fn tick(&mut self, dt: f64) -> f64 {
        if !self.animating || dt <= 0.0 {
            return self.value;
        }
        let accel = TENSION * (self.target - self.value) - FRICTION * self.velocity;
        self.velocity += accel * dt;
        self.value += self.velocity * dt;
        if self.velocity.abs() < REST_SPEED && (self.target - self.value).abs() < REST_DISPLACEMENT
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.animating = false;
        }
        self.value
    }
}
