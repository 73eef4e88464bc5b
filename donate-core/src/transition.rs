use std::{ops::Deref, time::Duration};

use crate::CornerRadius;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionCurve {
    Linear,

    /// Cubic bézier `(0.42, 0.0, 1.0, 1.0)`.
    EaseIn,

    /// Cubic bézier `(0.42, 0.0, 0.58, 1.0)`.
    EaseInOut,

    /// Cubic bézier `(0.4, 0.0, 0.2, 1.0)`, the default tween curve.
    FastOutSlowIn,

    BounceIn,
    BounceOut,
}

impl TransitionCurve {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            TransitionCurve::Linear => t,
            TransitionCurve::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            TransitionCurve::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            TransitionCurve::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            TransitionCurve::BounceIn => 1.0 - bounce_out(1.0 - t),
            TransitionCurve::BounceOut => bounce_out(t),
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

/// Evaluate the `y` of a unit cubic bézier at horizontal position `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    const EPSILON: f32 = 1e-5;

    if x <= 0.0 || x >= 1.0 {
        return x;
    }

    let sample = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };

    let slope = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    // newton first, bisection when the slope flattens out
    let mut s = x;

    for _ in 0..8 {
        let error = sample(x1, x2, s) - x;

        if error.abs() < EPSILON {
            return sample(y1, y2, s);
        }

        let d = slope(x1, x2, s);

        if d.abs() < 1e-6 {
            break;
        }

        s -= error / d;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;

    for _ in 0..32 {
        let value = sample(x1, x2, s);

        if (value - x).abs() < EPSILON {
            break;
        }

        if value < x {
            lo = s;
        } else {
            hi = s;
        }

        s = (lo + hi) / 2.0;
    }

    sample(y1, y2, s)
}

/// How a value moves towards a new target.
///
/// `duration` and `delay` are in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub curve:    TransitionCurve,
    pub duration: f32,
    pub delay:    f32,
}

impl Transition {
    /// Instant transition.
    pub const INSTANT: Self = Self::linear(0.0);

    pub const fn new(curve: TransitionCurve, duration: f32) -> Self {
        Self {
            curve,
            duration,
            delay: 0.0,
        }
    }

    pub const fn linear(duration: f32) -> Self {
        Self::new(TransitionCurve::Linear, duration)
    }

    pub const fn ease_in(duration: f32) -> Self {
        Self::new(TransitionCurve::EaseIn, duration)
    }

    pub const fn ease_in_out(duration: f32) -> Self {
        Self::new(TransitionCurve::EaseInOut, duration)
    }

    pub const fn bounce_in(duration: f32) -> Self {
        Self::new(TransitionCurve::BounceIn, duration)
    }

    /// Same as `Transition::new(TransitionCurve::FastOutSlowIn, duration)`.
    pub const fn tween(duration: f32) -> Self {
        Self::new(TransitionCurve::FastOutSlowIn, duration)
    }

    pub const fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Delay plus duration.
    pub const fn total(self) -> f32 {
        self.delay + self.duration
    }

    /// Curve position at `time` seconds after the transition began.
    pub fn progress(self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return if time >= self.delay { 1.0 } else { 0.0 };
        }

        let fraction = (time - self.delay) / self.duration;
        self.curve.apply(fraction.clamp(0.0, 1.0))
    }

    /// Rate of [`Transition::progress`] per second as it reaches the end.
    pub fn end_rate(self) -> f32 {
        const STEP: f32 = 1e-3;

        if self.duration <= 0.0 {
            return 0.0;
        }

        (1.0 - self.curve.apply(1.0 - STEP)) / (STEP * self.duration)
    }
}

pub trait Interpolate {
    fn interpolate(start: &Self, end: &Self, x: f32) -> Self;
}

/// A value that follows its target through a [`Transition`].
///
/// Retargeting starts from the current value with the full duration of the
/// transition in effect at that moment.
pub struct Transitioned<T> {
    transition: Transition,
    current:    T,
    start:      T,
    end:        T,
    time:       f32,
}

impl<T> Transitioned<T>
where
    T: Interpolate + Clone + PartialEq,
{
    pub fn new(value: T, transition: Transition) -> Self {
        Self {
            current: value.clone(),
            start: value.clone(),
            end: value,
            time: transition.total(),
            transition,
        }
    }

    /// Set a concrete value, and cancel the current transition.
    pub fn set(&mut self, value: T) {
        self.end = value.clone();
        self.start = value.clone();
        self.current = value;
        self.time = self.transition.total();
    }

    /// Get the end value.
    pub fn end(&self) -> T {
        self.end.clone()
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.current.clone()
    }

    /// Start transitioning to a value.
    ///
    /// Returns whether `request_animate` should be called.
    pub fn begin(&mut self, target: T) -> bool {
        if target == self.end {
            return false;
        }

        self.start = self.current.clone();
        self.end = target;
        self.time = 0.0;

        self.update_current();

        !self.is_complete()
    }

    /// Switch to `transition` and start transitioning to `target`.
    pub fn begin_with(&mut self, target: T, transition: Transition) -> bool {
        self.transition = transition;
        self.begin(target)
    }

    /// Animate the value.
    ///
    /// Returns whether `request_animate` should be called.
    pub fn animate(&mut self, dt: Duration) -> bool {
        self.time += dt.as_secs_f32();
        self.time = self.time.clamp(0.0, self.transition.total());

        self.update_current();

        !self.is_complete()
    }

    /// Check if the transition has reached the end.
    pub fn is_complete(&self) -> bool {
        self.time >= self.transition.total()
    }

    fn update_current(&mut self) {
        if self.is_complete() {
            self.current = self.end.clone();
            return;
        }

        let position = self.transition.progress(self.time);
        self.current = T::interpolate(&self.start, &self.end, position);
    }
}

impl<T> Deref for Transitioned<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.current
    }
}

impl Interpolate for f32 {
    fn interpolate(start: &Self, end: &Self, x: f32) -> Self {
        *start * (1.0 - x) + *end * x
    }
}

impl Interpolate for CornerRadius {
    fn interpolate(start: &Self, end: &Self, x: f32) -> Self {
        Self {
            top_left:     f32::interpolate(&start.top_left, &end.top_left, x),
            top_right:    f32::interpolate(&start.top_right, &end.top_right, x),
            bottom_left:  f32::interpolate(&start.bottom_left, &end.bottom_left, x),
            bottom_right: f32::interpolate(&start.bottom_right, &end.bottom_right, x),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    const CURVES: [TransitionCurve; 6] = [
        TransitionCurve::Linear,
        TransitionCurve::EaseIn,
        TransitionCurve::EaseInOut,
        TransitionCurve::FastOutSlowIn,
        TransitionCurve::BounceIn,
        TransitionCurve::BounceOut,
    ];

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn curves_hit_endpoints() {
        for curve in CURVES {
            assert!(curve.apply(0.0).abs() < 1e-4, "{curve:?} at 0");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-4, "{curve:?} at 1");
        }
    }

    #[test]
    fn ease_in_starts_slow() {
        let half = TransitionCurve::EaseIn.apply(0.5);
        assert!(half < 0.5 && half > 0.2, "{half}");

        let mid = TransitionCurve::EaseInOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-3, "{mid}");
    }

    #[test]
    fn end_rate_follows_curve() {
        assert!((Transition::linear(0.5).end_rate() - 2.0).abs() < 1e-2);
        assert!(Transition::ease_in_out(0.5).end_rate() < 0.1);
        assert!(Transition::tween(0.15).end_rate() < 0.1);
        assert_eq!(Transition::INSTANT.end_rate(), 0.0);
    }

    #[test]
    fn bounce_in_dips_near_start() {
        // the first bounce of ease-in-bounce stays tiny
        let early = TransitionCurve::BounceIn.apply(0.1);
        assert!(early >= 0.0 && early < 0.05, "{early}");
    }

    #[test]
    fn transitioned_reaches_target() {
        let mut value = Transitioned::new(25.0, Transition::bounce_in(1.0));

        assert!(value.begin(0.0));
        assert!(value.animate(ms(500)));
        assert!(!value.animate(ms(500)));
        assert_eq!(*value, 0.0);
    }

    #[test]
    fn delay_holds_start_value() {
        let mut lift = Transitioned::new(0.0, Transition::INSTANT);
        lift.begin_with(190.0, Transition::ease_in_out(1.5).with_delay(0.8));

        assert!(lift.animate(ms(700)));
        assert_eq!(*lift, 0.0);

        assert!(lift.animate(ms(800)));
        assert!(*lift > 0.0 && *lift < 190.0);

        assert!(!lift.animate(ms(900)));
        assert_eq!(*lift, 190.0);
    }

    #[test]
    fn retarget_starts_from_current() {
        let mut alpha = Transitioned::new(1.0, Transition::linear(0.8));

        alpha.begin(0.0);
        alpha.animate(ms(400));

        let midway = *alpha;
        assert!((midway - 0.5).abs() < 1e-3);

        alpha.begin(1.0);
        assert_eq!(*alpha, midway);

        assert!(!alpha.animate(ms(900)));
        assert_eq!(*alpha, 1.0);
    }

    #[test]
    fn same_target_is_ignored() {
        let mut value = Transitioned::new(1.0, Transition::linear(1.0));
        assert!(!value.begin(1.0));
    }

    #[test]
    fn instant_transition_completes_immediately() {
        let mut value = Transitioned::new(CornerRadius::all(25.0), Transition::INSTANT);

        assert!(!value.begin(CornerRadius::ZERO));
        assert_eq!(value.get(), CornerRadius::ZERO);
    }
}
