/// A damped harmonic oscillator with unit mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    /// Below `1.0` the spring overshoots, `1.0` is critically damped.
    pub damping_ratio: f32,
    pub stiffness:     f32,

    /// Displacement and velocity below which the spring is considered at rest.
    pub threshold: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(1.0, 1500.0)
    }
}

impl Spring {
    pub const fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            threshold: 0.01,
        }
    }

    /// Displacement and velocity `time` seconds after release.
    ///
    /// `displacement` is measured from the rest position.
    pub fn sample(&self, displacement: f32, velocity: f32, time: f32) -> (f32, f32) {
        let x0 = displacement;
        let v0 = velocity;
        let t = time;

        let omega = self.stiffness.max(f32::EPSILON).sqrt();
        let zeta = self.damping_ratio.max(0.0);

        if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (damped * t).sin_cos();

            let a = x0;
            let b = (v0 + zeta * omega * x0) / damped;

            let x = decay * (a * cos + b * sin);
            let v = decay
                * ((b * damped - zeta * omega * a) * cos - (a * damped + zeta * omega * b) * sin);

            (x, v)
        } else if zeta == 1.0 {
            let decay = (-omega * t).exp();
            let b = v0 + omega * x0;

            let x = (x0 + b * t) * decay;
            let v = (b - omega * (x0 + b * t)) * decay;

            (x, v)
        } else {
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let r1 = -zeta * omega + root;
            let r2 = -zeta * omega - root;

            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;

            let x = c1 * (r1 * t).exp() + c2 * (r2 * t).exp();
            let v = c1 * r1 * (r1 * t).exp() + c2 * r2 * (r2 * t).exp();

            (x, v)
        }
    }

    pub fn is_at_rest(&self, displacement: f32, velocity: f32) -> bool {
        displacement.abs() < self.threshold && velocity.abs() < self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::Spring;

    fn settle_time(spring: Spring, displacement: f32) -> Option<f32> {
        const STEP: f32 = 1.0 / 120.0;

        (1..=600).map(|i| i as f32 * STEP).find(|&t| {
            let (x, v) = spring.sample(displacement, 0.0, t);
            spring.is_at_rest(x, v)
        })
    }

    #[test]
    fn starts_at_displacement() {
        for ratio in [0.7, 1.0, 1.5] {
            let (x, v) = Spring::new(ratio, 200.0).sample(0.2, 0.0, 0.0);

            assert!((x - 0.2).abs() < 1e-5, "ratio {ratio}");
            assert!(v.abs() < 1e-4, "ratio {ratio}");
        }
    }

    #[test]
    fn underdamped_overshoots() {
        let spring = Spring::new(0.7, 200.0);

        let overshoot = (1..120)
            .map(|i| spring.sample(0.2, 0.0, i as f32 / 120.0).0)
            .fold(f32::MAX, f32::min);

        assert!(overshoot < 0.0, "{overshoot}");
    }

    #[test]
    fn settles() {
        for ratio in [0.7, 1.0, 1.5] {
            let time = settle_time(Spring::new(ratio, 200.0), 0.2);
            assert!(time.is_some_and(|t| t < 2.0), "ratio {ratio}: {time:?}");
        }
    }

    #[test]
    fn velocity_matches_position() {
        let spring = Spring::new(0.7, 200.0);
        let h = 1e-3;

        let (x0, _) = spring.sample(0.2, 0.0, 0.1 - h);
        let (x1, _) = spring.sample(0.2, 0.0, 0.1 + h);
        let (_, v) = spring.sample(0.2, 0.0, 0.1);

        let numeric = (x1 - x0) / (2.0 * h);
        assert!((numeric - v).abs() < 0.05, "{numeric} vs {v}");
    }
}
