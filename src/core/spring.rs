use crate::constants::*;

/// Damped harmonic spring coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: GLOW_STIFFNESS,
            damping: GLOW_DAMPING,
            mass: GLOW_MASS,
        }
    }
}

impl Spring {
    #[inline]
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// ζ = c / (2·sqrt(k·m)); 1 is critical, above is over-damped.
    #[inline]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Closed-form displacement/velocity after `t` seconds, starting from
    /// displacement `x0` (relative to the target) and velocity `v0`.
    pub fn evolve(&self, x0: f32, v0: f32, t: f32) -> (f32, f32) {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        if (zeta - 1.0).abs() < 1e-4 {
            let b = v0 + w0 * x0;
            let e = (-w0 * t).exp();
            let x = (x0 + b * t) * e;
            let v = (b - w0 * (x0 + b * t)) * e;
            (x, v)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let a = x0;
            let b = (v0 + zeta * w0 * x0) / wd;
            let e = (-zeta * w0 * t).exp();
            let (s, c) = (wd * t).sin_cos();
            let x = e * (a * c + b * s);
            let v = e * ((-zeta * w0 * a + b * wd) * c + (-zeta * w0 * b - a * wd) * s);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let a = (v0 - r2 * x0) / (r1 - r2);
            let b = x0 - a;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (a * e1 + b * e2, a * r1 * e1 + b * r2 * e2)
        }
    }
}

/// One smoothed coordinate following a target through a spring.
#[derive(Clone, Copy, Debug)]
pub struct SpringAxis {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
    pub spring: Spring,
}

impl SpringAxis {
    pub fn new(value: f32, spring: Spring) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            spring,
        }
    }

    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advance by `dt_sec`; returns true once settled on the target.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        if self.is_at_rest() {
            return true;
        }
        let dt = dt_sec.clamp(0.0, MAX_FRAME_DT_SEC);
        let (x, v) = self
            .spring
            .evolve(self.value - self.target, self.velocity, dt);
        self.value = self.target + x;
        self.velocity = v;
        let settled = x.abs() < SPRING_REST_DELTA && v.abs() < SPRING_REST_SPEED;
        if settled {
            self.value = self.target;
            self.velocity = 0.0;
        }
        settled
    }
}

/// Spring-smoothed pointer position. The raw pointer is each axis' target.
#[derive(Clone, Copy, Debug)]
pub struct GlowTracker {
    pub x: SpringAxis,
    pub y: SpringAxis,
}

impl Default for GlowTracker {
    fn default() -> Self {
        let spring = Spring::default();
        Self {
            x: SpringAxis::new(GLOW_START, spring),
            y: SpringAxis::new(GLOW_START, spring),
        }
    }
}

impl GlowTracker {
    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.x.target = x;
        self.y.target = y;
    }

    /// Step both axes; true when both have settled.
    pub fn step(&mut self, dt_sec: f32) -> bool {
        let sx = self.x.step(dt_sec);
        let sy = self.y.step(dt_sec);
        sx && sy
    }

    /// CSS transform placing the glow's centre on the smoothed position.
    pub fn transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) translate(-50%, -50%)",
            self.x.value, self.y.value
        )
    }
}
