/// One keyframe of a looping decorative animation. `translate` is in css px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub offset: f32,
    pub translate: [f32; 2],
    pub scale: f32,
    pub opacity: f32,
}

impl Keyframe {
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate[0], self.translate[1], self.scale
        )
    }

    fn lerp(&self, other: &Keyframe, t: f32) -> Keyframe {
        let l = |a: f32, b: f32| a + (b - a) * t;
        Keyframe {
            offset: l(self.offset, other.offset),
            translate: [
                l(self.translate[0], other.translate[0]),
                l(self.translate[1], other.translate[1]),
            ],
            scale: l(self.scale, other.scale),
            opacity: l(self.opacity, other.opacity),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// `cubic-bezier(0.25, 0.1, 0.25, 1)`
    Ease,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`
    EaseInOut,
}

impl Easing {
    /// Name understood by the Web Animations API.
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Ease => "ease",
            Easing::EaseInOut => "ease-in-out",
        }
    }

    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Ease => cubic_bezier(0.25, 0.1, 0.25, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluate a css `cubic-bezier(x1, y1, x2, y2)` timing curve at `x`.
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let bez = |p1: f32, p2: f32, s: f32| {
        let u = 1.0 - s;
        3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
    };
    let d_bez = |p1: f32, p2: f32, s: f32| {
        let u = 1.0 - s;
        3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };
    // Newton first, bisection if the slope gets flat
    let mut s = x;
    for _ in 0..8 {
        let err = bez(x1, x2, s) - x;
        if err.abs() < 1e-6 {
            return bez(y1, y2, s);
        }
        let d = d_bez(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let v = bez(x1, x2, s);
        if (v - x).abs() < 1e-6 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bez(y1, y2, s)
}

/// Timing of an endlessly repeating animation. Easing applies per segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopTiming {
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub easing: Easing,
}

/// State of a looping animation `elapsed_sec` after it was mounted. Before
/// the delay has passed the first keyframe is held.
pub fn sample(keyframes: &[Keyframe], timing: &LoopTiming, elapsed_sec: f32) -> Option<Keyframe> {
    let first = keyframes.first()?;
    let local = elapsed_sec - timing.delay_sec;
    if local <= 0.0 || timing.duration_sec <= 0.0 || keyframes.len() == 1 {
        return Some(*first);
    }
    let progress = (local / timing.duration_sec).fract();
    let seg = keyframes
        .windows(2)
        .find(|w| progress >= w[0].offset && progress <= w[1].offset)?;
    let span = seg[1].offset - seg[0].offset;
    let t = if span > 0.0 {
        (progress - seg[0].offset) / span
    } else {
        0.0
    };
    Some(seg[0].lerp(&seg[1], timing.easing.apply(t)))
}
