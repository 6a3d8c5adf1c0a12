use super::timeline::{Easing, Keyframe, LoopTiming};
use crate::constants::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Primary,
    Accent,
}

impl Tint {
    #[inline]
    pub fn for_index(index: usize) -> Self {
        if index % FLOATING_PRIMARY_EVERY == 0 {
            Tint::Primary
        } else {
            Tint::Accent
        }
    }

    /// Background colour resolved against the live palette variables.
    pub fn background(&self) -> &'static str {
        match self {
            Tint::Primary => "hsl(var(--primary) / 0.3)",
            Tint::Accent => "hsl(var(--accent) / 0.2)",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingParams {
    pub count: usize,
}

impl Default for FloatingParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_FLOATING_COUNT,
        }
    }
}

impl FloatingParams {
    /// Parse `data-count`; malformed values and counts above
    /// `FLOATING_COUNT_MAX` keep the default.
    pub fn from_attrs(count: Option<&str>) -> Self {
        count
            .and_then(|c| c.trim().parse::<usize>().ok())
            .filter(|c| *c <= FLOATING_COUNT_MAX)
            .map(|count| Self { count })
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingParticle {
    pub id: usize,
    /// Percent of the container, 0..100
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub drift: f32,
}

pub fn generate(count: usize, rng: &mut impl Rng) -> Vec<FloatingParticle> {
    (0..count)
        .map(|id| FloatingParticle {
            id,
            x: rng.gen::<f32>() * 100.0,
            y: rng.gen::<f32>() * 100.0,
            size: FLOATING_SIZE_MIN + rng.gen::<f32>() * (FLOATING_SIZE_MAX - FLOATING_SIZE_MIN),
            duration_sec: FLOATING_DURATION_MIN_SEC
                + rng.gen::<f32>() * (FLOATING_DURATION_MAX_SEC - FLOATING_DURATION_MIN_SEC),
            delay_sec: rng.gen::<f32>() * FLOATING_DELAY_MAX_SEC,
            drift: (rng.gen::<f32>() - 0.5) * 2.0 * FLOATING_DRIFT_MAX,
        })
        .collect()
}

impl FloatingParticle {
    #[inline]
    pub fn tint(&self) -> Tint {
        Tint::for_index(self.id)
    }

    /// Static placement style; motion comes from the keyframes.
    pub fn style(&self) -> String {
        format!(
            "position:absolute;border-radius:9999px;left:{}%;top:{}%;width:{}px;height:{}px;background:{};",
            self.x,
            self.y,
            self.size,
            self.size,
            self.tint().background()
        )
    }

    pub fn keyframes(&self) -> [Keyframe; 3] {
        let rest = Keyframe {
            offset: 0.0,
            translate: [0.0, 0.0],
            scale: 1.0,
            opacity: FLOATING_OPACITY_REST,
        };
        [
            rest,
            Keyframe {
                offset: 0.5,
                translate: [self.drift, FLOATING_RISE],
                scale: FLOATING_SCALE_PEAK,
                opacity: FLOATING_OPACITY_PEAK,
            },
            Keyframe { offset: 1.0, ..rest },
        ]
    }

    pub fn timing(&self) -> LoopTiming {
        LoopTiming {
            duration_sec: self.duration_sec,
            delay_sec: self.delay_sec,
            easing: Easing::EaseInOut,
        }
    }
}
