use super::style::StyleSink;

/// An HSL triple as used by the theme variables (`h s% l%`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Channel-wise lerp rounded to one decimal. Hue is lerped numerically,
    /// not around the colour wheel.
    pub fn lerp(&self, other: &Hsl, t: f64) -> Hsl {
        let l = |a: f64, b: f64| round1(a + (b - a) * t);
        Hsl {
            h: l(self.h, other.h),
            s: l(self.s, other.s),
            l: l(self.l, other.l),
        }
    }

    pub fn to_css(&self) -> String {
        format!("{:.1} {:.1}% {:.1}%", self.h, self.s, self.l)
    }
}

#[inline]
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub at: f64,
    pub primary: Hsl,
    pub accent: Hsl,
    pub ring: Hsl,
}

pub static COLOR_STOPS: [ColorStop; 5] = [
    ColorStop {
        at: 0.0,
        primary: Hsl::new(162.0, 72.0, 45.0),
        accent: Hsl::new(195.0, 80.0, 55.0),
        ring: Hsl::new(162.0, 72.0, 45.0),
    },
    ColorStop {
        at: 0.25,
        primary: Hsl::new(200.0, 75.0, 50.0),
        accent: Hsl::new(220.0, 80.0, 58.0),
        ring: Hsl::new(200.0, 75.0, 50.0),
    },
    ColorStop {
        at: 0.5,
        primary: Hsl::new(245.0, 70.0, 58.0),
        accent: Hsl::new(270.0, 70.0, 55.0),
        ring: Hsl::new(245.0, 70.0, 58.0),
    },
    ColorStop {
        at: 0.75,
        primary: Hsl::new(280.0, 65.0, 55.0),
        accent: Hsl::new(310.0, 70.0, 55.0),
        ring: Hsl::new(280.0, 65.0, 55.0),
    },
    ColorStop {
        at: 1.0,
        primary: Hsl::new(340.0, 72.0, 52.0),
        accent: Hsl::new(20.0, 80.0, 55.0),
        ring: Hsl::new(340.0, 72.0, 52.0),
    },
];

pub const VAR_PRIMARY: &str = "--primary";
pub const VAR_ACCENT: &str = "--accent";
pub const VAR_RING: &str = "--ring";
pub const VAR_GLOW_PRIMARY: &str = "--glow-primary";
pub const VAR_GLOW_ACCENT: &str = "--glow-accent";

pub const STYLE_VARS: [&str; 5] = [
    VAR_PRIMARY,
    VAR_ACCENT,
    VAR_RING,
    VAR_GLOW_PRIMARY,
    VAR_GLOW_ACCENT,
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub primary: Hsl,
    pub accent: Hsl,
    pub ring: Hsl,
}

/// First adjacent pair with `lower.at <= progress <= upper.at`. Out-of-range
/// progress falls back to the outermost stops.
pub fn bracket(progress: f64) -> (&'static ColorStop, &'static ColorStop) {
    COLOR_STOPS
        .windows(2)
        .find(|w| progress >= w[0].at && progress <= w[1].at)
        .map(|w| (&w[0], &w[1]))
        .unwrap_or((&COLOR_STOPS[0], &COLOR_STOPS[COLOR_STOPS.len() - 1]))
}

pub fn palette_at(progress: f64) -> Palette {
    let (lower, upper) = bracket(progress);
    let range = upper.at - lower.at;
    let t = if range > 0.0 {
        (progress - lower.at) / range
    } else {
        0.0
    };
    Palette {
        primary: lower.primary.lerp(&upper.primary, t),
        accent: lower.accent.lerp(&upper.accent, t),
        ring: lower.ring.lerp(&upper.ring, t),
    }
}

pub fn apply_palette(sink: &mut impl StyleSink, palette: &Palette) {
    let primary = palette.primary.to_css();
    let accent = palette.accent.to_css();
    sink.set_property(VAR_PRIMARY, &primary);
    sink.set_property(VAR_ACCENT, &accent);
    sink.set_property(VAR_RING, &palette.ring.to_css());
    sink.set_property(VAR_GLOW_PRIMARY, &primary);
    sink.set_property(VAR_GLOW_ACCENT, &accent);
}

pub fn clear_palette(sink: &mut impl StyleSink) {
    for name in STYLE_VARS {
        sink.remove_property(name);
    }
}
