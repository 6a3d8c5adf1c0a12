use super::spring::{Spring, SpringAxis};
use super::timeline::Easing;
use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("down") => Direction::Down,
            Some("left") => Direction::Left,
            Some("right") => Direction::Right,
            _ => Direction::Up,
        }
    }

    /// Starting offset in css px; the element travels from here to rest.
    pub fn offset(&self) -> [f32; 2] {
        match self {
            Direction::Up => [0.0, REVEAL_OFFSET],
            Direction::Down => [0.0, -REVEAL_OFFSET],
            Direction::Left => [REVEAL_OFFSET, 0.0],
            Direction::Right => [-REVEAL_OFFSET, 0.0],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Fade,
    Slide,
    Scale,
    Blur,
    Rotate,
    Flip,
}

impl Variant {
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("slide") => Variant::Slide,
            Some("scale") => Variant::Scale,
            Some("blur") => Variant::Blur,
            Some("rotate") => Variant::Rotate,
            Some("flip") => Variant::Flip,
            _ => Variant::Fade,
        }
    }

    /// Hidden state before the element scrolls into view.
    pub fn hidden(&self, direction: Direction) -> RevealFrame {
        let [dx, dy] = direction.offset();
        let base = RevealFrame {
            opacity: 0.0,
            translate: [dx, dy],
            ..self.shown()
        };
        match self {
            Variant::Fade | Variant::Blur => RevealFrame {
                blur_px: self.shown().blur_px.map(|_| REVEAL_BLUR_PX),
                ..base
            },
            Variant::Slide => RevealFrame {
                translate: [dx * REVEAL_SLIDE_FACTOR, dy * REVEAL_SLIDE_FACTOR],
                ..base
            },
            Variant::Scale => RevealFrame {
                translate: [dx / 2.0, dy / 2.0],
                scale: [REVEAL_SCALE_FROM; 2],
                ..base
            },
            Variant::Rotate => RevealFrame {
                rotate_deg: if direction == Direction::Left {
                    -REVEAL_ROTATE_DEG
                } else {
                    REVEAL_ROTATE_DEG
                },
                ..base
            },
            // Flip only travels vertically
            Variant::Flip => RevealFrame {
                translate: [0.0, dy],
                rotate_x_deg: REVEAL_FLIP_DEG,
                ..base
            },
        }
    }

    /// Resting state once revealed.
    pub fn shown(&self) -> RevealFrame {
        RevealFrame {
            blur_px: (*self == Variant::Blur).then_some(0.0),
            perspective_px: (*self == Variant::Flip).then_some(REVEAL_PERSPECTIVE_PX),
            ..RevealFrame::REST
        }
    }
}

/// One end of a reveal transition. Both ends of a transition carry the same
/// optional parts so the browser can interpolate the function lists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealFrame {
    pub opacity: f32,
    pub translate: [f32; 2],
    pub scale: [f32; 2],
    pub rotate_deg: f32,
    pub rotate_x_deg: f32,
    pub blur_px: Option<f32>,
    pub perspective_px: Option<f32>,
}

impl RevealFrame {
    pub const REST: RevealFrame = RevealFrame {
        opacity: 1.0,
        translate: [0.0, 0.0],
        scale: [1.0, 1.0],
        rotate_deg: 0.0,
        rotate_x_deg: 0.0,
        blur_px: None,
        perspective_px: None,
    };

    pub fn transform(&self) -> String {
        let perspective = self
            .perspective_px
            .map(|p| format!("perspective({p}px) "))
            .unwrap_or_default();
        format!(
            "{}translate({}px, {}px) rotate({}deg) rotateX({}deg) scale({}, {})",
            perspective,
            self.translate[0],
            self.translate[1],
            self.rotate_deg,
            self.rotate_x_deg,
            self.scale[0],
            self.scale[1]
        )
    }

    pub fn filter(&self) -> Option<String> {
        self.blur_px.map(|b| format!("blur({b}px)"))
    }
}

/// A one-shot transition between two frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub easing: Easing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub hidden: RevealFrame,
    pub shown: RevealFrame,
    pub transition: Transition,
    /// Reveal once, or hide again when the element leaves the viewport.
    pub once: bool,
}

fn parse_secs(value: Option<&str>) -> Option<f32> {
    value
        .and_then(|v| v.trim().parse::<f32>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
}

impl Reveal {
    /// Build from the `data-reveal*` attributes of a marked element.
    pub fn from_attrs(
        variant: Option<&str>,
        direction: Option<&str>,
        delay: Option<&str>,
        duration: Option<&str>,
        once: Option<&str>,
    ) -> Self {
        let variant = Variant::from_attr(variant);
        let direction = Direction::from_attr(direction);
        Self {
            hidden: variant.hidden(direction),
            shown: variant.shown(),
            transition: Transition {
                duration_sec: parse_secs(duration).unwrap_or(REVEAL_DURATION_SEC),
                delay_sec: parse_secs(delay).unwrap_or(0.0),
                easing: Easing::Ease,
            },
            once: once.map(str::trim) != Some("false"),
        }
    }

    /// Staggered card entrance; `index` is the card's position in its grid.
    pub fn card(index: usize) -> Self {
        Self {
            hidden: RevealFrame {
                opacity: 0.0,
                translate: [0.0, CARD_RISE],
                ..RevealFrame::REST
            },
            shown: RevealFrame::REST,
            transition: Transition {
                duration_sec: CARD_DURATION_SEC,
                delay_sec: index as f32 * CARD_STAGGER_SEC,
                easing: Easing::Ease,
            },
            once: true,
        }
    }

    /// Horizontal rule that grows out from its centre.
    pub fn divider() -> Self {
        Self {
            hidden: RevealFrame {
                scale: [0.0, 1.0],
                ..RevealFrame::REST
            },
            shown: RevealFrame::REST,
            transition: Transition {
                duration_sec: DIVIDER_DURATION_SEC,
                delay_sec: 0.0,
                easing: Easing::Ease,
            },
            once: true,
        }
    }
}

pub fn parse_card_index(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0)
}

/// Springy hover lift for cards, written to the css `translate` property so
/// it composes with the entrance `transform`.
#[derive(Clone, Copy, Debug)]
pub struct HoverLift {
    pub axis: SpringAxis,
}

impl Default for HoverLift {
    fn default() -> Self {
        Self {
            axis: SpringAxis::new(
                0.0,
                Spring {
                    stiffness: CARD_HOVER_STIFFNESS,
                    damping: CARD_HOVER_DAMPING,
                    mass: 1.0,
                },
            ),
        }
    }
}

impl HoverLift {
    #[inline]
    pub fn set_hovered(&mut self, hovered: bool) {
        self.axis.target = if hovered { CARD_HOVER_LIFT } else { 0.0 };
    }

    #[inline]
    pub fn step(&mut self, dt_sec: f32) -> bool {
        self.axis.step(dt_sec)
    }

    pub fn translate(&self) -> String {
        format!("0px {:.2}px", self.axis.value)
    }
}
