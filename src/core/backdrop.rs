use super::timeline::{Easing, Keyframe, LoopTiming};

/// A large blurred radial glow that slowly breathes behind the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowBlob {
    pub style: &'static str,
    pub scale_peak: f32,
    pub opacity: [f32; 2],
    pub timing: LoopTiming,
}

pub const GLOW_BLOBS: [GlowBlob; 2] = [
    GlowBlob {
        style: "position:absolute;top:-30%;left:10%;height:120vh;width:80vw;border-radius:9999px;\
                filter:blur(160px);background:radial-gradient(ellipse at center, \
                hsl(var(--glow-accent) / 0.35) 0%, hsl(var(--glow-primary) / 0.15) 40%, transparent 70%);",
        scale_peak: 1.05,
        opacity: [0.6, 0.8],
        timing: LoopTiming {
            duration_sec: 10.0,
            delay_sec: 0.0,
            easing: Easing::EaseInOut,
        },
    },
    GlowBlob {
        style: "position:absolute;bottom:-20%;right:-10%;height:80vh;width:60vw;border-radius:9999px;\
                filter:blur(200px);background:radial-gradient(ellipse at center, \
                hsl(var(--glow-secondary) / 0.2) 0%, transparent 60%);",
        scale_peak: 1.08,
        opacity: [0.4, 0.6],
        timing: LoopTiming {
            duration_sec: 14.0,
            delay_sec: 3.0,
            easing: Easing::EaseInOut,
        },
    },
];

/// Static edge darkening over the glows, fading into the page background.
pub const VIGNETTE_STYLE: &str = "position:absolute;inset:0;\
    background:radial-gradient(ellipse at center, transparent 0%, hsl(var(--background)) 80%);";

impl GlowBlob {
    pub fn keyframes(&self) -> [Keyframe; 3] {
        let rest = Keyframe {
            offset: 0.0,
            translate: [0.0, 0.0],
            scale: 1.0,
            opacity: self.opacity[0],
        };
        [
            rest,
            Keyframe {
                offset: 0.5,
                scale: self.scale_peak,
                opacity: self.opacity[1],
                ..rest
            },
            Keyframe { offset: 1.0, ..rest },
        ]
    }
}
