use crate::constants::*;
use rand::Rng;

/// Drawing seam for the particle field. The web view implements it on a
/// `CanvasRenderingContext2d`; tests record calls.
pub trait Surface2d {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], color: &str);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub vx: f32,
    pub vy: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            x: POINTER_SENTINEL,
            y: POINTER_SENTINEL,
        }
    }
}

impl PointerState {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.x != POINTER_SENTINEL && self.y != POINTER_SENTINEL
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleFieldParams {
    pub speed: f32,
    pub color: String,
}

impl Default for ParticleFieldParams {
    fn default() -> Self {
        Self {
            speed: DEFAULT_PARTICLE_SPEED,
            color: DEFAULT_PARTICLE_COLOR.to_string(),
        }
    }
}

impl ParticleFieldParams {
    /// Build params from `data-speed` / `data-color` attribute values.
    /// Missing or malformed values keep their defaults.
    pub fn from_attrs(speed: Option<&str>, color: Option<&str>) -> Self {
        let mut params = Self::default();
        if let Some(speed) = speed
            .and_then(|s| s.trim().parse::<f32>().ok())
            .filter(|s| s.is_finite() && *s >= 0.0)
        {
            params.speed = speed;
        }
        if let Some(color) = color.map(str::trim).filter(|c| is_hex_rgb(c)) {
            params.color = color.to_string();
        }
        params
    }
}

fn is_hex_rgb(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// A connecting line between two particles closer than `LINK_DISTANCE`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: u8,
}

#[inline]
pub fn particle_count(width: f32, height: f32) -> usize {
    let area = (width.max(0.0) * height.max(0.0)) as f64;
    let base = (area / PARTICLE_AREA_PER_PARTICLE as f64).floor() as usize;
    base.clamp(PARTICLE_COUNT_MIN, PARTICLE_COUNT_MAX)
}

/// Stroke alpha for a pair at `distance`; `None` at or beyond the cutoff.
#[inline]
pub fn link_alpha(distance: f32) -> Option<u8> {
    if distance.is_nan() || distance >= LINK_DISTANCE {
        return None;
    }
    let a = ((1.0 - distance / LINK_DISTANCE) * 255.0).round();
    Some(a.clamp(0.0, 255.0) as u8)
}

/// Append a two-digit hex alpha to a `#rrggbb` colour.
#[inline]
pub fn stroke_color(color: &str, alpha: u8) -> String {
    format!("{color}{alpha:02x}")
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub pointer: PointerState,
    width: f32,
    height: f32,
    speed: f32,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, speed: f32, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            pointer: PointerState::default(),
            width,
            height,
            speed,
        };
        field.regenerate(rng);
        field
    }

    /// Resize the field and throw away every particle.
    pub fn resize(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        self.width = width;
        self.height = height;
        self.regenerate(rng);
    }

    fn regenerate(&mut self, rng: &mut impl Rng) {
        let count = particle_count(self.width, self.height);
        let w = self.width.max(0.0);
        let h = self.height.max(0.0);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles.push(Particle {
                x: rng.gen::<f32>() * w,
                y: rng.gen::<f32>() * h,
                radius: PARTICLE_RADIUS_MIN
                    + rng.gen::<f32>() * (PARTICLE_RADIUS_MAX - PARTICLE_RADIUS_MIN),
                vx: (rng.gen::<f32>() - 0.5) * self.speed,
                vy: (rng.gen::<f32>() - 0.5) * self.speed,
            });
        }
    }

    #[inline]
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = PointerState { x, y };
    }

    /// Back to the off-screen sentinel; repulsion stops.
    #[inline]
    pub fn clear_pointer(&mut self) {
        self.pointer = PointerState::default();
    }

    /// Advance one frame: integrate, reflect at the edges, then repel from the pointer.
    pub fn update(&mut self) {
        let (w, h) = (self.width, self.height);
        let pointer = self.pointer;
        let active = pointer.is_active();
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            // Reflect only; the position is left where it is.
            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
            }

            if active {
                let dx = pointer.x - p.x;
                let dy = pointer.y - p.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < POINTER_REPEL_RADIUS {
                    let angle = dy.atan2(dx);
                    let target_x = p.x - angle.cos() * POINTER_REPEL_RADIUS;
                    let target_y = p.y - angle.sin() * POINTER_REPEL_RADIUS;
                    p.x += (target_x - p.x) * POINTER_REPEL_PULL;
                    p.y += (target_y - p.y) * POINTER_REPEL_PULL;
                }
            }
        }
    }

    /// Every unordered pair closer than `LINK_DISTANCE`, with its stroke alpha.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            (i + 1..ps.len()).filter_map(move |j| {
                let dx = ps[i].x - ps[j].x;
                let dy = ps[i].y - ps[j].y;
                link_alpha((dx * dx + dy * dy).sqrt()).map(|alpha| Link { a: i, b: j, alpha })
            })
        })
    }

    pub fn draw(&self, surface: &mut impl Surface2d, color: &str) {
        surface.clear(self.width, self.height);
        for p in &self.particles {
            surface.fill_circle(p.x, p.y, p.radius, color);
        }
        for link in self.links() {
            let a = &self.particles[link.a];
            let b = &self.particles[link.b];
            surface.stroke_line([a.x, a.y], [b.x, b.y], &stroke_color(color, link.alpha));
        }
    }
}
