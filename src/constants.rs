/// Effect tuning constants.
///
/// These constants express intended behavior (radii, rates, easing factors)
/// and keep magic numbers out of the simulation and view code.
// ---------------- Particle field ----------------

// One particle per this many square pixels of viewport
pub const PARTICLE_AREA_PER_PARTICLE: f32 = 10_000.0;
pub const PARTICLE_COUNT_MIN: usize = 50;
pub const PARTICLE_COUNT_MAX: usize = 150;

pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;

// Pointer repulsion bubble
pub const POINTER_REPEL_RADIUS: f32 = 100.0;
pub const POINTER_REPEL_PULL: f32 = 0.05; // fraction of the way per frame
pub const POINTER_SENTINEL: f32 = -1000.0;

// Pairs closer than this are joined by a line
pub const LINK_DISTANCE: f32 = 80.0;

pub const DEFAULT_PARTICLE_SPEED: f32 = 1.0;
pub const DEFAULT_PARTICLE_COLOR: &str = "#09332C";

// ---------------- Cursor glow ----------------

pub const GLOW_STIFFNESS: f32 = 100.0;
pub const GLOW_DAMPING: f32 = 25.0;
pub const GLOW_MASS: f32 = 1.0;
pub const GLOW_START: f32 = -500.0; // initial off-screen position (css px)
pub const SPRING_REST_DELTA: f32 = 0.01;
pub const SPRING_REST_SPEED: f32 = 0.01;
// Clamp for frame deltas after the tab was hidden
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// ---------------- Floating particles ----------------

pub const DEFAULT_FLOATING_COUNT: usize = 30;
// Larger data-count values fall back to the default
pub const FLOATING_COUNT_MAX: usize = 200;
pub const FLOATING_SIZE_MIN: f32 = 1.0;
pub const FLOATING_SIZE_MAX: f32 = 4.0;
pub const FLOATING_DURATION_MIN_SEC: f32 = 6.0;
pub const FLOATING_DURATION_MAX_SEC: f32 = 14.0;
pub const FLOATING_DELAY_MAX_SEC: f32 = 4.0;
pub const FLOATING_DRIFT_MAX: f32 = 10.0; // horizontal amplitude, either side
pub const FLOATING_RISE: f32 = -40.0;
pub const FLOATING_OPACITY_REST: f32 = 0.15;
pub const FLOATING_OPACITY_PEAK: f32 = 0.5;
pub const FLOATING_SCALE_PEAK: f32 = 1.5;
pub const FLOATING_PRIMARY_EVERY: usize = 3;

// ---------------- Hero sphere ----------------

pub const SPHERE_SEGMENTS: u32 = 64;
pub const SPHERE_RADIUS: f32 = 1.0;
pub const SPHERE_SPIN_RATE: f32 = 0.08; // rad/s about Y
pub const SPHERE_NOD_RATE: f32 = 0.05;
pub const SPHERE_NOD_AMPLITUDE: f32 = 0.1;
pub const SPHERE_EASE: f32 = 0.1; // fraction toward target per frame

pub const SPHERE_START_POSITION: [f32; 3] = [1.2, 0.0, 0.0];
pub const SPHERE_END_POSITION: [f32; 3] = [0.0, 0.0, -1.5];
// Mesh is placed slightly above the scroll path until the first frames ease it
pub const SPHERE_INITIAL_POSITION: [f32; 3] = [1.2, 0.2, 0.0];
pub const SPHERE_START_SCALE: f32 = 1.4;
pub const SPHERE_END_SCALE: f32 = 1.2;

pub const SPHERE_OPACITY_REST: f32 = 0.40;
pub const SPHERE_OPACITY_FADE: f32 = 0.25;

// Camera
pub const CAMERA_Z: f32 = 4.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Shader palette as sRGB 0..1; linearised for sRGB surfaces
pub const SPHERE_COLOR_A: [f32; 3] = [0.941, 0.325, 0.110]; // #F0531C
pub const SPHERE_COLOR_B: [f32; 3] = [1.0, 0.655, 0.310]; // #FFA74F
pub const SPHERE_COLOR_RIM: [f32; 3] = [0.941, 0.325, 0.110]; // #F0531C

// ---------------- Scroll ----------------

pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

// ---------------- In-view reveals ----------------

pub const REVEAL_OFFSET: f32 = 40.0; // css px along the reveal direction
pub const REVEAL_DURATION_SEC: f32 = 0.6;
pub const REVEAL_MARGIN_PX: f32 = 80.0; // element must be this far inside the viewport
pub const REVEAL_SCALE_FROM: f32 = 0.85;
pub const REVEAL_BLUR_PX: f32 = 10.0;
pub const REVEAL_ROTATE_DEG: f32 = 8.0;
pub const REVEAL_FLIP_DEG: f32 = 15.0;
pub const REVEAL_PERSPECTIVE_PX: f32 = 800.0;
pub const REVEAL_SLIDE_FACTOR: f32 = 1.5;

pub const CARD_RISE: f32 = 24.0;
pub const CARD_DURATION_SEC: f32 = 0.5;
pub const CARD_STAGGER_SEC: f32 = 0.08;
pub const CARD_MARGIN_PX: f32 = 60.0;
pub const CARD_HOVER_LIFT: f32 = -4.0;
pub const CARD_HOVER_STIFFNESS: f32 = 400.0;
pub const CARD_HOVER_DAMPING: f32 = 25.0;

pub const DIVIDER_DURATION_SEC: f32 = 0.8;
