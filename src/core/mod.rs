pub mod backdrop;
pub mod floating;
pub mod palette;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod sphere;
pub mod spring;
pub mod style;
pub mod ticker;
pub mod timeline;

pub use particles::{ParticleField, ParticleFieldParams, Surface2d};
pub use sphere::{uv_sphere, SphereMotion, SphereUniforms, SphereVertex};
pub use spring::GlowTracker;
pub use style::StyleSink;
pub use ticker::{FrameLoop, FrameScheduler};

// Shaders bundled as string constants
pub static SPHERE_WGSL: &str = include_str!("../shaders/sphere.wgsl");
