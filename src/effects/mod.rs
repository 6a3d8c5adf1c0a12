pub mod ambient;
pub mod glow;
pub mod header;
pub mod motion;
pub mod palette;
pub mod particles;
pub mod reveal;
pub mod sphere;
