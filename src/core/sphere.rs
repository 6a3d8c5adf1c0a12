use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct SphereMesh {
    pub vertices: Vec<SphereVertex>,
    pub indices: Vec<u32>,
}

/// Latitude/longitude sphere. Rows run pole to pole, the pole rows emit a
/// single triangle per quad.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> SphereMesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut vertices = Vec::with_capacity(((ws + 1) * (hs + 1)) as usize);
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * std::f32::consts::PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * std::f32::consts::TAU;
            let n = Vec3::new(-phi.cos() * theta.sin(), theta.cos(), phi.sin() * theta.sin());
            vertices.push(SphereVertex {
                position: (n * radius).to_array(),
                normal: n.normalize_or_zero().to_array(),
            });
        }
    }
    let row = ws + 1;
    let mut indices = Vec::with_capacity((ws * hs * 6) as usize);
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    SphereMesh { vertices, indices }
}

/// Scroll target for the mesh: position and uniform scale.
pub fn targets(progress: f32) -> (Vec3, f32) {
    let p = progress.clamp(0.0, 1.0);
    let start = Vec3::from_array(SPHERE_START_POSITION);
    let end = Vec3::from_array(SPHERE_END_POSITION);
    (
        start.lerp(end, p),
        SPHERE_START_SCALE + (SPHERE_END_SCALE - SPHERE_START_SCALE) * p,
    )
}

/// (nod about X, spin about Y) at `t` seconds.
#[inline]
pub fn rotation(t: f32) -> (f32, f32) {
    (
        (t * SPHERE_NOD_RATE).sin() * SPHERE_NOD_AMPLITUDE,
        t * SPHERE_SPIN_RATE,
    )
}

/// Container opacity: fades over the first viewport of scroll.
#[inline]
pub fn container_opacity(scroll_y: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return SPHERE_OPACITY_REST as f64;
    }
    let progress = (scroll_y / viewport_height).min(1.0);
    SPHERE_OPACITY_REST as f64 - SPHERE_OPACITY_FADE as f64 * progress
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereMotion {
    pub position: Vec3,
    pub scale: f32,
}

impl Default for SphereMotion {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(SPHERE_INITIAL_POSITION),
            scale: SPHERE_START_SCALE,
        }
    }
}

impl SphereMotion {
    /// Ease a fixed fraction toward the scroll target.
    pub fn step(&mut self, progress: f32) {
        let (target_pos, target_scale) = targets(progress);
        self.position = self.position.lerp(target_pos, SPHERE_EASE);
        self.scale += (target_scale - self.scale) * SPHERE_EASE;
    }

    pub fn model_matrix(&self, t: f32) -> Mat4 {
        let (rx, ry) = rotation(t);
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_euler(EulerRot::XYZ, rx, ry, 0.0),
            self.position,
        )
    }
}

pub fn camera_eye() -> Vec3 {
    Vec3::new(0.0, 0.0, CAMERA_Z)
}

pub fn view_projection(aspect: f32) -> Mat4 {
    let proj = Mat4::perspective_rh(
        CAMERA_FOV_DEG.to_radians(),
        aspect.max(1e-3),
        CAMERA_NEAR,
        CAMERA_FAR,
    );
    let view = Mat4::look_at_rh(camera_eye(), Vec3::ZERO, Vec3::Y);
    proj * view
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    /// xyz = camera position, w = time in seconds
    pub camera_time: [f32; 4],
    pub color_a: [f32; 4],
    pub color_b: [f32; 4],
    pub color_rim: [f32; 4],
}

/// sRGB transfer function inverse, per channel.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl SphereUniforms {
    /// `linear_output` is true when the surface encodes sRGB on write, in
    /// which case the palette is handed to the shader in linear space.
    pub fn new(motion: &SphereMotion, aspect: f32, t: f32, linear_output: bool) -> Self {
        let eye = camera_eye();
        let rgb = |c: [f32; 3]| {
            let c = if linear_output {
                c.map(srgb_to_linear)
            } else {
                c
            };
            [c[0], c[1], c[2], 1.0]
        };
        Self {
            view_proj: view_projection(aspect).to_cols_array_2d(),
            model: motion.model_matrix(t).to_cols_array_2d(),
            camera_time: [eye.x, eye.y, eye.z, t],
            color_a: rgb(SPHERE_COLOR_A),
            color_b: rgb(SPHERE_COLOR_B),
            color_rim: rgb(SPHERE_COLOR_RIM),
        }
    }
}

/// Why a frame could not be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameFault {
    Lost,
    Outdated,
    Timeout,
    OutOfMemory,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery {
    /// Configure the surface again and carry on next frame.
    Reconfigure,
    /// Drop this frame quietly.
    Skip,
    /// Drop this frame and log the fault.
    Report,
}

/// Per-frame fault policy. A lost or outdated surface is reconfigured; any
/// other fault is reported once per run of consecutive failures.
#[derive(Clone, Copy, Debug, Default)]
pub struct FaultTracker {
    streak: u32,
}

impl FaultTracker {
    #[inline]
    pub fn on_success(&mut self) {
        self.streak = 0;
    }

    pub fn on_fault(&mut self, fault: FrameFault) -> Recovery {
        match fault {
            FrameFault::Lost | FrameFault::Outdated => Recovery::Reconfigure,
            FrameFault::Timeout => Recovery::Skip,
            FrameFault::OutOfMemory | FrameFault::Other => {
                self.streak += 1;
                if self.streak == 1 {
                    Recovery::Report
                } else {
                    Recovery::Skip
                }
            }
        }
    }
}
