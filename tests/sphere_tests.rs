// Host-side tests for the hero sphere mesh and motion.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod fx {
    pub mod sphere {
        include!("../src/core/sphere.rs");
    }
}

use constants::*;
use fx::sphere::*;
use glam::Vec3;

#[test]
fn mesh_vertex_and_index_counts() {
    let mesh = uv_sphere(SPHERE_RADIUS, SPHERE_SEGMENTS, SPHERE_SEGMENTS);
    assert_eq!(mesh.vertices.len(), 4225);
    assert_eq!(mesh.indices.len(), 24192);
    assert_eq!(mesh.indices.len() % 3, 0);
    let max = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < max));
}

#[test]
fn mesh_normals_are_unit_and_radial() {
    let mesh = uv_sphere(2.0, 16, 12);
    for v in &mesh.vertices {
        let n = Vec3::from_array(v.normal);
        let p = Vec3::from_array(v.position);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!((p.length() - 2.0).abs() < 1e-5);
        assert!((p / 2.0 - n).length() < 1e-5);
    }
}

#[test]
fn targets_follow_scroll() {
    let (pos, scale) = targets(0.0);
    assert_eq!(pos, Vec3::new(1.2, 0.0, 0.0));
    assert_eq!(scale, 1.4);

    let (pos, scale) = targets(1.0);
    assert!((pos - Vec3::new(0.0, 0.0, -1.5)).length() < 1e-6);
    assert!((scale - 1.2).abs() < 1e-6);

    let (pos, scale) = targets(0.5);
    assert!((pos - Vec3::new(0.6, 0.0, -0.75)).length() < 1e-6);
    assert!((scale - 1.3).abs() < 1e-6);

    // Out-of-range progress clamps
    assert_eq!(targets(3.0), targets(1.0));
    assert_eq!(targets(-1.0), targets(0.0));
}

#[test]
fn motion_eases_toward_target() {
    let mut motion = SphereMotion::default();
    assert_eq!(motion.position, Vec3::new(1.2, 0.2, 0.0));
    assert_eq!(motion.scale, 1.4);

    motion.step(1.0);
    // One tenth of the way from (1.2, 0.2, 0) to (0, 0, -1.5)
    assert!((motion.position - Vec3::new(1.08, 0.18, -0.15)).length() < 1e-5);

    for _ in 0..300 {
        motion.step(1.0);
    }
    let (target, scale) = targets(1.0);
    assert!((motion.position - target).length() < 1e-4);
    assert!((motion.scale - scale).abs() < 1e-4);
}

#[test]
fn rotation_spins_and_nods() {
    assert_eq!(rotation(0.0), (0.0, 0.0));
    let (rx, ry) = rotation(10.0);
    assert!((ry - 0.8).abs() < 1e-6);
    assert!(rx.abs() <= SPHERE_NOD_AMPLITUDE);
}

#[test]
fn model_matrix_scales_then_translates() {
    let motion = SphereMotion::default();
    let p = motion.model_matrix(0.0).transform_point3(Vec3::X);
    assert!((p - Vec3::new(2.6, 0.2, 0.0)).length() < 1e-5);
}

#[test]
fn container_fades_over_first_viewport() {
    assert!((container_opacity(0.0, 800.0) - 0.40).abs() < 1e-6);
    assert!((container_opacity(400.0, 800.0) - 0.275).abs() < 1e-6);
    assert!((container_opacity(800.0, 800.0) - 0.15).abs() < 1e-6);
    assert!((container_opacity(4000.0, 800.0) - 0.15).abs() < 1e-6);
    assert!((container_opacity(100.0, 0.0) - 0.40).abs() < 1e-6);
}

#[test]
fn uniforms_layout() {
    assert_eq!(std::mem::size_of::<SphereUniforms>(), 192);
    assert_eq!(std::mem::size_of::<SphereVertex>(), 24);

    let u = SphereUniforms::new(&SphereMotion::default(), 16.0 / 9.0, 2.5, false);
    assert_eq!(u.camera_time, [0.0, 0.0, CAMERA_Z, 2.5]);
    assert_eq!(u.color_a[3], 1.0);
    assert_eq!(&u.color_b[..3], &SPHERE_COLOR_B[..]);
}

#[test]
fn srgb_decode_curve() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    assert!((srgb_to_linear(0.5) - 0.2140).abs() < 1e-3);
    // Linear toe below the knee
    assert!((srgb_to_linear(0.04) - 0.04 / 12.92).abs() < 1e-7);
}

#[test]
fn srgb_surface_gets_linear_colours() {
    let motion = SphereMotion::default();
    let plain = SphereUniforms::new(&motion, 1.0, 0.0, false);
    let linear = SphereUniforms::new(&motion, 1.0, 0.0, true);
    for (p, l) in [
        (plain.color_a, linear.color_a),
        (plain.color_b, linear.color_b),
        (plain.color_rim, linear.color_rim),
    ] {
        for i in 0..3 {
            assert!((l[i] - srgb_to_linear(p[i])).abs() < 1e-6);
            assert!(l[i] <= p[i]);
        }
        assert_eq!(l[3], 1.0);
    }
    // #F0531C red channel decodes to roughly 0.87
    assert!((linear.color_a[0] - 0.8714).abs() < 1e-3);
}

#[test]
fn lost_or_outdated_surface_is_reconfigured() {
    let mut faults = FaultTracker::default();
    for _ in 0..3 {
        assert_eq!(faults.on_fault(FrameFault::Lost), Recovery::Reconfigure);
        assert_eq!(faults.on_fault(FrameFault::Outdated), Recovery::Reconfigure);
    }
    assert_eq!(faults.on_fault(FrameFault::Timeout), Recovery::Skip);
}

#[test]
fn persistent_faults_are_reported_once_per_streak() {
    let mut faults = FaultTracker::default();
    assert_eq!(faults.on_fault(FrameFault::Other), Recovery::Report);
    for _ in 0..100 {
        assert_eq!(faults.on_fault(FrameFault::Other), Recovery::Skip);
    }
    assert_eq!(faults.on_fault(FrameFault::OutOfMemory), Recovery::Skip);

    faults.on_success();
    assert_eq!(faults.on_fault(FrameFault::OutOfMemory), Recovery::Report);
    assert_eq!(faults.on_fault(FrameFault::Other), Recovery::Skip);
}

#[test]
fn sphere_center_lands_in_front_of_camera() {
    let vp = view_projection(1.5);
    let clip = vp * Vec3::ZERO.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
