// Host-side tests for the floating particles, backdrop glows and keyframe timing.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod fx {
    pub mod backdrop {
        include!("../src/core/backdrop.rs");
    }
    pub mod floating {
        include!("../src/core/floating.rs");
    }
    pub mod timeline {
        include!("../src/core/timeline.rs");
    }
}

use constants::*;
use fx::backdrop::*;
use fx::floating::*;
use fx::timeline::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn generated_particles_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(42);
    let particles = generate(200, &mut rng);
    assert_eq!(particles.len(), 200);
    for (i, p) in particles.iter().enumerate() {
        assert_eq!(p.id, i);
        assert!((0.0..=100.0).contains(&p.x));
        assert!((0.0..=100.0).contains(&p.y));
        assert!(p.size >= FLOATING_SIZE_MIN && p.size <= FLOATING_SIZE_MAX);
        assert!(p.duration_sec >= FLOATING_DURATION_MIN_SEC);
        assert!(p.duration_sec <= FLOATING_DURATION_MAX_SEC);
        assert!(p.delay_sec >= 0.0 && p.delay_sec <= FLOATING_DELAY_MAX_SEC);
        assert!(p.drift.abs() <= FLOATING_DRIFT_MAX);
    }
}

#[test]
fn every_third_particle_is_primary() {
    let mut rng = StdRng::seed_from_u64(1);
    let particles = generate(DEFAULT_FLOATING_COUNT, &mut rng);
    let primaries = particles
        .iter()
        .filter(|p| p.tint() == Tint::Primary)
        .count();
    assert_eq!(primaries, 10);
    assert_eq!(Tint::for_index(0), Tint::Primary);
    assert_eq!(Tint::for_index(1), Tint::Accent);
    assert_eq!(Tint::for_index(2), Tint::Accent);
    assert_eq!(Tint::for_index(3), Tint::Primary);
}

#[test]
fn style_places_and_tints() {
    let p = FloatingParticle {
        id: 4,
        x: 25.0,
        y: 50.0,
        size: 2.0,
        duration_sec: 8.0,
        delay_sec: 1.0,
        drift: 5.0,
    };
    let style = p.style();
    assert!(style.contains("left:25%;top:50%;"));
    assert!(style.contains("width:2px;height:2px;"));
    assert!(style.contains("hsl(var(--accent) / 0.2)"));
}

#[test]
fn keyframes_rise_and_return() {
    let p = FloatingParticle {
        id: 0,
        x: 0.0,
        y: 0.0,
        size: 1.0,
        duration_sec: 10.0,
        delay_sec: 2.0,
        drift: -6.0,
    };
    let [a, mid, b] = p.keyframes();
    assert_eq!(a.offset, 0.0);
    assert_eq!(b.offset, 1.0);
    assert_eq!(a.opacity, FLOATING_OPACITY_REST);
    assert_eq!(b.translate, a.translate);
    assert_eq!(mid.translate, [-6.0, FLOATING_RISE]);
    assert_eq!(mid.scale, FLOATING_SCALE_PEAK);
    assert_eq!(mid.opacity, FLOATING_OPACITY_PEAK);
    assert_eq!(a.transform(), "translate(0px, 0px) scale(1)");
    assert_eq!(mid.transform(), "translate(-6px, -40px) scale(1.5)");
}

#[test]
fn sampling_follows_the_loop() {
    let p = FloatingParticle {
        id: 0,
        x: 0.0,
        y: 0.0,
        size: 1.0,
        duration_sec: 10.0,
        delay_sec: 2.0,
        drift: 4.0,
    };
    let frames = p.keyframes();
    let timing = p.timing();

    // Held at the first keyframe until the delay passes
    assert_eq!(sample(&frames, &timing, 1.0), Some(frames[0]));

    let mid = sample(&frames, &timing, 2.0 + 5.0).unwrap();
    assert!(approx(mid.translate[1], -40.0));
    assert!(approx(mid.opacity, 0.5));
    assert!(approx(mid.scale, 1.5));

    // A quarter in, ease-in-out is exactly half way up the first segment
    let quarter = sample(&frames, &timing, 2.0 + 2.5).unwrap();
    assert!(approx(quarter.translate[1], -20.0));

    // Loops forever
    let again = sample(&frames, &timing, 2.0 + 10.0 + 5.0).unwrap();
    assert!(approx(again.translate[1], -40.0));

    assert_eq!(sample(&[], &timing, 3.0), None);
}

#[test]
fn ease_in_out_curve() {
    assert_eq!(cubic_bezier(0.42, 0.0, 0.58, 1.0, 0.0), 0.0);
    assert!(approx(cubic_bezier(0.42, 0.0, 0.58, 1.0, 1.0), 1.0));
    assert!(approx(cubic_bezier(0.42, 0.0, 0.58, 1.0, 0.5), 0.5));
    // Slow start, slow finish
    assert!(Easing::EaseInOut.apply(0.1) < 0.1);
    assert!(Easing::EaseInOut.apply(0.9) > 0.9);
    assert_eq!(Easing::EaseInOut.css(), "ease-in-out");
    assert_eq!(Easing::Ease.css(), "ease");
    // `ease` front-loads its progress
    assert!(Easing::Ease.apply(0.5) > 0.75);
    assert!(approx(Easing::Ease.apply(1.0), 1.0));
}

#[test]
fn floating_count_from_attrs() {
    assert_eq!(FloatingParams::from_attrs(None).count, DEFAULT_FLOATING_COUNT);
    assert_eq!(FloatingParams::from_attrs(Some(" 12 ")).count, 12);
    assert_eq!(FloatingParams::from_attrs(Some("many")).count, DEFAULT_FLOATING_COUNT);
    assert_eq!(FloatingParams::from_attrs(Some("-3")).count, DEFAULT_FLOATING_COUNT);
}

#[test]
fn floating_count_is_capped() {
    assert_eq!(FloatingParams::from_attrs(Some("200")).count, FLOATING_COUNT_MAX);
    assert_eq!(FloatingParams::from_attrs(Some("201")).count, DEFAULT_FLOATING_COUNT);
    assert_eq!(
        FloatingParams::from_attrs(Some("4000000000")).count,
        DEFAULT_FLOATING_COUNT
    );
    assert_eq!(FloatingParams::from_attrs(Some("0")).count, 0);
}

#[test]
fn backdrop_blobs_breathe() {
    assert_eq!(GLOW_BLOBS.len(), 2);
    let [first, second] = GLOW_BLOBS;
    assert_eq!(first.timing.duration_sec, 10.0);
    assert_eq!(first.timing.delay_sec, 0.0);
    assert_eq!(second.timing.duration_sec, 14.0);
    assert_eq!(second.timing.delay_sec, 3.0);

    for blob in GLOW_BLOBS {
        let [a, mid, b] = blob.keyframes();
        assert_eq!(a, Keyframe { offset: 0.0, ..b });
        assert_eq!(mid.scale, blob.scale_peak);
        assert_eq!(a.opacity, blob.opacity[0]);
        assert_eq!(mid.opacity, blob.opacity[1]);
        assert!(mid.opacity > a.opacity);
    }
    assert!(first.style.contains("--glow-accent"));
    assert!(first.style.contains("--glow-primary"));
    assert!(second.style.contains("--glow-secondary"));
    assert!(!second.style.contains("--glow-accent"));
}

#[test]
fn vignette_covers_and_fades_to_background() {
    assert!(VIGNETTE_STYLE.contains("inset:0"));
    assert!(VIGNETTE_STYLE.contains("transparent 0%"));
    assert!(VIGNETTE_STYLE.contains("hsl(var(--background)) 80%"));
}
