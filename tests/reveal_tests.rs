// Host-side tests for in-view reveals, card entrances and the hover lift.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod fx {
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
    pub mod spring {
        include!("../src/core/spring.rs");
    }
    pub mod timeline {
        include!("../src/core/timeline.rs");
    }
}

use constants::*;
use fx::reveal::*;
use fx::timeline::Easing;

const DT: f32 = 1.0 / 60.0;

const VARIANTS: [Variant; 6] = [
    Variant::Fade,
    Variant::Slide,
    Variant::Scale,
    Variant::Blur,
    Variant::Rotate,
    Variant::Flip,
];
const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn directions_start_forty_px_away() {
    assert_eq!(Direction::Up.offset(), [0.0, 40.0]);
    assert_eq!(Direction::Down.offset(), [0.0, -40.0]);
    assert_eq!(Direction::Left.offset(), [40.0, 0.0]);
    assert_eq!(Direction::Right.offset(), [-40.0, 0.0]);
}

#[test]
fn attribute_names_map_to_variants() {
    assert_eq!(Variant::from_attr(None), Variant::Fade);
    assert_eq!(Variant::from_attr(Some("")), Variant::Fade);
    assert_eq!(Variant::from_attr(Some(" blur ")), Variant::Blur);
    assert_eq!(Variant::from_attr(Some("flip")), Variant::Flip);
    assert_eq!(Variant::from_attr(Some("spin")), Variant::Fade);
    assert_eq!(Direction::from_attr(Some("left")), Direction::Left);
    assert_eq!(Direction::from_attr(Some("sideways")), Direction::Up);
    assert_eq!(Direction::from_attr(None), Direction::Up);
}

#[test]
fn fade_moves_and_fades_only() {
    let hidden = Variant::Fade.hidden(Direction::Up);
    assert_eq!(hidden.opacity, 0.0);
    assert_eq!(hidden.translate, [0.0, 40.0]);
    assert_eq!(hidden.scale, [1.0, 1.0]);
    assert_eq!(hidden.filter(), None);
    assert_eq!(
        hidden.transform(),
        "translate(0px, 40px) rotate(0deg) rotateX(0deg) scale(1, 1)"
    );
    assert_eq!(Variant::Fade.shown(), RevealFrame::REST);
}

#[test]
fn slide_travels_further() {
    let hidden = Variant::Slide.hidden(Direction::Left);
    assert_eq!(hidden.translate, [60.0, 0.0]);
    assert_eq!(Variant::Slide.hidden(Direction::Down).translate, [0.0, -60.0]);
}

#[test]
fn scale_grows_from_smaller_with_half_the_travel() {
    let hidden = Variant::Scale.hidden(Direction::Up);
    assert_eq!(hidden.scale, [0.85, 0.85]);
    assert_eq!(hidden.translate, [0.0, 20.0]);
    assert!(hidden.transform().ends_with("scale(0.85, 0.85)"));
}

#[test]
fn blur_clears_to_sharp() {
    let hidden = Variant::Blur.hidden(Direction::Up);
    let shown = Variant::Blur.shown();
    assert_eq!(hidden.filter().as_deref(), Some("blur(10px)"));
    assert_eq!(shown.filter().as_deref(), Some("blur(0px)"));
    assert_eq!(shown.opacity, 1.0);
}

#[test]
fn rotate_tilts_against_direction() {
    assert_eq!(Variant::Rotate.hidden(Direction::Left).rotate_deg, -8.0);
    assert_eq!(Variant::Rotate.hidden(Direction::Right).rotate_deg, 8.0);
    assert_eq!(Variant::Rotate.hidden(Direction::Up).rotate_deg, 8.0);
    assert_eq!(Variant::Rotate.shown().rotate_deg, 0.0);
}

#[test]
fn flip_tips_back_in_perspective() {
    let hidden = Variant::Flip.hidden(Direction::Up);
    assert_eq!(hidden.rotate_x_deg, 15.0);
    assert_eq!(hidden.translate, [0.0, 40.0]);
    // Horizontal directions do not move a flip sideways
    assert_eq!(Variant::Flip.hidden(Direction::Left).translate, [0.0, 0.0]);
    assert_eq!(
        hidden.transform(),
        "perspective(800px) translate(0px, 40px) rotate(0deg) rotateX(15deg) scale(1, 1)"
    );
    assert!(Variant::Flip
        .shown()
        .transform()
        .starts_with("perspective(800px) translate(0px, 0px)"));
}

#[test]
fn both_ends_share_optional_functions() {
    for v in VARIANTS {
        for d in DIRECTIONS {
            let (hidden, shown) = (v.hidden(d), v.shown());
            assert_eq!(hidden.blur_px.is_some(), shown.blur_px.is_some(), "{v:?}");
            assert_eq!(hidden.perspective_px, shown.perspective_px, "{v:?}");
            assert_eq!(hidden.opacity, 0.0);
            assert_eq!(shown.opacity, 1.0);
            assert_eq!(shown.translate, [0.0, 0.0]);
        }
    }
}

#[test]
fn reveal_defaults_from_bare_attribute() {
    let r = Reveal::from_attrs(None, None, None, None, None);
    assert_eq!(r.hidden, Variant::Fade.hidden(Direction::Up));
    assert_eq!(r.shown, RevealFrame::REST);
    assert_eq!(r.transition.duration_sec, REVEAL_DURATION_SEC);
    assert_eq!(r.transition.delay_sec, 0.0);
    assert_eq!(r.transition.easing, Easing::Ease);
    assert!(r.once);
}

#[test]
fn reveal_timing_attributes() {
    let r = Reveal::from_attrs(Some("scale"), Some("right"), Some("0.3"), Some(" 1.2 "), None);
    assert_eq!(r.hidden, Variant::Scale.hidden(Direction::Right));
    assert_eq!(r.transition.delay_sec, 0.3);
    assert_eq!(r.transition.duration_sec, 1.2);

    // Negative, non-finite or malformed values keep the defaults
    for bad in ["-1", "NaN", "inf", "soon"] {
        let r = Reveal::from_attrs(None, None, Some(bad), Some(bad), None);
        assert_eq!(r.transition.delay_sec, 0.0, "{bad}");
        assert_eq!(r.transition.duration_sec, REVEAL_DURATION_SEC, "{bad}");
    }
}

#[test]
fn only_false_repeats_the_reveal() {
    let once = |v: Option<&str>| Reveal::from_attrs(None, None, None, None, v).once;
    assert!(once(None));
    assert!(once(Some("true")));
    assert!(once(Some("")));
    assert!(!once(Some("false")));
    assert!(!once(Some(" false ")));
}

#[test]
fn cards_rise_in_sequence() {
    let first = Reveal::card(0);
    assert_eq!(first.hidden.translate, [0.0, CARD_RISE]);
    assert_eq!(first.hidden.opacity, 0.0);
    assert_eq!(first.shown, RevealFrame::REST);
    assert_eq!(first.transition.duration_sec, 0.5);
    assert_eq!(first.transition.delay_sec, 0.0);
    assert!(first.once);

    assert!(approx(Reveal::card(3).transition.delay_sec, 0.24));
    assert_eq!(parse_card_index(None), 0);
    assert_eq!(parse_card_index(Some(" 5 ")), 5);
    assert_eq!(parse_card_index(Some("-1")), 0);
    assert_eq!(parse_card_index(Some("third")), 0);
}

#[test]
fn divider_grows_horizontally() {
    let d = Reveal::divider();
    assert_eq!(d.hidden.scale, [0.0, 1.0]);
    assert_eq!(d.hidden.opacity, 1.0);
    assert_eq!(d.shown, RevealFrame::REST);
    assert_eq!(d.transition.duration_sec, DIVIDER_DURATION_SEC);
    assert!(d.hidden.transform().ends_with("scale(0, 1)"));
}

#[test]
fn hover_lift_springs_up_and_back() {
    let mut lift = HoverLift::default();
    assert_eq!(lift.translate(), "0px 0.00px");
    assert!(lift.axis.is_at_rest());

    lift.set_hovered(true);
    let mut lowest = 0.0f32;
    let mut settled = false;
    for _ in 0..600 {
        settled = lift.step(DT);
        lowest = lowest.min(lift.axis.value);
        if settled {
            break;
        }
    }
    assert!(settled);
    // ζ = 0.625 overshoots the lift a little before settling
    assert!(lowest < CARD_HOVER_LIFT - 0.1);
    assert_eq!(lift.axis.value, CARD_HOVER_LIFT);
    assert_eq!(lift.translate(), "0px -4.00px");

    lift.set_hovered(false);
    for _ in 0..600 {
        if lift.step(DT) {
            break;
        }
    }
    assert_eq!(lift.axis.value, 0.0);
}

#[test]
fn hover_spring_is_under_damped() {
    let spring = HoverLift::default().axis.spring;
    assert!((spring.damping_ratio() - 0.625).abs() < 1e-6);
    assert!((spring.natural_frequency() - 20.0).abs() < 1e-6);
}

#[test]
fn reveal_easing_is_css_ease() {
    assert_eq!(Easing::Ease.css(), "ease");
    assert!(Easing::Ease.apply(0.5) > 0.75);
    assert_eq!(Easing::Ease.apply(0.0), 0.0);
}
