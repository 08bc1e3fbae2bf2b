use super::*;

fn card_box() -> Bounds {
    Bounds { left: 100.0, top: 50.0, width: 200.0, height: 100.0 }
}

// =============================================================
// Normalization
// =============================================================

#[test]
fn normalize_maps_box_to_unit_square() {
    let b = card_box();
    assert_eq!(b.normalize(100.0, 50.0), Some((0.0, 0.0)));
    assert_eq!(b.normalize(300.0, 150.0), Some((1.0, 1.0)));
    assert_eq!(b.normalize(200.0, 100.0), Some((0.5, 0.5)));
}

#[test]
fn empty_box_has_no_normalized_position() {
    let b = Bounds { left: 0.0, top: 0.0, width: 0.0, height: 10.0 };
    assert_eq!(b.normalize(0.0, 0.0), None);
}

// =============================================================
// Card tilt
// =============================================================

#[test]
fn centered_pointer_gives_flat_card() {
    let t = card_tilt(TiltParams::default(), card_box(), 200.0, 100.0);
    assert_eq!(t.card, "perspective(800px) rotateX(0deg) rotateY(0deg)");
    assert_eq!(t.body, "translateZ(12px)");
}

#[test]
fn top_left_corner_tilts_toward_pointer() {
    let t = card_tilt(TiltParams::default(), card_box(), 100.0, 50.0);
    assert_eq!(t.card, "perspective(800px) rotateX(-4deg) rotateY(4deg)");
}

#[test]
fn bottom_right_corner_tilts_the_other_way() {
    let t = card_tilt(TiltParams::default(), card_box(), 300.0, 150.0);
    assert_eq!(t.card, "perspective(800px) rotateX(4deg) rotateY(-4deg)");
}

#[test]
fn empty_card_stays_neutral() {
    let b = Bounds { left: 0.0, top: 0.0, width: 0.0, height: 0.0 };
    assert_eq!(card_tilt(TiltParams::default(), b, 5.0, 5.0), CardTransform::neutral());
}

// =============================================================
// Hero parallax
// =============================================================

#[test]
fn hero_center_is_neutral_offset() {
    let hero = Bounds { left: 0.0, top: 0.0, width: 1000.0, height: 500.0 };
    assert_eq!(hero_parallax(ParallaxParams::default(), hero, 500.0, 250.0), "translate3d(0px,0px,0) rotate(0deg)");
}

#[test]
fn hero_corner_shifts_and_rotates() {
    let hero = Bounds { left: 0.0, top: 0.0, width: 1000.0, height: 500.0 };
    assert_eq!(
        hero_parallax(ParallaxParams::default(), hero, 1000.0, 500.0),
        "translate3d(4px,4px,0) rotate(1.5deg)"
    );
    assert_eq!(
        hero_parallax(ParallaxParams::default(), hero, 0.0, 0.0),
        "translate3d(-4px,-4px,0) rotate(-1.5deg)"
    );
}

#[test]
fn hero_parameters_are_independent_of_card_parameters() {
    let hero = Bounds { left: 0.0, top: 0.0, width: 100.0, height: 100.0 };
    let params = ParallaxParams { shift_px: 20.0, rotate_deg: 0.0 };
    assert_eq!(hero_parallax(params, hero, 100.0, 50.0), "translate3d(10px,0px,0) rotate(0deg)");
}
