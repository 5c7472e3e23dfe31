use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn limits() -> ViewportLimits {
    ViewportLimits {
        min_px: 18.0,
        overflow: 0.25,
    }
}

fn projection() -> MinimapProjection {
    let bounds = WorldBounds::around([Point::new(0.0, 0.0), Point::new(100.0, 100.0)], 720.0);
    MinimapProjection::new(bounds, Size::new(200.0, 140.0)).unwrap()
}

// --- Bounds ---

#[test]
fn bounds_pad_the_bounding_box() {
    let cmf = Point::new(-420.0, 220.0);
    let zephira = Point::new(520.0, 90.0);
    let fraternita = Point::new(140.0, 520.0);
    let b = WorldBounds::around([cmf, zephira, fraternita], 720.0);
    let expected = WorldBounds {
        min_x: -1140.0,
        min_y: -630.0,
        max_x: 1240.0,
        max_y: 1240.0,
    };
    assert_eq!(b, expected);
}

#[test]
fn empty_bounds_fall_back_to_symmetric_box() {
    let b = WorldBounds::around(std::iter::empty(), 720.0);
    assert_eq!(b, WorldBounds::FALLBACK);
    assert_eq!(b.width(), 2000.0);
}

#[test]
fn single_point_still_has_area() {
    let b = WorldBounds::around([Point::new(5.0, 5.0)], 720.0);
    assert_eq!(b.width(), 1440.0);
    let size = Size::new(200.0, 140.0);
    assert!(MinimapProjection::new(b, size).is_some());
}

#[test]
fn degenerate_inputs_have_no_projection() {
    let flat = WorldBounds::around([Point::new(5.0, 5.0)], 0.0);
    let size = Size::new(200.0, 140.0);
    assert!(MinimapProjection::new(flat, size).is_none());
    let empty = Size::new(0.0, 140.0);
    let fallback = WorldBounds::FALLBACK;
    assert!(MinimapProjection::new(fallback, empty).is_none());
}

// --- Markers ---

#[test]
fn bounds_corners_map_to_minimap_corners() {
    let p = projection();
    let b = p.bounds();
    let tl = p.world_to_minimap(Point::new(b.min_x, b.min_y));
    let br = p.world_to_minimap(Point::new(b.max_x, b.max_y));
    assert!(approx_eq(tl.x, 0.0) && approx_eq(tl.y, 0.0));
    assert!(approx_eq(br.x, 200.0) && approx_eq(br.y, 140.0));
}

#[test]
fn minimap_to_world_inverts_projection() {
    let p = projection();
    let w = Point::new(37.0, -212.5);
    let back = p.minimap_to_world(p.world_to_minimap(w));
    assert!(approx_eq(back.x, w.x) && approx_eq(back.y, w.y));
}

// --- Viewport ---

#[test]
fn viewport_center_matches_stage_center() {
    let p = projection();
    let container = Size::new(800.0, 600.0);
    for cam in [
        Camera::new(400.0, 300.0, 1.0),
        Camera::new(250.0, 410.0, 1.37),
        Camera::new(610.0, 120.0, 0.65),
    ] {
        let rect = p.viewport(cam, container, limits()).unwrap();
        let expected = p.world_to_minimap(cam.screen_to_world(container.center()));
        let got = rect.center();
        assert!((got.x - expected.x).abs() < 1e-6, "{got:?} vs {expected:?}");
        assert!((got.y - expected.y).abs() < 1e-6, "{got:?} vs {expected:?}");
    }
}

#[test]
fn viewport_size_scales_with_visible_world() {
    let p = projection();
    let cam = Camera::new(400.0, 300.0, 1.0);
    let rect = p.viewport(cam, Size::new(800.0, 600.0), limits()).unwrap();
    assert!(approx_eq(rect.width, 800.0 / 1540.0 * 200.0));
    assert!(approx_eq(rect.height, 600.0 / 1540.0 * 140.0));
}

#[test]
fn tiny_viewport_is_floored_around_its_center() {
    let p = projection();
    let cam = Camera::new(400.0, 300.0, 200.0);
    let container = Size::new(800.0, 600.0);
    let rect = p.viewport(cam, container, limits()).unwrap();
    assert_eq!(rect.width, 18.0);
    assert_eq!(rect.height, 18.0);
    let expected = p.world_to_minimap(cam.screen_to_world(container.center()));
    assert!((rect.center().x - expected.x).abs() < 1e-6);
}

#[test]
fn far_away_viewport_stays_within_overflow_margin() {
    let p = projection();
    let cam = Camera::new(1.0e6, -1.0e6, 1.0);
    let rect = p.viewport(cam, Size::new(800.0, 600.0), limits()).unwrap();
    assert!(rect.x >= -50.0);
    assert!(rect.y + rect.height <= 140.0 * 1.25 + EPSILON);
    assert!(rect.width >= 18.0 && rect.height >= 18.0);
}

#[test]
fn huge_viewport_is_capped() {
    let p = projection();
    let cam = Camera::new(0.0, 0.0, 0.01);
    let rect = p.viewport(cam, Size::new(800.0, 600.0), limits()).unwrap();
    assert!(approx_eq(rect.width, 300.0));
    assert!(approx_eq(rect.x, -50.0));
}

#[test]
fn viewport_needs_measured_container() {
    let p = projection();
    let cam = Camera::default();
    assert!(p.viewport(cam, Size::default(), limits()).is_none());
}
