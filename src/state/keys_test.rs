use super::*;

#[test]
fn wasd_and_arrows_are_movement_keys() {
    let mut k = KeyState::default();
    let letters = ["w", "A", "s", "D"];
    let arrows = ["ArrowUp", "ArrowLeft", "ArrowDown", "ArrowRight"];
    for key in letters.into_iter().chain(arrows) {
        assert!(k.press(key), "{key} should be tracked");
    }
    assert!(k.w && k.a && k.s && k.d);
    assert!(k.up && k.left && k.down && k.right);
}

#[test]
fn other_keys_ignored() {
    let mut k = KeyState::default();
    assert!(!k.press("Enter"));
    assert!(!k.press("q"));
    assert!(!k.press("arrowup"));
    assert!(!k.any());
}

#[test]
fn release_clears_only_that_flag() {
    let mut k = KeyState::default();
    k.press("w");
    k.press("ArrowLeft");
    k.release("W");
    assert!(!k.w);
    assert!(k.left);
    assert!(k.any());
}

#[test]
fn direction_follows_camera_move_convention() {
    let mut k = KeyState::default();
    k.press("a");
    k.press("w");
    assert_eq!(k.direction(), Point::new(1.0, 1.0));

    k.clear();
    k.press("ArrowRight");
    k.press("ArrowDown");
    assert_eq!(k.direction(), Point::new(-1.0, -1.0));
}

#[test]
fn opposing_keys_cancel() {
    let mut k = KeyState::default();
    k.press("a");
    k.press("d");
    assert!(k.any());
    assert_eq!(k.direction(), Point::new(0.0, 0.0));
}

#[test]
fn letter_and_arrow_on_same_axis_do_not_double() {
    let mut k = KeyState::default();
    k.press("a");
    k.press("ArrowLeft");
    assert_eq!(k.direction(), Point::new(1.0, 0.0));
}

#[test]
fn clock_first_frame_is_zero() {
    let mut c = FrameClock::default();
    assert_eq!(c.advance(1_000.0, 0.05), 0.0);
}

#[test]
fn clock_measures_elapsed_seconds() {
    let mut c = FrameClock::default();
    c.advance(1_000.0, 0.05);
    let dt = c.advance(1_016.0, 0.05);
    assert!((dt - 0.016).abs() < 1e-12);
}

#[test]
fn clock_caps_long_stalls() {
    let mut c = FrameClock::default();
    c.advance(0.0, 0.05);
    assert_eq!(c.advance(5_000.0, 0.05), 0.05);
}

#[test]
fn clock_never_goes_negative() {
    let mut c = FrameClock::default();
    c.advance(500.0, 0.05);
    assert_eq!(c.advance(400.0, 0.05), 0.0);
}
