use super::*;

#[test]
fn idle_by_default() {
    let d = DragState::default();
    assert!(!d.is_active());
    assert_eq!(d.pointer_id(), None);
}

#[test]
fn move_translates_one_to_one() {
    let mut d = DragState::default();
    let offset = Point::new(400.0, 300.0);
    assert!(d.begin(1, Point::new(100.0, 100.0), offset));
    let m = d.move_to(1, Point::new(130.0, 80.0), 4.0).unwrap();
    assert_eq!(m.offset, Point::new(430.0, 280.0));
}

#[test]
fn second_pointer_ignored_while_dragging() {
    let mut d = DragState::default();
    assert!(d.begin(1, Point::new(0.0, 0.0), Point::new(0.0, 0.0)));
    assert!(!d.begin(2, Point::new(50.0, 50.0), Point::new(9.0, 9.0)));
    assert!(d.move_to(2, Point::new(60.0, 60.0), 4.0).is_none());
    assert!(!d.end(2));
    assert_eq!(d.pointer_id(), Some(1));
}

#[test]
fn end_with_owner_releases() {
    let mut d = DragState::default();
    d.begin(7, Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    assert!(d.end(7));
    assert!(!d.is_active());
    assert!(d.move_to(7, Point::new(1.0, 1.0), 4.0).is_none());
}

#[test]
fn small_move_keeps_click() {
    let mut d = DragState::default();
    d.begin(1, Point::new(10.0, 10.0), Point::new(0.0, 0.0));
    let m = d.move_to(1, Point::new(12.0, 11.0), 4.0).unwrap();
    assert!(!m.promoted_now);
    d.end(1);
    assert!(!d.take_click_suppression());
}

#[test]
fn promoted_drag_suppresses_following_click_once() {
    let mut d = DragState::default();
    d.begin(1, Point::new(10.0, 10.0), Point::new(0.0, 0.0));
    let first = d.move_to(1, Point::new(30.0, 10.0), 4.0).unwrap();
    assert!(first.promoted_now);
    let second = d.move_to(1, Point::new(40.0, 10.0), 4.0).unwrap();
    assert!(!second.promoted_now);
    d.end(1);
    assert!(d.take_click_suppression());
    assert!(!d.take_click_suppression());
}

#[test]
fn next_press_clears_stale_suppression() {
    let mut d = DragState::default();
    d.begin(1, Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    d.move_to(1, Point::new(50.0, 0.0), 4.0);
    d.end(1);
    d.begin(2, Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    d.end(2);
    assert!(!d.take_click_suppression());
}
