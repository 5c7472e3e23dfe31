use super::*;

fn open(id: &str) -> SelectionAction {
    SelectionAction::Open(id.to_string())
}

#[test]
fn starts_idle() {
    let s = Selection::default();
    assert_eq!(s.phase(), SelectionPhase::Idle);
    assert!(!s.is_modal_open());
}

#[test]
fn open_from_idle_is_active() {
    let s = Selection::default().apply(open("x"));
    assert_eq!(s.phase(), SelectionPhase::Active("x"));
    assert_eq!(s.selected_id.as_deref(), Some("x"));
    assert_eq!(s.active_id.as_deref(), Some("x"));
}

#[test]
fn close_keeps_selection() {
    let s = Selection::default().apply(open("x")).apply(SelectionAction::Close);
    assert_eq!(s.phase(), SelectionPhase::Selected("x"));
    assert!(!s.is_modal_open());
}

#[test]
fn escape_behaves_like_close() {
    let a = Selection::default().apply(open("x")).apply(SelectionAction::Escape);
    let b = Selection::default().apply(open("x")).apply(SelectionAction::Close);
    assert_eq!(a, b);
}

#[test]
fn open_other_from_selected_goes_straight_to_active() {
    let s = Selection::default()
        .apply(open("x"))
        .apply(SelectionAction::Close)
        .apply(open("y"));
    assert_eq!(s.phase(), SelectionPhase::Active("y"));
    assert_eq!(s.selected_id.as_deref(), Some("y"));
}

#[test]
fn reset_returns_to_idle() {
    let s = Selection::default().apply(open("x")).apply(SelectionAction::Reset);
    assert_eq!(s, Selection::default());
}

#[test]
fn close_from_idle_stays_idle() {
    let s = Selection::default().apply(SelectionAction::Close);
    assert_eq!(s.phase(), SelectionPhase::Idle);
}

#[test]
fn active_always_matches_selected() {
    let actions = [
        open("a"),
        SelectionAction::Escape,
        open("b"),
        open("c"),
        SelectionAction::Close,
        SelectionAction::Reset,
        open("a"),
    ];
    let mut s = Selection::default();
    for action in actions {
        s = s.apply(action);
        if let Some(active) = &s.active_id {
            assert_eq!(s.selected_id.as_ref(), Some(active));
        }
    }
}

#[test]
fn reducer_returns_same_rc_on_noop() {
    let s = Rc::new(Selection::default());
    let next = s.clone().reduce(SelectionAction::Escape);
    assert!(Rc::ptr_eq(&s, &next));
}

#[test]
fn reducer_applies_transition() {
    let s = Rc::new(Selection::default());
    let next = s.reduce(open("b"));
    assert_eq!(next.active_id.as_deref(), Some("b"));
}
