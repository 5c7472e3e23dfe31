//! Which POI is selected (side panel) and which is active (modal).

use std::rc::Rc;
use yew::Reducible;

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// Invariant: `active_id.is_some()` implies `selected_id == active_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub selected_id: Option<String>,
    pub active_id: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionPhase<'a> {
    Idle,
    Selected(&'a str),
    Active(&'a str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    /// Select a POI and open its modal (stage click or minimap marker).
    Open(String),
    /// Close the modal, keep the selection.
    Close,
    /// Escape key; same as `Close`.
    Escape,
    /// Back to idle ("Reset view").
    Reset,
}

impl Selection {
    pub fn phase(&self) -> SelectionPhase<'_> {
        match (&self.selected_id, &self.active_id) {
            (_, Some(active)) => SelectionPhase::Active(active),
            (Some(selected), None) => SelectionPhase::Selected(selected),
            (None, None) => SelectionPhase::Idle,
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.active_id.is_some()
    }

    pub fn apply(&self, action: SelectionAction) -> Selection {
        use SelectionAction::*;
        match action {
            Open(id) => Selection {
                selected_id: Some(id.clone()),
                active_id: Some(id),
            },
            Close | Escape => Selection {
                selected_id: self.selected_id.clone(),
                active_id: None,
            },
            Reset => Selection::default(),
        }
    }
}

impl Reducible for Selection {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let label = format!("{action:?}");
        let next = self.apply(action);
        if next == *self {
            return self;
        }
        log::debug!("selection {label}: {:?} -> {:?}", self.phase(), next.phase());
        Rc::new(next)
    }
}
