//! Pointer drag gesture state, alive from pointer-down to pointer-up.

use super::camera::Point;

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Pointer that owns the drag; `None` when idle.
    pointer_id: Option<i32>,
    start: Point,
    start_offset: Point,
    /// Travelled past the click slop at least once.
    promoted: bool,
    /// The click that follows a promoted drag must not open a POI.
    suppress_click: bool,
}

/// Result of feeding a pointer move into an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragMove {
    pub offset: Point,
    /// This move is the one that crossed the click slop.
    pub promoted_now: bool,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.pointer_id.is_some()
    }

    #[cfg(test)]
    pub fn pointer_id(&self) -> Option<i32> {
        self.pointer_id
    }

    /// Start tracking `pointer_id`. A second pointer while dragging is ignored.
    pub fn begin(&mut self, pointer_id: i32, start: Point, start_offset: Point) -> bool {
        if self.is_active() {
            return false;
        }
        *self = Self {
            pointer_id: Some(pointer_id),
            start,
            start_offset,
            promoted: false,
            suppress_click: false,
        };
        true
    }

    /// Offset for the pointer now at `current`: a 1:1 screen-space translation.
    pub fn move_to(&mut self, pointer_id: i32, current: Point, slop_px: f64) -> Option<DragMove> {
        if self.pointer_id != Some(pointer_id) {
            return None;
        }
        let dx = current.x - self.start.x;
        let dy = current.y - self.start.y;
        let promoted_now = !self.promoted && dx.hypot(dy) > slop_px;
        if promoted_now {
            self.promoted = true;
        }
        Some(DragMove {
            offset: self.start_offset.offset_by(dx, dy),
            promoted_now,
        })
    }

    /// End the drag if `pointer_id` owns it.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.pointer_id != Some(pointer_id) {
            return false;
        }
        self.pointer_id = None;
        self.suppress_click = self.promoted;
        true
    }

    /// Consume the pending click suppression, if any.
    pub fn take_click_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_click)
    }
}
