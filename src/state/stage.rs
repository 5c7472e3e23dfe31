//! The stage: one owner for camera, drag and keyboard state.
//!
//! DOM listeners hold the stage behind `Rc<RefCell<_>>` and call into it in
//! event order, so each handler works against the latest camera rather than
//! a snapshot captured at registration time. Nothing here touches the DOM.

use super::camera::{Camera, CameraController, Point, Size};
use super::drag::DragState;
use super::keys::{FrameClock, KeyState};
use super::minimap::{MinimapProjection, MinimapRect, ViewportLimits, WorldBounds};
use crate::config::StageConfig;
use crate::model::{District, Poi};

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

/// `MouseEvent.button` of the primary button.
pub const PRIMARY_BUTTON: i16 = 0;

pub struct Stage {
    config: StageConfig,
    controller: CameraController,
    drag: DragState,
    keys: KeyState,
    clock: FrameClock,
    container: Size,
    reduced_motion: bool,
    centered: bool,
}

/// What the host should do after a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMove {
    Ignored,
    Panned,
    /// Panned, and the gesture just became a drag: capture the pointer now.
    PannedAndPromoted,
}

impl Stage {
    pub fn new(config: StageConfig) -> Self {
        Self {
            controller: CameraController::new(config.zoom_limits()),
            config,
            drag: DragState::default(),
            keys: KeyState::default(),
            clock: FrameClock::default(),
            container: Size::default(),
            reduced_motion: false,
            centered: false,
        }
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn camera(&self) -> Camera {
        self.controller.camera()
    }

    pub fn container(&self) -> Size {
        self.container
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    pub fn set_reduced_motion(&mut self, reduced: bool) {
        if reduced != self.reduced_motion {
            log::debug!("reduced motion: {reduced}");
        }
        self.reduced_motion = reduced;
    }

    /// Record a new container measurement. The first usable one centres the
    /// world origin. Returns whether the camera moved.
    pub fn set_container(&mut self, size: Size) -> bool {
        self.container = size;
        if self.centered || size.is_empty() {
            return false;
        }
        self.centered = true;
        let c = size.center();
        self.controller.set_offset(c);
        true
    }

    // --- Pointer ---

    pub fn pointer_down(&mut self, pointer_id: i32, button: i16, screen: Point) -> bool {
        if button != PRIMARY_BUTTON {
            return false;
        }
        let offset = self.camera().offset();
        if !self.drag.begin(pointer_id, screen, offset) {
            return false;
        }
        self.controller.cancel_animation();
        true
    }

    pub fn pointer_move(&mut self, pointer_id: i32, screen: Point) -> PointerMove {
        let Some(m) = self.drag.move_to(pointer_id, screen, self.config.click_slop_px) else {
            return PointerMove::Ignored;
        };
        self.controller.set_offset(m.offset);
        if m.promoted_now {
            PointerMove::PannedAndPromoted
        } else {
            PointerMove::Panned
        }
    }

    pub fn pointer_up(&mut self, pointer_id: i32) -> bool {
        self.drag.end(pointer_id)
    }

    /// True exactly once after a drag that travelled past the click slop,
    /// and only until the next frame.
    pub fn take_click_suppressed(&mut self) -> bool {
        self.drag.take_click_suppression()
    }

    // --- Wheel / zoom ---

    /// `delta_y > 0` scrolls away from the user and zooms out.
    pub fn wheel(&mut self, delta_y: f64, screen: Point) {
        let factor = if delta_y > 0.0 {
            self.config.wheel_zoom_out
        } else {
            self.config.wheel_zoom_in
        };
        self.controller.zoom_at(screen, factor);
    }

    /// HUD zoom buttons: zoom around the stage centre.
    pub fn zoom_step(&mut self, zoom_in: bool) -> bool {
        if self.container.is_empty() {
            return false;
        }
        let step = self.config.button_zoom_step;
        let factor = if zoom_in { step } else { 1.0 / step };
        self.controller.zoom_at(self.container.center(), factor);
        true
    }

    // --- Keyboard ---

    pub fn key_down(&mut self, key: &str) -> bool {
        self.keys.press(key)
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        self.keys.release(key)
    }

    pub fn clear_keys(&mut self) {
        self.keys.clear();
    }

    /// One display frame: keyboard panning wins over a running animation.
    /// Returns whether the camera changed.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        // The click trailing a drag is dispatched before the next frame.
        self.drag.take_click_suppression();
        let dt = self.clock.advance(now_ms, self.config.max_frame_secs);
        if self.keys.any() {
            self.controller.cancel_animation();
            let dir = self.keys.direction();
            let step = self.config.key_pan_speed * dt * self.camera().zoom;
            if step == 0.0 || (dir.x == 0.0 && dir.y == 0.0) {
                return false;
            }
            self.controller.pan(dir.x * step, dir.y * step);
            return true;
        }
        self.controller.tick(now_ms)
    }

    // --- Teleports ---

    pub fn reset_view(&mut self) -> bool {
        self.controller.reset_view(self.container)
    }

    /// Animate so `world` ends up centred at `zoom` (clamped).
    pub fn focus_world(&mut self, world: Point, zoom: f64, duration_ms: f64, now_ms: f64) -> bool {
        self.controller.focus_on(
            world,
            zoom,
            self.container,
            duration_ms,
            now_ms,
            self.reduced_motion,
        )
    }

    pub fn focus_poi(&mut self, poi: &Poi, now_ms: f64) -> bool {
        log::debug!("focus poi {}", poi.id);
        self.focus_world(
            poi.position,
            self.config.focus_zoom,
            self.config.focus_duration_ms,
            now_ms,
        )
    }

    pub fn focus_district(&mut self, district: &District, now_ms: f64) -> bool {
        log::debug!("teleport to district {}", district.id);
        self.focus_world(
            district.target.position,
            district.target.zoom,
            self.config.district_duration_ms,
            now_ms,
        )
    }

    /// Recentre on `world` keeping the current zoom (minimap background click).
    pub fn jump_to(&mut self, world: Point, now_ms: f64) -> bool {
        let zoom = self.camera().zoom;
        self.focus_world(world, zoom, self.config.focus_duration_ms, now_ms)
    }

    // --- Minimap ---

    pub fn minimap_size(&self) -> Size {
        Size::new(self.config.minimap_width, self.config.minimap_height)
    }

    pub fn minimap_projection(&self, bounds: WorldBounds) -> Option<MinimapProjection> {
        MinimapProjection::new(bounds, self.minimap_size())
    }

    pub fn minimap_viewport(&self, projection: &MinimapProjection) -> Option<MinimapRect> {
        projection.viewport(
            self.camera(),
            self.container,
            ViewportLimits {
                min_px: self.config.minimap_min_rect_px,
                overflow: self.config.minimap_overflow,
            },
        )
    }
}
