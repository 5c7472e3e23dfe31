//! Pan/zoom camera for the blueprint stage and its eased transitions.
//!
//! `offset_x` / `offset_y` are the screen-space translation applied before
//! scaling; `zoom` is the scale factor. The whole POI layer is drawn in world
//! coordinates under [`Camera::transform_css`].

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

/// A point in either world or screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Size of a rendering box in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or NaN.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

impl Camera {
    pub const fn new(offset_x: f64, offset_y: f64, zoom: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            zoom,
        }
    }

    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.zoom + self.offset_x,
            world.y * self.zoom + self.offset_y,
        )
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset_x) / self.zoom,
            (screen.y - self.offset_y) / self.zoom,
        )
    }

    /// Camera that puts `world` at the centre of `container` at `zoom`.
    /// `None` when the container has not been measured yet.
    pub fn centered_on(world: Point, zoom: f64, container: Size) -> Option<Camera> {
        if container.is_empty() {
            return None;
        }
        let c = container.center();
        let unshifted = Camera::new(0.0, 0.0, zoom).world_to_screen(world);
        Some(Camera::new(c.x - unshifted.x, c.y - unshifted.y, zoom))
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.offset_x, self.offset_y, self.zoom
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.65,
            max: 1.6,
        }
    }
}

impl ZoomLimits {
    pub fn clamp(&self, zoom: f64) -> f64 {
        crate::util::clamp(zoom, self.min, self.max)
    }
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// An in-flight eased transition between two camera states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraAnimation {
    pub from: Camera,
    pub to: Camera,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl CameraAnimation {
    /// Interpolated camera at `now_ms`, and whether the transition is finished.
    pub fn sample(&self, now_ms: f64) -> (Camera, bool) {
        let t = crate::util::clamp((now_ms - self.start_ms) / self.duration_ms, 0.0, 1.0);
        if t >= 1.0 {
            return (self.to, true);
        }
        let k = ease_in_out_cubic(t);
        let lerp = |a: f64, b: f64| a + (b - a) * k;
        let cam = Camera {
            offset_x: lerp(self.from.offset_x, self.to.offset_x),
            offset_y: lerp(self.from.offset_y, self.to.offset_y),
            zoom: lerp(self.from.zoom, self.to.zoom),
        };
        (cam, false)
    }
}

/// Owns the camera and arbitrates between manual input and animation.
///
/// Every manual mutation cancels the running animation first, so the two
/// never blend.
#[derive(Debug, Clone)]
pub struct CameraController {
    camera: Camera,
    animation: Option<CameraAnimation>,
    limits: ZoomLimits,
}

impl CameraController {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            camera: Camera {
                zoom: limits.clamp(1.0),
                ..Camera::default()
            },
            animation: None,
            limits,
        }
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Drop the running animation where it stands. Returns whether one was running.
    pub fn cancel_animation(&mut self) -> bool {
        self.animation.take().is_some()
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.cancel_animation();
        self.camera.offset_x += dx;
        self.camera.offset_y += dy;
    }

    pub fn set_offset(&mut self, offset: Point) {
        self.cancel_animation();
        self.camera.offset_x = offset.x;
        self.camera.offset_y = offset.y;
    }

    /// Zoom by `factor` keeping the world point under `screen` fixed.
    pub fn zoom_at(&mut self, screen: Point, factor: f64) {
        self.cancel_animation();
        let world = self.camera.screen_to_world(screen);
        let zoom = self.limits.clamp(self.camera.zoom * factor);
        self.camera = Camera {
            offset_x: screen.x - world.x * zoom,
            offset_y: screen.y - world.y * zoom,
            zoom,
        };
    }

    /// Zoom 1 with the world origin centred. No-op for an unmeasured container.
    pub fn reset_view(&mut self, container: Size) -> bool {
        let Some(cam) = Camera::centered_on(Point::default(), self.limits.clamp(1.0), container)
        else {
            return false;
        };
        self.cancel_animation();
        self.camera = cam;
        true
    }

    /// Transition so `world` ends up centred in `container` at `zoom`, clamped
    /// first so the offset is computed for the zoom actually used. No-op for an
    /// unmeasured container.
    pub fn focus_on(
        &mut self,
        world: Point,
        zoom: f64,
        container: Size,
        duration_ms: f64,
        now_ms: f64,
        reduced_motion: bool,
    ) -> bool {
        let zoom = self.limits.clamp(zoom);
        let Some(target) = Camera::centered_on(world, zoom, container) else {
            return false;
        };
        self.animate_to(target, duration_ms, now_ms, reduced_motion);
        true
    }

    /// Start an eased transition toward `to`, replacing any running one.
    /// Short durations and reduced motion jump straight to the target.
    /// `to.zoom` must already be within the limits.
    fn animate_to(&mut self, to: Camera, duration_ms: f64, now_ms: f64, reduced_motion: bool) {
        self.cancel_animation();
        if reduced_motion || !(duration_ms > 10.0) {
            self.camera = to;
            return;
        }
        self.animation = Some(CameraAnimation {
            from: self.camera,
            to,
            start_ms: now_ms,
            duration_ms,
        });
    }

    /// Advance the running animation. Returns whether the camera moved.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(anim) = self.animation else {
            return false;
        };
        let (cam, done) = anim.sample(now_ms);
        if done {
            self.animation = None;
        }
        let changed = cam != self.camera;
        self.camera = cam;
        changed
    }
}
