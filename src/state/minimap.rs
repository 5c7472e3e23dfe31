//! Projection of the world, its POIs and the visible viewport onto the minimap.
//!
//! Everything here is a pure function of camera, container size, minimap size
//! and world bounds, recomputed on every render.

use super::camera::{Camera, Point, Size};
use crate::util::clamp;

#[cfg(test)]
#[path = "minimap_test.rs"]
mod minimap_test;

/// Axis-aligned world rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl WorldBounds {
    /// Used when there is nothing to bound.
    pub const FALLBACK: WorldBounds = WorldBounds {
        min_x: -1000.0,
        min_y: -1000.0,
        max_x: 1000.0,
        max_y: 1000.0,
    };

    /// Bounding box of `points` grown by `padding` on every side.
    pub fn around<I>(points: I, padding: f64) -> WorldBounds
    where
        I: IntoIterator<Item = Point>,
    {
        let mut it = points.into_iter();
        let Some(first) = it.next() else {
            return Self::FALLBACK;
        };
        let mut b = WorldBounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in it {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        WorldBounds {
            min_x: b.min_x - padding,
            min_y: b.min_y - padding,
            max_x: b.max_x + padding,
            max_y: b.max_y + padding,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Rectangle in minimap pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl MinimapRect {
    #[cfg(test)]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// How the viewport indicator is kept visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportLimits {
    /// Smallest side in pixels.
    pub min_px: f64,
    /// Fraction of the minimap size the rectangle may hang outside it.
    pub overflow: f64,
}

/// Linear map from world bounds to a minimap box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapProjection {
    bounds: WorldBounds,
    size: Size,
}

impl MinimapProjection {
    /// `None` for an empty minimap or degenerate bounds.
    pub fn new(bounds: WorldBounds, size: Size) -> Option<Self> {
        if size.is_empty() || !(bounds.width() > 0.0 && bounds.height() > 0.0) {
            return None;
        }
        Some(Self { bounds, size })
    }

    #[cfg(test)]
    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn world_to_minimap(&self, world: Point) -> Point {
        Point::new(
            (world.x - self.bounds.min_x) / self.bounds.width() * self.size.width,
            (world.y - self.bounds.min_y) / self.bounds.height() * self.size.height,
        )
    }

    pub fn minimap_to_world(&self, mini: Point) -> Point {
        Point::new(
            self.bounds.min_x + mini.x / self.size.width * self.bounds.width(),
            self.bounds.min_y + mini.y / self.size.height * self.bounds.height(),
        )
    }

    /// The part of the world visible on a `container`-sized stage, in minimap pixels.
    ///
    /// Sides are floored at `limits.min_px` and capped so the rectangle can
    /// hang at most `limits.overflow` of the minimap outside it; growth and
    /// shrinking happen around the rectangle's centre. `None` while the
    /// container is unmeasured.
    pub fn viewport(
        &self,
        camera: Camera,
        container: Size,
        limits: ViewportLimits,
    ) -> Option<MinimapRect> {
        if container.is_empty() || !(camera.zoom > 0.0) {
            return None;
        }
        let tl = self.world_to_minimap(camera.screen_to_world(Point::new(0.0, 0.0)));
        let br = self.world_to_minimap(
            camera.screen_to_world(Point::new(container.width, container.height)),
        );
        let center = Point::new((tl.x + br.x) / 2.0, (tl.y + br.y) / 2.0);

        let min_px = limits.min_px;
        let overflow = limits.overflow.max(0.0);
        let (x, width) = fit_axis(center.x, br.x - tl.x, self.size.width, min_px, overflow);
        let (y, height) = fit_axis(center.y, br.y - tl.y, self.size.height, min_px, overflow);
        Some(MinimapRect {
            x,
            y,
            width,
            height,
        })
    }
}

/// One axis of the viewport indicator: returns (start, length).
fn fit_axis(center: f64, raw_len: f64, extent: f64, min_px: f64, overflow: f64) -> (f64, f64) {
    let lo = -overflow * extent;
    let hi = (1.0 + overflow) * extent;
    let max_len = (hi - lo).max(min_px);
    let len = clamp(raw_len, min_px, max_len);
    let start = clamp(center - len / 2.0, lo, (hi - len).max(lo));
    (start, len)
}
