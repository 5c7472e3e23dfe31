//! Held-key tracking for WASD / arrow panning.

use super::camera::Point;

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub w: bool,
    pub a: bool,
    pub s: bool,
    pub d: bool,
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
}

impl KeyState {
    fn flag(&mut self, key: &str) -> Option<&mut bool> {
        match key {
            "ArrowUp" => return Some(&mut self.up),
            "ArrowLeft" => return Some(&mut self.left),
            "ArrowDown" => return Some(&mut self.down),
            "ArrowRight" => return Some(&mut self.right),
            _ => {}
        }
        match key.to_ascii_lowercase().as_str() {
            "w" => Some(&mut self.w),
            "a" => Some(&mut self.a),
            "s" => Some(&mut self.s),
            "d" => Some(&mut self.d),
            _ => None,
        }
    }

    /// Record a key-down by its DOM `key` value. Returns whether it is a movement key.
    pub fn press(&mut self, key: &str) -> bool {
        self.flag(key).map(|f| *f = true).is_some()
    }

    pub fn release(&mut self, key: &str) -> bool {
        self.flag(key).map(|f| *f = false).is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        *self != Self::default()
    }

    /// Unit offset direction: left/up keys move the world right/down.
    /// Opposing keys cancel out.
    pub fn direction(&self) -> Point {
        let axis = |pos: bool, neg: bool| f64::from(u8::from(pos)) - f64::from(u8::from(neg));
        Point::new(
            axis(self.a || self.left, self.d || self.right),
            axis(self.w || self.up, self.s || self.down),
        )
    }
}

/// Delta-time source for the per-frame keyboard tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Seconds since the previous frame, capped at `max_secs`. The first frame yields 0.
    pub fn advance(&mut self, now_ms: f64, max_secs: f64) -> f64 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        dt.min(max_secs)
    }
}
