//! Tunables for the blueprint stage.
//!
//! Every field has a default, so a data file may override only what it needs:
//!
//! ```json
//! { "stage": { "zoom_max": 2.0, "focus_on_open": true } }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::state::ZoomLimits;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    pub zoom_min: f64,
    pub zoom_max: f64,
    /// Per-notch factor when the wheel scrolls toward the user.
    pub wheel_zoom_in: f64,
    /// Per-notch factor when the wheel scrolls away. Not the reciprocal of `wheel_zoom_in`.
    pub wheel_zoom_out: f64,
    /// Keyboard pan speed in screen pixels per second, before the zoom multiplier.
    pub key_pan_speed: f64,
    /// Upper bound on a single frame's delta time, in seconds.
    pub max_frame_secs: f64,
    pub focus_duration_ms: f64,
    pub district_duration_ms: f64,
    /// Zoom used when teleporting to a POI.
    pub focus_zoom: f64,
    /// Animate the camera onto a POI when it is opened from the stage.
    pub focus_on_open: bool,
    /// World units added around the POI bounding box.
    pub world_padding: f64,
    pub minimap_width: f64,
    pub minimap_height: f64,
    pub minimap_min_rect_px: f64,
    /// Fraction of the minimap size the viewport rectangle may hang outside it.
    pub minimap_overflow: f64,
    /// Pointer travel after which a press counts as a drag rather than a click.
    pub click_slop_px: f64,
    /// Factor applied by the HUD zoom buttons.
    pub button_zoom_step: f64,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            zoom_min: 0.65,
            zoom_max: 1.6,
            wheel_zoom_in: 1.08,
            wheel_zoom_out: 0.92,
            key_pan_speed: 520.0,
            max_frame_secs: 0.05,
            focus_duration_ms: 650.0,
            district_duration_ms: 700.0,
            focus_zoom: 1.0,
            focus_on_open: false,
            world_padding: 720.0,
            minimap_width: 200.0,
            minimap_height: 140.0,
            minimap_min_rect_px: 18.0,
            minimap_overflow: 0.25,
            click_slop_px: 4.0,
            button_zoom_step: 1.2,
        }
    }
}

impl StageConfig {
    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits {
            min: self.zoom_min,
            max: self.zoom_max,
        }
    }

    pub fn validate(&self) -> Result<(), MapError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.zoom_min) || !positive(self.zoom_max) || self.zoom_min > self.zoom_max {
            return Err(MapError::InvalidZoomLimits {
                min: self.zoom_min,
                max: self.zoom_max,
            });
        }
        if !positive(self.wheel_zoom_in) || !positive(self.wheel_zoom_out) {
            return Err(MapError::InvalidConfig("zoom factors must be positive"));
        }
        if !positive(self.button_zoom_step) {
            return Err(MapError::InvalidConfig("button zoom step must be positive"));
        }
        if !positive(self.minimap_width) || !positive(self.minimap_height) {
            return Err(MapError::InvalidConfig("minimap size must be positive"));
        }
        if !self.max_frame_secs.is_finite() || self.max_frame_secs < 0.0 {
            return Err(MapError::InvalidConfig("max_frame_secs is negative"));
        }
        if !self.world_padding.is_finite() || self.world_padding < 0.0 {
            return Err(MapError::InvalidConfig("world_padding is negative"));
        }
        Ok(())
    }
}
