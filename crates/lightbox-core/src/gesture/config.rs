use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BACKGROUND_FADE_PER_PX, DEFAULT_DISMISS_DISTANCE, DEFAULT_DISMISS_MS,
    DEFAULT_DISMISS_VELOCITY, DEFAULT_DOUBLE_TAP_MS, DEFAULT_DOUBLE_TAP_SCALE,
    DEFAULT_DOUBLE_TAP_ZOOM_MS, DEFAULT_FADE_OUT_MS, DEFAULT_FREEZE_SCROLL_DISTANCE,
    DEFAULT_MAX_SCALE, DEFAULT_SCALE_MULTIPLIER, DEFAULT_SETTLE_MS,
};
use crate::error::{LightboxError, Result};

/// Thresholds and timings for gesture classification and settling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Amplification of the pinch distance ratio.
    #[serde(default = "default_scale_multiplier")]
    pub scale_multiplier: f32,
    /// Absolute zoom cap.
    #[serde(default = "default_max_scale")]
    pub max_scale: f32,
    /// Double-tap zoom target as a multiple of the resting scale.
    #[serde(default = "default_double_tap_scale")]
    pub double_tap_scale: f32,
    #[serde(default = "default_double_tap_ms")]
    pub double_tap_ms: u64,
    #[serde(default = "default_double_tap_zoom_ms")]
    pub double_tap_zoom_ms: u64,
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    #[serde(default = "default_fade_out_ms")]
    pub fade_out_ms: u64,
    #[serde(default = "default_dismiss_ms")]
    pub dismiss_ms: u64,
    /// Minimum |vy| at resting scale that dismisses.
    #[serde(default = "default_dismiss_velocity")]
    pub dismiss_velocity: f32,
    /// Fling travel per unit of velocity.
    #[serde(default = "default_dismiss_distance")]
    pub dismiss_distance: f32,
    /// Vertical drag that locks horizontal paging.
    #[serde(default = "default_freeze_scroll_distance")]
    pub freeze_scroll_distance: f32,
    #[serde(default = "default_background_fade_per_px")]
    pub background_fade_per_px: f32,
}

fn default_scale_multiplier() -> f32 {
    DEFAULT_SCALE_MULTIPLIER
}
fn default_max_scale() -> f32 {
    DEFAULT_MAX_SCALE
}
fn default_double_tap_scale() -> f32 {
    DEFAULT_DOUBLE_TAP_SCALE
}
fn default_double_tap_ms() -> u64 {
    DEFAULT_DOUBLE_TAP_MS
}
fn default_double_tap_zoom_ms() -> u64 {
    DEFAULT_DOUBLE_TAP_ZOOM_MS
}
fn default_settle_ms() -> u64 {
    DEFAULT_SETTLE_MS
}
fn default_fade_out_ms() -> u64 {
    DEFAULT_FADE_OUT_MS
}
fn default_dismiss_ms() -> u64 {
    DEFAULT_DISMISS_MS
}
fn default_dismiss_velocity() -> f32 {
    DEFAULT_DISMISS_VELOCITY
}
fn default_dismiss_distance() -> f32 {
    DEFAULT_DISMISS_DISTANCE
}
fn default_freeze_scroll_distance() -> f32 {
    DEFAULT_FREEZE_SCROLL_DISTANCE
}
fn default_background_fade_per_px() -> f32 {
    DEFAULT_BACKGROUND_FADE_PER_PX
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            scale_multiplier: DEFAULT_SCALE_MULTIPLIER,
            max_scale: DEFAULT_MAX_SCALE,
            double_tap_scale: DEFAULT_DOUBLE_TAP_SCALE,
            double_tap_ms: DEFAULT_DOUBLE_TAP_MS,
            double_tap_zoom_ms: DEFAULT_DOUBLE_TAP_ZOOM_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            fade_out_ms: DEFAULT_FADE_OUT_MS,
            dismiss_ms: DEFAULT_DISMISS_MS,
            dismiss_velocity: DEFAULT_DISMISS_VELOCITY,
            dismiss_distance: DEFAULT_DISMISS_DISTANCE,
            freeze_scroll_distance: DEFAULT_FREEZE_SCROLL_DISTANCE,
            background_fade_per_px: DEFAULT_BACKGROUND_FADE_PER_PX,
        }
    }
}

impl GestureConfig {
    pub fn double_tap_window(&self) -> Duration {
        Duration::from_millis(self.double_tap_ms)
    }

    pub fn double_tap_zoom_duration(&self) -> Duration {
        Duration::from_millis(self.double_tap_zoom_ms)
    }

    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn fade_out_duration(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    pub fn dismiss_duration(&self) -> Duration {
        Duration::from_millis(self.dismiss_ms)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("scale_multiplier", self.scale_multiplier),
            ("max_scale", self.max_scale),
            ("double_tap_scale", self.double_tap_scale),
            ("dismiss_velocity", self.dismiss_velocity),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(LightboxError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !(self.freeze_scroll_distance >= 0.0 && self.background_fade_per_px >= 0.0) {
            return Err(LightboxError::Config(
                "freeze_scroll_distance and background_fade_per_px must not be negative".into(),
            ));
        }
        Ok(())
    }
}
