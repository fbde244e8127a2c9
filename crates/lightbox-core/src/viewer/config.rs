use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::color::{parse_hex, Rgb};
use crate::consts::{DEFAULT_CHROME_MS, DEFAULT_ENTRANCE_MS, DEFAULT_GLIDE_ALWAYS_DELAY_MS};
use crate::error::Result;
use crate::gesture::GestureConfig;
use crate::layout::Platform;

/// Modal entrance animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationType {
    None,
    #[default]
    Fade,
    Slide,
}

impl std::fmt::Display for AnimationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Fade => write!(f, "Fade"),
            Self::Slide => write!(f, "Slide"),
        }
    }
}

/// Which control affordances the presentation layer renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsConfig {
    #[serde(default = "default_true")]
    pub close: bool,
    #[serde(default)]
    pub prev: bool,
    #[serde(default)]
    pub next: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            close: true,
            prev: false,
            next: false,
        }
    }
}

/// Everything that used to differ between viewer variants, as flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default)]
    pub animation_type: AnimationType,
    #[serde(default = "default_entrance_ms")]
    pub entrance_ms: u64,
    /// Hex colour of the underlay; black when absent.
    #[serde(default)]
    pub background_color: Option<String>,
    /// Re-snap the pager after release when the platform skipped its glide.
    #[serde(default)]
    pub glide_always: bool,
    #[serde(default = "default_glide_always_delay_ms")]
    pub glide_always_delay_ms: u64,
    #[serde(default = "default_true")]
    pub has_footer: bool,
    #[serde(default = "default_chrome_ms")]
    pub chrome_ms: u64,
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub gesture: GestureConfig,
}

fn default_true() -> bool {
    true
}
fn default_entrance_ms() -> u64 {
    DEFAULT_ENTRANCE_MS
}
fn default_glide_always_delay_ms() -> u64 {
    DEFAULT_GLIDE_ALWAYS_DELAY_MS
}
fn default_chrome_ms() -> u64 {
    DEFAULT_CHROME_MS
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            animation_type: AnimationType::default(),
            entrance_ms: DEFAULT_ENTRANCE_MS,
            background_color: None,
            glide_always: false,
            glide_always_delay_ms: DEFAULT_GLIDE_ALWAYS_DELAY_MS,
            has_footer: true,
            chrome_ms: DEFAULT_CHROME_MS,
            controls: ControlsConfig::default(),
            platform: Platform::default(),
            gesture: GestureConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<()> {
        self.gesture.validate()?;
        self.background_rgb()?;
        Ok(())
    }

    pub fn background_rgb(&self) -> Result<Rgb> {
        match self.background_color.as_deref() {
            Some(hex) => parse_hex(hex),
            None => Ok(Rgb::BLACK),
        }
    }

    /// Glide-always only applies where the platform pager can stall (Android).
    pub fn glide_enabled(&self) -> bool {
        self.glide_always && self.platform == Platform::Android
    }

    pub fn glide_delay(&self) -> Duration {
        Duration::from_millis(self.glide_always_delay_ms)
    }

    pub fn chrome_duration(&self) -> Duration {
        Duration::from_millis(self.chrome_ms)
    }

    pub fn entrance_duration(&self) -> Duration {
        Duration::from_millis(self.entrance_ms)
    }
}
