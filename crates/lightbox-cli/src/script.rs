//! TOML description of a replayable viewer session.
//!
//! ```toml
//! start_index = 0
//!
//! [viewport]
//! width = 375.0
//! height = 667.0
//!
//! [[images]]
//! source = "beach.jpg"
//! width = 1200.0
//! height = 800.0
//!
//! [[steps]]
//! at_ms = 0
//! action = "start"
//! touches = [{ x = 100.0, y = 300.0 }]
//! ```

use std::path::Path;

use anyhow::{bail, Context, Result};
use lightbox_core::geometry::{Point, Viewport};
use lightbox_core::viewer::ImageDescriptor;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Script {
    pub viewport: Viewport,
    pub images: Vec<ImageDescriptor>,
    #[serde(default)]
    pub start_index: usize,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Step {
    /// Host time of the step in milliseconds since the session began.
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Start {
        touches: Vec<Point>,
    },
    Move {
        #[serde(default)]
        touches: Vec<Point>,
        #[serde(default)]
        dx: f32,
        #[serde(default)]
        dy: f32,
    },
    Release {
        #[serde(default)]
        dx: f32,
        #[serde(default)]
        dy: f32,
        #[serde(default)]
        vx: f32,
        #[serde(default)]
        vy: f32,
    },
    Tick,
    Scroll {
        offset_x: f32,
    },
    MomentumBegin,
    MomentumEnd,
    Rotate {
        width: f32,
        height: f32,
    },
    /// Answer the pending size request of image `index`.
    Size {
        index: usize,
        width: f32,
        height: f32,
    },
    /// Fail the pending size request of image `index`.
    SizeFailed {
        index: usize,
        #[serde(default)]
        reason: String,
    },
    Loaded {
        index: usize,
    },
    GoTo {
        index: usize,
    },
    Next,
    Prev,
    Close,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start { touches } => write!(f, "start ({} touches)", touches.len()),
            Self::Move { dx, dy, .. } => write!(f, "move ({dx}, {dy})"),
            Self::Release { dx, dy, vx, vy } => {
                write!(f, "release ({dx}, {dy}) v=({vx}, {vy})")
            }
            Self::Tick => write!(f, "tick"),
            Self::Scroll { offset_x } => write!(f, "scroll to {offset_x}"),
            Self::MomentumBegin => write!(f, "momentum begin"),
            Self::MomentumEnd => write!(f, "momentum end"),
            Self::Rotate { width, height } => write!(f, "rotate to {width}x{height}"),
            Self::Size {
                index,
                width,
                height,
            } => write!(f, "size of {index} = {width}x{height}"),
            Self::SizeFailed { index, .. } => write!(f, "size of {index} failed"),
            Self::Loaded { index } => write!(f, "image {index} loaded"),
            Self::GoTo { index } => write!(f, "go to {index}"),
            Self::Next => write!(f, "next"),
            Self::Prev => write!(f, "prev"),
            Self::Close => write!(f, "close"),
        }
    }
}

impl Script {
    pub fn parse(contents: &str) -> Result<Self> {
        let script: Script = toml::from_str(contents).context("Invalid replay script")?;
        script.validate()?;
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::parse(&contents)
    }

    /// Steps must be in time order.
    fn validate(&self) -> Result<()> {
        if let Some(pair) = self.steps.windows(2).find(|w| w[1].at_ms < w[0].at_ms) {
            bail!(
                "Step at {} ms comes after a step at {} ms",
                pair[1].at_ms,
                pair[0].at_ms
            );
        }
        Ok(())
    }
}
