use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use lightbox_core::geometry::{ImageSize, Viewport};
use lightbox_core::gesture::{GestureDelta, Velocity};
use lightbox_core::viewer::{SizeRequest, ViewerConfig, ViewerController, ViewerEvent};
use lightbox_core::LightboxError;
use tracing::{info, warn};

use crate::script::{Action, Script};
use crate::summary::{print_event, print_final_state, print_replay_header, print_step};

#[derive(Args)]
pub struct ReplayArgs {
    /// Replay script (TOML)
    pub script: PathBuf,

    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep ticking this many milliseconds after the last step
    #[arg(long, default_value = "1000")]
    pub settle_ms: u64,
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let config: ViewerConfig = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid viewer config")?
    } else {
        ViewerConfig::default()
    };
    let script = Script::load(&args.script)?;

    print_replay_header(&args.script, &script, &config);

    let mut replay = Replay::new(config, script.viewport)?;
    replay.controller.open(script.images.clone(), script.start_index, Duration::ZERO)?;
    replay.flush();

    let mut last = Duration::ZERO;
    for step in &script.steps {
        let now = Duration::from_millis(step.at_ms);
        print_step(step.at_ms, &step.action);
        replay.apply(&step.action, now)?;
        replay.flush();
        last = now;
    }

    let end = last + Duration::from_millis(args.settle_ms);
    replay.controller.tick(end);
    replay.flush();

    info!(steps = script.steps.len(), "Replay finished");
    print_final_state(&replay.controller);
    Ok(())
}

struct Replay {
    controller: ViewerController,
    pending_sizes: HashMap<usize, SizeRequest>,
}

impl Replay {
    fn new(config: ViewerConfig, viewport: Viewport) -> Result<Self> {
        Ok(Self {
            controller: ViewerController::new(config, viewport)?,
            pending_sizes: HashMap::new(),
        })
    }

    fn apply(&mut self, action: &Action, now: Duration) -> Result<()> {
        let c = &mut self.controller;
        match action {
            Action::Start { touches } => c.gesture_start(touches, now),
            Action::Move { touches, dx, dy } => {
                c.gesture_move(touches, GestureDelta::new(*dx, *dy), now)
            }
            Action::Release { dx, dy, vx, vy } => c.gesture_release(
                GestureDelta::new(*dx, *dy),
                Velocity::new(*vx, *vy),
                now,
            ),
            Action::Tick => c.tick(now),
            Action::Scroll { offset_x } => c.on_scroll(*offset_x, now),
            Action::MomentumBegin => c.on_momentum_scroll_begin(now),
            Action::MomentumEnd => c.on_momentum_scroll_end(now),
            Action::Rotate { width, height } => {
                c.set_viewport(Viewport::new(*width, *height), now)
            }
            Action::Size {
                index,
                width,
                height,
            } => match self.pending_sizes.remove(index) {
                Some(request) => {
                    c.resolve_image_size(&request, Ok(ImageSize::new(*width, *height)), now)
                }
                None => warn!(index, "No pending size request"),
            },
            Action::SizeFailed { index, reason } => match self.pending_sizes.remove(index) {
                Some(request) => {
                    let err = LightboxError::SizeFetch {
                        index: *index,
                        reason: reason.clone(),
                    };
                    c.resolve_image_size(&request, Err(err), now)
                }
                None => warn!(index, "No pending size request"),
            },
            Action::Loaded { index } => c.on_image_loaded(*index),
            Action::GoTo { index } => c.go_to(*index, now)?,
            Action::Next => {
                if !c.scroll_to_next(now) {
                    warn!("Already at the last image");
                }
            }
            Action::Prev => {
                if !c.scroll_to_prev(now) {
                    warn!("Already at the first image");
                }
            }
            Action::Close => c.close(now),
        }
        Ok(())
    }

    /// Print drained events and remember size requests for later answers.
    fn flush(&mut self) {
        for event in self.controller.drain_events() {
            if let ViewerEvent::FetchImageSize(ref request) = event {
                self.pending_sizes.insert(request.index, request.clone());
            }
            if matches!(event, ViewerEvent::Closed) {
                self.pending_sizes.clear();
            }
            print_event(&event);
        }
    }
}
