//! Viewer lifecycle: open/close, paging, chrome, size fetches and timers.
//!
//! The controller is single-threaded and clock-driven. Every input carries the
//! host time (`now`, a `Duration` since any fixed epoch) and first advances the
//! controller to that instant: due timers fire, tweens progress and completed
//! settle passes are joined. Call [`ViewerController::tick`] from the frame
//! callback to advance without input.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::color::{background_rgba, Rgb, Rgba};
use crate::consts::{HEADER_HEIGHT, SCROLLING_REMAINDER_PX};
use crate::error::{LightboxError, Result};
use crate::geometry::{resting_transform, scales_are_equal, ImageSize, Point, Transform, Viewport};
use crate::gesture::{GestureDelta, ReleaseKind, Velocity};
use crate::layout::{layout, StyleSet};
use crate::transform::{Completion, Phase, TransformMachine, Tween};

use super::config::{AnimationType, ViewerConfig};
use super::events::ViewerEvent;
use super::image::{ImageDescriptor, SizeRequest};
use super::timers::{Timer, TimerKind, Timers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewerState {
    pub active_index: usize,
    pub chrome_visible: bool,
    pub is_open: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            active_index: 0,
            chrome_visible: true,
            is_open: false,
        }
    }
}

/// Which control affordances to show right now.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub close: bool,
    pub prev: bool,
    pub next: bool,
}

/// Position of one page in the horizontal pager.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemLayout {
    pub index: usize,
    pub length: f32,
    pub offset: f32,
}

#[derive(Clone, Copy, Debug)]
struct ChromeAnimation {
    header: Tween,
    footer: Option<Tween>,
}

pub struct ViewerController {
    config: ViewerConfig,
    background: Rgb,
    viewport: Viewport,
    images: Vec<ImageDescriptor>,
    state: ViewerState,
    machine: TransformMachine,
    timers: Timers,
    generation: u64,
    is_scrolling: bool,
    scroll_enabled: bool,
    footer_height: f32,
    chrome_animation: Option<ChromeAnimation>,
    entrance: Option<Tween>,
    events: Vec<ViewerEvent>,
    now: Duration,
}

impl ViewerController {
    pub fn new(config: ViewerConfig, viewport: Viewport) -> Result<Self> {
        config.validate()?;
        let background = config.background_rgb()?;
        let machine = TransformMachine::new(config.gesture.clone(), viewport);
        Ok(Self {
            config,
            background,
            viewport,
            images: Vec::new(),
            state: ViewerState::default(),
            machine,
            timers: Timers::default(),
            generation: 0,
            is_scrolling: false,
            scroll_enabled: true,
            footer_height: 0.0,
            chrome_animation: None,
            entrance: None,
            events: Vec::new(),
            now: Duration::ZERO,
        })
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Show `images` starting at `start_index`.
    ///
    /// An empty list is a configuration error and leaves the viewer untouched.
    /// A start index past the end is clamped to the last image. Images without
    /// a known size produce a [`ViewerEvent::FetchImageSize`] request each.
    pub fn open(
        &mut self,
        images: Vec<ImageDescriptor>,
        start_index: usize,
        now: Duration,
    ) -> Result<()> {
        self.advance(now);
        if images.is_empty() {
            warn!("Ignoring open with an empty image list");
            return Err(LightboxError::EmptyImageList);
        }

        let total = images.len();
        let start = if start_index >= total {
            warn!(start_index, total, "Start index out of range, clamping");
            total - 1
        } else {
            start_index
        };

        self.timers.cancel_all();
        self.generation += 1;
        self.images = images;
        for (index, image) in self.images.iter_mut().enumerate() {
            image.set_index(index);
        }
        self.state = ViewerState {
            active_index: start,
            chrome_visible: true,
            is_open: true,
        };
        self.is_scrolling = false;
        self.scroll_enabled = true;
        self.chrome_animation = None;
        self.machine
            .reset_to_image(self.images[start].size(), self.viewport);
        self.entrance = match self.config.animation_type {
            AnimationType::None => None,
            AnimationType::Fade | AnimationType::Slide => Some(Tween::new(
                0.0,
                1.0,
                self.now,
                self.config.entrance_duration(),
            )),
        };

        info!(images = total, start, "Viewer opened");
        self.events.push(ViewerEvent::Opened { index: start });
        self.events.push(ViewerEvent::ScrollToIndex {
            index: start,
            animated: false,
        });

        let generation = self.generation;
        let requests: Vec<SizeRequest> = self
            .images
            .iter()
            .filter(|image| image.size().is_none())
            .map(|image| SizeRequest {
                index: image.index(),
                generation,
                source: image.source.clone(),
            })
            .collect();
        if !requests.is_empty() {
            debug!(count = requests.len(), "Requesting image sizes");
        }
        self.events
            .extend(requests.into_iter().map(ViewerEvent::FetchImageSize));
        Ok(())
    }

    /// Close the viewer and reset every piece of state to its default.
    pub fn close(&mut self, now: Duration) {
        self.advance(now);
        if self.state.is_open {
            self.finish_close();
        }
    }

    fn finish_close(&mut self) {
        self.timers.cancel_all();
        self.machine.close();
        self.images.clear();
        self.state = ViewerState::default();
        self.is_scrolling = false;
        self.scroll_enabled = true;
        self.chrome_animation = None;
        self.entrance = None;
        // Invalidate size fetches still in flight.
        self.generation += 1;
        info!("Viewer closed");
        self.events.push(ViewerEvent::Closed);
    }

    /// The display area changed, e.g. on rotation.
    ///
    /// Geometry of every image is recomputed; the active index is kept and the
    /// active image snaps back to its new resting transform.
    pub fn set_viewport(&mut self, viewport: Viewport, now: Duration) {
        self.advance(now);
        self.viewport = viewport;
        if !viewport.is_valid() {
            warn!(width = viewport.width, height = viewport.height, "Degenerate viewport");
        }
        if !self.state.is_open {
            return;
        }

        self.timers.cancel(TimerKind::GlideAlways);
        let size = self.active_image().and_then(ImageDescriptor::size);
        self.machine.reset_to_image(size, viewport);
        self.update_scroll_enabled(true);
        debug!(
            width = viewport.width,
            height = viewport.height,
            index = self.state.active_index,
            "Viewport changed"
        );
        self.events.push(ViewerEvent::ScrollToIndex {
            index: self.state.active_index,
            animated: false,
        });
    }

    /// Advance animations and timers to `now` without any input.
    pub fn tick(&mut self, now: Duration) {
        self.advance(now);
    }

    fn advance(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
        let now = self.now;

        while let Some(timer) = self.timers.pop_due(now) {
            self.fire(timer);
        }

        match self.machine.advance(now) {
            Some(Completion::Dismissed) => self.finish_close(),
            Some(Completion::Settled) | None => {}
        }
    }

    fn fire(&mut self, timer: Timer) {
        debug!(kind = ?timer.kind, "Timer fired");
        match timer.kind {
            TimerKind::DoubleTap => self.set_chrome_visible(!self.state.chrome_visible),
            TimerKind::GlideAlways => {
                if self.state.is_open {
                    self.events.push(ViewerEvent::ScrollToIndex {
                        index: self.state.active_index,
                        animated: true,
                    });
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Touch input
    // ------------------------------------------------------------------

    /// A touch sequence started, or the number of touches changed mid-sequence.
    ///
    /// A new session cancels the pending double-tap and glide timers. A pending
    /// tap is handed to the session so its release can still form a double-tap.
    pub fn gesture_start(&mut self, touches: &[Point], now: Duration) {
        self.advance(now);
        if !self.state.is_open {
            return;
        }

        let previous_tap = if self.machine.has_session() {
            None
        } else {
            self.timers.cancel(TimerKind::GlideAlways);
            self.timers
                .cancel(TimerKind::DoubleTap)
                .map(|timer| timer.armed_at)
        };
        self.machine.begin(touches, self.now, previous_tap);
    }

    pub fn gesture_move(&mut self, touches: &[Point], delta: GestureDelta, now: Duration) {
        self.advance(now);
        if !self.state.is_open {
            return;
        }
        // The pager owns a swipe that already started scrolling.
        if self.is_scrolling && self.scroll_enabled {
            return;
        }
        if let Some(effect) = self.machine.update(touches, delta) {
            self.update_scroll_enabled(effect.scroll_enabled);
        }
    }

    pub fn gesture_release(&mut self, delta: GestureDelta, velocity: Velocity, now: Duration) {
        self.advance(now);
        if !self.state.is_open {
            return;
        }

        if self.config.glide_enabled() {
            self.timers
                .schedule(TimerKind::GlideAlways, self.now, self.config.glide_delay());
        }

        if self.is_scrolling {
            self.machine.abandon();
            return;
        }

        let Some(decision) = self.machine.release(delta, velocity, self.now) else {
            return;
        };

        match decision.kind {
            ReleaseKind::Tap => self.timers.schedule(
                TimerKind::DoubleTap,
                self.now,
                self.config.gesture.double_tap_window(),
            ),
            ReleaseKind::DoubleTap => {
                let back_to_rest = self
                    .machine
                    .resting()
                    .is_some_and(|resting| scales_are_equal(decision.scale, resting.scale));
                self.set_chrome_visible(back_to_rest);
            }
            ReleaseKind::Dismiss => {
                info!(index = self.state.active_index, "Dismiss gesture, closing")
            }
            ReleaseKind::Settle => {}
        }
        self.update_scroll_enabled(decision.scroll_enabled);
    }

    /// The touch system took the gesture away; handled like a release.
    pub fn gesture_terminate(&mut self, delta: GestureDelta, velocity: Velocity, now: Duration) {
        self.gesture_release(delta, velocity, now);
    }

    fn update_scroll_enabled(&mut self, enabled: bool) {
        if self.scroll_enabled != enabled {
            self.scroll_enabled = enabled;
            self.events.push(ViewerEvent::ScrollEnabledChanged(enabled));
        }
    }

    // ------------------------------------------------------------------
    // Paging
    // ------------------------------------------------------------------

    /// The pager scrolled to horizontal content offset `offset_x`.
    pub fn on_scroll(&mut self, offset_x: f32, now: Duration) {
        self.advance(now);
        if !self.state.is_open || !self.viewport.is_valid() {
            return;
        }
        if !offset_x.is_finite() {
            debug!(offset_x, "Ignoring non-finite scroll offset");
            return;
        }

        let width = self.viewport.width;
        self.is_scrolling = offset_x.ceil() % width > SCROLLING_REMAINDER_PX;

        let page = (offset_x / width).round();
        if page < 0.0 {
            return;
        }
        let index = page as usize;
        if index >= self.images.len() {
            debug!(index, "Scroll past the last page ignored");
            return;
        }
        if index != self.state.active_index {
            self.activate(index);
        }
    }

    pub fn on_momentum_scroll_begin(&mut self, now: Duration) {
        self.advance(now);
        self.is_scrolling = true;
        // The pager is gliding on its own.
        self.timers.cancel(TimerKind::GlideAlways);
    }

    pub fn on_momentum_scroll_end(&mut self, now: Duration) {
        self.advance(now);
        self.is_scrolling = false;
    }

    /// Programmatic navigation. Out-of-range indices are rejected unchanged.
    pub fn go_to(&mut self, index: usize, now: Duration) -> Result<()> {
        self.advance(now);
        if !self.state.is_open {
            return Ok(());
        }
        let total = self.images.len();
        if index >= total {
            warn!(index, total, "Navigation request out of range");
            return Err(LightboxError::IndexOutOfRange { index, total });
        }
        if index != self.state.active_index {
            self.activate(index);
            self.events.push(ViewerEvent::ScrollToIndex {
                index,
                animated: false,
            });
        }
        Ok(())
    }

    /// Ask the pager for the next page. False when unavailable.
    pub fn scroll_to_next(&mut self, now: Duration) -> bool {
        self.advance(now);
        if !self.can_go_next() {
            return false;
        }
        self.events.push(ViewerEvent::ScrollToIndex {
            index: self.state.active_index + 1,
            animated: true,
        });
        true
    }

    /// Ask the pager for the previous page. False when unavailable.
    pub fn scroll_to_prev(&mut self, now: Duration) -> bool {
        self.advance(now);
        if !self.can_go_prev() {
            return false;
        }
        self.events.push(ViewerEvent::ScrollToIndex {
            index: self.state.active_index - 1,
            animated: true,
        });
        true
    }

    fn activate(&mut self, index: usize) {
        self.state.active_index = index;
        let size = self.images.get(index).and_then(ImageDescriptor::size);
        self.machine.reset_to_image(size, self.viewport);
        info!(index, "Active image changed");
        self.events.push(ViewerEvent::ImageIndexChanged(index));
    }

    // ------------------------------------------------------------------
    // Image loading
    // ------------------------------------------------------------------

    /// Apply the answer to a [`SizeRequest`].
    ///
    /// Answers for a previous open session, a closed viewer or an image whose
    /// size is already known are dropped. A failed lookup leaves the image
    /// hidden without affecting the others.
    pub fn resolve_image_size(
        &mut self,
        request: &SizeRequest,
        result: Result<ImageSize>,
        now: Duration,
    ) {
        self.advance(now);
        if !self.state.is_open || request.generation != self.generation {
            debug!(index = request.index, "Dropping stale size answer");
            return;
        }
        let Some(image) = self.images.get_mut(request.index) else {
            warn!(index = request.index, "Size answer for unknown image");
            return;
        };
        if image.size().is_some() {
            return;
        }

        match result {
            Ok(size) if size.is_known() => {
                image.set_size(size);
                debug!(
                    index = request.index,
                    width = size.width,
                    height = size.height,
                    "Image size resolved"
                );
                if request.index == self.state.active_index {
                    self.machine.reset_to_image(Some(size), self.viewport);
                }
            }
            Ok(size) => warn!(
                index = request.index,
                width = size.width,
                height = size.height,
                "Ignoring degenerate image size"
            ),
            Err(err) => warn!(index = request.index, error = %err, "Image size fetch failed"),
        }
    }

    /// Pixel data of image `index` finished loading.
    pub fn on_image_loaded(&mut self, index: usize) {
        if let Some(image) = self.images.get_mut(index) {
            image.mark_loaded();
        }
    }

    /// True while the image should show a loading indicator.
    pub fn is_loading(&self, index: usize) -> bool {
        self.images
            .get(index)
            .is_some_and(|image| !(image.is_loaded() && image.size().is_some()))
    }

    // ------------------------------------------------------------------
    // Chrome
    // ------------------------------------------------------------------

    /// Height of the rendered footer, reported by the presentation layer.
    pub fn set_footer_height(&mut self, height: f32) {
        self.footer_height = height.max(0.0);
    }

    pub fn toggle_chrome(&mut self, now: Duration) {
        self.advance(now);
        self.set_chrome_visible(!self.state.chrome_visible);
    }

    fn set_chrome_visible(&mut self, visible: bool) {
        let header_target = if visible { 0.0 } else { -HEADER_HEIGHT };
        let header = Tween::new(
            self.header_offset(),
            header_target,
            self.now,
            self.config.chrome_duration(),
        );
        let footer = self.footer_enabled().then(|| {
            let footer_target = if visible { 0.0 } else { self.footer_height };
            Tween::new(
                self.footer_offset(),
                footer_target,
                self.now,
                self.config.chrome_duration(),
            )
        });
        self.chrome_animation = Some(ChromeAnimation { header, footer });

        if self.state.chrome_visible != visible {
            self.state.chrome_visible = visible;
            debug!(visible, "Chrome visibility changed");
            self.events.push(ViewerEvent::ChromeVisibilityChanged(visible));
        }
    }

    fn footer_enabled(&self) -> bool {
        self.config.has_footer && self.footer_height > 0.0
    }

    /// Vertical offset of the header: 0 shown, -60 hidden.
    pub fn header_offset(&self) -> f32 {
        match self.chrome_animation {
            Some(anim) => anim.header.value_at(self.now),
            None if self.state.chrome_visible => 0.0,
            None => -HEADER_HEIGHT,
        }
    }

    /// Vertical offset of the footer: 0 shown, footer height hidden.
    pub fn footer_offset(&self) -> f32 {
        match self.chrome_animation.and_then(|anim| anim.footer) {
            Some(tween) => tween.value_at(self.now),
            None if self.state.chrome_visible || !self.footer_enabled() => 0.0,
            None => self.footer_height,
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn state(&self) -> ViewerState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    pub fn chrome_visible(&self) -> bool {
        self.state.chrome_visible
    }

    pub fn scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn active_image(&self) -> Option<&ImageDescriptor> {
        self.images.get(self.state.active_index)
    }

    /// Live transform of the active image, `None` while its size is unknown.
    pub fn active_transform(&self) -> Option<Transform> {
        self.image_transform(self.state.active_index)
    }

    /// Transform to render image `index` with.
    ///
    /// The active image follows the live transform; every other image is pinned
    /// to its own resting transform. `None` means "not renderable yet".
    pub fn image_transform(&self, index: usize) -> Option<Transform> {
        if !self.state.is_open {
            return None;
        }
        let size = self.images.get(index)?.size()?;
        if index == self.state.active_index {
            self.machine.resting()?;
            Some(self.machine.live())
        } else {
            resting_transform(size, self.viewport)
        }
    }

    /// Resting transform of image `index`.
    pub fn resting_transform(&self, index: usize) -> Option<Transform> {
        resting_transform(self.images.get(index)?.size()?, self.viewport)
    }

    pub fn background_opacity(&self) -> f32 {
        self.machine.background_opacity()
    }

    pub fn background_color(&self) -> Rgba {
        background_rgba(self.background, self.machine.background_opacity())
    }

    /// Modal entrance progress in `[0, 1]`.
    pub fn entrance_progress(&self) -> f32 {
        match self.entrance {
            Some(tween) => tween.value_at(self.now),
            None if self.state.is_open => 1.0,
            None => 0.0,
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.state.is_open && self.machine.is_at_resting_scale() && self.state.active_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.state.is_open
            && self.machine.is_at_resting_scale()
            && self.state.active_index + 1 < self.images.len()
    }

    pub fn controls(&self) -> Controls {
        let configured = self.config.controls;
        Controls {
            close: configured.close,
            prev: configured.prev && self.can_go_prev(),
            next: configured.next && self.can_go_next(),
        }
    }

    pub fn item_layout(&self, index: usize) -> ItemLayout {
        ItemLayout {
            index,
            length: self.viewport.width,
            offset: self.viewport.width * index as f32,
        }
    }

    pub fn layout(&self) -> StyleSet {
        layout(self.viewport, self.config.platform)
    }

    /// True when nothing is animating and no timer is pending.
    pub fn is_idle(&self) -> bool {
        let chrome_running = self.chrome_animation.is_some_and(|anim| {
            !anim.header.is_done(self.now) || anim.footer.is_some_and(|f| !f.is_done(self.now))
        });
        let entrance_running = self.entrance.is_some_and(|t| !t.is_done(self.now));
        self.timers.is_empty()
            && !matches!(self.machine.phase(), Phase::Gesturing | Phase::Settling)
            && !chrome_running
            && !entrance_running
    }

    /// Earliest pending timer deadline, for hosts that schedule their own wake-ups.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_due()
    }

    pub fn drain_events(&mut self) -> Vec<ViewerEvent> {
        std::mem::take(&mut self.events)
    }
}
