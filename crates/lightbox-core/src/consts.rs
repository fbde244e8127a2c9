/// Two scales closer than this are treated as the same zoom level.
pub const SCALE_EPSILON: f32 = 0.01;

/// Slack (in pixels) when deciding whether a scaled image fits the viewport.
pub const FIT_EPSILON: f32 = 0.5;

/// Pinch distance ratio is amplified by this factor before being applied.
pub const DEFAULT_SCALE_MULTIPLIER: f32 = 1.2;

/// Absolute upper bound on the zoom scale.
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

/// Double-tap zooms to this multiple of the resting scale.
pub const DEFAULT_DOUBLE_TAP_SCALE: f32 = 3.0;

/// Window after a tap during which a second tap counts as a double-tap.
pub const DEFAULT_DOUBLE_TAP_MS: u64 = 200;

/// Duration of the double-tap zoom animation.
pub const DEFAULT_DOUBLE_TAP_ZOOM_MS: u64 = 300;

/// Duration of the post-release translate spring-back.
pub const DEFAULT_SETTLE_MS: u64 = 100;

/// Duration of the background dim fade-out after release.
pub const DEFAULT_FADE_OUT_MS: u64 = 100;

/// Duration of the fling-away animation that precedes a dismiss.
pub const DEFAULT_DISMISS_MS: u64 = 150;

/// Minimum vertical release velocity (delta per ms) that dismisses the viewer.
pub const DEFAULT_DISMISS_VELOCITY: f32 = 1.1;

/// Extra vertical travel per unit of velocity during the dismiss fling.
pub const DEFAULT_DISMISS_DISTANCE: f32 = 400.0;

/// Vertical drag beyond which horizontal paging is frozen.
pub const DEFAULT_FREEZE_SCROLL_DISTANCE: f32 = 15.0;

/// Background opacity gained per pixel of vertical drag at resting scale.
pub const DEFAULT_BACKGROUND_FADE_PER_PX: f32 = 0.003;

/// Header/footer slide duration.
pub const DEFAULT_CHROME_MS: u64 = 200;

/// Modal entrance animation duration.
pub const DEFAULT_ENTRANCE_MS: u64 = 400;

/// Delay before the glide-always fallback re-snaps the pager.
pub const DEFAULT_GLIDE_ALWAYS_DELAY_MS: u64 = 75;

/// Scroll offset remainder (in pixels) above which the pager is mid-swipe.
pub const SCROLLING_REMAINDER_PX: f32 = 10.0;

/// Header bar height.
pub const HEADER_HEIGHT: f32 = 60.0;

/// Header top inset on notched iOS devices.
pub const NOTCH_HEADER_TOP: f32 = 70.0;

/// Smallest window width treated as a notched iOS device.
pub const NOTCH_MIN_WIDTH: f32 = 375.0;

/// Smallest window height treated as a notched iOS device.
pub const NOTCH_MIN_HEIGHT: f32 = 812.0;

/// Half the height of the loading indicator.
pub const LOADING_INDICATOR_HALF_HEIGHT: f32 = 20.0;

/// Underlay alpha with no dismiss preview in progress.
pub const BACKGROUND_ALPHA_OPAQUE: f32 = 0.9;

/// Underlay alpha at full dismiss preview.
pub const BACKGROUND_ALPHA_FADED: f32 = 0.2;
