//! Viewport-derived styles for the presentation layer.
//!
//! [`layout`] is pure: call it again whenever the viewport changes instead of
//! keeping a shared style table around.

use serde::{Deserialize, Serialize};

use crate::consts::{
    HEADER_HEIGHT, LOADING_INDICATOR_HALF_HEIGHT, NOTCH_HEADER_TOP, NOTCH_MIN_HEIGHT,
    NOTCH_MIN_WIDTH,
};
use crate::geometry::Viewport;

/// Target platform of the embedding app.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    Ios,
    Android,
    #[default]
    Other,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ios => write!(f, "iOS"),
            Self::Android => write!(f, "Android"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// An absolutely positioned box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStyle {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    pub z_index: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleSet {
    /// Fills the whole viewport behind the pager.
    pub underlay: BoxStyle,
    pub container: BoxStyle,
    /// One page of the pager; clips the image.
    pub image_container: BoxStyle,
    pub header: BoxStyle,
    /// Top of the loading indicator inside a page.
    pub loading_top: f32,
    /// Footer is anchored to the bottom edge at full width.
    pub footer_bottom: f32,
    pub footer_z_index: i32,
}

fn full(viewport: Viewport) -> BoxStyle {
    BoxStyle {
        top: 0.0,
        left: 0.0,
        width: viewport.width,
        height: viewport.height,
        z_index: 0,
    }
}

/// Header inset below the notch on tall iOS devices.
pub fn header_top(viewport: Viewport, platform: Platform) -> f32 {
    let notched = platform == Platform::Ios
        && viewport.width >= NOTCH_MIN_WIDTH
        && viewport.height >= NOTCH_MIN_HEIGHT;
    if notched {
        NOTCH_HEADER_TOP
    } else {
        0.0
    }
}

pub fn layout(viewport: Viewport, platform: Platform) -> StyleSet {
    StyleSet {
        underlay: full(viewport),
        container: full(viewport),
        image_container: full(viewport),
        header: BoxStyle {
            top: header_top(viewport, platform),
            left: 0.0,
            width: viewport.width,
            height: HEADER_HEIGHT,
            z_index: 100,
        },
        loading_top: viewport.height / 2.0 - LOADING_INDICATOR_HALF_HEIGHT,
        footer_bottom: 0.0,
        footer_z_index: 100,
    }
}
