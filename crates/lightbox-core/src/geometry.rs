//! Pure geometry for fitting, centering and clamping an image inside the viewport.
//!
//! Every function here is stateless. Image dimensions that are zero, negative or
//! non-finite are "unknown": the functions return `None` (or leave the input
//! untouched) instead of producing NaN or infinity.

use serde::{Deserialize, Serialize};

use crate::consts::{FIT_EPSILON, SCALE_EPSILON};

/// A touch position in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The display area. Changes on rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both sides positive and finite.
    pub fn is_valid(&self) -> bool {
        is_positive(self.width) && is_positive(self.height)
    }

    pub fn size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}

/// Intrinsic pixel size of an image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: f32,
    pub height: f32,
}

impl ImageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the size can be used for layout.
    pub fn is_known(&self) -> bool {
        is_positive(self.width) && is_positive(self.height)
    }

    pub fn size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    pub fn orientation(&self) -> Orientation {
        if self.width >= self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Landscape covers square images too (`width >= height`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Landscape => write!(f, "Landscape"),
            Self::Portrait => write!(f, "Portrait"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Translate {
    pub x: f32,
    pub y: f32,
}

impl Translate {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Scale plus translation of one image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale: f32,
    pub translate: Translate,
}

impl Transform {
    pub fn new(scale: f32, translate: Translate) -> Self {
        Self { scale, translate }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translate: Translate::default(),
        }
    }
}

fn is_positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

/// Euclidean distance between the first two touches, or 0 with fewer than two.
pub fn distance(touches: &[Point]) -> f32 {
    match touches {
        [a, b, ..] => ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt(),
        _ => 0.0,
    }
}

/// Ratio of the current to the initial pinch distance, amplified by `multiplier`.
///
/// `None` when the initial distance is zero (degenerate pinch frame).
pub fn gesture_scale(current: f32, initial: f32, multiplier: f32) -> Option<f32> {
    if initial <= 0.0 || !initial.is_finite() {
        return None;
    }
    Some(current / initial * multiplier)
}

pub fn scales_are_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < SCALE_EPSILON
}

/// Scale at which the image is fully visible without upscaling.
///
/// 1.0 when the image fits on both axes. Otherwise the aspect ratios decide
/// whether the width or the height is fitted exactly.
pub fn min_scale(image: ImageSize, viewport: Viewport) -> Option<f32> {
    if !image.is_known() || !viewport.is_valid() {
        return None;
    }

    if image.width > viewport.width || image.height > viewport.height {
        let screen_ratio = viewport.height / viewport.width;
        let image_ratio = image.height / image.width;
        if screen_ratio > image_ratio {
            return Some(viewport.width / image.width);
        }
        return Some(viewport.height / image.height);
    }

    Some(1.0)
}

/// Translation that centres the image at its resting scale.
///
/// Translations are the top-left corner of the scaled image in viewport
/// coordinates. Landscape images centre by the leftover space, portrait images
/// by the half-difference; both give the same position.
pub fn resting_translate(image: ImageSize, viewport: Viewport) -> Option<Translate> {
    let scale = min_scale(image, viewport)?;
    Some(Translate::new(
        centre_on_axis(Axis::X, scale, image, viewport),
        centre_on_axis(Axis::Y, scale, image, viewport),
    ))
}

fn centre_on_axis(axis: Axis, scale: f32, image: ImageSize, viewport: Viewport) -> f32 {
    let image_size = image.size(axis) * scale;
    let screen_size = viewport.size(axis);
    match image.orientation() {
        Orientation::Landscape => (screen_size - image_size) / 2.0,
        Orientation::Portrait => screen_size / 2.0 - image_size / 2.0,
    }
}

/// Resting scale and translation together.
pub fn resting_transform(image: ImageSize, viewport: Viewport) -> Option<Transform> {
    Some(Transform::new(
        min_scale(image, viewport)?,
        resting_translate(image, viewport)?,
    ))
}

/// Clamp a proposed translation on one axis.
///
/// When the scaled image fits the viewport on that axis it is centred for
/// `scale`. Otherwise `proposed` is kept inside `[screen - scale * size, 0]`,
/// so neither visible edge leaves the viewport.
///
/// Unknown image sizes or an invalid viewport leave `proposed` untouched.
pub fn clamp_translate(
    axis: Axis,
    proposed: f32,
    scale: f32,
    image: ImageSize,
    viewport: Viewport,
) -> f32 {
    if !image.is_known() || !viewport.is_valid() {
        return proposed;
    }
    let scaled_size = image.size(axis) * scale;
    let screen_size = viewport.size(axis);

    if scaled_size <= screen_size + FIT_EPSILON {
        return centre_on_axis(axis, scale, image, viewport);
    }

    proposed.min(0.0).max(screen_size - scaled_size)
}

/// [`clamp_translate`] on both axes.
pub fn clamp_translation(
    proposed: Translate,
    scale: f32,
    image: ImageSize,
    viewport: Viewport,
) -> Translate {
    Translate::new(
        clamp_translate(Axis::X, proposed.x, scale, image, viewport),
        clamp_translate(Axis::Y, proposed.y, scale, image, viewport),
    )
}

/// Move `translate` so the point under the viewport centre stays put while the
/// scale changes from `from_scale` to `to_scale`.
pub fn zoom_about_centre(
    translate: Translate,
    from_scale: f32,
    to_scale: f32,
    viewport: Viewport,
) -> Translate {
    if from_scale <= 0.0 || !from_scale.is_finite() || !viewport.is_valid() {
        return translate;
    }
    let ratio = to_scale / from_scale;
    let centre_x = viewport.width / 2.0;
    let centre_y = viewport.height / 2.0;
    Translate::new(
        centre_x - (centre_x - translate.x) * ratio,
        centre_y - (centre_y - translate.y) * ratio,
    )
}
