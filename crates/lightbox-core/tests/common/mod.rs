#![allow(dead_code)]

use std::time::Duration;

use lightbox_core::geometry::{ImageSize, Point, Viewport};
use lightbox_core::viewer::{ImageDescriptor, ViewerConfig, ViewerController};

/// 400x800 portrait phone screen used by most tests.
pub fn phone() -> Viewport {
    Viewport::new(400.0, 800.0)
}

/// Wider than the screen: rests at 1/3 scale, centred at (0, 266.67).
pub fn wide_image() -> ImageSize {
    ImageSize::new(1200.0, 800.0)
}

/// Fits the screen: rests at scale 1, centred at (50, 100).
pub fn small_portrait() -> ImageSize {
    ImageSize::new(300.0, 600.0)
}

/// Taller than the screen: rests at 0.5 scale, centred at (100, 0).
pub fn tall_image() -> ImageSize {
    ImageSize::new(400.0, 1600.0)
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

pub fn one_touch() -> Vec<Point> {
    vec![Point::new(200.0, 400.0)]
}

/// Two touches `distance` apart on a horizontal line through the centre.
pub fn two_touches(distance: f32) -> Vec<Point> {
    vec![
        Point::new(200.0 - distance / 2.0, 400.0),
        Point::new(200.0 + distance / 2.0, 400.0),
    ]
}

pub fn descriptor(name: &str, size: ImageSize) -> ImageDescriptor {
    ImageDescriptor::new(name).with_size(size.width, size.height)
}

/// Three images with known sizes: wide, small portrait, tall.
pub fn gallery() -> Vec<ImageDescriptor> {
    vec![
        descriptor("wide.jpg", wide_image()),
        descriptor("small.jpg", small_portrait()),
        descriptor("tall.jpg", tall_image()),
    ]
}

/// Controller opened on `images` at `start` with events drained.
pub fn open_viewer(
    config: ViewerConfig,
    images: Vec<ImageDescriptor>,
    start: usize,
) -> ViewerController {
    let mut viewer = ViewerController::new(config, phone()).unwrap();
    viewer.open(images, start, Duration::ZERO).unwrap();
    viewer.drain_events();
    viewer
}
