use lightbox_core::geometry::Viewport;
use lightbox_core::layout::{header_top, layout, Platform};

// ---------------------------------------------------------------------------
// header_top
// ---------------------------------------------------------------------------

#[test]
fn test_header_top_notched_ios() {
    assert_eq!(header_top(Viewport::new(375.0, 812.0), Platform::Ios), 70.0);
    assert_eq!(header_top(Viewport::new(414.0, 896.0), Platform::Ios), 70.0);
}

#[test]
fn test_header_top_small_ios() {
    assert_eq!(header_top(Viewport::new(375.0, 667.0), Platform::Ios), 0.0);
    assert_eq!(header_top(Viewport::new(374.0, 812.0), Platform::Ios), 0.0);
}

#[test]
fn test_header_top_other_platforms() {
    assert_eq!(header_top(Viewport::new(412.0, 915.0), Platform::Android), 0.0);
    assert_eq!(header_top(Viewport::new(412.0, 915.0), Platform::Other), 0.0);
}

// ---------------------------------------------------------------------------
// layout
// ---------------------------------------------------------------------------

#[test]
fn test_layout_fills_viewport() {
    let styles = layout(Viewport::new(400.0, 800.0), Platform::Other);
    for b in [styles.underlay, styles.container, styles.image_container] {
        assert_eq!(b.top, 0.0);
        assert_eq!(b.left, 0.0);
        assert_eq!(b.width, 400.0);
        assert_eq!(b.height, 800.0);
    }
}

#[test]
fn test_layout_header_and_loading() {
    let styles = layout(Viewport::new(375.0, 812.0), Platform::Ios);
    assert_eq!(styles.header.top, 70.0);
    assert_eq!(styles.header.width, 375.0);
    assert_eq!(styles.header.height, 60.0);
    assert_eq!(styles.header.z_index, 100);
    assert_eq!(styles.loading_top, 812.0 / 2.0 - 20.0);
    assert_eq!(styles.footer_bottom, 0.0);
}

#[test]
fn test_layout_recomputed_on_rotation() {
    let portrait = layout(Viewport::new(375.0, 812.0), Platform::Ios);
    let landscape = layout(Viewport::new(812.0, 375.0), Platform::Ios);
    assert_ne!(portrait, landscape);
    assert_eq!(landscape.header.top, 0.0);
    assert_eq!(landscape.image_container.width, 812.0);
}

#[test]
fn test_platform_display() {
    assert_eq!(format!("{}", Platform::Ios), "iOS");
    assert_eq!(format!("{}", Platform::Android), "Android");
    assert_eq!(Platform::default(), Platform::Other);
}
