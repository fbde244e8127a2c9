use crate::viewer::image::SizeRequest;

/// Notifications and commands for the embedding application.
///
/// Collected by the controller and handed out by
/// [`ViewerController::drain_events`](crate::viewer::ViewerController::drain_events).
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    Opened { index: usize },
    Closed,
    ImageIndexChanged(usize),
    ChromeVisibilityChanged(bool),
    /// Whether the pager may page horizontally.
    ScrollEnabledChanged(bool),
    /// Ask the pager to move to a page.
    ScrollToIndex { index: usize, animated: bool },
    /// Ask the host to look up an image's intrinsic size.
    FetchImageSize(SizeRequest),
}

impl std::fmt::Display for ViewerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Opened { index } => write!(f, "opened at image {index}"),
            Self::Closed => write!(f, "closed"),
            Self::ImageIndexChanged(index) => write!(f, "image index changed to {index}"),
            Self::ChromeVisibilityChanged(visible) => {
                write!(f, "chrome {}", if *visible { "shown" } else { "hidden" })
            }
            Self::ScrollEnabledChanged(enabled) => {
                write!(f, "paging {}", if *enabled { "enabled" } else { "locked" })
            }
            Self::ScrollToIndex { index, animated } => {
                write!(f, "scroll to {index} (animated: {animated})")
            }
            Self::FetchImageSize(req) => {
                write!(f, "fetch size of image {} ({})", req.index, req.source)
            }
        }
    }
}
