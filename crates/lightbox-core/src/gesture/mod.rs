pub mod classifier;
pub mod config;
pub mod session;
pub mod types;

pub use classifier::{classify_move, classify_release, GestureContext};
pub use config::GestureConfig;
pub use session::GestureSession;
pub use types::{GestureDelta, GestureKind, MoveEffect, ReleaseDecision, ReleaseKind, Velocity};
