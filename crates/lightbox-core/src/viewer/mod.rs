pub mod config;
pub mod controller;
pub mod events;
pub mod image;
pub mod timers;

pub use config::{AnimationType, ControlsConfig, ViewerConfig};
pub use controller::{Controls, ItemLayout, ViewerController, ViewerState};
pub use events::ViewerEvent;
pub use image::{ImageDescriptor, SizeRequest};
pub use timers::{Timer, TimerKind, Timers};
