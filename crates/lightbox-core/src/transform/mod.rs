pub mod animation;
pub mod machine;

pub use animation::{Easing, Tween};
pub use machine::{Completion, Phase, TransformMachine};
