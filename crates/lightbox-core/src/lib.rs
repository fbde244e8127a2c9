pub mod color;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod transform;
pub mod viewer;

pub use error::{LightboxError, Result};
