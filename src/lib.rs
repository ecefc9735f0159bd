pub mod checks;
pub mod config;
pub mod error;
pub mod model;
pub mod report;

pub use checks::{
    check_all, is_reflexive, is_symmetric, is_transitive, FrameClass, FrameProperties,
    FrameProperty,
};
pub use config::Config;
pub use error::{FrameError, Result};
pub use model::{AccessibilityModel, Frame, WorldIndex};
