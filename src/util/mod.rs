//! Utility modules

pub mod logging;
pub mod resource;
pub mod time;
