//! Data models

pub mod audit;
pub mod tab;
pub mod notification;

pub use audit::*;
pub use tab::*;
pub use notification::*;
