//! HTTP handlers

pub mod health;
pub mod sessions;
pub mod intents;
pub mod tabs;
pub mod notifications;
