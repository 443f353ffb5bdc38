//! Calculation session management
//!
//! This module provides the `SessionController` abstraction that manages:
//! - The Idle/Listening capture state machine
//! - Transcript normalization and evaluation
//! - Result announcement through the announcer seam
//! - The bounded calculation history

mod config;
mod controller;
mod events;

pub use config::{SessionConfig, VoiceSettings};
pub use controller::SessionController;
pub use events::{SessionEvent, SessionState};
