//! External speech collaborators
//!
//! Speech-to-text capture and text-to-speech announcement are external
//! capabilities. This module defines the trait seams the session controller
//! drives, plus reference implementations for a terminal session:
//! - `ScriptedCapture`: capture source fed from a queue of scripted outcomes
//! - `ConsoleAnnouncer`: prints utterances, models playback as an abortable task

mod announce;
mod capture;

pub use announce::{Announcer, ConsoleAnnouncer};
pub use capture::{CaptureFailure, CaptureOutcome, ScriptQueue, ScriptedCapture, SpeechCapture};
