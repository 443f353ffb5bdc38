pub mod config;
pub mod eval;
pub mod history;
pub mod normalize;
pub mod session;
pub mod speech;
pub mod ui;

pub use config::Config;
pub use eval::{evaluate, EvalError};
pub use history::{History, HistoryEntry, HISTORY_CAPACITY};
pub use normalize::normalize;
pub use session::{SessionConfig, SessionController, SessionEvent, SessionState, VoiceSettings};
pub use speech::{
    Announcer, CaptureFailure, CaptureOutcome, ConsoleAnnouncer, ScriptQueue, ScriptedCapture,
    SpeechCapture,
};
pub use ui::{ConsoleDisplay, DisplaySurface, StatusKind};
