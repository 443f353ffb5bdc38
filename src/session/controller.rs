use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::config::SessionConfig;
use super::events::{SessionEvent, SessionState};
use crate::eval::evaluate;
use crate::history::History;
use crate::normalize::normalize;
use crate::speech::{Announcer, CaptureFailure, SpeechCapture};
use crate::ui::{DisplaySurface, StatusKind};

const TRANSCRIPT_PLACEHOLDER: &str = "Tap microphone to start";
const RESULT_PLACEHOLDER: &str = "---";
const LISTEN_PROMPT: &str = "Speak now...";
const LABEL_IDLE: &str = "Tap to Speak";
const LABEL_LISTENING: &str = "Listening...";
const APOLOGY: &str = "Sorry, I could not calculate that";

/// Orchestrates one listen → transcribe → normalize → evaluate → announce →
/// log cycle, and owns the transient listening state and the history.
///
/// The controller is driven entirely by `SessionEvent`s applied on a single
/// control flow. It never blocks on capture: the capture source reports back
/// through the event channel, and if it never completes the controller simply
/// stays Listening. At most one capture is in flight at a time, enforced by
/// the Idle/Listening state check.
pub struct SessionController {
    config: SessionConfig,
    state: SessionState,
    history: History,
    capture: Box<dyn SpeechCapture>,
    announcer: Box<dyn Announcer>,
    display: Box<dyn DisplaySurface>,
}

impl SessionController {
    pub fn new(
        config: SessionConfig,
        capture: Box<dyn SpeechCapture>,
        announcer: Box<dyn Announcer>,
        display: Box<dyn DisplaySurface>,
    ) -> Self {
        info!(
            "Session {} created (language {})",
            config.session_id, config.language
        );

        Self {
            config,
            state: SessionState::Idle,
            history: History::new(),
            capture,
            announcer,
            display,
        }
    }

    /// Current capture state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Recorded calculations, newest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Apply one event to the state machine.
    pub async fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::CaptureRequested => self.on_capture_requested().await,
            SessionEvent::ClearRequested => self.on_clear(),
            SessionEvent::TranscriptReady(text) => self.on_transcript(&text).await,
            SessionEvent::CaptureFailed(failure) => self.on_capture_failed(&failure),
            SessionEvent::CaptureEnded => self.on_capture_ended(),
        }
    }

    /// Process events from the receiver until the in-flight capture (if any)
    /// has ended and the controller is Idle again. Returns immediately when
    /// no capture is in flight.
    pub async fn settle(&mut self, events: &mut mpsc::Receiver<SessionEvent>) {
        while self.state == SessionState::Listening {
            match events.recv().await {
                Some(event) => self.handle_event(event).await,
                None => break,
            }
        }
    }

    async fn on_capture_requested(&mut self) {
        if self.state == SessionState::Listening {
            debug!("Capture already in flight, ignoring request");
            return;
        }

        self.state = SessionState::Listening;
        self.display.set_listening(LABEL_LISTENING, true);
        self.display.show_transcript(LISTEN_PROMPT);
        self.display.show_status("Listening", StatusKind::Neutral);

        if let Err(e) = self.capture.start().await {
            // No end event will arrive for a capture that never started
            warn!("Failed to start capture: {:#}", e);
            self.on_capture_failed(&CaptureFailure::Other(e.to_string()));
        }
    }

    async fn on_transcript(&mut self, transcript: &str) {
        info!("Transcript received: {:?}", transcript);
        self.display.show_transcript(&format!("\"{}\"", transcript));

        let expression = normalize(transcript);
        match evaluate(&expression) {
            Ok(result) => {
                let result_text = result.to_string();
                self.display.show_result(&result_text);
                self.display
                    .show_status("Calculation successful!", StatusKind::Success);

                self.announce(&format!("The answer is {}", result_text)).await;

                self.history.push(expression, result);
                self.display.render_history(self.history.entries());
            }
            Err(e) => {
                debug!("Could not evaluate {:?}: {}", expression, e);
                self.display.show_result("Error");
                self.display
                    .show_status("Could not calculate that", StatusKind::Error);

                self.announce(APOLOGY).await;
            }
        }
    }

    fn on_capture_failed(&mut self, failure: &CaptureFailure) {
        self.state = SessionState::Idle;
        self.display.set_listening(LABEL_IDLE, false);

        match failure {
            CaptureFailure::NoSpeech => {
                warn!("No speech detected");
                self.display.show_transcript("No speech detected. Try again.");
                self.display
                    .show_status("No speech detected", StatusKind::Error);
            }
            CaptureFailure::Other(reason) => {
                warn!("Capture error: {}", reason);
                self.display
                    .show_status(&format!("Error: {}", reason), StatusKind::Error);
            }
        }
    }

    fn on_capture_ended(&mut self) {
        debug!("Capture ended");
        self.state = SessionState::Idle;
        self.display.set_listening(LABEL_IDLE, false);
    }

    fn on_clear(&mut self) {
        self.display.show_transcript(TRANSCRIPT_PLACEHOLDER);
        self.display.show_result(RESULT_PLACEHOLDER);
        self.display.show_status("", StatusKind::Neutral);
    }

    /// Cancel any in-flight utterance, then speak. Announcement failures are
    /// logged and swallowed; they never abort the cycle.
    async fn announce(&mut self, text: &str) {
        self.announcer.cancel();
        if let Err(e) = self.announcer.speak(text, &self.config.voice).await {
            warn!("Announcement failed: {:#}", e);
        }
    }
}
