use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::Result;
use thiserror::Error;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use crate::session::SessionEvent;

/// Why a capture attempt produced no transcript.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureFailure {
    /// The capture window elapsed without any detectable speech.
    #[error("no speech detected")]
    NoSpeech,

    /// Any other capture-level failure, carrying the backend's reason string.
    #[error("capture error: {0}")]
    Other(String),
}

/// One-shot speech capture seam.
///
/// `start` begins a single capture attempt, configured for final results only
/// in a fixed language. The source reports back on the controller's event
/// channel: one `TranscriptReady` or one `CaptureFailed`, always followed by
/// `CaptureEnded`. Capture lifetime is owned by the source; the controller
/// imposes no timeout.
#[async_trait::async_trait]
pub trait SpeechCapture: Send {
    async fn start(&mut self) -> Result<()>;
}

/// Scripted outcome for one capture attempt.
#[derive(Debug, Clone)]
pub enum CaptureOutcome {
    Transcript(String),
    Failed(CaptureFailure),
}

/// Shared queue of scripted capture outcomes, held by whoever feeds the
/// capture source (the terminal frontend, or a test).
pub type ScriptQueue = Arc<Mutex<VecDeque<CaptureOutcome>>>;

/// Capture source backed by a queue of scripted outcomes.
///
/// The terminal frontend pushes each typed line here before requesting a
/// capture; tests preload the queue. Starting with an empty queue behaves
/// like a capture window in which nothing was said.
pub struct ScriptedCapture {
    language: String,
    outcomes: ScriptQueue,
    events: mpsc::Sender<SessionEvent>,
}

impl ScriptedCapture {
    pub fn new(language: impl Into<String>, events: mpsc::Sender<SessionEvent>) -> Self {
        Self {
            language: language.into(),
            outcomes: Arc::new(Mutex::new(VecDeque::new())),
            events,
        }
    }

    /// Handle for feeding outcomes into this capture source.
    pub fn queue(&self) -> ScriptQueue {
        Arc::clone(&self.outcomes)
    }
}

#[async_trait::async_trait]
impl SpeechCapture for ScriptedCapture {
    async fn start(&mut self) -> Result<()> {
        debug!(
            "Starting capture: language={}, continuous=false, interim_results=false",
            self.language
        );

        let outcomes = Arc::clone(&self.outcomes);
        let events = self.events.clone();

        // Completion arrives as events, like a real recognizer callback
        tokio::spawn(async move {
            let outcome = outcomes
                .lock()
                .await
                .pop_front()
                .unwrap_or(CaptureOutcome::Failed(CaptureFailure::NoSpeech));

            let event = match outcome {
                CaptureOutcome::Transcript(text) => SessionEvent::TranscriptReady(text),
                CaptureOutcome::Failed(failure) => SessionEvent::CaptureFailed(failure),
            };

            if events.send(event).await.is_err() || events.send(SessionEvent::CaptureEnded).await.is_err() {
                warn!("Controller event channel closed before capture finished");
            }
        });

        Ok(())
    }
}
