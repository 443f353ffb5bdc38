use crate::speech::CaptureFailure;

/// Whether a capture attempt is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Listening,
}

/// Events delivered to the session controller.
///
/// All session state mutation happens in response to these, on a single
/// control flow; there is no parallel execution and no locking.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// User asked to start a capture attempt.
    CaptureRequested,

    /// User asked to reset the display.
    ClearRequested,

    /// Capture produced its final transcript.
    TranscriptReady(String),

    /// Capture failed before producing a transcript.
    CaptureFailed(CaptureFailure),

    /// Capture attempt finished. Always follows a result or a failure.
    CaptureEnded,
}
