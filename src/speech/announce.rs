use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::session::VoiceSettings;

/// Text-to-speech seam.
///
/// At most one utterance is audible at a time and there is no queueing: the
/// controller cancels any in-flight utterance before speaking a new one.
#[async_trait::async_trait]
pub trait Announcer: Send {
    /// Stop any in-progress utterance.
    fn cancel(&mut self);

    /// Vocalize one utterance with the given voice parameters.
    async fn speak(&mut self, text: &str, voice: &VoiceSettings) -> Result<()>;
}

/// Terminal announcer: prints the utterance and models playback time as an
/// abortable task, so cancellation has something real to act on.
#[derive(Default)]
pub struct ConsoleAnnouncer {
    playback: Option<JoinHandle<()>>,
}

impl ConsoleAnnouncer {
    pub fn new() -> Self {
        Self::default()
    }
}

// Rough speaking pace at rate 1.0, in milliseconds per word.
const MS_PER_WORD: f64 = 400.0;

#[async_trait::async_trait]
impl Announcer for ConsoleAnnouncer {
    fn cancel(&mut self) {
        if let Some(handle) = self.playback.take() {
            handle.abort();
            debug!("Cancelled in-flight utterance");
        }
    }

    async fn speak(&mut self, text: &str, voice: &VoiceSettings) -> Result<()> {
        debug!(
            "Speaking (rate={}, pitch={}, volume={})",
            voice.rate, voice.pitch, voice.volume
        );
        println!("  (voice) {}", text);

        let words = text.split_whitespace().count().max(1);
        let duration =
            Duration::from_millis((words as f64 * MS_PER_WORD / f64::from(voice.rate.max(0.1))) as u64);
        self.playback = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
        }));

        Ok(())
    }
}
