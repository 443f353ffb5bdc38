use anyhow::Result;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;

use voice_calc::{
    CaptureFailure, CaptureOutcome, Config, ConsoleAnnouncer, ConsoleDisplay, ScriptedCapture,
    SessionConfig, SessionController, SessionEvent,
};

/// Spoken arithmetic, evaluated and spoken back.
#[derive(Debug, Parser)]
#[command(name = "voice-calc", version, about)]
struct Cli {
    /// Configuration file (TOML); defaults apply when absent
    #[arg(long, default_value = "config/voice-calc")]
    config: String,

    /// Process a single phrase and exit
    #[arg(long)]
    once: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("{} starting", cfg.service.name);
    info!("Capture language: {}", cfg.speech.language);

    let session_config = SessionConfig {
        language: cfg.speech.language.clone(),
        voice: cfg.voice,
        ..SessionConfig::default()
    };

    let (events_tx, mut events_rx) = mpsc::channel(32);
    let capture = ScriptedCapture::new(&cfg.speech.language, events_tx);
    let outcomes = capture.queue();

    let mut controller = SessionController::new(
        session_config,
        Box::new(capture),
        Box::new(ConsoleAnnouncer::new()),
        Box::new(ConsoleDisplay),
    );

    if let Some(phrase) = cli.once {
        outcomes
            .lock()
            .await
            .push_back(CaptureOutcome::Transcript(phrase));
        controller.handle_event(SessionEvent::CaptureRequested).await;
        controller.settle(&mut events_rx).await;
        return Ok(());
    }

    println!("Speak by typing a phrase, e.g. \"what is 5 plus 3\".");
    println!("Commands: :clear  :history  :quit  (an empty line is a silent capture)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" | ":q" => break,
            ":clear" => {
                controller.handle_event(SessionEvent::ClearRequested).await;
            }
            ":history" => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(controller.history().entries())?
                );
            }
            phrase => {
                let outcome = if phrase.is_empty() {
                    CaptureOutcome::Failed(CaptureFailure::NoSpeech)
                } else {
                    CaptureOutcome::Transcript(phrase.to_string())
                };
                outcomes.lock().await.push_back(outcome);

                controller.handle_event(SessionEvent::CaptureRequested).await;
                controller.settle(&mut events_rx).await;
            }
        }
    }

    info!("Session finished");
    Ok(())
}
