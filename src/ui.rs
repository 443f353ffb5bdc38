use crate::history::HistoryEntry;

/// Visual category for status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Neutral,
    Success,
    Error,
}

/// Mutable display surface the session controller writes to.
///
/// The controller only ever writes; it never reads UI state back.
pub trait DisplaySurface: Send {
    /// Last-heard transcript, or placeholder text.
    fn show_transcript(&mut self, text: &str);

    /// Current result text.
    fn show_result(&mut self, text: &str);

    /// Status line plus its visual category.
    fn show_status(&mut self, text: &str, kind: StatusKind);

    /// Listening affordance: label plus active/inactive visual state.
    fn set_listening(&mut self, label: &str, active: bool);

    /// Render the history list. `entries` is newest first and may be empty,
    /// in which case a placeholder is shown.
    fn render_history(&mut self, entries: &[HistoryEntry]);
}

/// Line-oriented terminal display.
pub struct ConsoleDisplay;

impl DisplaySurface for ConsoleDisplay {
    fn show_transcript(&mut self, text: &str) {
        println!("  {}", text);
    }

    fn show_result(&mut self, text: &str) {
        println!("  = {}", text);
    }

    fn show_status(&mut self, text: &str, kind: StatusKind) {
        match kind {
            StatusKind::Neutral => println!("  [{}]", text),
            StatusKind::Success => println!("  [ok] {}", text),
            StatusKind::Error => println!("  [error] {}", text),
        }
    }

    fn set_listening(&mut self, label: &str, active: bool) {
        if active {
            println!("  <mic on> {}", label);
        } else {
            println!("  <mic off> {}", label);
        }
    }

    fn render_history(&mut self, entries: &[HistoryEntry]) {
        if entries.is_empty() {
            println!("  No calculations yet");
            return;
        }
        for entry in entries {
            println!(
                "  {}  {} = {}",
                entry.timestamp, entry.expression, entry.result
            );
        }
    }
}
