use crate::models::ProgressEvent;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{Stdout, Write};

/// Receives one event per chunk written by the downloader.
pub trait ProgressObserver {
    fn on_progress(&mut self, event: ProgressEvent);
}

impl<F: FnMut(ProgressEvent)> ProgressObserver for F {
    fn on_progress(&mut self, event: ProgressEvent) {
        self(event)
    }
}

pub fn format_progress(event: &ProgressEvent) -> String {
    format!(
        "Downloaded: {:.2}% ({:.2}/{:.2} MB)",
        event.percent(),
        event.downloaded_mb(),
        event.total_mb()
    )
}

/// Writes `\r` + the status line after every event, never a newline.
pub struct LineProgress<W: Write> {
    out: W,
}

impl<W: Write> LineProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressObserver for LineProgress<W> {
    fn on_progress(&mut self, event: ProgressEvent) {
        // Write failures are ignored; the transfer carries on.
        write!(self.out, "\r{}", format_progress(&event)).ok();
        self.out.flush().ok();
    }
}

/// Single overwritten status line on stdout.
///
/// Draws through indicatif on a terminal; when indicatif would hide the bar
/// (stdout piped or redirected) the line is written directly.
pub enum TerminalProgress {
    Bar(ProgressBar),
    Plain(LineProgress<Stdout>),
}

impl TerminalProgress {
    pub fn new() -> Self {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        if pb.is_hidden() {
            return Self::Plain(LineProgress::new(std::io::stdout()));
        }
        pb.set_style(ProgressStyle::with_template("{msg}").expect("static template"));
        Self::Bar(pb)
    }
}

impl Default for TerminalProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for TerminalProgress {
    fn on_progress(&mut self, event: ProgressEvent) {
        match self {
            Self::Bar(pb) => {
                pb.set_length(event.total_bytes);
                pb.set_position(event.bytes_downloaded);
                pb.set_message(format_progress(&event));
            }
            Self::Plain(line) => line.on_progress(event),
        }
    }
}

impl Drop for TerminalProgress {
    // Leave the last line on screen instead of clearing it.
    fn drop(&mut self) {
        if let Self::Bar(pb) = self {
            pb.abandon();
        }
    }
}
