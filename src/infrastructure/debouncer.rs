use std::time::Duration;

use log::debug;
use tokio::{
    sync::mpsc,
    time::{Instant, sleep_until},
};

/// Collapses rapid text-change events into at most one search trigger per
/// quiet period.
///
/// Each qualifying event (re)arms the quiet-period deadline with the
/// latest text, so only the final value of a burst is ever emitted. An
/// event shorter than the minimum length arms nothing and clears any
/// pending text (firing a stale longer query after the user deleted back
/// below the gate would no longer match the visible input). A minimum
/// length of 0 disables the gate.
pub struct SearchDebouncer {
    input_tx: mpsc::UnboundedSender<String>,
}

impl SearchDebouncer {
    /// Spawns the debounce task and returns the input handle together with
    /// the receiver on which triggers are emitted.
    ///
    /// The task terminates when the handle is dropped.
    pub fn spawn(
        quiet_period: Duration,
        min_length: usize,
    ) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (trigger_tx, trigger_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_debounce(input_rx, trigger_tx, quiet_period, min_length));

        (Self { input_tx }, trigger_rx)
    }

    /// Records a text-change event with the full current text value.
    pub fn on_text_change(&self, text: &str) {
        if self.input_tx.send(text.to_string()).is_err() {
            debug!("Debounce task is gone, dropping text-change event");
        }
    }
}

async fn run_debounce(
    mut input_rx: mpsc::UnboundedReceiver<String>,
    trigger_tx: mpsc::UnboundedSender<String>,
    quiet_period: Duration,
    min_length: usize,
) {
    let mut pending: Option<String> = None;
    let mut deadline = Instant::now();
    loop {
        tokio::select! {
            event = input_rx.recv() => {
                match event {
                    None => break,
                    Some(text) => {
                        if min_length > 0 && text.chars().count() < min_length {
                            pending = None;
                        } else {
                            pending = Some(text);
                            deadline = Instant::now() + quiet_period;
                        }
                    }
                }
            }
            _ = sleep_until(deadline), if pending.is_some() => {
                if let Some(text) = pending.take() {
                    debug!("Quiet period elapsed, triggering search for: {text}");
                    if trigger_tx.send(text).is_err() {
                        break;
                    }
                }
            }
        }
    }
}
