use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tailor_core::{Effect, Msg};
use tailor_logging::{tailor_info, tailor_warn};

use super::app::HostEvent;
use super::clipboard::ClipboardReader;
use super::ticker::FlowTicker;

/// Executes core effects. Keeps at most one flow ticker alive.
pub struct EffectRunner {
    tx: mpsc::Sender<HostEvent>,
    tick_interval: Duration,
    clipboard: Arc<dyn ClipboardReader>,
    ticker: Option<FlowTicker>,
}

impl EffectRunner {
    pub fn new(
        tx: mpsc::Sender<HostEvent>,
        tick_interval: Duration,
        clipboard: Arc<dyn ClipboardReader>,
    ) -> Self {
        Self {
            tx,
            tick_interval,
            clipboard,
            ticker: None,
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartFlowTicker { run } => {
                    self.stop_ticker();
                    tailor_info!("StartFlowTicker run={} interval={:?}", run.0, self.tick_interval);
                    self.ticker = Some(FlowTicker::spawn(
                        run,
                        self.tick_interval,
                        self.tx.clone(),
                    ));
                }
                Effect::StopFlowTicker => self.stop_ticker(),
                Effect::ReadClipboard => self.read_clipboard(),
            }
        }
    }

    /// Stops any live ticker; used on exit.
    pub fn shutdown(&mut self) {
        self.stop_ticker();
    }

    #[cfg(test)]
    pub fn has_ticker(&self) -> bool {
        self.ticker.is_some()
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            tailor_info!("StopFlowTicker run={}", ticker.run().0);
            ticker.cancel();
        }
    }

    // Runs off the main loop; the answer comes back as a message.
    fn read_clipboard(&self) {
        let clipboard = self.clipboard.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = clipboard.read_text();
            if let Err(err) = &result {
                tailor_warn!("Clipboard read failed: {}", err);
            }
            let _ = tx.send(HostEvent::Msg(Msg::ClipboardRead(result)));
        });
    }
}
