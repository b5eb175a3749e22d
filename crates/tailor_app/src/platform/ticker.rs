use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tailor_core::{Msg, RunId};
use tailor_logging::tailor_debug;

use super::app::HostEvent;

/// Background thread sending `Msg::FlowTick` for one run until cancelled.
pub struct FlowTicker {
    run: RunId,
    cancel_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl FlowTicker {
    pub fn spawn(run: RunId, period: Duration, tx: mpsc::Sender<HostEvent>) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel::<()>();
        let handle = thread::spawn(move || loop {
            match cancel_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    if tx.send(HostEvent::Msg(Msg::FlowTick { run })).is_err() {
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });
        tailor_debug!("Ticker for run {} started every {:?}", run.0, period);
        Self {
            run,
            cancel_tx: Some(cancel_tx),
            handle: Some(handle),
        }
    }

    pub fn run(&self) -> RunId {
        self.run
    }

    /// Wakes and joins the thread, so no tick is sent afterwards.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        // Dropping the sender disconnects the channel and wakes the thread.
        drop(self.cancel_tx.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            tailor_debug!("Ticker for run {} stopped", self.run.0);
        }
    }
}

impl Drop for FlowTicker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::time::{Duration, Instant};

    use tailor_core::{Msg, RunId};

    use super::FlowTicker;
    use crate::platform::app::HostEvent;

    #[test]
    fn ticks_carry_the_run_id() {
        let (tx, rx) = mpsc::channel();
        let ticker = FlowTicker::spawn(RunId(7), Duration::from_millis(5), tx);

        let event = rx
            .recv_timeout(Duration::from_secs(2))
            .expect("tick within timeout");
        assert_eq!(event, HostEvent::Msg(Msg::FlowTick { run: RunId(7) }));
        ticker.cancel();
    }

    #[test]
    fn no_ticks_after_cancel() {
        let (tx, rx) = mpsc::channel();
        let ticker = FlowTicker::spawn(RunId(1), Duration::from_millis(5), tx);
        ticker.cancel();
        while rx.try_recv().is_ok() {}

        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn cancel_returns_without_waiting_out_the_period() {
        let (tx, rx) = mpsc::channel();
        let ticker = FlowTicker::spawn(RunId(3), Duration::from_millis(1500), tx);
        std::thread::sleep(Duration::from_millis(10));

        let started = Instant::now();
        ticker.cancel();

        assert!(started.elapsed() < Duration::from_millis(100));
        assert!(rx.try_recv().is_err());
    }
}
