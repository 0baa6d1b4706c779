use std::{
    sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender},
    thread::{self, JoinHandle},
    time::Duration,
};

/// A background thread that sends an empty message once per second until
/// it is cancelled.
///
/// Dropping the [`Ticker`] cancels the thread and waits for it to exit, so
/// a tick can never arrive after its ticker is gone.
pub struct Ticker {
    /// Receives one message per elapsed second.
    ticks: Receiver<()>,
    /// Sending on this (or dropping it) wakes and stops the thread.
    stop: Sender<()>,
    /// The tick thread. Always `Some` until the ticker is dropped.
    thread: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawns the tick thread, counting from now.
    pub fn start() -> Self {
        let (tick_tx, ticks) = channel();
        let (stop, stop_rx) = channel();

        let thread = thread::spawn(move || loop {
            match stop_rx.recv_timeout(Duration::from_secs(1)) {
                // a full second passed without a stop message
                Err(RecvTimeoutError::Timeout) => {
                    if tick_tx.send(()).is_err() {
                        break;
                    }
                }
                _ => break,
            }
        });

        Self {
            ticks,
            stop,
            thread: Some(thread),
        }
    }

    /// The channel the ticks arrive on.
    pub const fn ticks(&self) -> &Receiver<()> {
        &self.ticks
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // the thread may already have exited, in which case sending fails
        // harmlessly
        let _ = self.stop.send(());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ticker;
    use std::time::{Duration, Instant};

    #[test]
    fn a_running_ticker_delivers_ticks() {
        let ticker = Ticker::start();
        assert!(
            ticker.ticks().recv_timeout(Duration::from_secs(5)).is_ok(),
            "no tick arrived within five seconds"
        );
    }

    #[test]
    fn dropping_a_ticker_returns_promptly() {
        let ticker = Ticker::start();
        let start = Instant::now();
        drop(ticker);
        assert!(
            start.elapsed() < Duration::from_secs(2),
            "cancelling should not wait out the tick interval"
        );
    }
}
