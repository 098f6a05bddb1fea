use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize,
    /// The terminal input stream ended or failed.
    InputClosed,
}

/// Single ordered queue of terminal input and scheduled ticks.
///
/// Ticks are one-shot: the consumer re-arms the next one after handling the
/// current, so sampling latency pushes later ticks back instead of piling up.
pub struct EventHandler {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    input_task: Option<JoinHandle<()>>,
    tick_task: Option<JoinHandle<()>>,
}

impl EventHandler {
    /// Queue fed by the terminal's event stream.
    pub fn new() -> Self {
        let mut handler = Self::detached();
        let tx = handler.tx.clone();

        handler.input_task = Some(tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            while let Some(maybe_event) = reader.next().await {
                let evt = match maybe_event {
                    Ok(evt) => evt,
                    Err(err) => {
                        tracing::error!(error = %err, "terminal event stream failed");
                        break;
                    }
                };
                let mapped = match evt {
                    CrosstermEvent::Key(key) => Some(Event::Key(key)),
                    CrosstermEvent::Resize(_, _) => Some(Event::Resize),
                    _ => None,
                };
                if let Some(e) = mapped
                    && tx.send(e).is_err()
                {
                    return;
                }
            }
            let _ = tx.send(Event::InputClosed);
        }));

        handler
    }

    /// Queue without a terminal input source.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();
        Self {
            tx,
            rx,
            input_task: None,
            tick_task: None,
        }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Arms a single `Tick` after `delay`, replacing any pending one.
    pub fn schedule_tick(&mut self, delay: Duration) {
        self.cancel_tick();
        let tx = self.tx.clone();
        self.tick_task = Some(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            let _ = tx.send(Event::Tick);
        }));
    }

    pub fn cancel_tick(&mut self) {
        if let Some(task) = self.tick_task.take() {
            task.abort();
        }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.cancel_tick();
        if let Some(task) = self.input_task.take() {
            task.abort();
        }
    }
}
