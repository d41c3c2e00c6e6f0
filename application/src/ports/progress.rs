//! Progress notification port
//!
//! Defines the observer that receives [`ProgressEvent`]s during generation.

use ask_domain::ProgressEvent;
use std::sync::Mutex;
use tokio::sync::mpsc;

/// Callback for progress updates during generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinner, web page, SSE stream, etc.)
pub trait ProgressNotifier: Send + Sync {
    fn on_event(&self, event: &ProgressEvent);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_event(&self, _event: &ProgressEvent) {}
}

/// Collects every event in order, for rendering after the call returns.
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn into_events(self) -> Vec<ProgressEvent> {
        self.events.into_inner().unwrap_or_default()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_event(&self, event: &ProgressEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// Forwards events into an unbounded channel.
///
/// Lets a consumer render events concurrently with awaiting the result.
/// Events sent after the receiver is dropped are discarded.
pub struct ChannelProgress {
    sender: mpsc::UnboundedSender<ProgressEvent>,
}

impl ChannelProgress {
    pub fn new(sender: mpsc::UnboundedSender<ProgressEvent>) -> Self {
        Self { sender }
    }

    /// Create a notifier together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<ProgressEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl ProgressNotifier for ChannelProgress {
    fn on_event(&self, event: &ProgressEvent) {
        let _ = self.sender.send(event.clone());
    }
}
