//! Event-loop input types and the single-task dispatch driver
//!
//! All state transitions happen on one task, in response to discrete
//! events: user clicks on the control, audio completion signals, and
//! filter-selector changes. The completion signal is the only continuation
//! once a clip starts; it re-enters the player through the same channel as
//! everything else.

use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::host::{AudioBackend, MapHost};
use crate::map::MapView;

/// Inputs to the viewer event loop
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    /// The control's play/pause affordance was clicked
    ToggleClicked,
    /// The control's stop affordance was clicked
    StopClicked,
    /// A clip finished naturally; `clip` identifies which start it belongs to
    ClipFinished { clip: Uuid },
    /// The externally-rendered filter selector changed
    FilterChanged { concept: Option<String> },
}

/// One-shot completion handle for a single clip start
///
/// Handed to [`AudioBackend::play`]; firing it enqueues a `ClipFinished`
/// event carrying the clip token minted for that start. Firing is
/// fire-and-forget: if the event loop is gone the signal is dropped.
#[derive(Debug)]
pub struct Completion {
    clip: Uuid,
    tx: mpsc::UnboundedSender<PlayerEvent>,
}

impl Completion {
    pub(crate) fn new(clip: Uuid, tx: mpsc::UnboundedSender<PlayerEvent>) -> Self {
        Self { clip, tx }
    }

    /// The clip token this completion belongs to
    pub fn clip(&self) -> Uuid {
        self.clip
    }

    /// Signal natural end of the clip
    pub fn fire(self) {
        let _ = self.tx.send(PlayerEvent::ClipFinished { clip: self.clip });
    }
}

/// Create the event-loop input channel
pub fn input_channel() -> (
    mpsc::UnboundedSender<PlayerEvent>,
    mpsc::UnboundedReceiver<PlayerEvent>,
) {
    mpsc::unbounded_channel()
}

/// Single-task dispatch loop owning the map view and its collaborators
pub struct ViewerDriver<H: MapHost, A: AudioBackend> {
    map: MapView,
    host: H,
    audio: A,
    rx: mpsc::UnboundedReceiver<PlayerEvent>,
}

impl<H: MapHost, A: AudioBackend> ViewerDriver<H, A> {
    pub fn new(map: MapView, host: H, audio: A, rx: mpsc::UnboundedReceiver<PlayerEvent>) -> Self {
        Self {
            map,
            host,
            audio,
            rx,
        }
    }

    pub fn map(&self) -> &MapView {
        &self.map
    }

    /// Dispatch events until every input sender is dropped
    pub async fn run(mut self) {
        info!("Viewer event loop started");
        while let Some(event) = self.rx.recv().await {
            debug!(?event, "Dispatching viewer event");
            self.map.handle_event(&mut self.host, &mut self.audio, event);
        }
        info!("Viewer event loop finished");
    }
}
