//! Simulated collaborators for demos
//!
//! `TraceHost` narrates every host call through `tracing`; `TimerAudio`
//! "plays" each clip by sleeping for a fixed duration before firing the
//! completion. Together they let the binary walk a real playback run with
//! no map library and no sound device.

use std::time::Duration;

use tracing::info;

use glotmap_common::dataset::AudioRef;
use glotmap_common::Bounds;

use crate::driver::Completion;
use crate::host::{AudioBackend, AudioError, MapHost};
use crate::player::control::{ControlGlyph, PlayerControl};
use crate::point::{Point, PointId};

/// Map host that logs every call
#[derive(Debug, Default)]
pub struct TraceHost {
    /// Viewport reported to the player; `None` disables the activation
    /// viewport filter
    pub bounds: Option<Bounds>,
    marker_count: usize,
}

impl TraceHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn marker_count(&self) -> usize {
        self.marker_count
    }
}

impl MapHost for TraceHost {
    fn place_marker(&mut self, point: &Point) {
        self.marker_count += 1;
        info!(id = %point.id, label = %point.label, lat = point.position.lat, "marker placed");
    }

    fn remove_marker(&mut self, id: &PointId) {
        self.marker_count = self.marker_count.saturating_sub(1);
        info!(%id, "marker removed");
    }

    fn open_popup(&mut self, id: &PointId) {
        info!(%id, "popup opened");
    }

    fn close_popup(&mut self, id: &PointId) {
        info!(%id, "popup closed");
    }

    fn fit_bounds(&mut self, bounds: Option<Bounds>) {
        match bounds {
            Some(b) => info!(south = b.south, north = b.north, "viewport fitted"),
            None => info!("viewport fit skipped (no points)"),
        }
    }

    fn visible_bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    fn attach_control(&mut self, control: &PlayerControl) {
        info!(position = ?control.position(), "player control attached");
    }

    fn detach_control(&mut self) {
        info!("player control detached");
    }

    fn set_toggle_glyph(&mut self, glyph: ControlGlyph) {
        info!(?glyph, "toggle glyph updated");
    }
}

/// Audio backend that completes every clip after a fixed delay
#[derive(Debug)]
pub struct TimerAudio {
    clip_duration: Duration,
}

impl TimerAudio {
    pub fn new(clip_duration: Duration) -> Self {
        Self { clip_duration }
    }
}

impl AudioBackend for TimerAudio {
    fn play(&mut self, clip: &AudioRef, completion: Completion) -> Result<(), AudioError> {
        info!(resource = %clip.resource, "clip playing");
        let duration = self.clip_duration;
        tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            completion.fire();
        });
        Ok(())
    }
}
