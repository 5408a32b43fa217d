//! Sequential playlist playback, synchronized with detail-view visibility
//!
//! The player walks an ordered list of audio-bearing points north to south,
//! opening each point's detail view and playing its clip; the clip's
//! completion signal drives the next step. Users get exactly two actions:
//! a play/pause toggle and a stop.
//!
//! Two quirks are deliberate and pinned by tests:
//! - `stop` does not close the currently open detail view; the next run's
//!   first advance (or the host's one-popup rule) takes care of it.
//! - Resuming from pause advances to the next playlist entry rather than
//!   replaying the interrupted one.

pub mod control;

use std::cmp::Ordering;

use chrono::Utc;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use glotmap_common::config::ControlPosition;
use glotmap_common::events::{PlayerState, ViewerEvent};
use glotmap_common::Bounds;

use crate::driver::{Completion, PlayerEvent};
use crate::host::{AudioBackend, MapHost};
use crate::player::control::{ControlGlyph, PlayerControl};
use crate::point::Point;

/// Drives sequential playback of a playlist of points
///
/// Each instance owns its full state; rebuilding the point set discards the
/// instance and creates a new one, so a completion signal can never reach a
/// player it was not minted by.
pub struct PlaylistPlayer {
    playlist: Vec<Point>,
    state: PlayerState,
    /// Index of the point whose detail view playback last opened;
    /// `None` when no point is currently governed
    cursor: Option<usize>,
    /// Identity of the current run (one Stopped -> Playing activation)
    run: Option<Uuid>,
    /// Token of the clip start whose completion is awaited
    pending_clip: Option<Uuid>,
    /// Viewport captured at activation; points outside it are passed over
    run_bounds: Option<Bounds>,
    control: PlayerControl,
    input_tx: mpsc::UnboundedSender<PlayerEvent>,
    events: broadcast::Sender<ViewerEvent>,
}

impl PlaylistPlayer {
    /// Bind a new playlist; the player starts `Stopped` with no cursor
    pub fn new(
        playlist: Vec<Point>,
        control_position: ControlPosition,
        input_tx: mpsc::UnboundedSender<PlayerEvent>,
        events: broadcast::Sender<ViewerEvent>,
    ) -> Self {
        Self {
            playlist,
            state: PlayerState::Stopped,
            cursor: None,
            run: None,
            pending_clip: None,
            run_bounds: None,
            control: PlayerControl::new(control_position),
            input_tx,
            events,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn playlist(&self) -> &[Point] {
        &self.playlist
    }

    pub fn control(&self) -> &PlayerControl {
        &self.control
    }

    /// Add the on-map control to the host chrome; idempotent
    pub fn attach(&mut self, host: &mut dyn MapHost) {
        self.control.attach(host);
    }

    /// Remove the on-map control from the host chrome; idempotent
    pub fn detach(&mut self, host: &mut dyn MapHost) {
        self.control.detach(host);
    }

    /// The single play/pause control
    ///
    /// Stopped or paused -> playing (a fresh run re-sorts the playlist
    /// north-to-south and snapshots the viewport); playing -> paused,
    /// freezing the cursor and leaving the open detail view alone.
    pub fn toggle(&mut self, host: &mut dyn MapHost, audio: &mut dyn AudioBackend) {
        match self.state {
            PlayerState::Playing => {
                self.state = PlayerState::Paused;
                // The in-flight clip is abandoned; its completion, if it
                // ever fires, no longer matches.
                self.pending_clip = None;
                host.set_toggle_glyph(ControlGlyph::Play);
                debug!(cursor = ?self.cursor, "Playback paused");
                self.emit_state_changed();
            }
            PlayerState::Stopped | PlayerState::Paused => {
                let fresh_run = self.state == PlayerState::Stopped;
                self.state = PlayerState::Playing;
                host.set_toggle_glyph(ControlGlyph::Pause);
                if fresh_run {
                    // Ordering and viewport are frozen per run; a resume
                    // from pause reuses both.
                    self.playlist.sort_by(|a, b| {
                        b.position
                            .lat
                            .partial_cmp(&a.position.lat)
                            .unwrap_or(Ordering::Equal)
                    });
                    let run = Uuid::new_v4();
                    self.run = Some(run);
                    self.run_bounds = host.visible_bounds();
                    info!(%run, points = self.playlist.len(), "Playback run started");
                } else {
                    debug!(cursor = ?self.cursor, "Playback resumed");
                }
                self.emit_state_changed();
                self.advance(host, audio);
            }
        }
    }

    /// Stop playback and forget the cursor
    ///
    /// Resets the toggle glyph but does not close the currently open detail
    /// view. Idempotent beyond the glyph reset.
    pub fn stop(&mut self, host: &mut dyn MapHost) {
        host.set_toggle_glyph(ControlGlyph::Play);
        if self.state == PlayerState::Stopped {
            return;
        }
        self.state = PlayerState::Stopped;
        self.cursor = None;
        self.run = None;
        self.pending_clip = None;
        self.run_bounds = None;
        debug!("Playback stopped");
        self.emit_state_changed();
    }

    /// React to a clip's completion signal
    ///
    /// Completions are only honored while playing and only for the most
    /// recently started clip; anything else is a stale signal from an
    /// abandoned clip or a torn-down run.
    pub fn handle_clip_finished(
        &mut self,
        clip: Uuid,
        host: &mut dyn MapHost,
        audio: &mut dyn AudioBackend,
    ) {
        if self.state != PlayerState::Playing || self.pending_clip != Some(clip) {
            warn!(%clip, state = %self.state, "Discarding stale clip completion");
            return;
        }
        self.pending_clip = None;
        self.advance(host, audio);
    }

    /// Step to the next playlist entry
    ///
    /// Closes the current detail view, moves the cursor forward, opens the
    /// next view and starts its clip. Entries that cannot produce sound
    /// (no clip, unplayable clip, outside the activation viewport) are
    /// passed over in the same call; the walk is bounded by the playlist
    /// length because the cursor only moves forward. End of list stops the
    /// run; there is no wrap-around.
    fn advance(&mut self, host: &mut dyn MapHost, audio: &mut dyn AudioBackend) {
        let mut remaining = self.playlist.len() + 1;
        while remaining > 0 {
            remaining -= 1;
            if self.state != PlayerState::Playing {
                return;
            }
            let next = self.cursor.map_or(0, |current| current + 1);
            if next >= self.playlist.len() {
                // Terminal for the run. The view opened last stays open;
                // stop does not close it.
                if let Some(run) = self.run {
                    info!(%run, "Playback run finished");
                    self.emit(ViewerEvent::RunFinished {
                        run,
                        timestamp: Utc::now(),
                    });
                }
                self.stop(host);
                return;
            }
            if let Some(current) = self.cursor {
                let id = self.playlist[current].id.clone();
                host.close_popup(&id);
                self.emit(ViewerEvent::PointClosed {
                    point_id: id.to_string(),
                    timestamp: Utc::now(),
                });
            }
            self.cursor = Some(next);

            let point_id = self.playlist[next].id.clone();
            let position = self.playlist[next].position;
            if let Some(bounds) = self.run_bounds {
                if !bounds.contains(position) {
                    debug!(point = %point_id, "Point outside activation viewport, skipping");
                    self.emit_skipped(point_id.to_string());
                    continue;
                }
            }

            host.open_popup(&point_id);
            self.emit(ViewerEvent::PointOpened {
                point_id: point_id.to_string(),
                timestamp: Utc::now(),
            });

            let Some(clip) = self.playlist[next].audio.clone() else {
                debug!(point = %point_id, "Point has no clip, skipping");
                self.emit_skipped(point_id.to_string());
                continue;
            };

            let token = Uuid::new_v4();
            match audio.play(&clip, Completion::new(token, self.input_tx.clone())) {
                Ok(()) => {
                    self.pending_clip = Some(token);
                    debug!(point = %point_id, resource = %clip.resource, "Clip started");
                    self.emit(ViewerEvent::ClipStarted {
                        point_id: point_id.to_string(),
                        resource: clip.resource,
                        run: self.run.unwrap_or_default(),
                        timestamp: Utc::now(),
                    });
                    return;
                }
                Err(err) => {
                    debug!(point = %point_id, %err, "Unplayable clip, skipping");
                    self.emit_skipped(point_id.to_string());
                }
            }
        }
    }

    fn emit_state_changed(&self) {
        self.emit(ViewerEvent::PlaybackStateChanged {
            state: self.state,
            timestamp: Utc::now(),
        });
    }

    fn emit_skipped(&self, point_id: String) {
        self.emit(ViewerEvent::ClipSkipped {
            point_id,
            timestamp: Utc::now(),
        });
    }

    fn emit(&self, event: ViewerEvent) {
        // Fire-and-forget: no subscriber is fine.
        let _ = self.events.send(event);
    }
}
