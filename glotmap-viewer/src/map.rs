//! Point-set construction and player lifecycle
//!
//! `MapView` owns the points and the playlist player. Every build (initial
//! load or filter change) tears the previous generation down completely:
//! markers removed, control detached, player discarded. A player never
//! survives a rebuild, so completion signals cannot reference removed
//! points.

use chrono::Utc;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use glotmap_common::config::ViewerOptions;
use glotmap_common::dataset::Dataset;
use glotmap_common::events::ViewerEvent;
use glotmap_common::Bounds;

use crate::driver::PlayerEvent;
use crate::host::{AudioBackend, MapHost};
use crate::player::PlaylistPlayer;
use crate::point::Point;

/// The map view: point set, viewport fit, and player lifecycle
pub struct MapView {
    dataset: Dataset,
    options: ViewerOptions,
    points: Vec<Point>,
    player: Option<PlaylistPlayer>,
    concept: Option<String>,
    input_tx: mpsc::UnboundedSender<PlayerEvent>,
    events: broadcast::Sender<ViewerEvent>,
}

impl MapView {
    pub fn new(
        dataset: Dataset,
        options: ViewerOptions,
        input_tx: mpsc::UnboundedSender<PlayerEvent>,
        events: broadcast::Sender<ViewerEvent>,
    ) -> Self {
        Self {
            dataset,
            options,
            points: Vec::new(),
            player: None,
            concept: None,
            input_tx,
            events,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn player(&self) -> Option<&PlaylistPlayer> {
        self.player.as_ref()
    }

    pub fn concept(&self) -> Option<&str> {
        self.concept.as_deref()
    }

    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    /// (Re)build the point set for `concept` (or all languages if `None`)
    ///
    /// Tears down the previous generation first, then places markers, fits
    /// the viewport, and either attaches a playlist player (at least one
    /// audio-bearing point) or opens every detail view statically.
    pub fn build(&mut self, host: &mut dyn MapHost, concept: Option<&str>) {
        // A player mid-playback must reach Stopped before its points go
        // away; a completion arriving later dies on the state guard.
        if let Some(player) = self.player.as_mut() {
            player.stop(host);
        }

        for point in &self.points {
            host.remove_marker(&point.id);
        }

        self.points = match concept {
            Some(concept) => self.build_filtered(concept),
            None => self.dataset.languages.iter().map(Point::from_language).collect(),
        };
        self.concept = concept.map(str::to_string);
        for point in &self.points {
            host.place_marker(point);
        }

        host.fit_bounds(Bounds::enclosing(self.points.iter().map(|p| p.position)));

        if let Some(mut player) = self.player.take() {
            player.detach(host);
        }

        let playable: Vec<Point> = self
            .points
            .iter()
            .filter(|p| p.has_audio())
            .cloned()
            .collect();
        let playable_count = playable.len();

        if playable.is_empty() {
            // Static display: no playback control, every detail view open.
            for point in &self.points {
                host.open_popup(&point.id);
            }
            debug!(points = self.points.len(), "Built static point set (no audio)");
        } else {
            let mut player = PlaylistPlayer::new(
                playable,
                self.options.control_position,
                self.input_tx.clone(),
                self.events.clone(),
            );
            player.attach(host);
            self.player = Some(player);
            debug!(
                points = self.points.len(),
                playable = playable_count,
                "Built playable point set"
            );
        }

        info!(concept = ?self.concept, points = self.points.len(), "Point set rebuilt");
        let _ = self.events.send(ViewerEvent::PointsRebuilt {
            concept: self.concept.clone(),
            point_count: self.points.len(),
            playable_count,
            timestamp: Utc::now(),
        });
    }

    /// Dispatch one event-loop input
    pub fn handle_event(
        &mut self,
        host: &mut dyn MapHost,
        audio: &mut dyn AudioBackend,
        event: PlayerEvent,
    ) {
        match event {
            PlayerEvent::ToggleClicked => {
                if let Some(player) = self.player.as_mut() {
                    player.toggle(host, audio);
                }
            }
            PlayerEvent::StopClicked => {
                if let Some(player) = self.player.as_mut() {
                    player.stop(host);
                }
            }
            PlayerEvent::ClipFinished { clip } => {
                if let Some(player) = self.player.as_mut() {
                    player.handle_clip_finished(clip, host, audio);
                }
            }
            PlayerEvent::FilterChanged { concept } => {
                self.build(host, concept.as_deref());
            }
        }
    }

    /// Points for one concept: a language contributes a point only if it
    /// has a recorded form under that concept
    fn build_filtered(&self, concept: &str) -> Vec<Point> {
        let Some(forms) = self.dataset.forms_for(concept) else {
            return Vec::new();
        };
        self.dataset
            .languages
            .iter()
            .filter_map(|lang| forms.get(&lang.id).map(|form| Point::from_form(lang, form)))
            .collect()
    }
}
