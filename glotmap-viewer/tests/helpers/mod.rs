//! Shared test harness: recording host, scripted audio backend, builders
//!
//! Each integration suite pulls in the subset it needs.
#![allow(dead_code)]

use std::collections::HashSet;

use tokio::sync::{broadcast, mpsc};

use glotmap_common::config::ViewerOptions;
use glotmap_common::dataset::{AudioRef, Dataset, FormRecord, LanguageRecord};
use glotmap_common::events::ViewerEvent;
use glotmap_common::{Bounds, LatLng};
use glotmap_viewer::driver::{Completion, PlayerEvent};
use glotmap_viewer::host::{AudioBackend, AudioError, MapHost};
use glotmap_viewer::player::control::{ControlGlyph, PlayerControl};
use glotmap_viewer::{MapView, PlaylistPlayer, Point, PointId};

/// One recorded host interaction
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    PlaceMarker(String),
    RemoveMarker(String),
    OpenPopup(String),
    ClosePopup(String),
    FitBounds(Option<Bounds>),
    AttachControl,
    DetachControl,
    SetToggleGlyph(ControlGlyph),
}

/// Map host that records every call
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    /// Reported viewport; `None` disables the activation snapshot filter
    pub bounds: Option<Bounds>,
    pub markers: HashSet<String>,
    pub controls_attached: usize,
    pub toggle_glyph: Option<ControlGlyph>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of popups opened, in order
    pub fn opened(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::OpenPopup(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    /// Ids of popups closed, in order
    pub fn closed(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::ClosePopup(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_fit(&self) -> Option<&Option<Bounds>> {
        self.calls.iter().rev().find_map(|c| match c {
            HostCall::FitBounds(b) => Some(b),
            _ => None,
        })
    }
}

impl MapHost for RecordingHost {
    fn place_marker(&mut self, point: &Point) {
        self.markers.insert(point.id.to_string());
        self.calls.push(HostCall::PlaceMarker(point.id.to_string()));
    }

    fn remove_marker(&mut self, id: &PointId) {
        self.markers.remove(id.as_str());
        self.calls.push(HostCall::RemoveMarker(id.to_string()));
    }

    fn open_popup(&mut self, id: &PointId) {
        self.calls.push(HostCall::OpenPopup(id.to_string()));
    }

    fn close_popup(&mut self, id: &PointId) {
        self.calls.push(HostCall::ClosePopup(id.to_string()));
    }

    fn fit_bounds(&mut self, bounds: Option<Bounds>) {
        self.calls.push(HostCall::FitBounds(bounds));
    }

    fn visible_bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    fn attach_control(&mut self, _control: &PlayerControl) {
        self.controls_attached += 1;
        self.calls.push(HostCall::AttachControl);
    }

    fn detach_control(&mut self) {
        self.controls_attached -= 1;
        self.calls.push(HostCall::DetachControl);
    }

    fn set_toggle_glyph(&mut self, glyph: ControlGlyph) {
        self.toggle_glyph = Some(glyph);
        self.calls.push(HostCall::SetToggleGlyph(glyph));
    }
}

/// Audio backend driven entirely by the test
///
/// Resources listed in `unplayable` fail to start; everything else is held
/// as a pending completion the test fires by hand.
#[derive(Debug, Default)]
pub struct ScriptedAudio {
    pub unplayable: HashSet<String>,
    pub started: Vec<String>,
    pub pending: Vec<Completion>,
}

impl ScriptedAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing<const N: usize>(resources: [&str; N]) -> Self {
        Self {
            unplayable: resources.iter().map(|r| r.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Fire the oldest pending completion
    pub fn finish_next(&mut self) {
        assert!(!self.pending.is_empty(), "no clip is pending completion");
        self.pending.remove(0).fire();
    }
}

impl AudioBackend for ScriptedAudio {
    fn play(&mut self, clip: &AudioRef, completion: Completion) -> Result<(), AudioError> {
        if self.unplayable.contains(&clip.resource) {
            return Err(AudioError {
                resource: clip.resource.clone(),
            });
        }
        self.started.push(clip.resource.clone());
        self.pending.push(completion);
        Ok(())
    }
}

/// Everything a synchronous player/map test needs
pub struct Rig {
    pub host: RecordingHost,
    pub audio: ScriptedAudio,
    pub input_tx: mpsc::UnboundedSender<PlayerEvent>,
    pub input_rx: mpsc::UnboundedReceiver<PlayerEvent>,
    pub events: broadcast::Sender<ViewerEvent>,
}

impl Rig {
    pub fn new() -> Self {
        let (input_tx, input_rx) = glotmap_viewer::input_channel();
        let (events, _) = broadcast::channel(64);
        Self {
            host: RecordingHost::new(),
            audio: ScriptedAudio::new(),
            input_tx,
            input_rx,
            events,
        }
    }

    pub fn player(&self, points: Vec<Point>) -> PlaylistPlayer {
        PlaylistPlayer::new(
            points,
            ViewerOptions::default().control_position,
            self.input_tx.clone(),
            self.events.clone(),
        )
    }

    pub fn map(&self, dataset: Dataset) -> MapView {
        MapView::new(
            dataset,
            ViewerOptions::default(),
            self.input_tx.clone(),
            self.events.clone(),
        )
    }

    /// Deliver queued event-loop inputs to the player
    pub fn pump_player(&mut self, player: &mut PlaylistPlayer) {
        while let Ok(event) = self.input_rx.try_recv() {
            if let PlayerEvent::ClipFinished { clip } = event {
                player.handle_clip_finished(clip, &mut self.host, &mut self.audio);
            }
        }
    }

    /// Deliver queued event-loop inputs to the map view
    pub fn pump_map(&mut self, map: &mut MapView) {
        while let Ok(event) = self.input_rx.try_recv() {
            map.handle_event(&mut self.host, &mut self.audio, event);
        }
    }

    /// Finish the current clip and deliver the completion to the player
    pub fn complete_clip(&mut self, player: &mut PlaylistPlayer) {
        self.audio.finish_next();
        self.pump_player(player);
    }
}

/// A test point at longitude 0 with an optional clip named after `resource`
pub fn point(id: &str, lat: f64, resource: Option<&str>) -> Point {
    Point {
        id: PointId::new(id),
        position: LatLng::new(lat, 0.0),
        label: id.to_string(),
        detail_text: format!("<b>{}</b>", id),
        audio: resource.map(|r| AudioRef {
            resource: r.to_string(),
            media_type: "audio/mpeg".to_string(),
        }),
    }
}

/// Dataset with concepts "bird" (two forms, one with audio) and "water"
/// (no forms), per language audio on the first language
pub fn bird_water_dataset() -> Dataset {
    let mut dataset = Dataset::default();
    dataset
        .concepts
        .insert("bird".to_string(), "bird".to_string());
    dataset
        .concepts
        .insert("water".to_string(), "water".to_string());
    dataset.languages = vec![
        LanguageRecord {
            id: "north".to_string(),
            name: "Northish".to_string(),
            latitude: 10.0,
            longitude: 1.0,
            audio: Some(AudioRef {
                resource: "north-intro".to_string(),
                media_type: "audio/mpeg".to_string(),
            }),
        },
        LanguageRecord {
            id: "south".to_string(),
            name: "Southish".to_string(),
            latitude: -4.0,
            longitude: 2.0,
            audio: None,
        },
    ];
    let mut bird = std::collections::BTreeMap::new();
    bird.insert(
        "north".to_string(),
        FormRecord {
            form: "tsuri".to_string(),
            audio: Some(AudioRef {
                resource: "bird-north".to_string(),
                media_type: "audio/mpeg".to_string(),
            }),
        },
    );
    bird.insert(
        "south".to_string(),
        FormRecord {
            form: "manu".to_string(),
            audio: None,
        },
    );
    dataset.forms.insert("bird".to_string(), bird);
    dataset
        .forms
        .insert("water".to_string(), std::collections::BTreeMap::new());
    dataset
}
