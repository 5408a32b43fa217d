//! Event types for the glotmap notification system
//!
//! `ViewerEvent`s are broadcast for observers (logging, a host page status
//! line, tests). They never participate in control flow; emission is
//! fire-and-forget and a missing subscriber is not an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Playback state of the playlist player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

impl std::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerState::Playing => write!(f, "playing"),
            PlayerState::Paused => write!(f, "paused"),
            PlayerState::Stopped => write!(f, "stopped"),
        }
    }
}

/// Glotmap event types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewerEvent {
    /// Playback state changed
    PlaybackStateChanged {
        state: PlayerState,
        timestamp: DateTime<Utc>,
    },

    /// A point's detail view was opened by playback
    PointOpened {
        point_id: String,
        timestamp: DateTime<Utc>,
    },

    /// A point's detail view was closed by playback
    PointClosed {
        point_id: String,
        timestamp: DateTime<Utc>,
    },

    /// An audio clip started playing
    ClipStarted {
        point_id: String,
        resource: String,
        run: Uuid,
        timestamp: DateTime<Utc>,
    },

    /// A playlist entry was passed over without audible output
    /// (no clip, unresolvable clip, or outside the activation viewport)
    ClipSkipped {
        point_id: String,
        timestamp: DateTime<Utc>,
    },

    /// A playback run reached the end of the playlist
    RunFinished {
        run: Uuid,
        timestamp: DateTime<Utc>,
    },

    /// The point set was rebuilt (initial build or filter change)
    PointsRebuilt {
        concept: Option<String>,
        point_count: usize,
        playable_count: usize,
        timestamp: DateTime<Utc>,
    },
}
