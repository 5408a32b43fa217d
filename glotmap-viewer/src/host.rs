//! Collaborator seams: the hosting map library and the audio playback
//! capability
//!
//! The viewer core never talks to a real map or a real `<audio>` element;
//! it drives these two traits. Production embeddings bind them to the host
//! page, the demo binary and the tests bind them to simulated
//! implementations.

use glotmap_common::dataset::AudioRef;
use glotmap_common::Bounds;

use crate::driver::Completion;
use crate::player::control::{ControlGlyph, PlayerControl};
use crate::point::{Point, PointId};

/// The hosting map view
///
/// Contracts the core relies on:
/// - `place_marker` binds the point's detail view (popup) content and a
///   permanent tooltip carrying the point label.
/// - At most one detail view is open at a time; opening one closes any
///   other (standard map-library popup behavior).
/// - Control clicks are consumed by the host (propagation stopped, default
///   action prevented) before being routed to the event loop.
/// - `open_popup`/`close_popup` on an unknown or already closed point are
///   no-ops.
pub trait MapHost {
    fn place_marker(&mut self, point: &Point);
    fn remove_marker(&mut self, id: &PointId);
    fn open_popup(&mut self, id: &PointId);
    fn close_popup(&mut self, id: &PointId);

    /// Fit the viewport to `bounds`; `None` (empty point set) is a no-op
    fn fit_bounds(&mut self, bounds: Option<Bounds>);

    /// Currently visible viewport, `None` if the host has no viewport
    fn visible_bounds(&self) -> Option<Bounds>;

    fn attach_control(&mut self, control: &PlayerControl);
    fn detach_control(&mut self);

    /// Update the toggle affordance's glyph to reflect the player state
    fn set_toggle_glyph(&mut self, glyph: ControlGlyph);
}

/// Failure to resolve or start an audio resource
///
/// Never propagated: the player's designed recovery is a silent skip to
/// the next playlist entry.
#[derive(Debug, thiserror::Error)]
#[error("unplayable audio resource: {resource}")]
pub struct AudioError {
    pub resource: String,
}

/// The audio playback capability
pub trait AudioBackend {
    /// Start playing `clip`; fire `completion` exactly once when the clip
    /// finishes naturally
    ///
    /// An `Err` means the resource could not be resolved or started and
    /// nothing will play. A clip abandoned before its natural end (pause,
    /// stop, teardown) must not fire its completion; a completion that
    /// fires anyway is discarded by the player's run guard. There is no
    /// timeout: a clip that never completes stalls the sequence, by design.
    fn play(&mut self, clip: &AudioRef, completion: Completion) -> Result<(), AudioError>;
}
