//! # Glotmap Viewer
//!
//! Viewer core for a geographic map of language-data points with a
//! synchronized audio-playlist player. The player walks the audio-bearing
//! points north to south, opening each point's detail view and playing its
//! clip; map rendering and audio output live behind the [`host`] traits.

pub mod driver;
pub mod host;
pub mod map;
pub mod player;
pub mod point;
pub mod sim;

pub use driver::{input_channel, PlayerEvent, ViewerDriver};
pub use map::MapView;
pub use player::PlaylistPlayer;
pub use point::{Point, PointId};
