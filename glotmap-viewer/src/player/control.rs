//! On-map playback control widget
//!
//! Two clickable affordances (toggle, stop) for the host view's control
//! chrome. The widget itself is a plain value; rendering and click routing
//! are host concerns.

use glotmap_common::config::ControlPosition;
use tracing::debug;

use crate::host::MapHost;

const PLAY_ICON: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIxOCIgaGVpZ2h0PSIxOCIgdmlld0JveD0iMCAwIDggOCI+PHBhdGggZD0iTTAgMHY2bDYtMy02LTN6IiB0cmFuc2Zvcm09InRyYW5zbGF0ZSgxIDEpIi8+PC9zdmc+";
const STOP_ICON: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIxOCIgaGVpZ2h0PSIxOCIgdmlld0JveD0iMCAwIDggOCI+PHBhdGggZD0iTTAgMHY2aDZ2LTZoLTZ6IiB0cmFuc2Zvcm09InRyYW5zbGF0ZSgxIDEpIi8+PC9zdmc+";
const PAUSE_ICON: &str = "data:image/svg+xml;base64,PHN2ZyB4bWxucz0iaHR0cDovL3d3dy53My5vcmcvMjAwMC9zdmciIHdpZHRoPSIxOCIgaGVpZ2h0PSIxOCIgdmlld0JveD0iMCAwIDggOCI+PHBhdGggZD0iTTAgMHY2aDJ2LTZoLTJ6bTQgMHY2aDJ2LTZoLTJ6IiB0cmFuc2Zvcm09InRyYW5zbGF0ZSgxIDEpIi8+PC9zdmc+";

/// The two clickable affordances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Toggle,
    Stop,
}

/// Visual state of an affordance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlGlyph {
    Play,
    Pause,
    Stop,
}

impl ControlGlyph {
    /// SVG data URI for the glyph (embedded, the viewer is offline)
    pub fn icon_uri(&self) -> &'static str {
        match self {
            ControlGlyph::Play => PLAY_ICON,
            ControlGlyph::Pause => PAUSE_ICON,
            ControlGlyph::Stop => STOP_ICON,
        }
    }

    /// Hover title for the affordance
    pub fn title(&self) -> &'static str {
        match self {
            ControlGlyph::Play => {
                "Play all audio within the current map section from north to south"
            }
            ControlGlyph::Pause => "Pause audio",
            ControlGlyph::Stop => "Stop audio",
        }
    }
}

/// One button of the control, as handed to the host for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlButton {
    pub action: ControlAction,
    pub glyph: ControlGlyph,
}

/// The playback control widget
#[derive(Debug)]
pub struct PlayerControl {
    position: ControlPosition,
    attached: bool,
}

impl PlayerControl {
    pub fn new(position: ControlPosition) -> Self {
        Self {
            position,
            attached: false,
        }
    }

    pub fn position(&self) -> ControlPosition {
        self.position
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Initial button layout: a play toggle and a stop button
    pub fn buttons(&self) -> [ControlButton; 2] {
        [
            ControlButton {
                action: ControlAction::Toggle,
                glyph: ControlGlyph::Play,
            },
            ControlButton {
                action: ControlAction::Stop,
                glyph: ControlGlyph::Stop,
            },
        ]
    }

    /// Add the control to the host chrome; idempotent
    pub fn attach(&mut self, host: &mut dyn MapHost) {
        if self.attached {
            return;
        }
        host.attach_control(self);
        self.attached = true;
        debug!(position = ?self.position, "Player control attached");
    }

    /// Remove the control from the host chrome; idempotent
    pub fn detach(&mut self, host: &mut dyn MapHost) {
        if !self.attached {
            return;
        }
        host.detach_control();
        self.attached = false;
        debug!("Player control detached");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_initial_glyphs() {
        let control = PlayerControl::new(ControlPosition::TopLeft);
        let [toggle, stop] = control.buttons();
        assert_eq!(toggle.action, ControlAction::Toggle);
        assert_eq!(toggle.glyph, ControlGlyph::Play);
        assert_eq!(stop.action, ControlAction::Stop);
        assert_eq!(stop.glyph, ControlGlyph::Stop);
    }

    #[test]
    fn test_glyph_assets_are_distinct() {
        assert_ne!(ControlGlyph::Play.icon_uri(), ControlGlyph::Pause.icon_uri());
        assert_ne!(ControlGlyph::Play.icon_uri(), ControlGlyph::Stop.icon_uri());
        assert!(ControlGlyph::Play.icon_uri().starts_with("data:image/svg+xml;base64,"));
    }
}
