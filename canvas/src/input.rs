//! Input model: pointer and keyboard events, and the sampler that turns them into steering.
//!
//! [`InputEvent`] is the browser-independent form of a DOM event; the DOM
//! binding in [`crate::dom`] produces them and native hosts can synthesize
//! them directly. [`InputSampler`] folds events into the latest pointer
//! position and boost state, and answers steering queries relative to the
//! local player's on-screen head.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::consts::BOOST_KEY;
use crate::math::ScreenPoint;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code. Unknown codes yield `None`.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// A keyboard key, as `KeyboardEvent.code` (layout independent, e.g. `"Space"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

/// The canvas element's bounding rect in client coordinates at event time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A browser input event reduced to what the sampler needs.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved; position is in client (page viewport) coordinates.
    PointerMove { client_x: f64, client_y: f64, rect: CanvasRect },
    PointerEnter,
    PointerLeave,
    PointerDown(Button),
    PointerUp(Button),
    KeyDown(Key),
    KeyUp(Key),
}

/// Steering intent sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlSignal {
    /// Heading in radians, `atan2(dy, dx)` from the player's head to the pointer.
    pub angle: f64,
    pub is_boosting: bool,
}

/// Latest pointer and boost state.
///
/// Boost is held by two independent sources, the primary pointer button and
/// the boost key. Releasing one does not cancel the other.
#[derive(Debug, Clone)]
pub struct InputSampler {
    mouse: ScreenPoint,
    mouse_inside: bool,
    pointer_held: bool,
    key_held: bool,
    boost_key: String,
    destroyed: bool,
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new(BOOST_KEY)
    }
}

impl InputSampler {
    #[must_use]
    pub fn new(boost_key: &str) -> Self {
        Self {
            mouse: ScreenPoint::ZERO,
            mouse_inside: false,
            pointer_held: false,
            key_held: false,
            boost_key: boost_key.to_owned(),
            destroyed: false,
        }
    }

    /// Fold one event into the sampler. Returns `true` if any state changed.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        if self.destroyed {
            return false;
        }
        match event {
            InputEvent::PointerMove { client_x, client_y, rect } => {
                let local = ScreenPoint::new(client_x - rect.left, client_y - rect.top);
                if !local.is_finite() {
                    return false;
                }
                let changed = local != self.mouse;
                self.mouse = local;
                changed
            }
            InputEvent::PointerEnter => replace(&mut self.mouse_inside, true),
            InputEvent::PointerLeave => replace(&mut self.mouse_inside, false),
            InputEvent::PointerDown(Button::Primary) => replace(&mut self.pointer_held, true),
            InputEvent::PointerUp(Button::Primary) => replace(&mut self.pointer_held, false),
            InputEvent::KeyDown(Key(code)) if *code == self.boost_key => replace(&mut self.key_held, true),
            InputEvent::KeyUp(Key(code)) if *code == self.boost_key => replace(&mut self.key_held, false),
            InputEvent::PointerDown(_) | InputEvent::PointerUp(_) | InputEvent::KeyDown(_) | InputEvent::KeyUp(_) => {
                false
            }
        }
    }

    /// Heading from `player_screen` to the pointer, `atan2(dy, dx)`.
    #[must_use]
    pub fn angle_to_mouse(&self, player_screen: ScreenPoint) -> f64 {
        (self.mouse - player_screen).angle()
    }

    /// Unit vector toward the pointer, or zero when the pointer sits on the player.
    #[must_use]
    pub fn direction_to_mouse(&self, player_screen: ScreenPoint) -> ScreenPoint {
        (self.mouse - player_screen).normalized()
    }

    #[must_use]
    pub fn distance_to_mouse(&self, point: ScreenPoint) -> f64 {
        point.distance_to(self.mouse)
    }

    #[must_use]
    pub fn is_mouse_near(&self, point: ScreenPoint, radius: f64) -> bool {
        self.distance_to_mouse(point) <= radius
    }

    /// Override the pointer position without an event (autopilot, tests).
    pub fn set_mouse_position(&mut self, x: f64, y: f64) {
        if self.destroyed {
            return;
        }
        let p = ScreenPoint::new(x, y);
        if p.is_finite() {
            self.mouse = p;
        }
    }

    /// Stop accepting input. Pointer position and boost stay frozen at their last values.
    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    /// Sample the current steering intent relative to the player's on-screen head.
    #[must_use]
    pub fn control(&self, player_screen: ScreenPoint) -> ControlSignal {
        ControlSignal { angle: self.angle_to_mouse(player_screen), is_boosting: self.is_boosting() }
    }

    #[must_use]
    pub fn is_boosting(&self) -> bool {
        self.pointer_held || self.key_held
    }

    #[must_use]
    pub fn mouse_position(&self) -> ScreenPoint {
        self.mouse
    }

    #[must_use]
    pub fn is_mouse_inside(&self) -> bool {
        self.mouse_inside
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[must_use]
    pub fn boost_key(&self) -> &str {
        &self.boost_key
    }
}

/// Set `slot` to `value`, reporting whether it changed.
fn replace(slot: &mut bool, value: bool) -> bool {
    let changed = *slot != value;
    *slot = value;
    changed
}
