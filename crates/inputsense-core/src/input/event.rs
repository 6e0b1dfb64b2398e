// Inputsense Input Layer - Raw Events
// Typed raw events delivered by the host input surface

use strum_macros::{Display, EnumIter, IntoStaticStr};

use super::keys::NavigationKey;

/// The listener slots an engine can hold on its input surface.
///
/// Each raw event kind is delivered through exactly one slot; `mousemove`
/// and `wheel` share the mouse-class classification path but are attached
/// and detached as separate listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum ListenerKind {
    TouchStart = 0,
    MouseMove = 1,
    Wheel = 2,
    KeyDown = 3,
    PointerDown = 4,
}

impl ListenerKind {
    /// Bit position of this listener in a `ListenerSet`
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Returns true for the listeners that may be toggled by suppression
    pub fn is_mouse_class(self) -> bool {
        matches!(self, ListenerKind::MouseMove | ListenerKind::Wheel)
    }
}

/// Payload of a `keydown` event.
///
/// Every field is optional: browsers disagree on which of `keyCode`/`which`
/// and `target`/`srcElement` they populate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyDownEvent {
    /// Primary key code (`keyCode`)
    pub key_code: Option<u32>,
    /// Fallback key code (`which`)
    pub which: Option<u32>,
    /// Tag name of the event target (`target.nodeName`)
    pub target: Option<String>,
    /// Fallback target tag name (`srcElement.nodeName`)
    pub src_element: Option<String>,
}

impl KeyDownEvent {
    /// Create a key event for `code` on a target without a tag
    pub fn new(code: u32) -> Self {
        Self {
            key_code: Some(code),
            ..Self::default()
        }
    }

    /// Set the target element tag
    pub fn with_target<S: Into<String>>(mut self, tag: S) -> Self {
        self.target = Some(tag.into());
        self
    }

    /// Resolve the key code, falling back from `keyCode` to `which`.
    ///
    /// A `keyCode` of 0 means the browser did not know the key, so it falls
    /// back as well.
    pub fn code(&self) -> Option<u32> {
        self.key_code.filter(|code| *code != 0).or(self.which)
    }

    /// Resolve the target tag, falling back from `target` to `srcElement`
    pub fn target_tag(&self) -> Option<&str> {
        self.target.as_deref().or(self.src_element.as_deref())
    }

    /// Look up the resolved key code in the navigation table
    pub fn navigation_key(&self) -> Option<NavigationKey> {
        self.code().and_then(NavigationKey::from_code)
    }
}

/// Payload of a `pointerdown` event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerDownEvent {
    /// Contact geometry height reported by the device
    pub height: Option<f64>,
    /// Device-reported pointer type label (e.g. "touch", "pen", "mouse")
    pub pointer_type: Option<String>,
}

impl PointerDownEvent {
    pub fn new(height: f64) -> Self {
        Self {
            height: Some(height),
            pointer_type: None,
        }
    }

    /// Set the device-reported pointer type label
    pub fn with_pointer_type<S: Into<String>>(mut self, label: S) -> Self {
        self.pointer_type = Some(label.into());
        self
    }

    /// The height if it is a usable measurement.
    ///
    /// Missing, NaN, infinite and negative heights are rejected.
    pub fn valid_height(&self) -> Option<f64> {
        self.height.filter(|h| h.is_finite() && *h >= 0.0)
    }
}

/// A raw event observed on the input surface
#[derive(Debug, Clone, PartialEq)]
pub enum RawEvent {
    TouchStart,
    MouseMove,
    Wheel,
    KeyDown(KeyDownEvent),
    PointerDown(PointerDownEvent),
}

impl RawEvent {
    /// Shorthand for a `keydown` with only a key code
    pub fn key(code: u32) -> Self {
        RawEvent::KeyDown(KeyDownEvent::new(code))
    }

    /// Shorthand for a `keydown` with a key code and target tag
    pub fn key_on<S: Into<String>>(code: u32, tag: S) -> Self {
        RawEvent::KeyDown(KeyDownEvent::new(code).with_target(tag))
    }

    /// Shorthand for an unlabeled `pointerdown`
    pub fn pointer(height: f64) -> Self {
        RawEvent::PointerDown(PointerDownEvent::new(height))
    }

    /// The listener slot this event is delivered through
    pub fn kind(&self) -> ListenerKind {
        match self {
            RawEvent::TouchStart => ListenerKind::TouchStart,
            RawEvent::MouseMove => ListenerKind::MouseMove,
            RawEvent::Wheel => ListenerKind::Wheel,
            RawEvent::KeyDown(_) => ListenerKind::KeyDown,
            RawEvent::PointerDown(_) => ListenerKind::PointerDown,
        }
    }
}
