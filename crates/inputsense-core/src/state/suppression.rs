// Inputsense Suppression State
// Tri-state markers used to veto classifications caused by synthetic events

use std::fmt;

/// A flag that may not have been observed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TriState {
    #[default]
    Unknown,
    True,
    False,
}

impl TriState {
    pub fn is_true(self) -> bool {
        matches!(self, TriState::True)
    }

    pub fn is_false(self) -> bool {
        matches!(self, TriState::False)
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, TriState::Unknown)
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriState::Unknown => write!(f, "unknown"),
            TriState::True => write!(f, "true"),
            TriState::False => write!(f, "false"),
        }
    }
}

/// Which raw event kinds fired recently.
///
/// These flags only arbitrate ambiguous event sequences; they are never
/// reported as the current pointer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuppressionFlags {
    pub touch_started: TriState,
    pub mouse_moved: TriState,
    pub wheel_used: TriState,
    pub key_downed: TriState,
}

impl SuppressionFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while a mouse-class event is latched.
    ///
    /// The `mousemove` and `wheel` listeners stay detached for as long as
    /// this holds.
    pub fn mouse_latched(&self) -> bool {
        self.mouse_moved.is_true() || self.wheel_used.is_true()
    }
}

impl fmt::Display for SuppressionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "touchStarted={} mouseMoved={} wheelUsed={} keyDowned={}",
            self.touch_started, self.mouse_moved, self.wheel_used, self.key_downed
        )
    }
}
