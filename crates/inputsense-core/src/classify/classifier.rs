// Inputsense Classifier Core
// Maps raw events to the current pointer type
//
// The classifier resolves the cross-contamination browsers produce:
// - a touch tap fires a trailing synthetic mousemove
// - keyboard-driven focus changes can fire mousemove
// - scrolling fires wheel, which counts as mouse input
//
// Suppression flags record which raw event kinds fired recently and veto
// the mouse classification an immediately preceding touch or key would
// otherwise cause.

use crate::input::{is_form_element, KeyDownEvent, PointerDownEvent, RawEvent};
use crate::state::{shared_history, AccuracyTracker, SharedHistory, SuppressionFlags, TriState};
use crate::{EngineConfig, PointerType};

/// Outcome of classifying a single raw event
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// The event was not classified; no state changed
    Ignored,
    /// The event was classified but the pointer type stayed the same
    /// (suppression flags may have changed)
    Unchanged,
    /// The pointer type changed
    Transition { from: PointerType, to: PointerType },
    /// A pointer-capability event raised the accuracy
    AccuracyUpdated(f64),
}

impl Classification {
    /// Returns true if the pointer type changed
    pub fn is_transition(&self) -> bool {
        matches!(self, Classification::Transition { .. })
    }
}

/// The current classification as seen by consumers
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub pointer_type: PointerType,
    /// Previously active types, most recently displaced first
    pub history: Vec<PointerType>,
    pub accuracy: Option<f64>,
    pub can_hover: bool,
}

/// The input-modality state machine.
///
/// Events are classified synchronously, one at a time. The classifier knows
/// nothing about listeners; gating events by subscription is the engine's
/// job.
#[derive(Debug)]
pub struct Classifier {
    pointer_type: PointerType,
    flags: SuppressionFlags,
    history: SharedHistory,
    accuracy: AccuracyTracker,
    initial_hover_capable: bool,
}

impl Classifier {
    /// Create a classifier with its own history store
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_history(config, shared_history())
    }

    /// Create a classifier writing to an injected history store
    pub fn with_history(config: &EngineConfig, history: SharedHistory) -> Self {
        let pointer_type = config.initial_pointer_type;
        history.write().remove(pointer_type);
        Self {
            pointer_type,
            flags: SuppressionFlags::new(),
            history,
            accuracy: AccuracyTracker::new(),
            initial_hover_capable: config.initial_hover_capable,
        }
    }

    pub fn pointer_type(&self) -> PointerType {
        self.pointer_type
    }

    pub fn flags(&self) -> &SuppressionFlags {
        &self.flags
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy.current()
    }

    /// Hover capability: mouse only, or the configured seed before the
    /// first classification
    pub fn can_hover(&self) -> bool {
        if self.pointer_type.is_none() {
            self.initial_hover_capable
        } else {
            self.pointer_type.can_hover()
        }
    }

    /// Snapshot the current classification
    pub fn snapshot(&self) -> Interaction {
        Interaction {
            pointer_type: self.pointer_type,
            history: self.history.read().to_vec_excluding(self.pointer_type),
            accuracy: self.accuracy.current(),
            can_hover: self.can_hover(),
        }
    }

    /// Classify one raw event, updating flags, history and accuracy
    pub fn classify(&mut self, event: &RawEvent) -> Classification {
        match event {
            RawEvent::TouchStart => self.on_touch(),
            RawEvent::MouseMove | RawEvent::Wheel => self.on_mouse(event),
            RawEvent::KeyDown(key) => self.on_key(key),
            RawEvent::PointerDown(pointer) => self.on_pointer(pointer),
        }
    }

    fn on_touch(&mut self) -> Classification {
        self.flags.touch_started = TriState::True;
        self.flags.mouse_moved = TriState::False;
        self.transition(PointerType::Touch)
    }

    fn on_mouse(&mut self, event: &RawEvent) -> Classification {
        // The veto looks at the flags as they stood when the event arrived
        let arrived = self.flags;

        // Moves synthesized after a tap must not count as mouse use
        if !arrived.touch_started.is_true() {
            match event {
                RawEvent::Wheel => self.flags.wheel_used = TriState::True,
                _ => self.flags.mouse_moved = TriState::True,
            }
        }

        // Moves synthesized by keyboard focus changes neither
        if arrived.key_downed.is_true() {
            self.flags.mouse_moved = TriState::False;
        }

        // The suppression window is consumed by this event
        self.flags.touch_started = TriState::False;
        self.flags.key_downed = TriState::False;

        let accepted = arrived.mouse_moved.is_unknown()
            || arrived.mouse_moved.is_true()
            || arrived.touch_started.is_false();

        if accepted {
            self.transition(PointerType::Mouse)
        } else {
            Classification::Unchanged
        }
    }

    fn on_key(&mut self, event: &KeyDownEvent) -> Classification {
        let Some(key) = event.navigation_key() else {
            return Classification::Ignored;
        };

        // Navigation keys inside form fields are typing, except Tab
        if !key.is_tab() && is_form_element(event.target_tag()) {
            return Classification::Ignored;
        }

        // Many browsers fire mousemove after a key-driven focus change
        self.flags.key_downed = TriState::True;
        self.flags.mouse_moved = TriState::False;
        self.flags.wheel_used = TriState::False;

        self.transition(PointerType::Keyboard)
    }

    fn on_pointer(&mut self, event: &PointerDownEvent) -> Classification {
        let Some(height) = event.valid_height() else {
            return Classification::Ignored;
        };

        match self.accuracy.observe(height, event.pointer_type.as_deref()) {
            Some(accuracy) => Classification::AccuracyUpdated(accuracy),
            None => Classification::Unchanged,
        }
    }

    fn transition(&mut self, to: PointerType) -> Classification {
        let from = self.pointer_type;
        if from == to {
            return Classification::Unchanged;
        }

        self.history.write().displace(from, to);
        self.accuracy.reset();
        self.pointer_type = to;

        Classification::Transition { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const TAB: u32 = 9;
    const ENTER: u32 = 13;
    const SPACE: u32 = 32;
    const LEFT: u32 = 37;

    fn classifier() -> Classifier {
        Classifier::new(&EngineConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let c = classifier();
        let snapshot = c.snapshot();
        assert_eq!(snapshot.pointer_type, PointerType::None);
        assert!(snapshot.history.is_empty());
        assert_eq!(snapshot.accuracy, None);
        assert!(!snapshot.can_hover);
    }

    #[test]
    fn test_initial_pointer_type() {
        let config = EngineConfig::new().with_initial_pointer_type(PointerType::Touch);
        let c = Classifier::new(&config);
        assert_eq!(c.pointer_type(), PointerType::Touch);
        assert!(c.snapshot().history.is_empty());
    }

    #[test]
    fn test_initial_hover_only_applies_before_classification() {
        let config = EngineConfig::new().with_initial_hover_capable(true);
        let mut c = Classifier::new(&config);
        assert!(c.can_hover());

        c.classify(&RawEvent::TouchStart);
        assert!(!c.can_hover());
    }

    #[test]
    fn test_touch() {
        let mut c = classifier();
        let result = c.classify(&RawEvent::TouchStart);
        assert_eq!(
            result,
            Classification::Transition {
                from: PointerType::None,
                to: PointerType::Touch
            }
        );
        assert_eq!(c.flags().touch_started, TriState::True);
        assert_eq!(c.flags().mouse_moved, TriState::False);
    }

    #[test]
    fn test_repeated_touch_updates_flags_only() {
        let mut c = classifier();
        c.classify(&RawEvent::TouchStart);
        c.classify(&RawEvent::MouseMove);
        assert_eq!(c.flags().touch_started, TriState::False);

        assert_eq!(c.classify(&RawEvent::TouchStart), Classification::Unchanged);
        assert_eq!(c.flags().touch_started, TriState::True);
    }

    #[test]
    fn test_mouse_from_fresh_state() {
        let mut c = classifier();
        assert!(c.classify(&RawEvent::MouseMove).is_transition());
        assert_eq!(c.pointer_type(), PointerType::Mouse);
        assert_eq!(c.flags().mouse_moved, TriState::True);
        assert!(c.can_hover());
    }

    #[test]
    fn test_wheel_from_fresh_state() {
        let mut c = classifier();
        assert!(c.classify(&RawEvent::Wheel).is_transition());
        assert_eq!(c.pointer_type(), PointerType::Mouse);
        assert_eq!(c.flags().wheel_used, TriState::True);
        assert_eq!(c.flags().mouse_moved, TriState::Unknown);
    }

    #[test]
    fn test_trailing_move_after_touch_is_vetoed() {
        let mut c = classifier();
        c.classify(&RawEvent::TouchStart);

        assert_eq!(c.classify(&RawEvent::MouseMove), Classification::Unchanged);
        assert_eq!(c.pointer_type(), PointerType::Touch);
        // The touch window was consumed without recording a move
        assert_eq!(c.flags().mouse_moved, TriState::False);
        assert_eq!(c.flags().touch_started, TriState::False);

        assert!(c.classify(&RawEvent::MouseMove).is_transition());
        assert_eq!(c.pointer_type(), PointerType::Mouse);
        assert_eq!(c.snapshot().history, vec![PointerType::Touch]);
    }

    #[test]
    fn test_wheel_after_keyboard_is_vetoed() {
        let mut c = classifier();
        c.classify(&RawEvent::key(TAB));
        assert_eq!(c.pointer_type(), PointerType::Keyboard);

        assert_eq!(c.classify(&RawEvent::Wheel), Classification::Unchanged);
        assert_eq!(c.pointer_type(), PointerType::Keyboard);
        assert_eq!(c.flags().wheel_used, TriState::True);
        assert_eq!(c.flags().key_downed, TriState::False);
    }

    #[test]
    fn test_keyboard_clears_recorded_move() {
        let mut c = classifier();
        c.classify(&RawEvent::key(TAB));
        c.classify(&RawEvent::MouseMove);
        assert_eq!(c.flags().mouse_moved, TriState::False);
    }

    #[test]
    fn test_key_outside_table_is_ignored() {
        let mut c = classifier();
        assert_eq!(c.classify(&RawEvent::key(65)), Classification::Ignored);
        assert_eq!(c.pointer_type(), PointerType::None);
        assert_eq!(c.flags(), &SuppressionFlags::new());
    }

    #[test]
    fn test_key_without_code_is_ignored() {
        let mut c = classifier();
        let event = RawEvent::KeyDown(KeyDownEvent::default());
        assert_eq!(c.classify(&event), Classification::Ignored);
        assert_eq!(c.flags(), &SuppressionFlags::new());
    }

    #[test]
    fn test_navigation_in_form_is_typing() {
        let mut c = classifier();
        c.classify(&RawEvent::MouseMove);
        let before = *c.flags();

        for (code, tag) in [(ENTER, "input"), (SPACE, "select"), (LEFT, "textarea")] {
            assert_eq!(c.classify(&RawEvent::key_on(code, tag)), Classification::Ignored);
        }
        assert_eq!(c.pointer_type(), PointerType::Mouse);
        assert_eq!(c.flags(), &before);
    }

    #[test]
    fn test_tab_in_form_is_navigation() {
        let mut c = classifier();
        c.classify(&RawEvent::MouseMove);
        assert!(c.classify(&RawEvent::key_on(TAB, "input")).is_transition());
        assert_eq!(c.pointer_type(), PointerType::Keyboard);
    }

    #[test]
    fn test_navigation_outside_form() {
        let mut c = classifier();
        assert!(c.classify(&RawEvent::key_on(ENTER, "button")).is_transition());
        assert_eq!(c.pointer_type(), PointerType::Keyboard);
    }

    #[test]
    fn test_missing_target_takes_navigation_path() {
        let mut c = classifier();
        assert!(c.classify(&RawEvent::key(LEFT)).is_transition());
    }

    #[test]
    fn test_keyboard_flags() {
        let mut c = classifier();
        c.classify(&RawEvent::Wheel);
        c.classify(&RawEvent::key(TAB));
        let flags = c.flags();
        assert_eq!(flags.key_downed, TriState::True);
        assert_eq!(flags.mouse_moved, TriState::False);
        assert_eq!(flags.wheel_used, TriState::False);
    }

    #[test]
    fn test_repeated_keyboard_does_not_transition() {
        let mut c = classifier();
        c.classify(&RawEvent::key(TAB));
        assert_eq!(c.classify(&RawEvent::key(TAB)), Classification::Unchanged);
    }

    #[test]
    fn test_pointer_never_changes_type() {
        let mut c = classifier();
        let result = c.classify(&RawEvent::pointer(5.0));
        assert_eq!(result, Classification::AccuracyUpdated(5.0));
        assert_eq!(c.pointer_type(), PointerType::None);
    }

    #[test]
    fn test_pointer_invalid_height_is_ignored() {
        let mut c = classifier();
        let event = RawEvent::PointerDown(PointerDownEvent::default());
        assert_eq!(c.classify(&event), Classification::Ignored);
        assert_eq!(c.classify(&RawEvent::pointer(f64::NAN)), Classification::Ignored);
        assert_eq!(c.accuracy(), None);
    }

    #[test]
    fn test_accuracy_resets_on_transition() {
        let mut c = classifier();
        c.classify(&RawEvent::pointer(5.0));
        c.classify(&RawEvent::pointer(23.666666666));
        assert_eq!(c.accuracy(), Some(23.7));

        c.classify(&RawEvent::MouseMove);
        assert_eq!(c.accuracy(), None);

        c.classify(&RawEvent::pointer(1.0));
        assert_eq!(c.accuracy(), Some(1.0));
    }

    #[test]
    fn test_accuracy_kept_without_transition() {
        let mut c = classifier();
        c.classify(&RawEvent::TouchStart);
        c.classify(&RawEvent::pointer(12.0));
        c.classify(&RawEvent::TouchStart);
        assert_eq!(c.accuracy(), Some(12.0));
    }

    #[test]
    fn test_injected_history() {
        let store = shared_history();
        store.write().displace(PointerType::Touch, PointerType::Mouse);

        let config = EngineConfig::new().with_initial_pointer_type(PointerType::Touch);
        let c = Classifier::with_history(&config, Arc::clone(&store));
        assert!(Arc::ptr_eq(&c.history, &store));
        assert!(c.snapshot().history.is_empty());
    }
}
