// Inputsense Subscription - Listener Sets
// Which listeners an engine wants attached for a given suppression state

use std::fmt;

use strum::IntoEnumIterator;

use crate::input::ListenerKind;
use crate::state::SuppressionFlags;

/// A set of listener slots, stored as a bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ListenerSet(u8);

impl ListenerSet {
    pub const EMPTY: ListenerSet = ListenerSet(0);

    /// Every listener slot
    pub fn all() -> Self {
        ListenerKind::iter().collect()
    }

    pub fn contains(self, kind: ListenerKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub fn insert(&mut self, kind: ListenerKind) {
        self.0 |= kind.bit();
    }

    pub fn remove(&mut self, kind: ListenerKind) {
        self.0 &= !kind.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Listeners in `self` but not in `other`
    pub fn difference(self, other: ListenerSet) -> ListenerSet {
        ListenerSet(self.0 & !other.0)
    }

    /// Iterate over the listeners in this set, in slot order
    pub fn iter(self) -> impl Iterator<Item = ListenerKind> {
        ListenerKind::iter().filter(move |kind| self.contains(*kind))
    }
}

impl FromIterator<ListenerKind> for ListenerSet {
    fn from_iter<I: IntoIterator<Item = ListenerKind>>(iter: I) -> Self {
        let mut set = ListenerSet::EMPTY;
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl fmt::Display for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&'static str> = self.iter().map(<&'static str>::from).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

/// The listener set an engine should hold for the given flags.
///
/// `touchstart`, `keydown` and `pointerdown` are always wanted. `mousemove`
/// and `wheel` are dropped while a mouse-class event is latched, so the
/// engine stops re-classifying mouse input it has already accounted for.
pub fn desired_listeners(flags: &SuppressionFlags) -> ListenerSet {
    ListenerKind::iter()
        .filter(|kind| !(kind.is_mouse_class() && flags.mouse_latched()))
        .collect()
}
