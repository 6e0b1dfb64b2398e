// Inputsense History Tracker
// Ordered record of superseded pointer types, most recently displaced first

use std::sync::Arc;

use parking_lot::RwLock;
use smallvec::SmallVec;

use crate::PointerType;

/// History store that several engines may share.
///
/// Engines write to it only when their own pointer type changes; readers
/// see the store as a whole and filter out their own current type.
pub type SharedHistory = Arc<RwLock<History>>;

/// Create a new empty shared history store
pub fn shared_history() -> SharedHistory {
    Arc::new(RwLock::new(History::new()))
}

/// The pointer types used before the current one.
///
/// Never contains `PointerType::None` and never contains a type twice.
/// There are only three reportable modalities, so the storage stays inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: SmallVec<[PointerType; 3]>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Record a transition from `old` to `new`.
    ///
    /// `old` moves to the front (dropping any earlier occurrence) and `new`
    /// is removed, since the active type never appears in its own history.
    /// Nothing is pushed when `old` is `None`.
    pub fn displace(&mut self, old: PointerType, new: PointerType) {
        if !old.is_none() && old != new {
            self.remove(old);
            self.entries.insert(0, old);
        }
        self.remove(new);
    }

    /// Remove a pointer type if present
    pub fn remove(&mut self, pointer_type: PointerType) {
        self.entries.retain(|entry| *entry != pointer_type);
    }

    pub fn contains(&self, pointer_type: PointerType) -> bool {
        self.entries.contains(&pointer_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[PointerType] {
        &self.entries
    }

    /// Copy out the entries, leaving out `current`
    pub fn to_vec_excluding(&self, current: PointerType) -> Vec<PointerType> {
        self.entries
            .iter()
            .copied()
            .filter(|entry| *entry != current)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PointerType::*;

    #[test]
    fn test_history_new() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_displace_from_none_pushes_nothing() {
        let mut history = History::new();
        history.displace(None, Touch);
        assert!(history.is_empty());
    }

    #[test]
    fn test_displace_most_recent_first() {
        let mut history = History::new();
        history.displace(Touch, Mouse);
        history.displace(Mouse, Keyboard);
        assert_eq!(history.as_slice(), &[Mouse, Touch]);
    }

    #[test]
    fn test_displace_deduplicates() {
        let mut history = History::new();
        history.displace(Touch, Mouse);
        history.displace(Mouse, Touch);
        // Touch is active again, so only Mouse remains
        assert_eq!(history.as_slice(), &[Mouse]);

        history.displace(Touch, Keyboard);
        history.displace(Keyboard, Mouse);
        assert_eq!(history.as_slice(), &[Keyboard, Touch]);
        assert!(!history.contains(Mouse));
    }

    #[test]
    fn test_displace_never_holds_none() {
        let mut history = History::new();
        history.displace(None, Mouse);
        history.displace(Mouse, Keyboard);
        history.displace(Keyboard, Touch);
        assert!(!history.contains(None));
        assert_eq!(history.as_slice(), &[Keyboard, Mouse]);
    }

    #[test]
    fn test_displace_same_type_is_noop() {
        let mut history = History::new();
        history.displace(Touch, Mouse);
        history.displace(Mouse, Mouse);
        assert_eq!(history.as_slice(), &[Touch]);
    }

    #[test]
    fn test_to_vec_excluding() {
        let mut history = History::new();
        history.displace(Touch, Mouse);
        history.displace(Mouse, Keyboard);
        assert_eq!(history.to_vec_excluding(Touch), vec![Mouse]);
        assert_eq!(history.to_vec_excluding(Keyboard), vec![Mouse, Touch]);
    }

    #[test]
    fn test_shared_history_is_shared() {
        let store = shared_history();
        let other = Arc::clone(&store);
        store.write().displace(Touch, Mouse);
        assert_eq!(other.read().as_slice(), &[Touch]);
    }
}
