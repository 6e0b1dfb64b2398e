// Inputsense Subscription - Input Surfaces
// Attaching and detaching listeners on the host input surface

use crate::input::ListenerKind;
use crate::state::SuppressionFlags;

use super::listeners::{desired_listeners, ListenerSet};

/// The global input surface an engine listens on (e.g. a window).
///
/// `Subscription` never asks a surface to add a listener that is already
/// attached or remove one that is absent.
pub trait InputSurface {
    fn add_listener(&mut self, kind: ListenerKind);
    fn remove_listener(&mut self, kind: ListenerKind);
}

impl<S: InputSurface + ?Sized> InputSurface for &mut S {
    fn add_listener(&mut self, kind: ListenerKind) {
        (**self).add_listener(kind);
    }

    fn remove_listener(&mut self, kind: ListenerKind) {
        (**self).remove_listener(kind);
    }
}

/// A live set of listeners on an input surface.
///
/// The attached set is reconciled against `desired_listeners` after every
/// flag change. Every attached listener is removed exactly once on
/// `detach_all` or when the subscription is dropped, whichever comes first.
#[derive(Debug)]
pub struct Subscription<S: InputSurface> {
    surface: S,
    attached: ListenerSet,
}

impl<S: InputSurface> Subscription<S> {
    /// Subscribe to `surface` with the listener set `flags` call for
    pub fn attach(surface: S, flags: &SuppressionFlags) -> Self {
        let mut subscription = Self {
            surface,
            attached: ListenerSet::EMPTY,
        };
        subscription.reconcile(flags);
        subscription
    }

    /// Bring the attached listeners in line with `flags`.
    ///
    /// # Returns
    /// * `true` if any listener was added or removed
    pub fn reconcile(&mut self, flags: &SuppressionFlags) -> bool {
        let desired = desired_listeners(flags);
        let stale = self.attached.difference(desired);
        let missing = desired.difference(self.attached);

        for kind in stale.iter() {
            self.surface.remove_listener(kind);
        }
        for kind in missing.iter() {
            self.surface.add_listener(kind);
        }

        self.attached = desired;
        !stale.is_empty() || !missing.is_empty()
    }

    /// Remove every attached listener
    pub fn detach_all(&mut self) {
        for kind in self.attached.iter() {
            self.surface.remove_listener(kind);
        }
        self.attached = ListenerSet::EMPTY;
    }

    pub fn is_attached(&self, kind: ListenerKind) -> bool {
        self.attached.contains(kind)
    }

    pub fn attached(&self) -> ListenerSet {
        self.attached
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: InputSurface> Drop for Subscription<S> {
    fn drop(&mut self) {
        self.detach_all();
    }
}

/// A surface call recorded by `RecordingSurface`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceCall {
    Add(ListenerKind),
    Remove(ListenerKind),
}

/// In-memory input surface that records every call it receives.
///
/// Used by tests and by the replay tool, where no real window exists.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    listeners: ListenerSet,
    calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Listeners currently attached
    pub fn listeners(&self) -> ListenerSet {
        self.listeners
    }

    /// Every call received, in order
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Number of calls that added `kind`
    pub fn add_count(&self, kind: ListenerKind) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == SurfaceCall::Add(kind))
            .count()
    }

    /// Number of calls that removed `kind`
    pub fn remove_count(&self, kind: ListenerKind) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == SurfaceCall::Remove(kind))
            .count()
    }
}

impl InputSurface for RecordingSurface {
    fn add_listener(&mut self, kind: ListenerKind) {
        self.listeners.insert(kind);
        self.calls.push(SurfaceCall::Add(kind));
    }

    fn remove_listener(&mut self, kind: ListenerKind) {
        self.listeners.remove(kind);
        self.calls.push(SurfaceCall::Remove(kind));
    }
}
