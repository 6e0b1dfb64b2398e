// Inputsense Engine
// Ties the classifier to a subscribed input surface
//
// The engine is the scoped acquisition around the classifier: attaching
// subscribes to the surface, every dispatched event is gated by the listener
// set, classified, and followed by a reconciliation of the listener set
// against the post-update flags. Detaching (or dropping) unsubscribes.

use crate::classify::{Classification, Classifier, Interaction};
use crate::config::EngineConfig;
use crate::input::{ListenerKind, RawEvent};
use crate::state::SharedHistory;
use crate::subscription::{InputSurface, ListenerSet, Subscription};
use crate::PointerType;

/// Diagnostic log target
pub const LOG_TARGET: &str = "inputsense";

/// Result of dispatching one raw event
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// The listener for this event kind is detached; the event was dropped
    Detached(ListenerKind),
    /// The event reached the classifier
    Classified {
        classification: Classification,
        interaction: Interaction,
    },
}

impl Dispatch {
    /// The classification, if the event reached the classifier
    pub fn classification(&self) -> Option<&Classification> {
        match self {
            Dispatch::Detached(_) => None,
            Dispatch::Classified { classification, .. } => Some(classification),
        }
    }

    /// Returns true if the pointer type changed
    pub fn is_transition(&self) -> bool {
        self.classification()
            .is_some_and(Classification::is_transition)
    }
}

/// An input-modality engine attached to an input surface
#[derive(Debug)]
pub struct InteractionEngine<S: InputSurface> {
    classifier: Classifier,
    subscription: Subscription<S>,
    diagnostics: Option<log::Level>,
}

impl<S: InputSurface> InteractionEngine<S> {
    /// Attach a new engine to `surface`
    pub fn attach(surface: S, config: EngineConfig) -> Self {
        Self::from_classifier(surface, Classifier::new(&config), &config)
    }

    /// Attach a new engine that records history into a shared store
    pub fn attach_with_history(surface: S, config: EngineConfig, history: SharedHistory) -> Self {
        Self::from_classifier(surface, Classifier::with_history(&config, history), &config)
    }

    fn from_classifier(surface: S, classifier: Classifier, config: &EngineConfig) -> Self {
        let subscription = Subscription::attach(surface, classifier.flags());
        let engine = Self {
            classifier,
            subscription,
            diagnostics: config.diagnostics.to_level(),
        };
        engine.report(format_args!(
            "attached: pointer={} listeners={}",
            engine.classifier.pointer_type(),
            engine.subscription.attached()
        ));
        engine
    }

    /// Deliver one raw event from the input surface.
    ///
    /// Events whose listener is currently detached are dropped without
    /// touching any state.
    pub fn dispatch(&mut self, event: RawEvent) -> Dispatch {
        let kind = event.kind();
        if !self.subscription.is_attached(kind) {
            self.report(format_args!("{} dropped: listener detached", kind));
            return Dispatch::Detached(kind);
        }

        let flags_before = *self.classifier.flags();
        let classification = self.classifier.classify(&event);
        let flags_after = *self.classifier.flags();

        self.report(format_args!("{} classified: {:?}", kind, classification));

        if flags_after != flags_before {
            self.report(format_args!("flags: {}", flags_after));
            if self.subscription.reconcile(&flags_after) {
                self.report(format_args!(
                    "listeners reconciled: {}",
                    self.subscription.attached()
                ));
            }
        }

        if let Classification::Transition { from, to } = classification {
            self.report(format_args!("pointer type {} -> {}", from, to));
        }

        Dispatch::Classified {
            classification,
            interaction: self.classifier.snapshot(),
        }
    }

    /// Deliver a sequence of raw events, returning the final interaction
    pub fn dispatch_all<I>(&mut self, events: I) -> Interaction
    where
        I: IntoIterator<Item = RawEvent>,
    {
        for event in events {
            self.dispatch(event);
        }
        self.interaction()
    }

    /// The current classification
    pub fn interaction(&self) -> Interaction {
        self.classifier.snapshot()
    }

    pub fn pointer_type(&self) -> PointerType {
        self.classifier.pointer_type()
    }

    pub fn can_hover(&self) -> bool {
        self.classifier.can_hover()
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.classifier.accuracy()
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Listeners currently attached on the surface
    pub fn listeners(&self) -> ListenerSet {
        self.subscription.attached()
    }

    pub fn surface(&self) -> &S {
        self.subscription.surface()
    }

    /// Unsubscribe every listener and discard the engine
    pub fn detach(mut self) {
        self.subscription.detach_all();
        self.report(format_args!("detached"));
    }

    fn report(&self, args: std::fmt::Arguments<'_>) {
        if let Some(level) = self.diagnostics {
            log::log!(target: LOG_TARGET, level, "{}", args);
        }
    }
}
