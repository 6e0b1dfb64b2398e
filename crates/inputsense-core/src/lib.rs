// Inputsense Core Library
// Input-modality classification for touch, mouse and keyboard users

pub mod classify;
pub mod config;
pub mod engine;
pub mod input;
pub mod pointer;
pub mod replay;
pub mod state;
pub mod subscription;

pub use classify::{Classification, Classifier, Interaction};
pub use config::{DiagnosticLevel, EngineConfig};
pub use engine::{Dispatch, InteractionEngine, LOG_TARGET};
pub use input::{
    is_form_element, KeyDownEvent, ListenerKind, NavigationKey, PointerDownEvent, RawEvent,
};
pub use pointer::PointerType;
pub use replay::{load_script, parse_script, ScriptError};
pub use state::{
    round_to_tenth, shared_history, AccuracyTracker, History, SharedHistory, SuppressionFlags,
    TriState,
};
pub use subscription::{
    desired_listeners, InputSurface, ListenerSet, RecordingSurface, Subscription, SurfaceCall,
};

#[cfg(feature = "settings")]
pub use config::{default_settings_content, Settings, SettingsError};
