// Inputsense State
// Suppression flags, modality history and accuracy bookkeeping

mod accuracy;
mod history;
mod suppression;

pub use accuracy::{round_to_tenth, AccuracyTracker};
pub use history::{shared_history, History, SharedHistory};
pub use suppression::{SuppressionFlags, TriState};
