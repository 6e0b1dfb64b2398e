// Inputsense Classify Module
// The modality state machine

mod classifier;

pub use classifier::{Classification, Classifier, Interaction};
