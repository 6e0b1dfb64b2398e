// Inputsense Pointer Types
// The input modalities the classifier can report

use serde::Deserialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// The input modality the user is currently employing.
///
/// `None` is the state before any event has been classified (unless an
/// initial type was configured).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    #[default]
    None,
    Touch,
    Mouse,
    Keyboard,
}

impl PointerType {
    /// Returns true if this modality can hover over elements
    pub fn can_hover(self) -> bool {
        matches!(self, PointerType::Mouse)
    }

    /// Returns true if no modality has been observed yet
    pub fn is_none(self) -> bool {
        matches!(self, PointerType::None)
    }
}
