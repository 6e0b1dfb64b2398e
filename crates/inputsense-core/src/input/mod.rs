// Inputsense Input Layer
// Raw event types, navigation key table and target exemption

mod event;
mod keys;
mod target;

pub use event::{KeyDownEvent, ListenerKind, PointerDownEvent, RawEvent};
pub use keys::NavigationKey;
pub use target::{is_form_element, FORM_ELEMENT_TAGS};
