// Inputsense Subscription Layer
// Listener bookkeeping on the host input surface

mod listeners;
mod surface;

pub use listeners::{desired_listeners, ListenerSet};
pub use surface::{InputSurface, RecordingSurface, Subscription, SurfaceCall};
