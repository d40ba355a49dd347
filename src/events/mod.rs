pub mod pointer;
pub mod press;
pub mod scroll;

pub use pointer::{wire_pointer_handlers, WheelWiring};
pub use scroll::wire_active_tracking;
