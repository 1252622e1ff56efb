mod motion;
mod pointer;

pub use motion::wire_motion_input;
pub use pointer::wire_pointer_input;
