pub mod pointer;
pub mod queue;

pub use pointer::{ClientRect, PointerTracker};
pub use queue::{InputEvent, InputQueue};
