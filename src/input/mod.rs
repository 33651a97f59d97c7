//! Input adapters driving the carousel
//!
//! Each adapter translates one external event source (keyboard, scroll
//! progress, pointer) into controller calls. The controller stays the
//! single place where index math happens.

pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::{KeyboardBinding, NavKey};
pub use pointer::{PointerBinding, PointerEvent};
pub use scroll::ScrollBinding;
