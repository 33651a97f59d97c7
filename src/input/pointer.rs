//! Pointer interaction adapter
//!
//! Hovering the carousel suspends autoplay without disabling it; leaving
//! resumes it with a fresh interval. Pressing an indicator dot jumps
//! straight to that item.

use crate::app::controller::CarouselController;
use crate::app::state::CarouselError;

/// Pointer events relevant to the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer entered the carousel area
    Enter,
    /// Pointer left the carousel area
    Leave,
    /// An indicator dot was pressed
    DotPressed(usize),
}

/// Binds pointer events to a carousel controller
#[derive(Clone)]
pub struct PointerBinding {
    controller: CarouselController,
}

impl PointerBinding {
    pub fn new(controller: CarouselController) -> Self {
        Self { controller }
    }

    /// Routes a pointer event to the controller
    ///
    /// Pressing a dot outside the collection range surfaces the same
    /// `IndexOutOfRange` error a direct `go_to` would.
    pub fn handle(&self, event: PointerEvent) -> Result<(), CarouselError> {
        match event {
            PointerEvent::Enter => {
                log::trace!("pointer enter: suspending");
                self.controller.suspend()
            }
            PointerEvent::Leave => {
                log::trace!("pointer leave: resuming");
                self.controller.resume()
            }
            PointerEvent::DotPressed(index) => self.controller.go_to(index).map(|_| ()),
        }
    }
}
