//! Scroll-progress navigation adapter
//!
//! Derives the active index from a scroll progress value in `[0.0, 1.0]`
//! and feeds it through the same `go_to` path as every other input, so
//! scroll-driven and timer-driven navigation cannot disagree on clamping
//! or rounding. Scroll updates are dropped entirely while the user is
//! interacting with the carousel directly; the pointer wins.

use crate::app::controller::CarouselController;
use crate::app::state::CarouselError;
use crate::domain::ring::Ring;

/// Binds a scroll-progress source to a carousel controller
#[derive(Clone)]
pub struct ScrollBinding {
    controller: CarouselController,
}

impl ScrollBinding {
    pub fn new(controller: CarouselController) -> Self {
        Self { controller }
    }

    /// Applies a scroll progress value
    ///
    /// Progress outside `[0.0, 1.0]` is clamped; non-finite values are
    /// ignored. While the controller is suspended the update is skipped
    /// and the current index is returned unchanged.
    pub fn handle_progress(&self, progress: f64) -> Result<Option<usize>, CarouselError> {
        if self.controller.is_suspended()? {
            log::trace!("scroll ignored while suspended");
            return self.controller.current_index();
        }

        let ring = Ring::new(self.controller.item_count()?, true);
        match ring.index_for_progress(progress) {
            Some(target) => self.controller.go_to(target),
            None => self.controller.current_index(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::CarouselOptions;

    fn binding(size: usize) -> (ScrollBinding, CarouselController) {
        let carousel = CarouselController::create(size, CarouselOptions::new()).unwrap();
        (ScrollBinding::new(carousel.clone()), carousel)
    }

    #[test]
    fn progress_selects_the_matching_card() {
        let (scroll, carousel) = binding(4);

        assert_eq!(scroll.handle_progress(0.0).unwrap(), Some(0));
        assert_eq!(scroll.handle_progress(0.3).unwrap(), Some(1));
        assert_eq!(scroll.handle_progress(0.55).unwrap(), Some(2));
        assert_eq!(scroll.handle_progress(1.0).unwrap(), Some(3));
        assert_eq!(carousel.current_index().unwrap(), Some(3));
    }

    #[test]
    fn progress_is_clamped_into_range() {
        let (scroll, _) = binding(4);
        assert_eq!(scroll.handle_progress(-1.0).unwrap(), Some(0));
        assert_eq!(scroll.handle_progress(7.5).unwrap(), Some(3));
    }

    #[test]
    fn non_finite_progress_is_ignored() {
        let (scroll, carousel) = binding(4);
        carousel.go_to(2).unwrap();
        assert_eq!(scroll.handle_progress(f64::NAN).unwrap(), Some(2));
    }

    #[test]
    fn updates_are_skipped_while_suspended() {
        let (scroll, carousel) = binding(4);
        carousel.suspend().unwrap();

        assert_eq!(scroll.handle_progress(1.0).unwrap(), Some(0));
        assert_eq!(carousel.current_index().unwrap(), Some(0));

        carousel.resume().unwrap();
        assert_eq!(scroll.handle_progress(1.0).unwrap(), Some(3));
    }

    #[test]
    fn empty_collection_stays_empty() {
        let (scroll, _) = binding(0);
        assert_eq!(scroll.handle_progress(0.5).unwrap(), None);
    }
}
